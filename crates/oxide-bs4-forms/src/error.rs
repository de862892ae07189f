//! Error types and the validation error bag.

use std::fmt;

use thiserror::Error;

/// Form builder errors.
///
/// Rendering itself never fails; these come from the fallible entry points
/// (`try_fill`, option loading and string parsing).
#[derive(Debug, Error)]
pub enum FormError {
    /// Fill data did not serialize to a JSON object.
    #[error("fill data must be an object, got {0}")]
    FillNotAnObject(&'static str),

    /// JSON (de)serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown HTTP method name.
    #[error("unknown form method: {0}")]
    UnknownMethod(String),

    /// Unknown render kind name.
    #[error("unknown render kind: {0}")]
    UnknownRenderKind(String),
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

/// Validation messages keyed by field name, in insertion order.
///
/// Keys use the dotted form (`address.city`, `tags.0`), the same way the
/// host's validator reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBag {
    errors: Vec<(String, Vec<String>)>,
}

impl ErrorBag {
    /// Creates a new empty bag.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        match self.errors.iter_mut().find(|(name, _)| name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.errors.push((field.to_string(), vec![message])),
        }
    }

    /// Builder method to add an error.
    #[must_use]
    pub fn with(mut self, field: &str, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    /// Returns whether the bag holds no messages at all.
    pub fn is_empty(&self) -> bool {
        self.errors.iter().all(|(_, messages)| messages.is_empty())
    }

    /// Returns the total number of messages.
    pub fn count(&self) -> usize {
        self.errors.iter().map(|(_, messages)| messages.len()).sum()
    }

    /// Returns whether a field has at least one message.
    pub fn has(&self, field: &str) -> bool {
        self.first(field).is_some()
    }

    /// Returns the messages for a field.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    /// Returns the first message for a field.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// Returns every message, field by field.
    pub fn all(&self) -> Vec<&str> {
        self.errors
            .iter()
            .flat_map(|(_, messages)| messages.iter().map(String::as_str))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for ErrorBag
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = Self::new();
        for (field, message) in iter {
            bag.add(field.as_ref(), message);
        }
        bag
    }
}

impl fmt::Display for ErrorBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, messages) in &self.errors {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bag() {
        let bag = ErrorBag::new();
        assert!(bag.is_empty());
        assert_eq!(bag.count(), 0);
        assert!(!bag.has("email"));
        assert!(bag.all().is_empty());
    }

    #[test]
    fn test_first_and_all_keep_order() {
        let bag = ErrorBag::new()
            .with("email", "The email field is required.")
            .with("name", "The name field is required.")
            .with("email", "The email must be valid.");

        assert_eq!(bag.count(), 3);
        assert_eq!(bag.first("email"), Some("The email field is required."));
        assert_eq!(
            bag.all(),
            vec![
                "The email field is required.",
                "The email must be valid.",
                "The name field is required.",
            ]
        );
    }

    #[test]
    fn test_from_iter() {
        let bag: ErrorBag = [("a.b", "nested")].into_iter().collect();
        assert!(bag.has("a.b"));
        assert_eq!(bag.get("a.b").map(<[String]>::len), Some(1));
    }

    #[test]
    fn test_display() {
        let bag = ErrorBag::new().with("title", "Too short");
        assert_eq!(bag.to_string(), "title: Too short\n");
    }

    #[test]
    fn test_error_messages() {
        let err = FormError::UnknownMethod("TRACE".to_string());
        assert_eq!(err.to_string(), "unknown form method: TRACE");
        let err = FormError::FillNotAnObject("array");
        assert_eq!(err.to_string(), "fill data must be an object, got array");
    }
}
