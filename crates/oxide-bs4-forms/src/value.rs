//! Value, checked-state and validation-state resolution.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::config::FormConfig;
use crate::context::RenderContext;

static ARRAY_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]").expect("array segment pattern is valid"));

static SLUG_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"));

/// Normalizes an array-style field name to its dotted form.
///
/// `address[city]` becomes `address.city` and `tags[]` becomes `tags`.
pub fn dotted_name(name: &str) -> String {
    let dotted = ARRAY_SEGMENT.replace_all(name, ".$1");
    dotted.trim_end_matches('.').replace("..", ".")
}

/// Looks up a dotted path in a JSON object.
///
/// An exact key match wins over walking nested objects and arrays.
pub fn lookup_path<'a>(map: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    if let Some(value) = map.get(path) {
        return Some(value);
    }
    let mut segments = path.split('.');
    let mut current = map.get(segments.next()?)?;
    for segment in segments {
        current = match current {
            Value::Object(inner) => inner.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Converts a scalar JSON value to its display string.
pub fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Array(_) | Value::Object(_) => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
        Value::Number(n) => Some(n.to_string()),
    }
}

/// Flattens a value into the list of strings it selects.
pub fn value_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(value_to_string).collect(),
        Value::Object(map) => map.values().filter_map(value_to_string).collect(),
        other => value_to_string(other).into_iter().collect(),
    }
}

/// Lower-case, dash-separated form of a value, for element ids.
///
/// Values with non-ASCII characters, or nothing left after slugging, are
/// hex-encoded instead so that distinct values keep distinct ids.
pub fn slug(value: &str) -> String {
    let lower = value.to_lowercase();
    let slugged = SLUG_SEPARATOR
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string();
    if slugged.is_empty() || !value.is_ascii() {
        return hex_encode(value);
    }
    slugged
}

fn hex_encode(value: &str) -> String {
    value.bytes().map(|b| format!("{b:02x}")).collect()
}

/// Whether a submitted or filled value selects a checkbox/radio choice.
fn matches_choice(value: &Value, choice: &str, bool_selects: bool) -> bool {
    match value {
        Value::Array(items) => items.iter().any(|v| matches_choice(v, choice, false)),
        Value::Object(map) => map.values().any(|v| matches_choice(v, choice, false)),
        Value::Bool(b) => bool_selects && *b,
        other => value_to_string(other).is_some_and(|s| s == choice),
    }
}

/// Validation outcome for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationState {
    /// The request carries no errors, or validation is off for the field.
    Neutral,
    /// Errors exist, none for this field.
    Valid,
    /// The first error for this field.
    Invalid(String),
}

impl ValidationState {
    /// The Bootstrap state class.
    pub fn class(&self) -> Option<&'static str> {
        match self {
            Self::Neutral => None,
            Self::Valid => Some("is-valid"),
            Self::Invalid(_) => Some("is-invalid"),
        }
    }

    /// The inline error message.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid(message) => Some(message),
            _ => None,
        }
    }
}

/// Resolves field values against old input, explicit values and fill data.
pub struct Resolver<'a, C: ?Sized> {
    ctx: &'a C,
    form: &'a FormConfig,
}

impl<'a, C: RenderContext + ?Sized> Resolver<'a, C> {
    /// Creates a resolver for one render.
    pub fn new(ctx: &'a C, form: &'a FormConfig) -> Self {
        Self { ctx, form }
    }

    /// Resolves the displayed value.
    ///
    /// Old input for this field wins, then the explicit value, then fill data.
    pub fn value(&self, name: Option<&str>, explicit: Option<&Value>) -> Option<Value> {
        let key = name.map(dotted_name);
        if let Some(key) = key.as_deref() {
            if let Some(old) = self.ctx.old(key).filter(|v| !v.is_null()) {
                return Some(old.clone());
            }
        }
        if let Some(value) = explicit {
            return Some(value.clone());
        }
        lookup_path(&self.form.data, key.as_deref()?).cloned()
    }

    /// Resolves the checked state of a checkbox or radio whose own value is `choice`.
    ///
    /// Once the request carries any old input, the old value alone decides:
    /// an unchecked box is simply absent from the submission.
    pub fn checked(
        &self,
        name: Option<&str>,
        choice: &str,
        explicit: Option<bool>,
        is_radio: bool,
    ) -> bool {
        let key = name.map(dotted_name);
        if self.ctx.has_old_input() {
            return key
                .as_deref()
                .and_then(|k| self.ctx.old(k))
                .is_some_and(|old| matches_choice(old, choice, false));
        }
        if let Some(checked) = explicit {
            return checked;
        }
        key.as_deref()
            .and_then(|k| lookup_path(&self.form.data, k))
            .is_some_and(|data| matches_choice(data, choice, !is_radio))
    }

    /// Resolves the validation state of a field.
    pub fn validation(&self, name: Option<&str>, disabled: bool) -> ValidationState {
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            return ValidationState::Neutral;
        };
        if disabled {
            return ValidationState::Neutral;
        }
        let Some(bag) = self.ctx.errors(self.form.error_bag.as_deref()) else {
            return ValidationState::Neutral;
        };
        if bag.is_empty() {
            return ValidationState::Neutral;
        }
        match bag.first(&dotted_name(name)) {
            Some(message) => ValidationState::Invalid(message.to_string()),
            None => ValidationState::Valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RequestContext;
    use serde_json::json;

    fn form_with_data(data: Value) -> FormConfig {
        FormConfig {
            data: data.as_object().cloned().unwrap_or_default(),
            ..FormConfig::default()
        }
    }

    #[test]
    fn test_dotted_name() {
        assert_eq!(dotted_name("email"), "email");
        assert_eq!(dotted_name("address[city]"), "address.city");
        assert_eq!(dotted_name("tags[]"), "tags");
        assert_eq!(dotted_name("items[0][name]"), "items.0.name");
    }

    #[test]
    fn test_lookup_path() {
        let data = json!({"address": {"city": "Ghent"}, "tags": ["a", "b"], "x.y": 1});
        let map = data.as_object().unwrap();
        assert_eq!(lookup_path(map, "address.city"), Some(&json!("Ghent")));
        assert_eq!(lookup_path(map, "tags.1"), Some(&json!("b")));
        assert_eq!(lookup_path(map, "x.y"), Some(&json!(1)));
        assert_eq!(lookup_path(map, "address.zip"), None);
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Option A"), "option-a");
        assert_eq!(slug("  already-slugged "), "already-slugged");
        assert_eq!(slug("日本"), "e697a5e69cac");
        assert_ne!(slug("日本"), slug("中国"));
        assert_ne!(slug("Ünïcode"), slug("Ënïcode"));
        assert_eq!(slug("--"), "2d2d");
        assert_eq!(slug(""), "");
    }

    #[test]
    fn test_value_priority() {
        let form = form_with_data(json!({"name": "Z"}));

        let ctx = RequestContext::new().with_old("name", "X");
        let resolver = Resolver::new(&ctx, &form);
        assert_eq!(resolver.value(Some("name"), Some(&json!("Y"))), Some(json!("X")));

        let ctx = RequestContext::new();
        let resolver = Resolver::new(&ctx, &form);
        assert_eq!(resolver.value(Some("name"), Some(&json!("Y"))), Some(json!("Y")));
        assert_eq!(resolver.value(Some("name"), None), Some(json!("Z")));
        assert_eq!(resolver.value(None, None), None);
    }

    #[test]
    fn test_old_input_for_other_field_does_not_hide_value() {
        let form = form_with_data(json!({"name": "Z"}));
        let ctx = RequestContext::new().with_old("email", "a@b.c");
        let resolver = Resolver::new(&ctx, &form);
        assert_eq!(resolver.value(Some("name"), None), Some(json!("Z")));
    }

    #[test]
    fn test_checked_priority() {
        let form = form_with_data(json!({"subscribe": true, "color": "red"}));

        let ctx = RequestContext::new();
        let resolver = Resolver::new(&ctx, &form);
        assert!(resolver.checked(Some("subscribe"), "on", None, false));
        assert!(!resolver.checked(Some("subscribe"), "on", Some(false), false));
        assert!(resolver.checked(Some("color"), "red", None, true));
        assert!(!resolver.checked(Some("color"), "blue", None, true));

        // Any old input means the submission decides, even for absent fields.
        let ctx = RequestContext::new().with_old("other", "1");
        let resolver = Resolver::new(&ctx, &form);
        assert!(!resolver.checked(Some("subscribe"), "on", Some(true), false));

        let ctx = RequestContext::new().with_old("tags", json!(["a", "c"]));
        let resolver = Resolver::new(&ctx, &form);
        assert!(resolver.checked(Some("tags[]"), "c", None, false));
        assert!(!resolver.checked(Some("tags[]"), "b", None, false));
    }

    #[test]
    fn test_validation_states() {
        let form = FormConfig::default();

        let ctx = RequestContext::new();
        let resolver = Resolver::new(&ctx, &form);
        assert_eq!(resolver.validation(Some("email"), false), ValidationState::Neutral);

        let ctx = RequestContext::new().with_error("address.city", "Required");
        let resolver = Resolver::new(&ctx, &form);
        assert_eq!(
            resolver.validation(Some("address[city]"), false),
            ValidationState::Invalid("Required".to_string())
        );
        assert_eq!(resolver.validation(Some("email"), false), ValidationState::Valid);
        assert_eq!(resolver.validation(Some("email"), true), ValidationState::Neutral);
        assert_eq!(resolver.validation(None, false), ValidationState::Neutral);
    }

    #[test]
    fn test_named_error_bag() {
        let form = FormConfig {
            error_bag: Some("login".to_string()),
            ..FormConfig::default()
        };
        let ctx = RequestContext::new()
            .with_error("email", "Default bag")
            .with_bag_error("login", "password", "Wrong password");
        let resolver = Resolver::new(&ctx, &form);
        assert_eq!(resolver.validation(Some("email"), false), ValidationState::Valid);
        assert_eq!(
            resolver.validation(Some("password"), false).message(),
            Some("Wrong password")
        );
    }
}
