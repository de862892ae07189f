//! HTML attribute composition.

/// An attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Rendered as `key="value"`.
    Text(String),
    /// Rendered as a bare `key` when true, omitted when false.
    Flag(bool),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// An ordered set of HTML attributes.
///
/// Keys keep their first insertion position; setting an existing key
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    attrs: Vec<(String, AttrValue)>,
}

impl Attributes {
    /// Creates new empty attributes.
    pub fn new() -> Self {
        Self { attrs: Vec::new() }
    }

    /// Sets an attribute.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.attrs.push((key, value)),
        }
    }

    /// Sets a text attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.insert(key, AttrValue::Text(value.into()));
    }

    /// Sets a text attribute when a value is present.
    pub fn set_opt(&mut self, key: &str, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    /// Sets a boolean attribute.
    pub fn set_flag(&mut self, key: impl Into<String>, on: bool) {
        self.insert(key, AttrValue::Flag(on));
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Gets a text attribute.
    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(AttrValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// Removes an attribute.
    pub fn remove(&mut self, key: &str) {
        self.attrs.retain(|(k, _)| k != key);
    }

    /// Returns whether no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Merges caller-supplied attributes over these computed ones.
    ///
    /// The class list is the computed class, then the custom class, then the
    /// validation-state class. Every other custom key overrides the computed
    /// value of the same key.
    pub fn merge_custom(&mut self, custom: &Self, state_class: Option<&str>) {
        let base = self.get_text("class").unwrap_or_default().to_string();
        let extra = custom.get_text("class").unwrap_or_default();
        let class = join_classes(&[&base, extra, state_class.unwrap_or_default()]);

        for (key, value) in &custom.attrs {
            if key != "class" {
                self.insert(key.clone(), value.clone());
            }
        }

        if class.is_empty() {
            self.remove("class");
        } else {
            self.set("class", class);
        }
    }

    /// Renders attributes as an HTML attribute string.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .filter_map(|(key, value)| match value {
                AttrValue::Text(text) if key == "id" && text.is_empty() => None,
                AttrValue::Text(text) => Some(format!(r#"{key}="{}""#, html_escape(text))),
                AttrValue::Flag(true) => Some(key.clone()),
                AttrValue::Flag(false) => None,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Renders a tag opening such as `<input type="text">`.
    pub fn open_tag(&self, tag: &str) -> String {
        let attrs = self.to_html();
        if attrs.is_empty() {
            format!("<{tag}>")
        } else {
            format!("<{tag} {attrs}>")
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (key, value) in iter {
            attrs.insert(key, value);
        }
        attrs
    }
}

/// Joins class lists, collapsing redundant whitespace.
pub fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .flat_map(|part| part.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
