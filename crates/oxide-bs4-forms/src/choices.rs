//! Ordered option lists for selects.

use serde_json::Value;
use tracing::warn;

use crate::value::value_to_string;

/// A single `<option>` or an `<optgroup>` of options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOption {
    /// An option (value, label).
    Item { value: String, label: String },
    /// An option group with its own options.
    Group {
        label: String,
        items: Vec<(String, String)>,
    },
}

/// Options in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectOptions {
    options: Vec<SelectOption>,
}

impl SelectOptions {
    /// Creates an empty option list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an option.
    pub fn push_item(&mut self, value: impl Into<String>, label: impl Into<String>) {
        self.options.push(SelectOption::Item {
            value: value.into(),
            label: label.into(),
        });
    }

    /// Appends an option group.
    pub fn push_group<K, V>(&mut self, label: impl Into<String>, items: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.options.push(SelectOption::Group {
            label: label.into(),
            items: items.into_iter().map(|(v, l)| (v.into(), l.into())).collect(),
        });
    }

    /// Returns whether there are no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Returns the number of top-level entries.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Iterates over the top-level entries.
    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter()
    }

    /// Builds options from loosely typed JSON.
    ///
    /// Objects map value to label, and a nested object becomes an option
    /// group. Arrays use the element index as the value. Anything else yields
    /// a single placeholder option instead of failing.
    pub fn from_json(value: &Value, placeholder: &str) -> Self {
        let mut options = Self::new();
        match value {
            Value::Object(map) => {
                for (key, entry) in map {
                    match entry {
                        Value::Object(group) => options.push_group(
                            key.as_str(),
                            group
                                .iter()
                                .map(|(v, l)| (v.clone(), value_to_string(l).unwrap_or_default())),
                        ),
                        other => options.push_item(key.as_str(), value_to_string(other).unwrap_or_default()),
                    }
                }
            }
            Value::Array(items) => {
                for (index, entry) in items.iter().enumerate() {
                    options.push_item(index.to_string(), value_to_string(entry).unwrap_or_default());
                }
            }
            other => {
                warn!(options = %other, "Select options are not a map, using a placeholder option");
                options.push_item("", placeholder);
            }
        }
        options
    }
}

impl<K, V> FromIterator<(K, V)> for SelectOptions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (value, label) in iter {
            options.push_item(value, label);
        }
        options
    }
}

impl<'a> IntoIterator for &'a SelectOptions {
    type Item = &'a SelectOption;
    type IntoIter = std::slice::Iter<'a, SelectOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}
