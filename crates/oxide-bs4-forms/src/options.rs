//! Builder-wide rendering defaults.

use serde::{Deserialize, Serialize};

use crate::config::Color;
use crate::error::Result;

/// Autocomplete tokens inferred from a field name of the same word.
const AUTOCOMPLETE_TOKENS: &[&str] = &[
    "name",
    "nickname",
    "email",
    "username",
    "organization",
    "country",
    "language",
    "tel",
    "url",
    "bday",
    "sex",
];

/// Defaults applied to every render of a builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormOptions {
    /// Button and anchor color when none is chosen.
    pub button_color: Color,
    /// Textarea `rows` when not overridden by an attribute.
    pub textarea_rows: usize,
    /// Label of the fallback option used for malformed option data.
    pub select_placeholder: String,
    /// Field names that imply an `autocomplete` token.
    pub autocomplete_tokens: Vec<String>,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            button_color: Color::Primary,
            textarea_rows: 3,
            select_placeholder: "---------".to_string(),
            autocomplete_tokens: AUTOCOMPLETE_TOKENS.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}

impl FormOptions {
    /// Creates options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads options from JSON; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the default button color.
    #[must_use]
    pub fn button_color(mut self, color: Color) -> Self {
        self.button_color = color;
        self
    }

    /// Sets the default textarea rows.
    #[must_use]
    pub fn textarea_rows(mut self, rows: usize) -> Self {
        self.textarea_rows = rows;
        self
    }

    /// Returns the autocomplete token implied by a field name.
    pub fn autocomplete_for(&self, name: &str) -> Option<&str> {
        self.autocomplete_tokens
            .iter()
            .find(|token| token.as_str() == name)
            .map(String::as_str)
    }
}
