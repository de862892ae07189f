//! Host request state consumed while rendering.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::warn;
use url::form_urlencoded;

use crate::attrs::html_escape;
use crate::config::{FormMethod, Target};
use crate::error::ErrorBag;
use crate::value::lookup_path;

/// Per-request services the builder reads from the host framework.
///
/// Every method is a synchronous, side-effect-free read. One context is
/// borrowed for each render call.
pub trait RenderContext {
    /// The CSRF protection field for state-changing forms.
    fn csrf_field(&self) -> String;

    /// The hidden field carrying the logical HTTP method.
    fn method_field(&self, method: FormMethod) -> String {
        format!(
            r#"<input type="hidden" name="_method" value="{}">"#,
            method.as_str()
        )
    }

    /// Whether the previous submission flashed any input at all.
    fn has_old_input(&self) -> bool;

    /// Flashed input for a dotted field name.
    fn old(&self, name: &str) -> Option<&Value>;

    /// The named error bag, or the default bag when `bag` is `None`.
    fn errors(&self, bag: Option<&str>) -> Option<&ErrorBag>;

    /// Translates `key` within `namespace`.
    fn translate(&self, namespace: &str, key: &str) -> String {
        format!("{namespace}.{key}")
    }

    /// Resolves a path to a URL.
    fn url(&self, path: &str) -> String {
        path.to_string()
    }

    /// Resolves a named route.
    fn route(&self, _name: &str, _params: &[(String, String)]) -> Option<String> {
        None
    }
}

/// Resolves a link target; unknown routes fall back to the route name.
pub fn resolve_target<C: RenderContext + ?Sized>(ctx: &C, target: &Target) -> String {
    match target {
        Target::Url(path) => ctx.url(path),
        Target::Route { name, params } => ctx.route(name, params).unwrap_or_else(|| {
            warn!(route = %name, "Unknown route, using its name as the URL");
            name.clone()
        }),
    }
}

/// An in-memory request context.
///
/// Hosts that already hold the request state as plain values can hand it to
/// the builder through this type.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// CSRF token value.
    pub csrf_token: String,
    /// Old (flashed) input.
    pub old_input: Map<String, Value>,
    /// Default error bag.
    pub errors: ErrorBag,
    /// Named error bags.
    pub named_errors: HashMap<String, ErrorBag>,
    /// Translations keyed by `namespace.key`.
    pub translations: HashMap<String, String>,
    /// Base URL prepended to relative paths.
    pub base_url: String,
    /// Route patterns by name, with `{param}` placeholders.
    pub routes: HashMap<String, String>,
}

impl RequestContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the CSRF token.
    #[must_use]
    pub fn csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = token.into();
        self
    }

    /// Adds an old input value.
    #[must_use]
    pub fn with_old(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.old_input.insert(name.into(), value.into());
        self
    }

    /// Adds an error to the default bag.
    #[must_use]
    pub fn with_error(mut self, field: &str, message: impl Into<String>) -> Self {
        self.errors.add(field, message);
        self
    }

    /// Adds an error to a named bag.
    #[must_use]
    pub fn with_bag_error(mut self, bag: &str, field: &str, message: impl Into<String>) -> Self {
        self.named_errors
            .entry(bag.to_string())
            .or_default()
            .add(field, message);
        self
    }

    /// Adds a translation for `namespace.key`.
    #[must_use]
    pub fn with_translation(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.translations.insert(key.into(), text.into());
        self
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Registers a named route pattern such as `/items/{id}`.
    #[must_use]
    pub fn with_route(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.routes.insert(name.into(), pattern.into());
        self
    }
}

impl RenderContext for RequestContext {
    fn csrf_field(&self) -> String {
        format!(
            r#"<input type="hidden" name="_token" value="{}">"#,
            html_escape(&self.csrf_token)
        )
    }

    fn has_old_input(&self) -> bool {
        !self.old_input.is_empty()
    }

    fn old(&self, name: &str) -> Option<&Value> {
        lookup_path(&self.old_input, name)
    }

    fn errors(&self, bag: Option<&str>) -> Option<&ErrorBag> {
        match bag {
            Some(name) => self.named_errors.get(name),
            None => Some(&self.errors),
        }
    }

    fn translate(&self, namespace: &str, key: &str) -> String {
        let full_key = format!("{namespace}.{key}");
        self.translations.get(&full_key).cloned().unwrap_or(full_key)
    }

    fn url(&self, path: &str) -> String {
        if self.base_url.is_empty()
            || path.starts_with("http://")
            || path.starts_with("https://")
            || path.starts_with("//")
        {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn route(&self, name: &str, params: &[(String, String)]) -> Option<String> {
        let mut path = self.routes.get(name)?.clone();
        let mut query = form_urlencoded::Serializer::new(String::new());
        let mut has_query = false;
        for (key, value) in params {
            let placeholder = format!("{{{key}}}");
            if path.contains(&placeholder) {
                path = path.replace(&placeholder, value);
            } else {
                query.append_pair(key, value);
                has_query = true;
            }
        }
        if has_query {
            path = format!("{path}?{}", query.finish());
        }
        Some(self.url(&path))
    }
}
