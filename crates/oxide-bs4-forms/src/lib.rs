//! # oxide-bs4-forms
//!
//! Fluent builder for Bootstrap 4 form markup.
//!
//! This crate provides:
//! - A chainable [`FormBuilder`] that renders one element per call
//! - Value resolution from old input, explicit values and fill data
//! - Validation classes and inline error messages from an [`ErrorBag`]
//! - CSRF and method-override fields for state-changing forms
//!
//! Request state (old input, errors, CSRF token, translations, URLs) comes
//! from a [`RenderContext`]. [`RequestContext`] is an in-memory one.
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_bs4_forms::{FormBuilder, RequestContext};
//!
//! let ctx = RequestContext::new()
//!     .csrf_token("tok")
//!     .with_error("email", "The email field is required.");
//!
//! let mut form = FormBuilder::new();
//! let mut html = form.open().action("/signup").render(&ctx);
//! html.push_str(&form.text("name").label("Name").render(&ctx));
//! html.push_str(&form.email("email").label("Email").render(&ctx));
//! html.push_str(&form.submit("Sign up").render(&ctx));
//! html.push_str(&form.close().render(&ctx));
//!
//! assert!(html.contains(r#"name="_token" value="tok""#));
//! assert!(html.contains("is-valid"));
//! assert!(html.contains("The email field is required."));
//! ```
//!
//! ## Filling From a Record
//!
//! ```rust
//! use oxide_bs4_forms::{FormBuilder, RequestContext};
//! use serde_json::json;
//!
//! let ctx = RequestContext::new();
//! let mut form = FormBuilder::new();
//! form.fill(&json!({"address": {"city": "Ghent"}, "plan": "pro"}));
//!
//! let city = form.text("address[city]").render(&ctx);
//! assert!(city.contains(r#"value="Ghent""#));
//!
//! let plan = form.radio("plan", "pro").render(&ctx);
//! assert!(plan.contains(" checked"));
//! ```
//!
//! ## Selects
//!
//! ```rust
//! use oxide_bs4_forms::{FormBuilder, RequestContext};
//!
//! let ctx = RequestContext::new().with_old("color", "g");
//! let html = FormBuilder::new()
//!     .select("color", [("r", "Red"), ("g", "Green")])
//!     .value("r")
//!     .render(&ctx);
//! assert!(html.contains(r#"<option value="g" selected>Green</option>"#));
//! ```

pub mod attrs;
mod builder;
pub mod choices;
pub mod config;
mod context;
mod error;
mod options;
pub mod value;
mod widgets;

pub use attrs::{AttrValue, Attributes};
pub use builder::FormBuilder;
pub use choices::{SelectOption, SelectOptions};
pub use config::{
    Color, FieldConfig, FormConfig, FormMethod, Label, Layout, RenderKind, Size, Target,
};
pub use context::{resolve_target, RenderContext, RequestContext};
pub use error::{ErrorBag, FormError, Result};
pub use options::FormOptions;
pub use value::ValidationState;
