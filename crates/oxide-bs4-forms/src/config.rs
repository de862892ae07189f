//! Form-scoped and field-scoped configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::attrs::Attributes;
use crate::choices::SelectOptions;
use crate::error::FormError;

/// HTTP methods a form can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormMethod {
    /// GET method
    Get,
    /// POST method
    #[default]
    Post,
    /// PUT method
    Put,
    /// PATCH method
    Patch,
    /// DELETE method
    Delete,
}

impl FormMethod {
    /// Returns the method as an upper-case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// The method written on the `<form>` tag; HTML forms only know get and post.
    pub fn native(&self) -> &'static str {
        match self {
            Self::Get => "get",
            _ => "post",
        }
    }

    /// Whether the form carries a CSRF field.
    pub fn needs_csrf(&self) -> bool {
        *self != Self::Get
    }

    /// Whether the form carries a method-override field.
    pub fn needs_override(&self) -> bool {
        matches!(self, Self::Put | Self::Patch | Self::Delete)
    }
}

impl FromStr for FormMethod {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            _ => Err(FormError::UnknownMethod(s.to_string())),
        }
    }
}

impl fmt::Display for FormMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Form layout style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Label above control.
    #[default]
    Standard,
    /// `form-inline` on the form tag.
    Inline,
    /// Label and control side by side in a grid row.
    Horizontal,
}

/// Control size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    /// Small
    Sm,
    /// Large
    Lg,
}

impl Size {
    /// Returns the Bootstrap size suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Lg => "lg",
        }
    }
}

/// Bootstrap color tokens used by buttons and anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// `btn-primary`.
    #[default]
    Primary,
    /// `btn-secondary`.
    Secondary,
    /// `btn-success`.
    Success,
    /// `btn-danger`.
    Danger,
    /// `btn-warning`.
    Warning,
    /// `btn-info`.
    Info,
    /// `btn-light`.
    Light,
    /// `btn-dark`.
    Dark,
    /// `btn-link`, styled as a plain link.
    Link,
}

impl Color {
    /// Returns the color token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Link => "link",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which element the next render produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderKind {
    /// `<form>` opening tag plus CSRF and method-override fields.
    Open,
    /// `</form>`; also resets the form configuration.
    Close,
    /// `<fieldset>` with an optional legend.
    FieldsetOpen,
    /// `</fieldset>`.
    FieldsetClose,
    /// Text input.
    Text,
    /// Email input.
    Email,
    /// Telephone input.
    Tel,
    /// URL input.
    Url,
    /// Number input.
    Number,
    /// Date input.
    Date,
    /// Time input.
    Time,
    /// Range slider.
    Range,
    /// Password input.
    Password,
    /// Hidden input, rendered without a wrapper.
    Hidden,
    /// File upload input.
    File,
    /// `<select>` with options and option groups.
    Select,
    /// Checkbox in a `form-check` container.
    Checkbox,
    /// Radio button in a `form-check` container.
    Radio,
    /// `<textarea>`.
    Textarea,
    /// `<button type="button">`.
    Button,
    /// Submit button.
    Submit,
    /// Reset button.
    Reset,
    /// `<a>` styled as a button.
    Anchor,
    /// Alert block listing the messages of the active error bag.
    Errors,
}

impl RenderKind {
    /// Every render kind, in declaration order.
    pub const ALL: [Self; 24] = [
        Self::Open,
        Self::Close,
        Self::FieldsetOpen,
        Self::FieldsetClose,
        Self::Text,
        Self::Email,
        Self::Tel,
        Self::Url,
        Self::Number,
        Self::Date,
        Self::Time,
        Self::Range,
        Self::Password,
        Self::Hidden,
        Self::File,
        Self::Select,
        Self::Checkbox,
        Self::Radio,
        Self::Textarea,
        Self::Button,
        Self::Submit,
        Self::Reset,
        Self::Anchor,
        Self::Errors,
    ];

    /// Returns the kind name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::FieldsetOpen => "fieldsetOpen",
            Self::FieldsetClose => "fieldsetClose",
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Number => "number",
            Self::Date => "date",
            Self::Time => "time",
            Self::Range => "range",
            Self::Password => "password",
            Self::Hidden => "hidden",
            Self::File => "file",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Textarea => "textarea",
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
            Self::Anchor => "anchor",
            Self::Errors => "errors",
        }
    }

    /// The HTML `type` attribute a field-defining call implies.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            Self::Text
            | Self::Email
            | Self::Tel
            | Self::Url
            | Self::Number
            | Self::Date
            | Self::Time
            | Self::Range
            | Self::Password
            | Self::Hidden
            | Self::File
            | Self::Checkbox
            | Self::Radio
            | Self::Button
            | Self::Submit
            | Self::Reset => Some(self.as_str()),
            _ => None,
        }
    }

    /// Whether this kind renders a plain `<input>` inside the field wrapper.
    pub fn is_input_like(&self) -> bool {
        matches!(
            self,
            Self::Text
                | Self::Email
                | Self::Tel
                | Self::Url
                | Self::Number
                | Self::Date
                | Self::Time
                | Self::Range
                | Self::Password
                | Self::File
        )
    }
}

impl FromStr for RenderKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FormError::UnknownRenderKind(s.to_string()))
    }
}

impl fmt::Display for RenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field label setting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Label {
    /// No label.
    #[default]
    None,
    /// Use the field name as the label.
    FromName,
    /// Explicit label text (a translation key when a locale is set).
    Text(String),
}

impl From<bool> for Label {
    fn from(value: bool) -> Self {
        if value {
            Self::FromName
        } else {
            Self::None
        }
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A link destination, resolved against the render context at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A path or absolute URL.
    Url(String),
    /// A named route with parameters.
    Route {
        /// Route name.
        name: String,
        /// Route parameters, in order.
        params: Vec<(String, String)>,
    },
}

/// Configuration that lives until the form is closed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormConfig {
    /// Logical HTTP method.
    pub method: FormMethod,
    /// Form action.
    pub action: Option<Target>,
    /// Whether the form posts `multipart/form-data`.
    pub multipart: bool,
    /// Translation namespace for labels, help, legends and button text.
    pub locale: Option<String>,
    /// Prepended to every generated element id.
    pub id_prefix: String,
    /// Layout style.
    pub layout: Layout,
    /// Form-level autocomplete default.
    pub autocomplete: Option<String>,
    /// Named error bag; `None` reads the default bag.
    pub error_bag: Option<String>,
    /// Fill data, consulted when neither old input nor an explicit value exists.
    pub data: Map<String, Value>,
}

/// Configuration consumed by exactly one render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldConfig {
    /// Element produced by the next render; `None` renders nothing.
    pub render: Option<RenderKind>,
    /// HTML `type` attribute.
    pub input_type: Option<String>,
    /// Field name, array syntax allowed (`tags[]`, `address[city]`).
    pub name: Option<String>,
    /// Explicit id; the form id prefix still applies.
    pub id: Option<String>,
    /// Label setting.
    pub label: Label,
    /// Displayed value; for checkboxes and radios, the element's own value;
    /// for buttons, the button text.
    pub value: Option<Value>,
    /// Placeholder text (a translation key when a locale is set).
    pub placeholder: Option<String>,
    /// Help text shown under the control.
    pub help: Option<String>,
    /// Select options.
    pub options: SelectOptions,
    /// Leading disabled option of a select.
    pub select_placeholder: Option<String>,
    /// Multiple select.
    pub multiple: bool,
    /// Control or button size.
    pub size: Option<Size>,
    /// Button color; `None` uses the builder default.
    pub color: Option<Color>,
    /// Outline button style.
    pub outline: bool,
    /// Full-width button.
    pub block: bool,
    /// Disabled element.
    pub disabled: bool,
    /// Read-only control.
    pub readonly: bool,
    /// Required control.
    pub required: bool,
    /// Default checked state of a checkbox or radio.
    pub checked: Option<bool>,
    /// Custom attributes merged over the computed ones.
    pub attrs: Attributes,
    /// Custom attributes of the field wrapper.
    pub wrapper_attrs: Attributes,
    /// Skip validation classes and feedback.
    pub disable_validation: bool,
    /// Input-group text before the control.
    pub prefix: Option<String>,
    /// Input-group text after the control.
    pub suffix: Option<String>,
    /// Inline checkbox/radio layout.
    pub inline: bool,
    /// Bootstrap `custom-*` control variants.
    pub custom: bool,
    /// Explicit autocomplete token.
    pub autocomplete: Option<String>,
    /// Fieldset legend.
    pub legend: Option<String>,
    /// Form action or anchor href.
    pub target: Option<Target>,
    /// Errors block heading.
    pub heading: Option<String>,
}
