//! Per-element renderers.

mod button;
mod check;
mod input;
mod wrapper;

use crate::attrs::{html_escape, Attributes};
use crate::config::{FieldConfig, FormConfig, Label, Layout, RenderKind};
use crate::context::{resolve_target, RenderContext};
use crate::options::FormOptions;
use crate::value::{slug, value_to_string, Resolver, ValidationState};

/// Own value of a checkbox or radio without an explicit one.
const DEFAULT_CHECK_VALUE: &str = "on";

/// Renders one element from a form/field configuration pair.
pub(crate) struct Renderer<'a, C: ?Sized> {
    ctx: &'a C,
    form: &'a FormConfig,
    options: &'a FormOptions,
    field: &'a FieldConfig,
    resolver: Resolver<'a, C>,
}

impl<'a, C: RenderContext + ?Sized> Renderer<'a, C> {
    pub(crate) fn new(
        ctx: &'a C,
        form: &'a FormConfig,
        options: &'a FormOptions,
        field: &'a FieldConfig,
    ) -> Self {
        Self {
            ctx,
            form,
            options,
            field,
            resolver: Resolver::new(ctx, form),
        }
    }

    pub(crate) fn render(&self, kind: RenderKind) -> String {
        match kind {
            RenderKind::Open => self.form_open(),
            RenderKind::Close => "</form>".to_string(),
            RenderKind::FieldsetOpen => self.fieldset_open(),
            RenderKind::FieldsetClose => "</fieldset>".to_string(),
            RenderKind::Text
            | RenderKind::Email
            | RenderKind::Tel
            | RenderKind::Url
            | RenderKind::Number
            | RenderKind::Date
            | RenderKind::Time
            | RenderKind::Range
            | RenderKind::Password
            | RenderKind::File => self.input(kind),
            RenderKind::Hidden => self.hidden(),
            RenderKind::Select => self.select(),
            RenderKind::Textarea => self.textarea(),
            RenderKind::Checkbox | RenderKind::Radio => self.check(kind),
            RenderKind::Button | RenderKind::Submit | RenderKind::Reset | RenderKind::Anchor => {
                self.button(kind)
            }
            RenderKind::Errors => self.errors_block(),
        }
    }

    fn form_open(&self) -> String {
        let method = self.form.method;
        let mut attrs = Attributes::new();
        attrs.set("method", method.native());

        let action = self
            .field
            .target
            .as_ref()
            .or(self.form.action.as_ref())
            .map(|target| resolve_target(self.ctx, target));
        attrs.set_opt("action", action);

        if self.form.multipart {
            attrs.set("enctype", "multipart/form-data");
        }
        attrs.set_opt("autocomplete", self.form.autocomplete.as_deref());
        attrs.set_opt("id", self.field.id.as_deref());
        if self.form.layout == Layout::Inline {
            attrs.set("class", "form-inline");
        }
        attrs.merge_custom(&self.field.attrs, None);

        let mut html = attrs.open_tag("form");
        if method.needs_csrf() {
            html.push_str(&self.ctx.csrf_field());
        }
        if method.needs_override() {
            html.push_str(&self.ctx.method_field(method));
        }
        html
    }

    fn fieldset_open(&self) -> String {
        let mut attrs = Attributes::new();
        attrs.set_opt("id", self.field.id.as_deref());
        attrs.merge_custom(&self.field.attrs, None);

        let mut html = attrs.open_tag("fieldset");
        if let Some(legend) = &self.field.legend {
            html.push_str(&format!(
                "<legend>{}</legend>",
                html_escape(&self.translate(legend))
            ));
        }
        html
    }

    /// Translates a key through the form locale, if one is set.
    fn translate(&self, key: &str) -> String {
        match &self.form.locale {
            Some(namespace) => self.ctx.translate(namespace, key),
            None => key.to_string(),
        }
    }

    /// Translates `text`, falling back to the field name.
    fn text_or_name(&self, text: Option<&str>) -> String {
        let key = text
            .filter(|t| !t.is_empty())
            .or(self.field.name.as_deref())
            .unwrap_or_default();
        if key.is_empty() {
            return String::new();
        }
        self.translate(key)
    }

    fn name(&self) -> Option<&str> {
        self.field.name.as_deref().filter(|n| !n.is_empty())
    }

    /// The element's own value for checkboxes and radios.
    fn own_value(&self) -> String {
        self.field
            .value
            .as_ref()
            .and_then(value_to_string)
            .unwrap_or_else(|| DEFAULT_CHECK_VALUE.to_string())
    }

    /// Explicit id, or one derived from the name, with the form prefix.
    fn element_id(&self, kind: RenderKind) -> Option<String> {
        let base = match (self.field.id.as_deref(), self.name()) {
            (Some(id), _) if !id.is_empty() => id.to_string(),
            (_, Some(name)) if kind == RenderKind::Radio => {
                format!("{name}-{}", slug(&self.own_value()))
            }
            (_, Some(name)) => name.to_string(),
            _ => return None,
        };
        Some(format!("{}{base}", self.form.id_prefix))
    }

    /// The id the control ends up with: a custom `id` attribute wins.
    fn control_id(&self, kind: RenderKind) -> Option<String> {
        match self.field.attrs.get_text("id") {
            Some(id) if !id.is_empty() => Some(id.to_string()),
            _ => self.element_id(kind),
        }
    }

    fn help_id(&self, kind: RenderKind) -> Option<String> {
        self.field.help.as_ref()?;
        self.control_id(kind).map(|id| format!("help-{id}"))
    }

    /// Label text, or `None` when no label is configured.
    fn label_text(&self) -> Option<String> {
        match &self.field.label {
            Label::None => None,
            Label::FromName => self.name().map(|name| self.translate(name)),
            Label::Text(text) if text.is_empty() => None,
            Label::Text(text) => Some(self.translate(text)),
        }
    }

    fn autocomplete(&self) -> Option<String> {
        if let Some(explicit) = &self.field.autocomplete {
            return Some(explicit.clone());
        }
        if self.form.autocomplete.as_deref() == Some("off") {
            return None;
        }
        self.name()
            .and_then(|name| self.options.autocomplete_for(name))
            .map(str::to_string)
    }

    fn input_type(&self, kind: RenderKind) -> Option<String> {
        self.field
            .input_type
            .clone()
            .or_else(|| kind.input_type().map(str::to_string))
    }

    fn validation(&self) -> ValidationState {
        self.resolver
            .validation(self.name(), self.field.disable_validation)
    }

    /// The `type`, `name` and `id` attributes every control starts with.
    fn identity_attrs(&self, kind: RenderKind, with_type: bool) -> Attributes {
        let mut attrs = Attributes::new();
        if with_type {
            attrs.set_opt("type", self.input_type(kind));
        }
        if let Some(name) = self.name() {
            let name = if kind == RenderKind::Select && self.field.multiple {
                format!("{name}[]")
            } else {
                name.to_string()
            };
            attrs.set("name", name);
        }
        attrs.set_opt("id", self.element_id(kind));
        attrs
    }

    /// Class, autocomplete, placeholder, ARIA and boolean attributes.
    fn common_attrs(&self, attrs: &mut Attributes, kind: RenderKind, base_class: &str) {
        if !base_class.is_empty() {
            attrs.set("class", base_class);
        }
        if !matches!(kind, RenderKind::Checkbox | RenderKind::Radio) {
            attrs.set_opt("autocomplete", self.autocomplete());
        }
        if let Some(placeholder) = &self.field.placeholder {
            attrs.set("placeholder", self.translate(placeholder));
        }
        attrs.set_opt("aria-describedby", self.help_id(kind));
        if kind == RenderKind::Select && self.field.multiple {
            attrs.set_flag("multiple", true);
        }
        attrs.set_flag("readonly", self.field.readonly);
        attrs.set_flag("disabled", self.field.disabled);
        attrs.set_flag("required", self.field.required);
    }

    /// `base` plus the size modifier, e.g. `form-control form-control-sm`.
    fn sized_class(&self, base: &str) -> String {
        match self.field.size {
            Some(size) => format!("{base} {base}-{}", size.as_str()),
            None => base.to_string(),
        }
    }
}
