//! The fluent form builder.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::attrs::{AttrValue, Attributes};
use crate::choices::SelectOptions;
use crate::config::{
    Color, FieldConfig, FormConfig, FormMethod, Label, Layout, RenderKind, Size, Target,
};
use crate::context::RenderContext;
use crate::error::{FormError, Result};
use crate::options::FormOptions;
use crate::widgets::Renderer;

/// Builds Bootstrap 4 form markup one element at a time.
///
/// Setters configure the next element; [`FormBuilder::render`] produces it
/// and resets the field configuration. Form-level settings (method, locale,
/// id prefix, fill data, ...) stay until the form is closed.
///
/// ```rust
/// use oxide_bs4_forms::{FormBuilder, RequestContext};
///
/// let ctx = RequestContext::new().csrf_token("secret");
/// let mut form = FormBuilder::new();
///
/// let open = form.open().put().url("/items/5").render(&ctx);
/// assert!(open.contains(r#"method="post""#));
/// assert!(open.contains(r#"value="PUT""#));
///
/// let field = form.text("title").label("Title").required(true).render(&ctx);
/// assert!(field.contains(r#"name="title""#));
///
/// assert_eq!(form.close().render(&ctx), "</form>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
    options: FormOptions,
    form: FormConfig,
    field: FieldConfig,
}

impl FormBuilder {
    /// Creates a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with the given options.
    pub fn with_options(options: FormOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Returns the builder options.
    pub fn form_options(&self) -> &FormOptions {
        &self.options
    }

    /// Returns the form-scoped configuration.
    pub fn form_config(&self) -> &FormConfig {
        &self.form
    }

    /// Returns the pending field configuration.
    pub fn field_config(&self) -> &FieldConfig {
        &self.field
    }

    /// Renders the configured element and resets the field configuration.
    ///
    /// Without a render kind the output is empty.
    pub fn render<C: RenderContext + ?Sized>(&mut self, ctx: &C) -> String {
        let field = std::mem::take(&mut self.field);
        let Some(kind) = field.render else {
            warn!("Render called without an element, nothing to output");
            return String::new();
        };
        debug!(
            kind = %kind,
            name = field.name.as_deref().unwrap_or_default(),
            "Rendering form element"
        );

        if kind == RenderKind::Open {
            if let Some(autocomplete) = &field.autocomplete {
                self.form.autocomplete = Some(autocomplete.clone());
            }
        }

        let html = Renderer::new(ctx, &self.form, &self.options, &field).render(kind);

        if kind == RenderKind::Close {
            self.form = FormConfig::default();
        }
        html
    }

    fn kind(&mut self, kind: RenderKind) -> &mut Self {
        self.field.render = Some(kind);
        self
    }

    fn field_kind(&mut self, kind: RenderKind, name: impl Into<String>) -> &mut Self {
        self.field.render = Some(kind);
        self.field.input_type = kind.input_type().map(str::to_string);
        self.field.name = Some(name.into());
        self
    }

    fn button_kind(&mut self, kind: RenderKind, text: impl Into<String>) -> &mut Self {
        self.field.render = Some(kind);
        self.field.input_type = kind.input_type().map(str::to_string);
        self.field.value = Some(Value::String(text.into()));
        self
    }

    // Structural elements

    /// Opens the form.
    pub fn open(&mut self) -> &mut Self {
        self.kind(RenderKind::Open)
    }

    /// Closes the form and resets the form configuration.
    pub fn close(&mut self) -> &mut Self {
        self.kind(RenderKind::Close)
    }

    /// Opens a fieldset.
    pub fn fieldset_open(&mut self) -> &mut Self {
        self.kind(RenderKind::FieldsetOpen)
    }

    /// Closes a fieldset.
    pub fn fieldset_close(&mut self) -> &mut Self {
        self.kind(RenderKind::FieldsetClose)
    }

    /// Sets the fieldset legend.
    pub fn legend(&mut self, text: impl Into<String>) -> &mut Self {
        self.field.legend = Some(text.into());
        self
    }

    /// Renders the error bag as an alert block.
    pub fn errors(&mut self) -> &mut Self {
        self.kind(RenderKind::Errors)
    }

    /// Sets the errors block heading.
    pub fn heading(&mut self, text: impl Into<String>) -> &mut Self {
        self.field.heading = Some(text.into());
        self
    }

    // Form-scoped settings

    /// Sets the HTTP method.
    pub fn method(&mut self, method: FormMethod) -> &mut Self {
        self.form.method = method;
        self
    }

    /// Uses GET.
    pub fn get(&mut self) -> &mut Self {
        self.method(FormMethod::Get)
    }

    /// Uses POST.
    pub fn post(&mut self) -> &mut Self {
        self.method(FormMethod::Post)
    }

    /// Uses PUT through a method-override field.
    pub fn put(&mut self) -> &mut Self {
        self.method(FormMethod::Put)
    }

    /// Uses PATCH through a method-override field.
    pub fn patch(&mut self) -> &mut Self {
        self.method(FormMethod::Patch)
    }

    /// Uses DELETE through a method-override field.
    pub fn delete(&mut self) -> &mut Self {
        self.method(FormMethod::Delete)
    }

    /// Sets the form action for the whole form.
    pub fn action(&mut self, path: impl Into<String>) -> &mut Self {
        self.form.action = Some(Target::Url(path.into()));
        self
    }

    /// Enables `multipart/form-data`.
    pub fn multipart(&mut self, multipart: bool) -> &mut Self {
        self.form.multipart = multipart;
        self
    }

    /// Sets the translation namespace.
    pub fn locale(&mut self, namespace: impl Into<String>) -> &mut Self {
        self.form.locale = Some(namespace.into());
        self
    }

    /// Sets the prefix of generated ids.
    pub fn id_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.form.id_prefix = prefix.into();
        self
    }

    /// Sets the form layout.
    pub fn layout(&mut self, layout: Layout) -> &mut Self {
        self.form.layout = layout;
        self
    }

    /// Uses the inline form layout.
    pub fn form_inline(&mut self) -> &mut Self {
        self.layout(Layout::Inline)
    }

    /// Uses the horizontal form layout.
    pub fn horizontal(&mut self) -> &mut Self {
        self.layout(Layout::Horizontal)
    }

    /// Reads validation state from a named error bag.
    pub fn error_bag(&mut self, name: impl Into<String>) -> &mut Self {
        self.form.error_bag = Some(name.into());
        self
    }

    /// Sets the fill data from a map or any serializable record.
    ///
    /// Data that does not serialize to an object is ignored.
    pub fn fill<T: Serialize + ?Sized>(&mut self, data: &T) -> &mut Self {
        if let Err(err) = self.try_fill(data) {
            warn!(error = %err, "Ignoring fill data");
        }
        self
    }

    /// Sets the fill data, reporting data that is not an object.
    pub fn try_fill<T: Serialize + ?Sized>(&mut self, data: &T) -> Result<&mut Self> {
        match serde_json::to_value(data)? {
            Value::Object(map) => {
                self.form.data = map;
                Ok(self)
            }
            Value::Null => Err(FormError::FillNotAnObject("null")),
            Value::Bool(_) => Err(FormError::FillNotAnObject("bool")),
            Value::Number(_) => Err(FormError::FillNotAnObject("number")),
            Value::String(_) => Err(FormError::FillNotAnObject("string")),
            Value::Array(_) => Err(FormError::FillNotAnObject("array")),
        }
    }

    // Field-defining calls

    /// A text input.
    pub fn text(&mut self, name: impl Into<String>) -> &mut Self {
        self.field_kind(RenderKind::Text, name)
    }

    /// An email input.
    pub fn email(&mut self, name: impl Into<String>) -> &mut Self {
        self.field_kind(RenderKind::Email, name)
    }

    /// A telephone input.
    pub fn tel(&mut self, name: impl Into<String>) -> &mut Self {
        self.field_kind(RenderKind::Tel, name)
    }

    /// A URL input.
    pub fn url_input(&mut self, name: impl Into<String>) -> &mut Self {
        self.field_kind(RenderKind::Url, name)
    }

    /// A number input.
    pub fn number(&mut self, name: impl Into<String>) -> &mut Self {
        self.field_kind(RenderKind::Number, name)
    }

    /// A date input.
    pub fn date(&mut self, name: impl Into<String>) -> &mut Self {
        self.field_kind(RenderKind::Date, name)
    }

    /// A time input.
    pub fn time(&mut self, name: impl Into<String>) -> &mut Self {
        self.field_kind(RenderKind::Time, name)
    }

    /// A range input.
    pub fn range(&mut self, name: impl Into<String>) -> &mut Self {
        self.field_kind(RenderKind::Range, name)
    }

    /// A password input.
    pub fn password(&mut self, name: impl Into<String>) -> &mut Self {
        self.field_kind(RenderKind::Password, name)
    }

    /// A hidden input.
    pub fn hidden(&mut self, name: impl Into<String>) -> &mut Self {
        self.field_kind(RenderKind::Hidden, name)
    }

    /// A file input.
    pub fn file(&mut self, name: impl Into<String>) -> &mut Self {
        self.field_kind(RenderKind::File, name)
    }

    /// A textarea.
    pub fn textarea(&mut self, name: impl Into<String>) -> &mut Self {
        self.field_kind(RenderKind::Textarea, name)
    }

    /// A select with options in the given order.
    pub fn select<K, V>(
        &mut self,
        name: impl Into<String>,
        options: impl IntoIterator<Item = (K, V)>,
    ) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.field_kind(RenderKind::Select, name);
        self.field.options = options.into_iter().collect();
        self
    }

    /// A checkbox; its own value defaults to `on`.
    pub fn checkbox(&mut self, name: impl Into<String>) -> &mut Self {
        self.field_kind(RenderKind::Checkbox, name)
    }

    /// A radio button with its own value.
    pub fn radio(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.field_kind(RenderKind::Radio, name);
        self.field.value = Some(Value::String(value.into()));
        self
    }

    /// A `<button type="button">`.
    pub fn button(&mut self, text: impl Into<String>) -> &mut Self {
        self.button_kind(RenderKind::Button, text)
    }

    /// A submit button.
    pub fn submit(&mut self, text: impl Into<String>) -> &mut Self {
        self.button_kind(RenderKind::Submit, text)
    }

    /// A reset button.
    pub fn reset(&mut self, text: impl Into<String>) -> &mut Self {
        self.button_kind(RenderKind::Reset, text)
    }

    /// An anchor styled as a button.
    pub fn anchor(&mut self, text: impl Into<String>) -> &mut Self {
        self.button_kind(RenderKind::Anchor, text)
    }

    // Field-scoped settings

    /// Overrides the HTML `type` attribute.
    pub fn input_type(&mut self, input_type: impl Into<String>) -> &mut Self {
        self.field.input_type = Some(input_type.into());
        self
    }

    /// Sets the field name.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.field.name = Some(name.into());
        self
    }

    /// Sets an explicit id (the form id prefix still applies).
    pub fn id(&mut self, id: impl Into<String>) -> &mut Self {
        self.field.id = Some(id.into());
        self
    }

    /// Sets the label; `true` uses the field name.
    pub fn label(&mut self, label: impl Into<Label>) -> &mut Self {
        self.field.label = label.into();
        self
    }

    /// Sets the value (the element's own value for checkboxes and radios).
    pub fn value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.field.value = Some(value.into());
        self
    }

    /// Sets the placeholder.
    pub fn placeholder(&mut self, text: impl Into<String>) -> &mut Self {
        self.field.placeholder = Some(text.into());
        self
    }

    /// Sets the help text.
    pub fn help(&mut self, text: impl Into<String>) -> &mut Self {
        self.field.help = Some(text.into());
        self
    }

    /// Replaces the select options.
    pub fn options(&mut self, options: SelectOptions) -> &mut Self {
        self.field.options = options;
        self
    }

    /// Replaces the select options with loosely typed JSON data.
    pub fn options_json(&mut self, options: &Value) -> &mut Self {
        self.field.options = SelectOptions::from_json(options, &self.options.select_placeholder);
        self
    }

    /// Appends an option group.
    pub fn option_group<K, V>(
        &mut self,
        label: impl Into<String>,
        items: impl IntoIterator<Item = (K, V)>,
    ) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.field.options.push_group(label, items);
        self
    }

    /// Adds a leading placeholder option to a select.
    pub fn select_placeholder(&mut self, text: impl Into<String>) -> &mut Self {
        self.field.select_placeholder = Some(text.into());
        self
    }

    /// Allows several selected options.
    pub fn multiple(&mut self, multiple: bool) -> &mut Self {
        self.field.multiple = multiple;
        self
    }

    /// Sets the control size.
    pub fn size(&mut self, size: Size) -> &mut Self {
        self.field.size = Some(size);
        self
    }

    /// Small control.
    pub fn sm(&mut self) -> &mut Self {
        self.size(Size::Sm)
    }

    /// Large control.
    pub fn lg(&mut self) -> &mut Self {
        self.size(Size::Lg)
    }

    /// Sets the button color.
    pub fn color(&mut self, color: Color) -> &mut Self {
        self.field.color = Some(color);
        self
    }

    /// Primary button.
    pub fn primary(&mut self) -> &mut Self {
        self.color(Color::Primary)
    }

    /// Secondary button.
    pub fn secondary(&mut self) -> &mut Self {
        self.color(Color::Secondary)
    }

    /// Success button.
    pub fn success(&mut self) -> &mut Self {
        self.color(Color::Success)
    }

    /// Danger button.
    pub fn danger(&mut self) -> &mut Self {
        self.color(Color::Danger)
    }

    /// Warning button.
    pub fn warning(&mut self) -> &mut Self {
        self.color(Color::Warning)
    }

    /// Info button.
    pub fn info(&mut self) -> &mut Self {
        self.color(Color::Info)
    }

    /// Light button.
    pub fn light(&mut self) -> &mut Self {
        self.color(Color::Light)
    }

    /// Dark button.
    pub fn dark(&mut self) -> &mut Self {
        self.color(Color::Dark)
    }

    /// Link-styled button.
    pub fn link(&mut self) -> &mut Self {
        self.color(Color::Link)
    }

    /// Outline button style.
    pub fn outline(&mut self, outline: bool) -> &mut Self {
        self.field.outline = outline;
        self
    }

    /// Full-width button.
    pub fn block(&mut self, block: bool) -> &mut Self {
        self.field.block = block;
        self
    }

    /// Disables the element.
    pub fn disabled(&mut self, disabled: bool) -> &mut Self {
        self.field.disabled = disabled;
        self
    }

    /// Makes the element read-only.
    pub fn readonly(&mut self, readonly: bool) -> &mut Self {
        self.field.readonly = readonly;
        self
    }

    /// Marks the element as required.
    pub fn required(&mut self, required: bool) -> &mut Self {
        self.field.required = required;
        self
    }

    /// Sets the default checked state of a checkbox or radio.
    pub fn checked(&mut self, checked: bool) -> &mut Self {
        self.field.checked = Some(checked);
        self
    }

    /// Sets a custom attribute on the element.
    pub fn attr(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        self.field.attrs.insert(key, value);
        self
    }

    /// Sets several custom attributes on the element.
    pub fn attrs<K, V>(&mut self, attrs: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        for (key, value) in attrs {
            self.field.attrs.insert(key, value);
        }
        self
    }

    /// Sets a custom attribute on the field wrapper.
    pub fn wrapper_attr(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        self.field.wrapper_attrs.insert(key, value);
        self
    }

    /// Sets several custom attributes on the field wrapper.
    pub fn wrapper_attrs(&mut self, attrs: Attributes) -> &mut Self {
        self.field.wrapper_attrs = attrs;
        self
    }

    /// Skips validation classes and error text for this field.
    pub fn disable_validation(&mut self, disable: bool) -> &mut Self {
        self.field.disable_validation = disable;
        self
    }

    /// Input-group text before the control.
    pub fn prefix(&mut self, text: impl Into<String>) -> &mut Self {
        self.field.prefix = Some(text.into());
        self
    }

    /// Input-group text after the control.
    pub fn suffix(&mut self, text: impl Into<String>) -> &mut Self {
        self.field.suffix = Some(text.into());
        self
    }

    /// Lays checkboxes and radios out inline.
    pub fn inline(&mut self, inline: bool) -> &mut Self {
        self.field.inline = inline;
        self
    }

    /// Uses Bootstrap custom controls for selects, ranges, checkboxes and radios.
    pub fn custom(&mut self, custom: bool) -> &mut Self {
        self.field.custom = custom;
        self
    }

    /// Sets the autocomplete token; on a form-open chain it becomes the form default.
    pub fn autocomplete(&mut self, value: impl Into<String>) -> &mut Self {
        self.field.autocomplete = Some(value.into());
        self
    }

    /// Turns autocomplete off.
    pub fn autocomplete_off(&mut self) -> &mut Self {
        self.autocomplete("off")
    }

    /// Links to a path (form action on open, href on anchors).
    pub fn url(&mut self, path: impl Into<String>) -> &mut Self {
        self.field.target = Some(Target::Url(path.into()));
        self
    }

    /// Links to a named route (form action on open, href on anchors).
    pub fn route<K, V>(
        &mut self,
        name: impl Into<String>,
        params: impl IntoIterator<Item = (K, V)>,
    ) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.field.target = Some(Target::Route {
            name: name.into(),
            params: params.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RequestContext;
    use serde_json::json;

    #[test]
    fn test_options_getter_and_select_options_setter() {
        let mut options = SelectOptions::new();
        options.push_item("a", "A");
        let mut form = FormBuilder::with_options(FormOptions::new().textarea_rows(7));
        form.select("s", Vec::<(&str, &str)>::new()).options(options.clone());
        assert_eq!(form.form_options().textarea_rows, 7);
        assert_eq!(form.field_config().options, options);
    }

    #[test]
    fn test_field_kind_sets_render_and_type() {
        let mut form = FormBuilder::new();
        form.email("contact");
        assert_eq!(form.field_config().render, Some(RenderKind::Email));
        assert_eq!(form.field_config().input_type.as_deref(), Some("email"));
        assert_eq!(form.field_config().name.as_deref(), Some("contact"));
    }

    #[test]
    fn test_structural_kind_keeps_type() {
        let mut form = FormBuilder::new();
        form.input_type("search").open();
        assert_eq!(form.field_config().render, Some(RenderKind::Open));
        assert_eq!(form.field_config().input_type.as_deref(), Some("search"));
    }

    #[test]
    fn test_last_render_kind_wins() {
        let mut form = FormBuilder::new();
        form.checkbox("a").select("b", [("1", "One")]);
        assert_eq!(form.field_config().render, Some(RenderKind::Select));
        assert_eq!(form.field_config().name.as_deref(), Some("b"));
    }

    #[test]
    fn test_render_resets_field_config() {
        let ctx = RequestContext::new();
        let mut form = FormBuilder::new();
        form.locale("users");
        form.text("name").help("Your name").sm().render(&ctx);
        assert_eq!(form.field_config(), &FieldConfig::default());
        assert_eq!(form.form_config().locale.as_deref(), Some("users"));
    }

    #[test]
    fn test_close_resets_form_config() {
        let ctx = RequestContext::new();
        let mut form = FormBuilder::new();
        form.open().put().locale("users").id_prefix("f-").render(&ctx);
        assert_eq!(form.form_config().method, FormMethod::Put);
        form.close().render(&ctx);
        assert_eq!(form.form_config(), &FormConfig::default());
    }

    #[test]
    fn test_render_without_kind_is_empty() {
        let ctx = RequestContext::new();
        let mut form = FormBuilder::new();
        assert_eq!(form.render(&ctx), "");
        assert_eq!(form.label("x").placeholder("y").render(&ctx), "");
    }

    #[test]
    fn test_fill_accepts_structs() {
        #[derive(Serialize)]
        struct Item {
            title: String,
            qty: u32,
        }

        let mut form = FormBuilder::new();
        form.fill(&Item {
            title: "Lamp".to_string(),
            qty: 2,
        });
        assert_eq!(form.form_config().data.get("title"), Some(&json!("Lamp")));
        assert_eq!(form.form_config().data.get("qty"), Some(&json!(2)));
    }

    #[test]
    fn test_try_fill_rejects_non_objects() {
        let mut form = FormBuilder::new();
        let err = form.try_fill(&vec![1, 2]).err();
        assert!(matches!(err, Some(FormError::FillNotAnObject("array"))));

        form.fill(&json!({"a": 1})).fill(&"ignored");
        assert_eq!(form.form_config().data.get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_open_autocomplete_becomes_form_default() {
        let ctx = RequestContext::new();
        let mut form = FormBuilder::new();
        form.open().autocomplete_off().render(&ctx);
        assert_eq!(form.form_config().autocomplete.as_deref(), Some("off"));
    }
}
