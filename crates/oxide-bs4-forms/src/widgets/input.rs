//! Inputs, hidden fields, textareas and selects.

use tracing::warn;

use super::Renderer;
use crate::attrs::html_escape;
use crate::choices::SelectOption;
use crate::config::RenderKind;
use crate::context::RenderContext;
use crate::value::{value_list, value_to_string};

fn option_tag(value: &str, label: &str, selected: &[String]) -> String {
    let selected_attr = if selected.iter().any(|s| s == value) {
        " selected"
    } else {
        ""
    };
    format!(
        r#"<option value="{}"{selected_attr}>{}</option>"#,
        html_escape(value),
        html_escape(label)
    )
}

impl<C: RenderContext + ?Sized> Renderer<'_, C> {
    fn resolved_string(&self) -> Option<String> {
        self.resolver
            .value(self.name(), self.field.value.as_ref())
            .as_ref()
            .and_then(value_to_string)
    }

    pub(super) fn input(&self, kind: RenderKind) -> String {
        let state = self.validation();
        let mut attrs = self.identity_attrs(kind, true);
        if kind != RenderKind::File {
            attrs.set_opt("value", self.resolved_string());
        }

        let base_class = match kind {
            RenderKind::File => "form-control-file".to_string(),
            RenderKind::Range if self.field.custom => "custom-range".to_string(),
            RenderKind::Range => "form-control-range".to_string(),
            _ => self.sized_class("form-control"),
        };
        self.common_attrs(&mut attrs, kind, &base_class);
        attrs.merge_custom(&self.field.attrs, state.class());

        self.wrap_field(kind, &attrs.open_tag("input"), &state)
    }

    /// Hidden inputs skip the wrapper, classes and validation state.
    pub(super) fn hidden(&self) -> String {
        let mut attrs = self.identity_attrs(RenderKind::Hidden, true);
        attrs.set_opt("value", self.resolved_string());
        attrs.merge_custom(&self.field.attrs, None);
        attrs.open_tag("input")
    }

    pub(super) fn textarea(&self) -> String {
        let kind = RenderKind::Textarea;
        let state = self.validation();
        let mut attrs = self.identity_attrs(kind, false);
        attrs.set("rows", self.options.textarea_rows.to_string());
        self.common_attrs(&mut attrs, kind, &self.sized_class("form-control"));
        attrs.merge_custom(&self.field.attrs, state.class());

        let content = self.resolved_string().unwrap_or_default();
        let control = format!(
            "{}{}</textarea>",
            attrs.open_tag("textarea"),
            html_escape(&content)
        );
        self.wrap_field(kind, &control, &state)
    }

    pub(super) fn select(&self) -> String {
        let kind = RenderKind::Select;
        let state = self.validation();
        let mut attrs = self.identity_attrs(kind, false);
        let base_class = if self.field.custom {
            self.sized_class("custom-select")
        } else {
            self.sized_class("form-control")
        };
        self.common_attrs(&mut attrs, kind, &base_class);
        attrs.merge_custom(&self.field.attrs, state.class());

        let resolved = self.resolver.value(self.name(), self.field.value.as_ref());
        let selected: Vec<String> = match &resolved {
            Some(value) if self.field.multiple => value_list(value),
            Some(value) => value_to_string(value).into_iter().collect(),
            None => Vec::new(),
        };

        if self.field.options.is_empty() {
            warn!(name = self.name().unwrap_or_default(), "Select has no options");
        }

        let mut body = String::new();
        if let Some(placeholder) = &self.field.select_placeholder {
            let selected_attr = if selected.is_empty() { " selected" } else { "" };
            body.push_str(&format!(
                r#"<option value="" disabled hidden{selected_attr}>{}</option>"#,
                html_escape(&self.translate(placeholder))
            ));
        }
        for option in &self.field.options {
            match option {
                SelectOption::Item { value, label } => {
                    body.push_str(&option_tag(value, label, &selected));
                }
                SelectOption::Group { label, items } => {
                    body.push_str(&format!(r#"<optgroup label="{}">"#, html_escape(label)));
                    for (value, item_label) in items {
                        body.push_str(&option_tag(value, item_label, &selected));
                    }
                    body.push_str("</optgroup>");
                }
            }
        }

        let control = format!("{}{body}</select>", attrs.open_tag("select"));
        self.wrap_field(kind, &control, &state)
    }
}
