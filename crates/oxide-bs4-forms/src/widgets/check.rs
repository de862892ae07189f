//! Checkboxes and radios.

use super::wrapper::{feedback_html, label_element, LabelStyle};
use super::Renderer;
use crate::config::{Label, RenderKind};
use crate::context::RenderContext;

impl<C: RenderContext + ?Sized> Renderer<'_, C> {
    fn check_container_class(&self, kind: RenderKind) -> String {
        let inline = self.field.inline;
        if self.field.custom {
            let variant = if kind == RenderKind::Radio {
                "custom-radio"
            } else {
                "custom-checkbox"
            };
            let mut class = format!("custom-control {variant}");
            if inline {
                class.push_str(" custom-control-inline");
            }
            class
        } else if inline {
            "form-check form-check-inline".to_string()
        } else {
            "form-check".to_string()
        }
    }

    pub(super) fn check(&self, kind: RenderKind) -> String {
        let state = self.validation();
        let own_value = self.own_value();
        let checked = self.resolver.checked(
            self.name(),
            &own_value,
            self.field.checked,
            kind == RenderKind::Radio,
        );

        let mut attrs = self.identity_attrs(kind, true);
        attrs.set("value", own_value.as_str());
        attrs.set_flag("checked", checked);
        let base_class = if self.field.custom {
            "custom-control-input"
        } else {
            "form-check-input"
        };
        self.common_attrs(&mut attrs, kind, base_class);
        attrs.merge_custom(&self.field.attrs, state.class());

        let style = if self.field.custom {
            LabelStyle::CustomCheck
        } else {
            LabelStyle::Check
        };
        let label = match (self.label_text(), self.control_id(kind)) {
            (Some(text), Some(id)) => label_element(&id, text, style),
            // Checks keep a label by default, taken from the name.
            (None, Some(id)) if self.field.label == Label::None => {
                label_element(&id, self.text_or_name(None), style)
            }
            _ => String::new(),
        };

        format!(
            "{}{}{label}{}{}</div>",
            self.wrapper_tag(&self.check_container_class(kind)),
            attrs.open_tag("input"),
            self.help_html(kind),
            feedback_html(&state)
        )
    }
}
