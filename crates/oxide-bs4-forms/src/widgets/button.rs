//! Buttons and button-styled anchors.

use super::Renderer;
use crate::attrs::{html_escape, Attributes};
use crate::config::RenderKind;
use crate::context::{resolve_target, RenderContext};
use crate::value::value_to_string;

impl<C: RenderContext + ?Sized> Renderer<'_, C> {
    /// `btn btn-{color}` with the outline, size and block modifiers.
    fn button_class(&self) -> String {
        let color = self.field.color.unwrap_or(self.options.button_color);
        let mut class = if self.field.outline {
            format!("btn btn-outline-{color}")
        } else {
            format!("btn btn-{color}")
        };
        if let Some(size) = self.field.size {
            class.push_str(&format!(" btn-{}", size.as_str()));
        }
        if self.field.block {
            class.push_str(" btn-block");
        }
        class
    }

    pub(super) fn button(&self, kind: RenderKind) -> String {
        let text = html_escape(&self.text_or_name(self.own_text().as_deref()));
        let class = self.button_class();

        if kind == RenderKind::Anchor {
            let href = self
                .field
                .target
                .as_ref()
                .map_or_else(|| "javascript:void(0)".to_string(), |t| resolve_target(self.ctx, t));
            let mut attrs = Attributes::new().with("href", href);
            attrs.set_opt("id", self.element_id(kind));
            if self.field.disabled {
                attrs.set("class", format!("{class} disabled"));
                attrs.set("aria-disabled", "true");
                attrs.set("tabindex", "-1");
            } else {
                attrs.set("class", class);
            }
            attrs.set("role", "button");
            attrs.merge_custom(&self.field.attrs, None);
            return format!("{}{text}</a>", attrs.open_tag("a"));
        }

        let mut attrs = self.identity_attrs(kind, true);
        attrs.set("class", class);
        attrs.set_flag("disabled", self.field.disabled);
        attrs.merge_custom(&self.field.attrs, None);
        format!("{}{text}</button>", attrs.open_tag("button"))
    }

    fn own_text(&self) -> Option<String> {
        self.field.value.as_ref().and_then(value_to_string)
    }
}
