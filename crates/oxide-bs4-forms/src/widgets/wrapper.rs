//! Field wrappers, help text, feedback and the errors block.

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::{Li, Span, Ul, H4};

use super::Renderer;
use crate::attrs::Attributes;
use crate::config::{Layout, RenderKind};
use crate::context::RenderContext;
use crate::value::ValidationState;

/// How a `<label>` is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LabelStyle {
    Plain,
    Horizontal,
    Check,
    CustomCheck,
}

pub(super) fn label_element(id: &str, text: String, style: LabelStyle) -> String {
    let id = id.to_string();
    let label = match style {
        LabelStyle::Plain => html! { label.for_(#id) { #text } },
        LabelStyle::Horizontal => html! { label.for_(#id).class("col-sm-2 col-form-label") { #text } },
        LabelStyle::Check => html! { label.for_(#id).class("form-check-label") { #text } },
        LabelStyle::CustomCheck => html! { label.for_(#id).class("custom-control-label") { #text } },
    };
    label.render()
}

pub(super) fn feedback_html(state: &ValidationState) -> String {
    state
        .message()
        .map(|message| {
            html! { div.class("invalid-feedback") }
                .text(message)
                .render()
        })
        .unwrap_or_default()
}

impl<C: RenderContext + ?Sized> Renderer<'_, C> {
    /// Opening wrapper `<div>` with the computed class and wrapper attributes.
    pub(super) fn wrapper_tag(&self, base_class: &str) -> String {
        let mut attrs = Attributes::new().with("class", base_class);
        attrs.merge_custom(&self.field.wrapper_attrs, None);
        attrs.open_tag("div")
    }

    pub(super) fn label_html(&self, kind: RenderKind, style: LabelStyle) -> String {
        match (self.label_text(), self.control_id(kind)) {
            (Some(text), Some(id)) => label_element(&id, text, style),
            _ => String::new(),
        }
    }

    pub(super) fn help_html(&self, kind: RenderKind) -> String {
        let (Some(help), Some(help_id)) = (&self.field.help, self.help_id(kind)) else {
            return String::new();
        };
        let text = self.translate(help);
        html! { small.class("form-text text-muted") }
            .attr("id", &help_id)
            .text(&text)
            .render()
    }

    /// Wraps the control in an input group when a prefix or suffix is set.
    fn input_group(&self, control: &str, feedback: &str) -> Option<String> {
        if self.field.prefix.is_none() && self.field.suffix.is_none() {
            return None;
        }
        let mut html = Attributes::new()
            .with("class", self.sized_class("input-group"))
            .open_tag("div");
        if let Some(prefix) = &self.field.prefix {
            let addon = html! { div.class("input-group-prepend") }
                .child::<Span, _>(|s| s.class("input-group-text").text(prefix));
            html.push_str(&addon.render());
        }
        html.push_str(control);
        if let Some(suffix) = &self.field.suffix {
            let addon = html! { div.class("input-group-append") }
                .child::<Span, _>(|s| s.class("input-group-text").text(suffix));
            html.push_str(&addon.render());
        }
        // Bootstrap only shows feedback that is a sibling of the control.
        html.push_str(feedback);
        html.push_str("</div>");
        Some(html)
    }

    /// Wraps a control with its label, help text and inline error.
    pub(super) fn wrap_field(
        &self,
        kind: RenderKind,
        control: &str,
        state: &ValidationState,
    ) -> String {
        let feedback = feedback_html(state);
        let help = self.help_html(kind);
        let body = match self.input_group(control, &feedback) {
            Some(group) => format!("{group}{help}"),
            None => format!("{control}{help}{feedback}"),
        };

        match self.form.layout {
            Layout::Horizontal => {
                let label = self.label_html(kind, LabelStyle::Horizontal);
                let column = if label.is_empty() {
                    html! { div.class("col-sm-10 offset-sm-2") }
                } else {
                    html! { div.class("col-sm-10") }
                };
                format!(
                    "{}{label}{}</div>",
                    self.wrapper_tag("form-group row"),
                    column.raw(&body).render()
                )
            }
            Layout::Standard | Layout::Inline => format!(
                "{}{}{body}</div>",
                self.wrapper_tag("form-group"),
                self.label_html(kind, LabelStyle::Plain)
            ),
        }
    }

    /// The alert block listing every message of the active error bag.
    pub(super) fn errors_block(&self) -> String {
        let Some(bag) = self.ctx.errors(self.form.error_bag.as_deref()) else {
            return String::new();
        };
        if bag.is_empty() {
            return String::new();
        }
        let messages: Vec<String> = bag.all().into_iter().map(str::to_string).collect();
        let heading = self.field.heading.as_deref().map(|h| self.translate(h));

        html! { div.class("alert alert-danger") }
            .attr("role", "alert")
            .when(heading.is_some(), |d| {
                d.child::<H4, _>(|h| {
                    h.class("alert-heading")
                        .text(heading.as_deref().unwrap_or(""))
                })
            })
            .child::<Ul, _>(|ul| {
                ul.class("mb-0")
                    .children(messages.iter(), |message, li: Element<Li>| li.text(message))
            })
            .render()
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::FormBuilder;
    use crate::context::RequestContext;

    #[test]
    fn test_errors_block_empty_bag() {
        let ctx = RequestContext::new();
        assert_eq!(FormBuilder::new().errors().render(&ctx), "");
    }

    #[test]
    fn test_errors_block_lists_messages() {
        let ctx = RequestContext::new()
            .with_error("email", "Email is required")
            .with_error("name", "Name is too short");
        let html = FormBuilder::new()
            .errors()
            .heading("Please fix the following")
            .render(&ctx);
        assert!(html.contains("alert alert-danger"));
        assert!(html.contains("alert-heading"));
        assert!(html.contains("Please fix the following"));
        assert!(html.contains("Email is required"));
        assert!(html.contains("Name is too short"));
    }

    #[test]
    fn test_errors_block_without_heading() {
        let ctx = RequestContext::new().with_error("email", "Email is required");
        let html = FormBuilder::new().errors().render(&ctx);
        assert!(html.contains("Email is required"));
        assert!(!html.contains("alert-heading"));
    }

    #[test]
    fn test_errors_block_named_bag() {
        let ctx = RequestContext::new()
            .with_error("email", "Default bag")
            .with_bag_error("login", "email", "Login bag");
        let mut form = FormBuilder::new();
        form.error_bag("login");
        let html = form.errors().render(&ctx);
        assert!(html.contains("Login bag"));
        assert!(!html.contains("Default bag"));
    }

    #[test]
    fn test_help_text() {
        let ctx = RequestContext::new();
        let html = FormBuilder::new()
            .text("nick")
            .help("Shown publicly")
            .render(&ctx);
        assert!(html.contains(r#"aria-describedby="help-nick""#));
        assert!(html.contains("help-nick"));
        assert!(html.contains("form-text text-muted"));
        assert!(html.contains("Shown publicly"));
    }

    #[test]
    fn test_custom_id_attr_drives_label_and_help() {
        let ctx = RequestContext::new();
        let html = FormBuilder::new()
            .text("title")
            .label(true)
            .help("Shown in lists")
            .attr("id", "headline")
            .render(&ctx);
        assert!(html.contains(r#"for="headline""#));
        assert!(!html.contains(r#"for="title""#));
        assert!(html.contains(r#"id="headline""#));
        assert!(html.contains(r#"aria-describedby="help-headline""#));
        assert!(html.contains(r#"id="help-headline""#));
    }

    #[test]
    fn test_empty_label_text_skips_label() {
        let ctx = RequestContext::new();
        let html = FormBuilder::new().text("title").label("").render(&ctx);
        assert!(!html.contains("<label"));
    }

    #[test]
    fn test_wrapper_attrs_merge_class() {
        let ctx = RequestContext::new();
        let html = FormBuilder::new()
            .text("city")
            .wrapper_attr("class", "col-md-6")
            .wrapper_attr("data-field", "city")
            .render(&ctx);
        assert!(html.starts_with(r#"<div class="form-group col-md-6" data-field="city">"#));
    }

    #[test]
    fn test_input_group() {
        let ctx = RequestContext::new().with_error("price", "Too high");
        let html = FormBuilder::new()
            .number("price")
            .prefix("$")
            .suffix(".00")
            .sm()
            .render(&ctx);
        assert!(html.contains(r#"<div class="input-group input-group-sm">"#));
        assert!(html.contains("input-group-prepend"));
        assert!(html.contains("input-group-append"));
        assert!(html.contains("input-group-text"));
        assert!(html.contains("Too high</div></div></div>"));
    }

    #[test]
    fn test_horizontal_layout() {
        let ctx = RequestContext::new();
        let mut form = FormBuilder::new();
        form.horizontal();
        let html = form.email("email").label("E-mail").render(&ctx);
        assert!(html.starts_with(r#"<div class="form-group row">"#));
        assert!(html.contains("col-sm-2 col-form-label"));
        assert!(html.contains("col-sm-10"));

        let html = form.email("email").render(&ctx);
        assert!(html.contains("offset-sm-2"));
    }
}
