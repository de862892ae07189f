#![allow(dead_code)]

use oxide_bs4_forms::{FormBuilder, RenderContext, RequestContext};

/// A context with a CSRF token and nothing else.
pub fn ctx() -> RequestContext {
    RequestContext::new().csrf_token("test-token")
}

/// Renders a full form: open, every field in order, then close.
pub fn render_form<C, F>(ctx: &C, fields: F) -> String
where
    C: RenderContext,
    F: FnOnce(&mut FormBuilder, &C, &mut String),
{
    let mut form = FormBuilder::new();
    let mut html = form.open().render(ctx);
    fields(&mut form, ctx, &mut html);
    html.push_str(&form.close().render(ctx));
    html
}

pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Extracts the value of `attr` on the first tag that contains `marker`.
pub fn attr_of(html: &str, marker: &str, attr: &str) -> Option<String> {
    let start = html.find(marker)?;
    let tag_start = html[..=start].rfind('<')?;
    let tag_end = start + html[start..].find('>')?;
    let tag = &html[tag_start..tag_end];
    let needle = format!(r#"{attr}=""#);
    let value_start = tag.find(&needle)? + needle.len();
    let value_end = value_start + tag[value_start..].find('"')?;
    Some(tag[value_start..value_end].to_string())
}
