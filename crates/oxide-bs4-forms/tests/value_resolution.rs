//! Tests for value precedence: old input, explicit values and fill data,
//! plus checked state for checkboxes, radios and multi-selects.

mod common;
use common::*;

use oxide_bs4_forms::FormBuilder;
use serde::Serialize;
use serde_json::json;

#[test]
fn old_input_beats_explicit_beats_fill() {
    let mut form = FormBuilder::new();
    form.fill(&json!({"title": "Z"}));

    let with_old = ctx().with_old("title", "X");
    let html = form.text("title").value("Y").render(&with_old);
    assert_eq!(attr_of(&html, "<input", "value").as_deref(), Some("X"));

    let html = form.text("title").value("Y").render(&ctx());
    assert_eq!(attr_of(&html, "<input", "value").as_deref(), Some("Y"));

    let html = form.text("title").render(&ctx());
    assert_eq!(attr_of(&html, "<input", "value").as_deref(), Some("Z"));
}

#[test]
fn old_input_for_other_field_keeps_explicit_value() {
    let ctx = ctx().with_old("other", "x");
    let html = FormBuilder::new()
        .text("title")
        .value("Y")
        .render(&ctx);
    assert_eq!(attr_of(&html, "<input", "value").as_deref(), Some("Y"));
}

#[test]
fn fill_from_struct_with_nested_fields() {
    #[derive(Serialize)]
    struct Address {
        city: String,
    }

    #[derive(Serialize)]
    struct Profile {
        name: String,
        age: u32,
        address: Address,
        tags: Vec<String>,
    }

    let mut form = FormBuilder::new();
    form.fill(&Profile {
        name: "Ada".to_string(),
        age: 36,
        address: Address {
            city: "London".to_string(),
        },
        tags: vec!["math".to_string(), "poetry".to_string()],
    });
    let ctx = ctx();

    let name = form.text("name").render(&ctx);
    assert_eq!(attr_of(&name, "<input", "value").as_deref(), Some("Ada"));
    let age = form.number("age").render(&ctx);
    assert_eq!(attr_of(&age, "<input", "value").as_deref(), Some("36"));
    let city = form.text("address[city]").render(&ctx);
    assert_eq!(attr_of(&city, "<input", "value").as_deref(), Some("London"));
    let first_tag = form.text("tags[0]").render(&ctx);
    assert_eq!(attr_of(&first_tag, "<input", "value").as_deref(), Some("math"));
}

#[test]
fn nested_old_input() {
    let ctx = ctx().with_old("address", json!({"city": "Paris"}));
    let html = FormBuilder::new().text("address[city]").render(&ctx);
    assert!(html.contains(r#"value="Paris""#));
}

#[test]
fn values_are_escaped() {
    let html = FormBuilder::new()
        .text("q")
        .value(r#""><script>"#)
        .render(&ctx());
    assert!(html.contains(r#"value="&quot;&gt;&lt;script&gt;""#));
    assert!(!html.contains("<script>"));
}

#[test]
fn checkbox_checked_true_and_false() {
    let ctx = ctx();
    let on = FormBuilder::new().checkbox("agree").checked(true).render(&ctx);
    let off = FormBuilder::new().checkbox("agree").checked(false).render(&ctx);
    assert_eq!(count(&on, " checked"), 1);
    assert_eq!(count(&off, " checked"), 0);
}

#[test]
fn submitted_form_unchecks_missing_checkbox() {
    let ctx = ctx().with_old("name", "Ada");
    let mut form = FormBuilder::new();
    form.fill(&json!({"newsletter": true}));
    let html = form.checkbox("newsletter").checked(true).render(&ctx);
    assert!(!html.contains(" checked"));
}

#[test]
fn checkbox_group_from_old_array() {
    let ctx = ctx().with_old("roles", json!(["admin", "editor"]));
    let mut form = FormBuilder::new();
    let admin = form.checkbox("roles[]").value("admin").render(&ctx);
    let guest = form.checkbox("roles[]").value("guest").render(&ctx);
    assert!(admin.contains(" checked"));
    assert!(!guest.contains(" checked"));
}

#[test]
fn radio_group_checks_only_matching_choice() {
    let ctx = ctx();
    let mut form = FormBuilder::new();
    form.fill(&json!({"size": "m"}));
    let mut html = String::new();
    for choice in ["s", "m", "l"] {
        html.push_str(&form.radio("size", choice).label(choice).render(&ctx));
    }
    assert_eq!(count(&html, " checked"), 1);
    assert!(html.contains(r#"id="size-m" value="m" checked"#));
}

#[test]
fn single_select_selects_exactly_one() {
    let ctx = ctx();
    let html = FormBuilder::new()
        .select("color", [("r", "Red"), ("g", "Green"), ("b", "Blue")])
        .value("g")
        .render(&ctx);
    assert_eq!(count(&html, " selected"), 1);
    assert!(html.contains(r#"<option value="g" selected>"#));
}

#[test]
fn multi_select_from_old_input() {
    let ctx = ctx().with_old("tags", json!(["b", "c"]));
    let html = FormBuilder::new()
        .select("tags", [("a", "A"), ("b", "B"), ("c", "C")])
        .multiple(true)
        .value(json!(["a"]))
        .render(&ctx);
    assert_eq!(count(&html, " selected"), 2);
    assert!(html.contains(r#"<option value="a">A</option>"#));
}

#[test]
fn numeric_select_values_match_strings() {
    let mut form = FormBuilder::new();
    form.fill(&json!({"qty": 2}));
    let html = form
        .select("qty", [("1", "One"), ("2", "Two")])
        .render(&ctx());
    assert!(html.contains(r#"<option value="2" selected>Two</option>"#));
}
