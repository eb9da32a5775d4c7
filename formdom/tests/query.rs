use formdom::{Display, Document, Element, SelectorError, find_element};

fn signup_field(id: &str, label: &str, value: &str) -> Element {
    Element::div()
        .id(id)
        .class("field")
        .child(Element::label(label))
        .child(Element::input(value).class("target"))
        .child(Element::span().class("error-msg"))
}

fn signup_form() -> Document {
    Document::new(
        Element::new("body").child(
            Element::form()
                .id("signup")
                .child(signup_field("user-id", "User ID", "jdoe"))
                .child(signup_field("email", "Email", "jdoe@example.com")),
        ),
    )
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_get_element_by_id() {
    let doc = signup_form();

    let email = doc.get_element_by_id("email").expect("email field");
    assert_eq!(email.tag(), "div");
    assert!(email.has_class("field"));

    assert!(doc.get_element_by_id("missing").is_none());
    assert!(doc.get_element_by_id("").is_none());
}

#[test]
fn test_query_selector_is_scoped_to_descendants() {
    let doc = signup_form();
    let email = doc.get_element_by_id("email").unwrap();

    let input = email.query_selector("input.target").unwrap().unwrap();
    assert_eq!(input.value(), "jdoe@example.com");

    // The element itself is never a match
    assert!(email.query_selector("#email").unwrap().is_none());
    assert!(email.query_selector("#user-id").unwrap().is_none());
}

#[test]
fn test_query_selector_returns_first_in_document_order() {
    let doc = signup_form();

    let first = doc.query_selector("input.target").unwrap().unwrap();
    assert_eq!(first.value(), "jdoe");

    let all = doc.query_selector_all(".error-msg").unwrap();
    assert_eq!(all.len(), 2);
}

#[test]
fn test_document_query_includes_root() {
    let doc = signup_form();
    let root = doc.query_selector("body").unwrap().unwrap();
    assert!(root.ptr_eq(doc.root()));
}

#[test]
fn test_invalid_selector_is_an_error() {
    let doc = signup_form();
    assert!(matches!(doc.query_selector(""), Err(SelectorError::Empty)));
    assert!(doc.root().query_selector("form input").is_err());
}

#[test]
fn test_find_element_includes_root() {
    let root = Element::div().id("scope");
    assert!(find_element(&root, "scope").is_some());
}

// ============================================================================
// Shared handles and state
// ============================================================================

#[test]
fn test_handles_share_state() {
    let doc = signup_form();
    let field = doc.query_selector("#user-id").unwrap().unwrap();
    let input = field.query_selector("input").unwrap().unwrap();

    let same_field = doc.get_element_by_id("user-id").unwrap();
    let again = same_field.query_selector("input.target").unwrap().unwrap();
    input.set_value("someone-else");

    assert_eq!(again.value(), "someone-else");
    assert!(input.ptr_eq(&again));
}

#[test]
fn test_text_content_is_recursive() {
    let el = Element::div()
        .child(Element::label("User"))
        .child(Element::span().text(" ID"));
    assert_eq!(el.text_content(), "User ID");

    el.set_text("replaced");
    assert_eq!(el.text_content(), "replaced");
    assert!(el.children().is_empty());
}

#[test]
fn test_display_toggle() {
    let msg = Element::span().class("error-msg");
    assert_eq!(msg.get_display(), Display::Initial);
    assert!(msg.is_visible());

    msg.set_display(Display::None);
    assert!(!msg.is_visible());

    msg.set_display(Display::Block);
    assert!(msg.is_visible());

    let hidden = Element::span().display(Display::None);
    assert!(!hidden.is_visible());
}

#[test]
fn test_append_and_remove_child() {
    let form = Element::form();
    let field = signup_field("phone", "Phone", "");

    form.append_child(field.clone());
    assert!(form.query_selector("#phone").unwrap().is_some());

    assert!(form.remove_child(&field));
    assert!(form.query_selector("#phone").unwrap().is_none());
    assert!(!form.remove_child(&field));
}

#[test]
fn test_describe() {
    let el = Element::new("INPUT").id("pw").class("target").class("wide");
    assert_eq!(el.describe(), "input#pw.target.wide");

    let duplicate = Element::div().class("a").class("a");
    assert_eq!(duplicate.classes(), vec!["a".to_string()]);
}
