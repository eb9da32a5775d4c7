use formdom::{Document, Element};
use positive_validator::{Validator, ValidatorError, rule};
use simplelog::{Config, LevelFilter, SimpleLogger};

fn field(id: &str, label: &str, value: &str) -> Element {
    Element::div()
        .id(id)
        .class("field")
        .child(Element::label(label))
        .child(Element::input(value).class("target"))
        .child(Element::span().class("error-msg"))
}

fn page() -> Document {
    Document::new(
        Element::new("body").child(
            Element::form()
                .id("signup")
                .child(field("user-id", "User ID", "jd"))
                .child(field("email", "Email", "jdoe@example"))
                .child(field("password", "Password", "hunter22"))
                .child(field("password-confirm", "Confirm Password", "hunter2"))
                .child(field("postal-code", "Postal Code", "R3T 2N2"))
                .child(field("phone", "Phone Number", "204-123-4567"))
                .child(field("age", "Age", "17")),
        ),
    )
}

#[tokio::main]
async fn main() -> Result<(), ValidatorError> {
    SimpleLogger::init(LevelFilter::Info, Config::default()).expect("Failed to initialize logger");

    let document = page();
    let mut validator = Validator::for_id(&document, "signup")?;

    validator
        .set_element("user-id")?
        .add_rule(rule::required())
        .add_rule(rule::min_length(4))
        .add_rule(rule::max_length(20))
        .add_rule(rule::user_id_available());
    validator
        .set_element("email")?
        .add_rule(rule::required())
        .add_rule(rule::email());
    validator
        .set_element("password")?
        .add_rule(rule::required())
        .add_rule(rule::min_length(8));
    validator
        .set_element("password-confirm")?
        .add_rule(rule::confirm_password("password"));
    validator.set_element("postal-code")?.add_rule(rule::postal_code_ca());
    validator.set_element("phone")?.add_rule(rule::phone_number_ca());
    validator
        .set_element("age")?
        .add_rule(rule::min_number(18))
        .add_rule(rule::max_number(130));

    let passed = validator.validate_all().await;
    println!("form valid: {passed}");

    for id in validator.ids() {
        if let Some(target) = validator.get_element(id) {
            let message = if target.is_error_visible() {
                target.error_message()
            } else {
                String::from("ok")
            };
            println!("  {:<18} {}", target.label(), message);
        }
    }

    Ok(())
}
