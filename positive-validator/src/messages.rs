//! Default error message templates and placeholder substitution.
//!
//! Templates use `:name` placeholders. `:attribute` is always the field
//! label; rules add their own parameters (`:min`, `:max`, `:minValue`,
//! `:maxValue`).

pub const REQUIRED: &str = "The :attribute field is required.";
pub const LESS_STRING_LENGTH: &str = "The :attribute must be at least :min characters.";
pub const MORE_STRING_LENGTH: &str = "The :attribute must not exceed :max characters.";
pub const EMAIL: &str = "The :attribute must be a valid email format. e.g. sample@gmail.com";
pub const INVALID_POSTAL_CODE: &str = "The :attribute format is invalid. e.g. R1R 1R1";
pub const INVALID_PHONE_NUMBER: &str = "The :attribute format is invalid. e.g. 204-123-4567";
pub const NUMBER_NOT_GREATER_THAN: &str = "The :attribute should not be greater than :maxValue";
pub const NUMBER_NOT_LESS_THAN: &str = "The :attribute should not be less than :minValue";
pub const DUPLICATE_USER_ID: &str = "This ID already exist.";
pub const DUPLICATE_EMAIL: &str = "This email address already exist.";
pub const CONFIRM_PASSWORD: &str = "The password is not matched.";
pub const INVALID_FILE_EXTENSION: &str = "The :attribute format is invalid. Upload jpeg/png/pdf";

/// Substitute `:attribute` and each `(placeholder, value)` pair into
/// `template`. Only the first occurrence of each placeholder is replaced.
///
/// Parameters are substituted before the label so that a label which itself
/// contains a placeholder-like word is left untouched.
pub fn render(template: &str, label: &str, params: &[(&str, String)]) -> String {
    let mut message = template.to_string();
    for (placeholder, value) in params {
        message = message.replacen(placeholder, value, 1);
    }
    message.replacen(":attribute", label, 1)
}

/// Format a numeric bound the way it reads in a message: `5`, not `5.0`.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
