//! Rules that match the value against a fixed pattern.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use super::{Rule, RuleContext, is_null, message_template};
use crate::error::RuleError;
use crate::messages;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("Invalid email regex")
});

static POSTAL_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-VXY][0-9][A-Z] ?[0-9][A-Z][0-9]$").expect("Invalid postal code regex")
});

/// Letters Canada Post never uses in a postal code.
const POSTAL_CODE_EXCLUDED: &[char] = &['D', 'F', 'I', 'O', 'Q', 'U'];

static PHONE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\+?([0-9]{1,3}))?[-. (]*([0-9]{3})[-. )]*([0-9]{3})[-. ]*([0-9]{4})\s*$")
        .expect("Invalid phone number regex")
});

static FILE_EXTENSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\.jpg|\.jpeg|\.png|\.pdf)$").expect("Invalid file extension regex")
});

fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

fn is_postal_code_ca(value: &str) -> bool {
    !value.contains(POSTAL_CODE_EXCLUDED) && POSTAL_CODE_RE.is_match(value)
}

fn is_phone_number_ca(value: &str) -> bool {
    PHONE_NUMBER_RE.is_match(value)
}

fn has_allowed_extension(value: &str) -> bool {
    FILE_EXTENSION_RE.is_match(value)
}

/// Declares a pattern rule: a struct holding only its message template, with
/// an empty bypass in front of `$check`.
macro_rules! pattern_rule {
    ($(#[$meta:meta])* $ty:ident, $name:literal, $template:expr, $check:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $ty {
            template: String,
        }

        impl $ty {
            pub fn new() -> Self {
                Self {
                    template: $template.to_string(),
                }
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        message_template!($ty);

        #[async_trait]
        impl Rule for $ty {
            fn name(&self) -> &str {
                $name
            }

            fn message(&self, label: &str) -> String {
                messages::render(&self.template, label, &[])
            }

            async fn validate(&self, value: &str, _cx: &RuleContext<'_>) -> Result<bool, RuleError> {
                if is_null(value) {
                    return Ok(true);
                }
                Ok($check(value))
            }
        }
    };
}

pattern_rule!(
    /// An email address.
    Email,
    "email",
    messages::EMAIL,
    is_email
);

pattern_rule!(
    /// A Canadian postal code such as `R1R 1R1` or `R1R1R1`.
    PostalCodeCa,
    "postal_code",
    messages::INVALID_POSTAL_CODE,
    is_postal_code_ca
);

pattern_rule!(
    /// A North-American phone number such as `204-123-4567`, `(204) 123 4567`
    /// or `+1 204.123.4567`.
    PhoneNumberCa,
    "phone_number",
    messages::INVALID_PHONE_NUMBER,
    is_phone_number_ca
);

pattern_rule!(
    /// A file name ending in `.jpg`, `.jpeg`, `.png` or `.pdf`, any case.
    FileExtension,
    "file_extension",
    messages::INVALID_FILE_EXTENSION,
    has_allowed_extension
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_email("sample@gmail.com"));
        assert!(is_email("first.last@sub.example.co"));
        assert!(is_email("\"quoted name\"@example.com"));
        assert!(is_email("user@[192.168.0.1]"));
        assert!(!is_email("sample@gmail"));
        assert!(!is_email("sample.gmail.com"));
        assert!(!is_email("two@@example.com"));
        assert!(!is_email("space in@example.com"));
    }

    #[test]
    fn test_postal_code() {
        assert!(is_postal_code_ca("R1R 1R1"));
        assert!(is_postal_code_ca("K1A0B1"));
        assert!(!is_postal_code_ca("D1R 1R1"));
        assert!(!is_postal_code_ca("R1O 1R1"));
        assert!(!is_postal_code_ca("W1R 1R1"));
        assert!(!is_postal_code_ca("r1r 1r1"));
        assert!(!is_postal_code_ca("R1R  1R1"));
    }

    #[test]
    fn test_phone_number() {
        assert!(is_phone_number_ca("204-123-4567"));
        assert!(is_phone_number_ca("(204) 123-4567"));
        assert!(is_phone_number_ca("+1 204.123.4567"));
        assert!(is_phone_number_ca("2041234567"));
        assert!(!is_phone_number_ca("123-4567"));
        assert!(!is_phone_number_ca("204-123-456a"));
    }

    #[test]
    fn test_file_extension() {
        assert!(has_allowed_extension("scan.PDF"));
        assert!(has_allowed_extension("photo.jpeg"));
        assert!(has_allowed_extension("C:\\fakepath\\id.Png"));
        assert!(!has_allowed_extension("notes.txt"));
        assert!(!has_allowed_extension("archive.pdf.zip"));
    }
}
