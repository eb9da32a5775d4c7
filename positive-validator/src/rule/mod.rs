//! Validation rules.
//!
//! A rule is a named predicate over a field's current value plus a message
//! template describing what went wrong. Rules are immutable once built: any
//! parameters (a minimum length, a sibling field id, a duplicate checker) are
//! fixed when the rule is constructed.
//!
//! # Writing a rule
//!
//! Synchronous checks can use [`custom`]. Anything that needs to await
//! implements [`Rule`] directly:
//!
//! ```ignore
//! struct NotReserved;
//!
//! #[async_trait]
//! impl Rule for NotReserved {
//!     fn name(&self) -> &str {
//!         "not_reserved"
//!     }
//!
//!     fn message(&self, label: &str) -> String {
//!         messages::render("The :attribute is reserved.", label, &[])
//!     }
//!
//!     async fn validate(&self, value: &str, _cx: &RuleContext<'_>) -> Result<bool, RuleError> {
//!         Ok(!RESERVED.contains(&value))
//!     }
//! }
//! ```

mod confirm;
mod custom;
mod length;
mod numeric;
mod pattern;
mod presence;
mod remote;

use async_trait::async_trait;

pub use confirm::ConfirmPassword;
pub use custom::FnRule;
pub use length::{MaxLength, MinLength};
pub use numeric::{MaxNumber, MinNumber};
pub use pattern::{Email, FileExtension, PhoneNumberCa, PostalCodeCa};
pub use presence::Required;
pub use remote::{DuplicateCheck, DuplicateChecker, HttpDuplicateChecker};

use crate::diagnostics::DiagnosticSink;
use crate::dom::DomNode;
use crate::error::RuleError;

/// What a rule can see besides the value under test.
pub struct RuleContext<'a> {
    /// Id of the target being validated.
    pub target: &'a str,
    /// The validator's scope, for rules that read other fields.
    pub scope: &'a dyn DomNode,
    /// Selector that finds a field's input inside its container.
    pub input_selector: &'a str,
    pub sink: &'a dyn DiagnosticSink,
}

/// A named validation predicate with a templated error message.
#[async_trait]
pub trait Rule: Send + Sync {
    /// Identifier of the rule. A target holds at most one rule per name.
    fn name(&self) -> &str;

    /// The error message for a field labelled `label`.
    fn message(&self, label: &str) -> String;

    /// Check `value`. `Ok(true)` passes, `Ok(false)` fails with
    /// [`message`](Rule::message); an error fails the rule without a message.
    async fn validate(&self, value: &str, cx: &RuleContext<'_>) -> Result<bool, RuleError>;
}

/// Values the optional-field rules treat as "nothing entered".
///
/// Those rules pass on such values; whether a value is required at all is the
/// job of [`Required`].
pub(crate) fn is_null(value: &str) -> bool {
    value.is_empty()
}

/// Implements `with_message` and `template` for a rule type with a
/// `template: String` field.
macro_rules! message_template {
    ($ty:ty) => {
        impl $ty {
            /// Replace the default message template.
            pub fn with_message(mut self, template: impl Into<String>) -> Self {
                self.template = template.into();
                self
            }

            pub fn template(&self) -> &str {
                &self.template
            }
        }
    };
}

pub(crate) use message_template;

// =============================================================================
// Constructors
// =============================================================================

/// The value must not be empty.
pub fn required() -> Required {
    Required::new()
}

/// At least `min` characters, unless empty.
pub fn min_length(min: usize) -> MinLength {
    MinLength::new(min)
}

/// At most `max` characters, unless empty.
pub fn max_length(max: usize) -> MaxLength {
    MaxLength::new(max)
}

/// A number no greater than `max`, unless empty.
pub fn max_number(max: impl Into<f64>) -> MaxNumber {
    MaxNumber::new(max.into())
}

/// A number no less than `min`, unless empty.
pub fn min_number(min: impl Into<f64>) -> MinNumber {
    MinNumber::new(min.into())
}

/// An email address, unless empty.
pub fn email() -> Email {
    Email::new()
}

/// A Canadian postal code (`R1R 1R1`), unless empty.
pub fn postal_code_ca() -> PostalCodeCa {
    PostalCodeCa::new()
}

/// A North-American phone number (`204-123-4567`), unless empty.
pub fn phone_number_ca() -> PhoneNumberCa {
    PhoneNumberCa::new()
}

/// A jpg, jpeg, png or pdf file name, unless empty.
pub fn file_extension() -> FileExtension {
    FileExtension::new()
}

/// The value must equal the value of the field with id `target_id`.
pub fn confirm_password(target_id: impl Into<String>) -> ConfirmPassword {
    ConfirmPassword::new(target_id)
}

/// The user id must not already be taken.
pub fn user_id_available() -> DuplicateCheck {
    DuplicateCheck::user_id()
}

/// The email address must not already be taken.
pub fn email_available() -> DuplicateCheck {
    DuplicateCheck::email()
}

/// A rule from a synchronous predicate.
pub fn custom<F>(name: impl Into<String>, template: impl Into<String>, predicate: F) -> FnRule
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    FnRule::new(name, template, predicate)
}
