//! Error types

/// Errors returned by [`Validator`](crate::Validator) operations.
///
/// Registration and lookup failures are reported to the caller. Failures
/// inside rule evaluation never surface here; see [`RuleError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidatorError {
    /// The scope element could not be found in the document.
    #[error("Can not find the validator scope element '#{id}'")]
    ScopeNotFound { id: String },

    /// A target with this id is already registered.
    #[error("Target '{id}' already exists, use get_element instead")]
    AlreadyRegistered { id: String },

    /// A required element could not be found while registering a target.
    #[error("Can not find the DOM element by selector '{selector}'")]
    ElementNotFound { selector: String },

    /// No target is registered under this id.
    #[error("Can't find the element by ID. Your given ID is {id}")]
    UnknownTarget { id: String },
}

/// Errors raised while a rule evaluates a value.
///
/// A `Target` turns every one of these into a failed result for the rule
/// that raised it and stops the evaluation chain there.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// The rule could not produce a result.
    #[error("Rule evaluation failed: {message}")]
    Invalid { message: String },

    /// The rule panicked while evaluating.
    #[error("Rule panicked: {message}")]
    Panicked { message: String },

    /// A remote collaborator failed.
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl RuleError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Errors from a [`DuplicateChecker`](crate::rule::DuplicateChecker).
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// Transport or decode failure.
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("HTTP {status}")]
    Status { status: u16 },

    /// Any other checker failure.
    #[error("{message}")]
    Other { message: String },
}

impl RemoteError {
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

/// Extract a readable message from a panic payload.
pub(crate) fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_str() {
        let panic: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(panic.as_ref()), "boom");
    }

    #[test]
    fn test_panic_message_string() {
        let panic: Box<dyn std::any::Any + Send> = Box::new(String::from("boom"));
        assert_eq!(panic_message(panic.as_ref()), "boom");
    }

    #[test]
    fn test_panic_message_unknown() {
        let panic: Box<dyn std::any::Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(panic.as_ref()), "Unknown panic");
    }

    #[test]
    fn test_remote_error_is_transparent() {
        let err: RuleError = RemoteError::Status { status: 503 }.into();
        assert_eq!(err.to_string(), "HTTP 503");
    }
}
