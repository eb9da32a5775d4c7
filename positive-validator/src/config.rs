//! Validator configuration

use serde::Deserialize;

/// Where a validator finds the pieces of each registered field.
///
/// Every field is a container element (looked up by `#id` under the
/// validator's scope) holding an input, an error-message surface and a
/// label. The selectors below are resolved inside that container.
///
/// # Example
///
/// ```
/// use positive_validator::ValidatorConfig;
///
/// let config = ValidatorConfig::default()
///     .with_input_selector("input.field-value")
///     .with_error_selector(".invalid-feedback");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Selector for the validated input.
    ///
    /// Default: `input.target`
    pub input_selector: String,

    /// Selector for the element that shows the error message.
    ///
    /// Default: `.error-msg`
    pub error_selector: String,

    /// Selector for the element whose text is the field label.
    ///
    /// Default: `label`
    pub label_selector: String,

    /// Lower-case the label before substituting it into messages.
    ///
    /// Default: true
    pub lowercase_label: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            input_selector: "input.target".to_string(),
            error_selector: ".error-msg".to_string(),
            label_selector: "label".to_string(),
            lowercase_label: true,
        }
    }
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_selector(mut self, selector: impl Into<String>) -> Self {
        self.input_selector = selector.into();
        self
    }

    pub fn with_error_selector(mut self, selector: impl Into<String>) -> Self {
        self.error_selector = selector.into();
        self
    }

    pub fn with_label_selector(mut self, selector: impl Into<String>) -> Self {
        self.label_selector = selector.into();
        self
    }

    pub fn with_lowercase_label(mut self, lowercase: bool) -> Self {
        self.lowercase_label = lowercase;
        self
    }

    /// Parse a config from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
