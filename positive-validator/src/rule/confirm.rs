use async_trait::async_trait;

use super::{Rule, RuleContext, message_template};
use crate::error::RuleError;
use crate::messages;

/// Passes when the value equals the value of another field.
///
/// The other field is found by `#id` under the validator scope. When that
/// element is a registered field container its input is compared; when it is
/// the input itself its own value is. A missing element fails the rule. There
/// is no empty bypass: two empty fields match.
#[derive(Debug, Clone)]
pub struct ConfirmPassword {
    target_id: String,
    template: String,
}

impl ConfirmPassword {
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            template: messages::CONFIRM_PASSWORD.to_string(),
        }
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    fn other_value(&self, cx: &RuleContext<'_>) -> Option<String> {
        let element = cx.scope.query_selector(&format!("#{}", self.target_id))?;
        let value = match element.query_selector(cx.input_selector) {
            Some(input) => input.value(),
            None => element.value(),
        };
        Some(value)
    }
}

message_template!(ConfirmPassword);

#[async_trait]
impl Rule for ConfirmPassword {
    fn name(&self) -> &str {
        "confirm_password"
    }

    fn message(&self, label: &str) -> String {
        messages::render(&self.template, label, &[])
    }

    async fn validate(&self, value: &str, cx: &RuleContext<'_>) -> Result<bool, RuleError> {
        match self.other_value(cx) {
            Some(other) => Ok(other == value),
            None => {
                log::debug!(
                    "[confirm_password] '#{}' not found under {}",
                    self.target_id,
                    cx.scope.describe()
                );
                Ok(false)
            }
        }
    }
}
