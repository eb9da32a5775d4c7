use async_trait::async_trait;

use super::{Rule, RuleContext, message_template};
use crate::error::RuleError;
use crate::messages;

/// Fails when the value is empty. The only rule without an empty bypass.
#[derive(Debug, Clone)]
pub struct Required {
    template: String,
}

impl Required {
    pub fn new() -> Self {
        Self {
            template: messages::REQUIRED.to_string(),
        }
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new()
    }
}

message_template!(Required);

#[async_trait]
impl Rule for Required {
    fn name(&self) -> &str {
        "required"
    }

    fn message(&self, label: &str) -> String {
        messages::render(&self.template, label, &[])
    }

    async fn validate(&self, value: &str, _cx: &RuleContext<'_>) -> Result<bool, RuleError> {
        Ok(!value.is_empty())
    }
}
