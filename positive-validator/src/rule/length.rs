use async_trait::async_trait;

use super::{Rule, RuleContext, is_null, message_template};
use crate::error::RuleError;
use crate::messages;

/// Lengths are counted in characters (Unicode scalar values), not bytes.
fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// At least `min` characters. Counts Unicode scalar values, so `"😀😀"` is
/// two characters long rather than four UTF-16 units.
#[derive(Debug, Clone)]
pub struct MinLength {
    min: usize,
    template: String,
}

impl MinLength {
    pub fn new(min: usize) -> Self {
        Self {
            min,
            template: messages::LESS_STRING_LENGTH.to_string(),
        }
    }

    pub fn min(&self) -> usize {
        self.min
    }
}

message_template!(MinLength);

#[async_trait]
impl Rule for MinLength {
    fn name(&self) -> &str {
        "min_length"
    }

    fn message(&self, label: &str) -> String {
        messages::render(&self.template, label, &[(":min", self.min.to_string())])
    }

    async fn validate(&self, value: &str, _cx: &RuleContext<'_>) -> Result<bool, RuleError> {
        if is_null(value) {
            return Ok(true);
        }
        Ok(char_len(value) >= self.min)
    }
}

/// At most `max` characters, counted as Unicode scalar values.
#[derive(Debug, Clone)]
pub struct MaxLength {
    max: usize,
    template: String,
}

impl MaxLength {
    pub fn new(max: usize) -> Self {
        Self {
            max,
            template: messages::MORE_STRING_LENGTH.to_string(),
        }
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

message_template!(MaxLength);

#[async_trait]
impl Rule for MaxLength {
    fn name(&self) -> &str {
        "max_length"
    }

    fn message(&self, label: &str) -> String {
        messages::render(&self.template, label, &[(":max", self.max.to_string())])
    }

    async fn validate(&self, value: &str, _cx: &RuleContext<'_>) -> Result<bool, RuleError> {
        if is_null(value) {
            return Ok(true);
        }
        Ok(char_len(value) <= self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len("héllo"), 5);
        assert_eq!(char_len(""), 0);
    }
}
