use async_trait::async_trait;

use super::{Rule, RuleContext, is_null, message_template};
use crate::error::RuleError;
use crate::messages::{self, format_number};

/// Read a field value as a number, the way a browser's `Number(value)` does.
///
/// Surrounding whitespace is ignored and a blank value reads as zero.
/// Accepted forms are decimal literals with an optional sign and exponent,
/// unsigned `0x`/`0b`/`0o` integer literals, and `Infinity` with an optional
/// sign. Anything else yields `None`, which fails both numeric rules.
fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(n) = parse_radix_literal(trimmed) {
        return n;
    }

    // `f64::from_str` also takes `inf` and `nan` spellings
    let is_decimal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !is_decimal {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// `Some(result)` when `literal` carries a radix prefix, `None` otherwise.
fn parse_radix_literal(literal: &str) -> Option<Option<f64>> {
    let prefix = literal.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0b" => 2,
        "0o" => 8,
        _ => return None,
    };

    let digits = &literal[2..];
    if digits.is_empty() {
        return Some(None);
    }
    let n = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(n)
}

#[derive(Debug, Clone)]
pub struct MaxNumber {
    max: f64,
    template: String,
}

impl MaxNumber {
    pub fn new(max: f64) -> Self {
        Self {
            max,
            template: messages::NUMBER_NOT_GREATER_THAN.to_string(),
        }
    }
}

message_template!(MaxNumber);

#[async_trait]
impl Rule for MaxNumber {
    fn name(&self) -> &str {
        "max_number"
    }

    fn message(&self, label: &str) -> String {
        messages::render(&self.template, label, &[(":maxValue", format_number(self.max))])
    }

    async fn validate(&self, value: &str, _cx: &RuleContext<'_>) -> Result<bool, RuleError> {
        if is_null(value) {
            return Ok(true);
        }
        Ok(parse_number(value).is_some_and(|n| n <= self.max))
    }
}

#[derive(Debug, Clone)]
pub struct MinNumber {
    min: f64,
    template: String,
}

impl MinNumber {
    pub fn new(min: f64) -> Self {
        Self {
            min,
            template: messages::NUMBER_NOT_LESS_THAN.to_string(),
        }
    }
}

message_template!(MinNumber);

#[async_trait]
impl Rule for MinNumber {
    fn name(&self) -> &str {
        "min_number"
    }

    fn message(&self, label: &str) -> String {
        messages::render(&self.template, label, &[(":minValue", format_number(self.min))])
    }

    async fn validate(&self, value: &str, _cx: &RuleContext<'_>) -> Result<bool, RuleError> {
        if is_null(value) {
            return Ok(true);
        }
        Ok(parse_number(value).is_some_and(|n| n >= self.min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number(" 4.5 "), Some(4.5));
        assert_eq!(parse_number("-1e2"), Some(-100.0));
        assert_eq!(parse_number("   "), Some(0.0));
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_parse_number_infinity_spellings() {
        assert_eq!(parse_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_number("+Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_number(" -Infinity "), Some(f64::NEG_INFINITY));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("infinity"), None);
        assert_eq!(parse_number("INF"), None);
        assert_eq!(parse_number("nan"), None);
    }

    #[test]
    fn test_parse_number_radix_literals() {
        assert_eq!(parse_number("0x10"), Some(16.0));
        assert_eq!(parse_number("0XfF"), Some(255.0));
        assert_eq!(parse_number("0b101"), Some(5.0));
        assert_eq!(parse_number("0o17"), Some(15.0));
        assert_eq!(parse_number("0x"), None);
        assert_eq!(parse_number("0x1g"), None);
        assert_eq!(parse_number("-0x10"), None);
        assert_eq!(parse_number("0b102"), None);
    }
}
