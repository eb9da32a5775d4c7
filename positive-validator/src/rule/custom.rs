use std::fmt;

use async_trait::async_trait;

use super::{Rule, RuleContext};
use crate::error::RuleError;
use crate::messages;

type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// A rule built from a closure.
///
/// The template may use `:attribute` for the field label. Unlike the
/// built-in optional rules there is no empty bypass; the closure sees every
/// value.
pub struct FnRule {
    name: String,
    template: String,
    predicate: Predicate,
}

impl FnRule {
    pub fn new<F>(name: impl Into<String>, template: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            template: template.into(),
            predicate: Box::new(predicate),
        }
    }
}

impl fmt::Debug for FnRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule")
            .field("name", &self.name)
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Rule for FnRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn message(&self, label: &str) -> String {
        messages::render(&self.template, label, &[])
    }

    async fn validate(&self, value: &str, _cx: &RuleContext<'_>) -> Result<bool, RuleError> {
        Ok((self.predicate)(value))
    }
}
