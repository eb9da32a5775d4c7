//! A single validated field.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;

use crate::config::ValidatorConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::dom::DomNode;
use crate::error::{RuleError, ValidatorError, panic_message};
use crate::result::{FailureReason, Outcome};
use crate::rule::{Rule, RuleContext};

/// One registered field: its input, its error-message surface, its label and
/// the ordered rules that guard it.
///
/// Rules run in insertion order and the first failure wins: its message is
/// written to the error surface, the surface is shown, and no later rule runs.
/// A full pass hides the surface.
pub struct Target {
    id: String,
    input: Box<dyn DomNode>,
    error_surface: Box<dyn DomNode>,
    label: String,
    rules: Vec<Arc<dyn Rule>>,
    enabled: bool,

    // Shared with the owning validator
    scope: Arc<dyn DomNode>,
    input_selector: String,
    lowercase_label: bool,
    sink: Arc<dyn DiagnosticSink>,
}

impl Target {
    /// Resolve the field container `#id` under `scope` and the input, error
    /// surface and label inside it.
    ///
    /// An error surface that already carries text (for example a message
    /// rendered by the server) is shown straight away.
    pub(crate) fn new(
        id: &str,
        scope: Arc<dyn DomNode>,
        config: &ValidatorConfig,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Result<Self, ValidatorError> {
        let find = |parent: &dyn DomNode, selector: &str| {
            parent.query_selector(selector).ok_or_else(|| {
                sink.report(Diagnostic::ElementNotFound {
                    id: id.to_string(),
                    selector: selector.to_string(),
                    parent: parent.describe(),
                });
                ValidatorError::ElementNotFound {
                    selector: selector.to_string(),
                }
            })
        };

        let container = find(scope.as_ref(), &format!("#{id}"))?;
        let input = find(container.as_ref(), &config.input_selector)?;
        let error_surface = find(container.as_ref(), &config.error_selector)?;
        let label = find(container.as_ref(), &config.label_selector)?.text();

        let target = Self {
            id: id.to_string(),
            input,
            error_surface,
            label,
            rules: Vec::new(),
            enabled: true,
            scope,
            input_selector: config.input_selector.clone(),
            lowercase_label: config.lowercase_label,
            sink,
        };

        if !target.error_surface.text().is_empty() {
            target.show_error_message();
        }

        Ok(target)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current value of the input.
    pub fn value(&self) -> String {
        self.input.value()
    }

    // -------------------------------------------------------------------------
    // Rules
    // -------------------------------------------------------------------------

    /// Append `rule` when `condition` holds.
    ///
    /// A rule with the same name is removed first, so the new rule always
    /// ends up last and names stay unique.
    pub fn set_rule<R: Rule + 'static>(&mut self, rule: R, condition: bool) -> &mut Self {
        self.set_shared_rule(Arc::new(rule), condition)
    }

    /// Shorthand for `set_rule(rule, true)`.
    pub fn add_rule<R: Rule + 'static>(&mut self, rule: R) -> &mut Self {
        self.set_rule(rule, true)
    }

    /// Like [`set_rule`](Self::set_rule) for a rule shared between targets.
    pub fn set_shared_rule(&mut self, rule: Arc<dyn Rule>, condition: bool) -> &mut Self {
        if condition {
            self.replace_existing_rule(rule.name());
            self.rules.push(rule);
        }
        self
    }

    fn replace_existing_rule(&mut self, name: &str) {
        if self.remove_rule(name) {
            self.sink.report(Diagnostic::RuleReplaced {
                target: self.id.clone(),
                rule: name.to_string(),
            });
        }
    }

    /// Remove the rule called `name`. Returns whether one was removed.
    pub fn remove_rule(&mut self, name: &str) -> bool {
        let before = self.rules.len();
        self.rules.retain(|rule| rule.name() != name);
        self.rules.len() != before
    }

    pub fn has_rule(&self, name: &str) -> bool {
        self.rules.iter().any(|rule| rule.name() == name)
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    // -------------------------------------------------------------------------
    // Enable / disable
    // -------------------------------------------------------------------------

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// While disabled, validation passes without running any rule.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    // -------------------------------------------------------------------------
    // Error surface
    // -------------------------------------------------------------------------

    pub fn show_error_message(&self) {
        self.error_surface.show();
    }

    pub fn hide_error_message(&self) {
        self.error_surface.hide();
    }

    /// Text currently in the error surface.
    pub fn error_message(&self) -> String {
        self.error_surface.text()
    }

    pub fn is_error_visible(&self) -> bool {
        self.error_surface.is_visible()
    }

    fn message_label(&self) -> String {
        if self.lowercase_label {
            self.label.to_lowercase()
        } else {
            self.label.clone()
        }
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Run the rules and report whether the field passed.
    pub async fn validate(&self) -> bool {
        self.evaluate().await.is_passed()
    }

    /// Run the rules in order, stopping at the first failure.
    ///
    /// The value is read from the input before each rule. A rule that errors
    /// or panics fails the target at its index; the failure is reported to
    /// the diagnostic sink and the error surface is left untouched.
    pub async fn evaluate(&self) -> Outcome {
        if !self.enabled || self.rules.is_empty() {
            log::trace!(
                "[target] {} skipped (enabled: {}, rules: {})",
                self.id,
                self.enabled,
                self.rules.len()
            );
            return Outcome::Skipped;
        }

        let cx = RuleContext {
            target: &self.id,
            scope: self.scope.as_ref(),
            input_selector: &self.input_selector,
            sink: self.sink.as_ref(),
        };

        for (index, rule) in self.rules.iter().enumerate() {
            let value = self.input.value();
            let result = AssertUnwindSafe(rule.validate(&value, &cx))
                .catch_unwind()
                .await;

            let passed = match result {
                Ok(Ok(passed)) => passed,
                Ok(Err(e)) => return self.rule_errored(index, rule.as_ref(), e),
                Err(panic) => {
                    let e = RuleError::Panicked {
                        message: panic_message(panic.as_ref()),
                    };
                    return self.rule_errored(index, rule.as_ref(), e);
                }
            };

            log::debug!(
                "[target] {} rule {} '{}' -> {}",
                self.id,
                index,
                rule.name(),
                passed
            );

            if !passed {
                let message = rule.message(&self.message_label());
                self.error_surface.set_text(&message);
                self.error_surface.show();
                return Outcome::Failed {
                    index,
                    rule: rule.name().to_string(),
                    reason: FailureReason::Rejected { message },
                };
            }

            self.error_surface.hide();
        }

        Outcome::Passed
    }

    fn rule_errored(&self, index: usize, rule: &dyn Rule, error: RuleError) -> Outcome {
        self.sink.report(Diagnostic::RuleEvaluationFailed {
            target: self.id.clone(),
            rule: rule.name().to_string(),
            index,
            error: error.to_string(),
        });
        Outcome::Failed {
            index,
            rule: rule.name().to_string(),
            reason: FailureReason::Errored {
                error: error.to_string(),
            },
        }
    }
}

impl std::fmt::Debug for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Target")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("rules", &self.rule_names())
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
