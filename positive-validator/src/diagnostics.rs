//! Diagnostic events emitted by validators and rules.
//!
//! Every moment worth telling a developer about (a duplicate registration, a
//! replaced rule, a rule that blew up) is a [`Diagnostic`] handed to a
//! [`DiagnosticSink`]. The default sink, [`LogSink`], forwards to the `log`
//! facade; tests and host applications can inject their own.

use std::fmt;
use std::sync::{Arc, Mutex};

use log::Level;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `set_element` was called for an id that is already registered.
    AlreadyRegistered { id: String },

    /// A required element was missing while registering a target.
    ElementNotFound {
        /// The target being registered.
        id: String,
        selector: String,
        /// Short description of the element that was searched.
        parent: String,
    },

    /// A rule replaced an existing rule with the same name.
    RuleReplaced { target: String, rule: String },

    /// A rule returned an error or panicked. The target failed at `index`.
    RuleEvaluationFailed {
        target: String,
        rule: String,
        index: usize,
        error: String,
    },

    /// A remote rule ran without a checker and passed by default.
    UnimplementedChecker { target: String, rule: String },

    /// A remote checker failed. The rule resolved to a failure.
    CheckerFailed {
        target: String,
        rule: String,
        error: String,
    },
}

impl Diagnostic {
    pub fn level(&self) -> Level {
        match self {
            Self::RuleReplaced { .. } => Level::Info,
            Self::CheckerFailed { .. } => Level::Warn,
            Self::AlreadyRegistered { .. }
            | Self::ElementNotFound { .. }
            | Self::RuleEvaluationFailed { .. }
            | Self::UnimplementedChecker { .. } => Level::Error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRegistered { id } => {
                write!(f, "Target '{id}' already exists. Use get_element instead.")
            }
            Self::ElementNotFound {
                id,
                selector,
                parent,
            } => write!(
                f,
                "Can not find '{selector}' under {parent} while registering '{id}'."
            ),
            Self::RuleReplaced { target, rule } => {
                write!(f, "The '{rule}' rule is replaced on '{target}'.")
            }
            Self::RuleEvaluationFailed {
                target,
                rule,
                index,
                error,
            } => write!(
                f,
                "Error occurred while validating '{target}' with rule '{rule}' (index {index}): {error}"
            ),
            Self::UnimplementedChecker { target, rule } => write!(
                f,
                "Rule '{rule}' on '{target}' has no duplicate checker. \
                 Wire one up with with_checker() before relying on it; passing by default."
            ),
            Self::CheckerFailed {
                target,
                rule,
                error,
            } => write!(f, "Duplicate check '{rule}' on '{target}' failed: {error}"),
        }
    }
}

/// Receives diagnostics.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: Diagnostic) {
        log::log!(diagnostic.level(), "{diagnostic}");
    }
}

/// Keeps every diagnostic in memory, and also forwards it to `log`.
///
/// Useful in tests and for hosts that surface diagnostics in their own UI.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<Diagnostic>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.clear();
        }
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, diagnostic: Diagnostic) {
        LogSink.report(diagnostic.clone());
        if let Ok(mut guard) = self.entries.lock() {
            guard.push(diagnostic);
        }
    }
}
