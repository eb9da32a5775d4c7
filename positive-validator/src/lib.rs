//! Form validation for element trees.
//!
//! A [`Validator`] owns the fields of one form. Each field is a [`Target`]:
//! an input, an error-message surface, a label, and an ordered list of
//! [`Rule`]s. Validating a target runs its rules in order and shows the
//! message of the first one that fails; validating the form runs every
//! target and passes only when all of them do.
//!
//! Elements are reached through the [`DomNode`] trait, implemented for
//! [`formdom`] trees, so validators can run against any document model.

pub mod config;
pub mod diagnostics;
pub mod dom;
pub mod error;
pub mod messages;
pub mod result;
pub mod rule;
pub mod target;
pub mod validator;

pub use config::ValidatorConfig;
pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink, MemorySink};
pub use dom::DomNode;
pub use error::{RemoteError, RuleError, ValidatorError};
pub use result::{FailureReason, Outcome, TargetStatus};
pub use rule::{DuplicateChecker, Rule, RuleContext};
pub use target::Target;
pub use validator::Validator;
