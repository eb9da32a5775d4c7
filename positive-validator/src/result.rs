/// Why a target failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The rule rejected the value. Carries the message shown to the user.
    Rejected { message: String },
    /// The rule errored or panicked. Nothing was shown to the user.
    Errored { error: String },
}

/// Terminal state of one target evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Validation is disabled or there are no rules. Counts as a pass.
    Skipped,
    /// Every rule passed.
    Passed,
    /// The rule at `index` failed; later rules were not evaluated.
    Failed {
        index: usize,
        rule: String,
        reason: FailureReason,
    },
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        !self.is_failed()
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Name of the failing rule (if any).
    pub fn failed_rule(&self) -> Option<&str> {
        match self {
            Self::Failed { rule, .. } => Some(rule),
            _ => None,
        }
    }

    /// The message shown to the user (if any).
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Failed {
                reason: FailureReason::Rejected { message },
                ..
            } => Some(message),
            _ => None,
        }
    }
}

/// One entry of [`Validator::target_status`](crate::Validator::target_status).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetStatus {
    pub id: String,
    pub label: String,
    /// Result of the evaluation triggered by the status call.
    pub result: bool,
}
