//! Validator: a registry of targets within one form scope.

use std::sync::Arc;

use futures::future::join_all;

use crate::config::ValidatorConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use crate::dom::DomNode;
use crate::error::ValidatorError;
use crate::result::TargetStatus;
use crate::target::Target;

/// Validates the fields of one form.
///
/// Fields are registered by id with [`set_element`](Self::set_element), which
/// hands back the new [`Target`] for attaching rules.
///
/// # Example
///
/// ```ignore
/// let mut validator = Validator::for_id(&document, "signup")?;
///
/// validator
///     .set_element("user-id")?
///     .add_rule(rule::required())
///     .add_rule(rule::min_length(4));
/// validator
///     .set_element("email")?
///     .add_rule(rule::required())
///     .add_rule(rule::email());
///
/// if validator.validate_all().await {
///     // submit
/// }
/// ```
pub struct Validator {
    scope: Arc<dyn DomNode>,
    targets: Vec<Target>,
    config: ValidatorConfig,
    sink: Arc<dyn DiagnosticSink>,
}

impl Validator {
    /// Create a validator whose scope is `scope`.
    pub fn new(scope: impl DomNode + 'static) -> Self {
        Self::with_scope(Arc::new(scope))
    }

    pub fn with_scope(scope: Arc<dyn DomNode>) -> Self {
        Self {
            scope,
            targets: Vec::new(),
            config: ValidatorConfig::default(),
            sink: Arc::new(LogSink),
        }
    }

    /// Create a validator scoped to the element `#id` inside `document`.
    pub fn for_id(document: &dyn DomNode, id: &str) -> Result<Self, ValidatorError> {
        let scope = document
            .query_selector(&format!("#{id}"))
            .ok_or_else(|| ValidatorError::ScopeNotFound { id: id.to_string() })?;
        Ok(Self::with_scope(Arc::from(scope)))
    }

    /// Set the configuration used for targets registered from now on.
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Send diagnostics to `sink` instead of the `log` facade.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------

    /// Register the field with id `id` and return it for rule setup.
    ///
    /// Fails when the id is already registered, or when the field container,
    /// its input, its error surface or its label cannot be found.
    pub fn set_element(&mut self, id: &str) -> Result<&mut Target, ValidatorError> {
        if self.position(id).is_some() {
            self.sink
                .report(Diagnostic::AlreadyRegistered { id: id.to_string() });
            return Err(ValidatorError::AlreadyRegistered { id: id.to_string() });
        }

        let target = Target::new(
            id,
            Arc::clone(&self.scope),
            &self.config,
            Arc::clone(&self.sink),
        )?;

        log::debug!("[validator] registered '{}' ({})", id, target.label());

        let index = self.targets.len();
        self.targets.push(target);
        Ok(&mut self.targets[index])
    }

    pub fn get_element(&self, id: &str) -> Option<&Target> {
        self.targets.iter().find(|target| target.id() == id)
    }

    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut Target> {
        self.targets.iter_mut().find(|target| target.id() == id)
    }

    /// Unregister `id`, dropping its element handles and rules. Returns
    /// whether a target was removed.
    pub fn delete_element(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                drop(self.targets.remove(index));
                log::debug!("[validator] removed '{}'", id);
                true
            }
            None => false,
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.targets.iter().position(|target| target.id() == id)
    }

    fn require(&self, id: &str) -> Result<&Target, ValidatorError> {
        self.get_element(id)
            .ok_or_else(|| ValidatorError::UnknownTarget { id: id.to_string() })
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> Vec<&str> {
        self.targets.iter().map(Target::id).collect()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    // -------------------------------------------------------------------------
    // Per-target switches
    // -------------------------------------------------------------------------

    /// Re-enable validation of `id`. Unknown ids are ignored; returns whether
    /// the target exists.
    pub fn enable_validation(&mut self, id: &str) -> bool {
        self.get_element_mut(id).map(Target::enable).is_some()
    }

    /// Make validation of `id` pass without running rules. Unknown ids are
    /// ignored; returns whether the target exists.
    pub fn disable_validation(&mut self, id: &str) -> bool {
        self.get_element_mut(id).map(Target::disable).is_some()
    }

    pub fn hide_error_message(&self, id: &str) -> Result<(), ValidatorError> {
        self.require(id)?.hide_error_message();
        Ok(())
    }

    pub fn show_error_message(&self, id: &str) -> Result<(), ValidatorError> {
        self.require(id)?.show_error_message();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Validate one field.
    pub async fn validate(&self, id: &str) -> Result<bool, ValidatorError> {
        let target = self.require(id)?;
        Ok(target.validate().await)
    }

    /// Validate every field and report whether all of them passed.
    ///
    /// All targets run concurrently and every one runs to completion, so each
    /// field's error surface is updated even when another field fails.
    pub async fn validate_all(&self) -> bool {
        let results = join_all(self.targets.iter().map(|target| target.validate())).await;
        let passed = results.iter().filter(|passed| **passed).count();

        log::debug!(
            "[validator] validate_all: {}/{} passed",
            passed,
            self.targets.len()
        );

        passed == self.targets.len()
    }

    /// Validate every field again and report id, label and result for each,
    /// in registration order.
    ///
    /// This always runs the rules; it never returns cached results.
    pub async fn target_status(&self) -> Vec<TargetStatus> {
        let results = join_all(self.targets.iter().map(|target| target.validate())).await;

        self.targets
            .iter()
            .zip(results)
            .map(|(target, result)| TargetStatus {
                id: target.id().to_string(),
                label: target.label().to_string(),
                result,
            })
            .collect()
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("scope", &self.scope.describe())
            .field("targets", &self.targets)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
