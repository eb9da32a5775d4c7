//! Duplicate checks backed by a remote service.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::{Rule, RuleContext, message_template};
use crate::diagnostics::Diagnostic;
use crate::error::{RemoteError, RuleError};
use crate::messages;

/// Answers whether a candidate value is still free.
#[async_trait]
pub trait DuplicateChecker: Send + Sync {
    /// `Ok(true)` when `candidate` is not taken, `Ok(false)` when it is.
    async fn is_available(&self, candidate: &str) -> Result<bool, RemoteError>;
}

/// Fails when a [`DuplicateChecker`] reports the value as taken.
///
/// Checker errors are reported as a [`Diagnostic::CheckerFailed`] and fail
/// the rule; they never reach the caller.
///
/// Without a checker the rule passes every value and reports
/// [`Diagnostic::UnimplementedChecker`] each time it runs. That default keeps
/// forms usable while the backend is being wired up. It is not a uniqueness
/// guarantee.
#[derive(Clone)]
pub struct DuplicateCheck {
    name: &'static str,
    template: String,
    checker: Option<Arc<dyn DuplicateChecker>>,
}

impl DuplicateCheck {
    pub fn user_id() -> Self {
        Self {
            name: "user_id_available",
            template: messages::DUPLICATE_USER_ID.to_string(),
            checker: None,
        }
    }

    pub fn email() -> Self {
        Self {
            name: "email_available",
            template: messages::DUPLICATE_EMAIL.to_string(),
            checker: None,
        }
    }

    pub fn with_checker(mut self, checker: impl DuplicateChecker + 'static) -> Self {
        self.checker = Some(Arc::new(checker));
        self
    }

    pub fn with_shared_checker(mut self, checker: Arc<dyn DuplicateChecker>) -> Self {
        self.checker = Some(checker);
        self
    }

    pub fn has_checker(&self) -> bool {
        self.checker.is_some()
    }
}

message_template!(DuplicateCheck);

impl fmt::Debug for DuplicateCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DuplicateCheck")
            .field("name", &self.name)
            .field("template", &self.template)
            .field("checker", &self.checker.is_some())
            .finish()
    }
}

#[async_trait]
impl Rule for DuplicateCheck {
    fn name(&self) -> &str {
        self.name
    }

    fn message(&self, label: &str) -> String {
        messages::render(&self.template, label, &[])
    }

    async fn validate(&self, value: &str, cx: &RuleContext<'_>) -> Result<bool, RuleError> {
        let Some(checker) = &self.checker else {
            cx.sink.report(Diagnostic::UnimplementedChecker {
                target: cx.target.to_string(),
                rule: self.name.to_string(),
            });
            return Ok(true);
        };

        match checker.is_available(value).await {
            Ok(available) => Ok(available),
            Err(e) => {
                cx.sink.report(Diagnostic::CheckerFailed {
                    target: cx.target.to_string(),
                    rule: self.name.to_string(),
                    error: e.to_string(),
                });
                Ok(false)
            }
        }
    }
}

// =============================================================================
// HTTP checker
// =============================================================================

/// A [`DuplicateChecker`] that asks a JSON endpoint.
///
/// The candidate is posted as `{"<param>": "<candidate>"}` and the response
/// must be a JSON object carrying a boolean duplicate flag:
///
/// ```text
/// POST /api/users/check   {"user_id": "jdoe"}
/// 200 OK                  {"isDuplicatedId": false}
/// ```
#[derive(Debug, Clone)]
pub struct HttpDuplicateChecker {
    http_client: reqwest::Client,
    url: String,
    param: String,
    duplicate_field: String,
}

impl HttpDuplicateChecker {
    pub fn new(
        url: impl Into<String>,
        param: impl Into<String>,
        duplicate_field: impl Into<String>,
    ) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            url: url.into(),
            param: param.into(),
            duplicate_field: duplicate_field.into(),
        }
    }

    /// Posts `user_id`, reads `isDuplicatedId`.
    pub fn user_id(url: impl Into<String>) -> Self {
        Self::new(url, "user_id", "isDuplicatedId")
    }

    /// Posts `email`, reads `isDuplicatedEmail`.
    pub fn email(url: impl Into<String>) -> Self {
        Self::new(url, "email", "isDuplicatedEmail")
    }

    /// Use a preconfigured client (timeouts, headers, proxies).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = client;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DuplicateChecker for HttpDuplicateChecker {
    async fn is_available(&self, candidate: &str) -> Result<bool, RemoteError> {
        let mut body = Map::new();
        body.insert(self.param.clone(), Value::String(candidate.to_string()));

        let response = self
            .http_client
            .post(&self.url)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
            });
        }

        let payload: Value = response.json().await?;
        let duplicate = payload
            .get(&self.duplicate_field)
            .and_then(Value::as_bool)
            .ok_or_else(|| {
                RemoteError::other(format!(
                    "Response is missing boolean field '{}'",
                    self.duplicate_field
                ))
            })?;

        Ok(!duplicate)
    }
}
