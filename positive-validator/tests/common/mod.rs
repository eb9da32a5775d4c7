#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use formdom::Element;
use positive_validator::{MemorySink, Rule, RuleContext, RuleError, Validator};

/// A field container the way validators expect it:
/// `div#id > label + input.target + span.error-msg`.
pub fn field(id: &str, label: &str, value: &str) -> Element {
    Element::div()
        .id(id)
        .class("field")
        .child(Element::label(label))
        .child(Element::input(value).class("target"))
        .child(Element::span().class("error-msg"))
}

pub fn form(fields: impl IntoIterator<Item = Element>) -> Element {
    Element::form().id("signup").children_from(fields)
}

pub fn validator_for(form: &Element) -> (Validator, MemorySink) {
    let sink = MemorySink::new();
    let validator = Validator::new(form.clone()).with_sink(Arc::new(sink.clone()));
    (validator, sink)
}

pub fn input_of(scope: &Element, id: &str) -> Element {
    let field = scope.query_selector(&format!("#{id}")).unwrap().unwrap();
    field.query_selector("input.target").unwrap().unwrap()
}

pub fn error_of(scope: &Element, id: &str) -> Element {
    let field = scope.query_selector(&format!("#{id}")).unwrap().unwrap();
    field.query_selector(".error-msg").unwrap().unwrap()
}

// ============================================================================
// Instrumented rules
// ============================================================================

#[derive(Clone, Copy, Debug)]
pub enum Verdict {
    Pass,
    Fail,
    Error,
    Panic,
}

/// A rule with a fixed verdict that counts how often it runs.
#[derive(Clone)]
pub struct CountingRule {
    name: String,
    verdict: Verdict,
    calls: Arc<AtomicUsize>,
}

impl CountingRule {
    pub fn new(name: &str, verdict: Verdict) -> Self {
        Self {
            name: name.to_string(),
            verdict,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Rule for CountingRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn message(&self, label: &str) -> String {
        format!("{} failed for {}", self.name, label)
    }

    async fn validate(&self, _value: &str, _cx: &RuleContext<'_>) -> Result<bool, RuleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.verdict {
            Verdict::Pass => Ok(true),
            Verdict::Fail => Ok(false),
            Verdict::Error => Err(RuleError::invalid("backend unavailable")),
            Verdict::Panic => panic!("rule exploded"),
        }
    }
}

/// A passing rule that yields to the scheduler before answering and records
/// `<name>:start` / `<name>:end` into a shared journal.
#[derive(Clone)]
pub struct YieldingRule {
    name: String,
    journal: Arc<Mutex<Vec<String>>>,
}

impl YieldingRule {
    pub fn new(name: &str, journal: &Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            name: name.to_string(),
            journal: Arc::clone(journal),
        }
    }
}

#[async_trait]
impl Rule for YieldingRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn message(&self, _label: &str) -> String {
        String::new()
    }

    async fn validate(&self, _value: &str, _cx: &RuleContext<'_>) -> Result<bool, RuleError> {
        self.journal.lock().unwrap().push(format!("{}:start", self.name));
        tokio::task::yield_now().await;
        self.journal.lock().unwrap().push(format!("{}:end", self.name));
        Ok(true)
    }
}

/// A rule that never resolves.
pub struct PendingRule;

#[async_trait]
impl Rule for PendingRule {
    fn name(&self) -> &str {
        "pending"
    }

    fn message(&self, _label: &str) -> String {
        String::new()
    }

    async fn validate(&self, _value: &str, _cx: &RuleContext<'_>) -> Result<bool, RuleError> {
        futures::future::pending::<()>().await;
        Ok(true)
    }
}
