//! Document root wrapper.

use crate::element::{Element, find_element};
use crate::selector::{Selector, SelectorError};

/// A document: a root element plus document-level lookups.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// An empty document with a `body` root.
    pub fn empty() -> Self {
        Self::new(Element::new("body"))
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        if id.is_empty() {
            return None;
        }
        find_element(&self.root, id)
    }

    /// Like [`Element::query_selector`], but the root itself is a candidate.
    pub fn query_selector(&self, selector: &str) -> Result<Option<Element>, SelectorError> {
        let parsed = Selector::parse(selector)?;
        if self.root.matches(&parsed) {
            return Ok(Some(self.root.clone()));
        }
        Ok(self.root.query_parsed(&parsed))
    }

    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<Element>, SelectorError> {
        let parsed = Selector::parse(selector)?;
        let mut found = Vec::new();
        if self.root.matches(&parsed) {
            found.push(self.root.clone());
        }
        found.extend(self.root.query_selector_all(selector)?);
        Ok(found)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}
