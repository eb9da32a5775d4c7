//! The element abstraction validators work against.
//!
//! A validator never reaches for a global document. It is handed a scope
//! implementing [`DomNode`] and finds everything else through selector
//! lookups under that scope.

use formdom::{Display, Document, Element};

/// An element that supports selector lookup and the few reads and writes
/// form validation needs.
pub trait DomNode: Send + Sync {
    /// First descendant matching `selector`. Invalid selectors match nothing.
    fn query_selector(&self, selector: &str) -> Option<Box<dyn DomNode>>;

    /// Current input value. Empty for non-input elements.
    fn value(&self) -> String;

    /// Text content.
    fn text(&self) -> String;

    fn set_text(&self, text: &str);

    fn show(&self);

    fn hide(&self);

    fn is_visible(&self) -> bool;

    /// Short human-readable description for diagnostics.
    fn describe(&self) -> String;
}

impl DomNode for Element {
    fn query_selector(&self, selector: &str) -> Option<Box<dyn DomNode>> {
        match Element::query_selector(self, selector) {
            Ok(found) => found.map(|el| Box::new(el) as Box<dyn DomNode>),
            Err(e) => {
                log::warn!("[dom] invalid selector under {}: {}", self.describe(), e);
                None
            }
        }
    }

    fn value(&self) -> String {
        Element::value(self)
    }

    fn text(&self) -> String {
        self.text_content()
    }

    fn set_text(&self, text: &str) {
        Element::set_text(self, text);
    }

    fn show(&self) {
        self.set_display(Display::Block);
    }

    fn hide(&self) {
        self.set_display(Display::None);
    }

    fn is_visible(&self) -> bool {
        Element::is_visible(self)
    }

    fn describe(&self) -> String {
        Element::describe(self)
    }
}

impl DomNode for Document {
    fn query_selector(&self, selector: &str) -> Option<Box<dyn DomNode>> {
        match Document::query_selector(self, selector) {
            Ok(found) => found.map(|el| Box::new(el) as Box<dyn DomNode>),
            Err(e) => {
                log::warn!("[dom] invalid selector in document: {}", e);
                None
            }
        }
    }

    fn value(&self) -> String {
        String::new()
    }

    fn text(&self) -> String {
        self.root().text_content()
    }

    fn set_text(&self, text: &str) {
        self.root().set_text(text);
    }

    fn show(&self) {
        self.root().set_display(Display::Block);
    }

    fn hide(&self) {
        self.root().set_display(Display::None);
    }

    fn is_visible(&self) -> bool {
        self.root().is_visible()
    }

    fn describe(&self) -> String {
        format!("document({})", self.root().describe())
    }
}
