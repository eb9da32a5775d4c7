use std::sync::{Arc, RwLock};

use super::{Content, Display};
use crate::selector::{Selector, SelectorError};

#[derive(Debug, Default)]
struct ElementInner {
    // Identity
    tag: String,
    id: String,
    classes: Vec<String>,

    // Content
    content: Content,

    // Form state
    /// Current value for `input` elements. Empty for everything else.
    value: String,

    // Visual
    display: Display,
}

/// A node in the element tree.
///
/// `Element` is a shared handle: cloning it is cheap and every clone sees the
/// same underlying node, so code holding an element can observe changes made
/// through any other handle (for example an input value typed after the form
/// was wired up).
///
/// Builder methods take `self` and return it so trees can be declared inline:
///
/// ```
/// use formdom::Element;
///
/// let field = Element::div()
///     .id("email")
///     .child(Element::label("Email"))
///     .child(Element::input("").class("target"))
///     .child(Element::span().class("error-msg"));
///
/// assert!(field.query_selector("input.target").unwrap().is_some());
/// ```
#[derive(Clone)]
pub struct Element {
    inner: Arc<RwLock<ElementInner>>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ElementInner {
                tag: tag.into().to_ascii_lowercase(),
                ..Default::default()
            })),
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn form() -> Self {
        Self::new("form")
    }

    /// Create an `input` element holding `value`.
    pub fn input(value: impl Into<String>) -> Self {
        let el = Self::new("input");
        el.set_value(value);
        el
    }

    /// Create a `label` element with text content.
    pub fn label(text: impl Into<String>) -> Self {
        Self::new("label").text(text)
    }

    // -------------------------------------------------------------------------
    // Builder methods
    // -------------------------------------------------------------------------

    pub fn id(self, id: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.id = id.into();
        }
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            let class = class.into();
            if !guard.classes.contains(&class) {
                guard.classes.push(class);
            }
        }
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn child(self, child: Element) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            match &mut guard.content {
                Content::Children(children) => children.push(child),
                content => *content = Content::Children(vec![child]),
            }
        }
        self
    }

    pub fn children_from(self, children: impl IntoIterator<Item = Element>) -> Self {
        children.into_iter().fold(self, Self::child)
    }

    pub fn display(self, display: Display) -> Self {
        self.set_display(display);
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn tag(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.tag.clone())
            .unwrap_or_default()
    }

    /// The `id` attribute. Empty when none was set.
    pub fn element_id(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.id.clone())
            .unwrap_or_default()
    }

    pub fn classes(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| guard.classes.clone())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.inner
            .read()
            .map(|guard| guard.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Current input value.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Concatenated text of this element and all its descendants.
    pub fn text_content(&self) -> String {
        let Ok(guard) = self.inner.read() else {
            return String::new();
        };
        match &guard.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => {
                children.iter().map(Element::text_content).collect()
            }
        }
    }

    /// Direct children, in document order.
    pub fn children(&self) -> Vec<Element> {
        self.inner
            .read()
            .map(|guard| match &guard.content {
                Content::Children(children) => children.clone(),
                _ => Vec::new(),
            })
            .unwrap_or_default()
    }

    pub fn get_display(&self) -> Display {
        self.inner
            .read()
            .map(|guard| guard.display)
            .unwrap_or_default()
    }

    pub fn is_visible(&self) -> bool {
        self.get_display().is_visible()
    }

    /// Whether both handles point at the same node.
    pub fn ptr_eq(&self, other: &Element) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
        }
    }

    /// Replace the element's content with a single text node.
    pub fn set_text(&self, text: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.content = Content::Text(text.into());
        }
    }

    pub fn set_display(&self, display: Display) {
        if let Ok(mut guard) = self.inner.write() {
            guard.display = display;
        }
    }

    pub fn append_child(&self, child: Element) {
        if let Ok(mut guard) = self.inner.write() {
            match &mut guard.content {
                Content::Children(children) => children.push(child),
                content => *content = Content::Children(vec![child]),
            }
        }
    }

    /// Remove a direct child. Returns whether it was found.
    pub fn remove_child(&self, child: &Element) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        if let Content::Children(children) = &mut guard.content {
            let before = children.len();
            children.retain(|c| !c.ptr_eq(child));
            return children.len() != before;
        }
        false
    }

    // -------------------------------------------------------------------------
    // Selector queries
    // -------------------------------------------------------------------------

    /// Whether this element matches a parsed selector.
    pub fn matches(&self, selector: &Selector) -> bool {
        let Ok(guard) = self.inner.read() else {
            return false;
        };
        selector.matches_parts(&guard.tag, &guard.id, &guard.classes)
    }

    /// First descendant matching `selector`, in depth-first pre-order.
    /// The element itself is never returned.
    pub fn query_selector(&self, selector: &str) -> Result<Option<Element>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(self.query_parsed(&selector))
    }

    /// Every descendant matching `selector`, in document order.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<Element>, SelectorError> {
        let selector = Selector::parse(selector)?;
        let mut found = Vec::new();
        self.collect_matches(&selector, &mut found);
        Ok(found)
    }

    pub fn query_parsed(&self, selector: &Selector) -> Option<Element> {
        for child in self.children() {
            if child.matches(selector) {
                return Some(child);
            }
            if let Some(found) = child.query_parsed(selector) {
                return Some(found);
            }
        }
        None
    }

    fn collect_matches(&self, selector: &Selector, found: &mut Vec<Element>) {
        for child in self.children() {
            if child.matches(selector) {
                found.push(child.clone());
            }
            child.collect_matches(selector, found);
        }
    }

    /// Short `tag#id.class` form used in log lines.
    pub fn describe(&self) -> String {
        let Ok(guard) = self.inner.read() else {
            return String::from("<poisoned>");
        };
        let mut out = guard.tag.clone();
        if !guard.id.is_empty() {
            out.push('#');
            out.push_str(&guard.id);
        }
        for class in &guard.classes {
            out.push('.');
            out.push_str(class);
        }
        out
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.read() {
            Ok(guard) => f
                .debug_struct("Element")
                .field("tag", &guard.tag)
                .field("id", &guard.id)
                .field("classes", &guard.classes)
                .field("value", &guard.value)
                .field("display", &guard.display)
                .field("content", &guard.content)
                .finish(),
            Err(_) => write!(f, "Element(<poisoned>)"),
        }
    }
}
