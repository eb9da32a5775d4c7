//! In-memory element tree with CSS-like selector lookup.
//!
//! `formdom` models the small slice of a browser document that form code
//! touches: input values, text content, and whether an element is displayed.

pub mod document;
pub mod element;
pub mod selector;

pub use document::Document;
pub use element::{Content, Display, Element, find_element};
pub use selector::{Selector, SelectorError};
