mod content;
mod node;

pub use content::{Content, Display};
pub use node::Element;

/// Find an element by ID in the tree, including `root` itself.
pub fn find_element(root: &Element, id: &str) -> Option<Element> {
    if root.element_id() == id {
        return Some(root.clone());
    }

    for child in root.children() {
        if let Some(found) = find_element(&child, id) {
            return Some(found);
        }
    }

    None
}
