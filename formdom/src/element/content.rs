use super::Element;

#[derive(Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

impl std::fmt::Debug for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Text(s) => write!(f, "Text({s:?})"),
            Self::Children(c) => write!(f, "Children({} elements)", c.len()),
        }
    }
}

/// The `style.display` state of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// No inline display set; the element is rendered.
    #[default]
    Initial,
    Block,
    None,
}

impl Display {
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::None)
    }
}
