//! Compound selector parsing and matching.
//!
//! Supported forms are a single compound selector made of an optional tag
//! name (or `*`) followed by any number of `#id` and `.class` parts:
//! `input`, `#email`, `.error-msg`, `input.target`, `div#email.field`.
//! Combinators (descendant, child, sibling) are not supported.

/// Errors produced while parsing a selector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,

    #[error("Unexpected character in selector '{selector}' at position {position}")]
    Unexpected { selector: String, position: usize },
}

/// A parsed compound selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    /// Lower-cased tag name. `None` matches any tag.
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let source = input.trim();
        if source.is_empty() {
            return Err(SelectorError::Empty);
        }

        let unexpected = |position: usize| SelectorError::Unexpected {
            selector: input.to_string(),
            position,
        };

        let mut selector = Selector::default();
        let chars: Vec<char> = source.chars().collect();
        let mut pos = 0;

        if chars[0] == '*' {
            pos = 1;
        } else if is_ident_char(chars[0]) {
            let tag = read_ident(&chars, &mut pos);
            selector.tag = Some(tag.to_ascii_lowercase());
        }

        while pos < chars.len() {
            let marker_pos = pos;
            let marker = chars[pos];
            pos += 1;
            let ident = read_ident(&chars, &mut pos);
            if ident.is_empty() {
                return Err(unexpected(pos));
            }
            match marker {
                '#' if selector.id.is_none() => selector.id = Some(ident),
                '.' => selector.classes.push(ident),
                _ => return Err(unexpected(marker_pos)),
            }
        }

        Ok(selector)
    }

    /// Shorthand for an id-only selector.
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub(crate) fn matches_parts(&self, tag: &str, id: &str, classes: &[String]) -> bool {
        if self.tag.as_deref().is_some_and(|want| want != tag) {
            return false;
        }
        if self.id.as_deref().is_some_and(|want| want != id) {
            return false;
        }
        self.classes
            .iter()
            .all(|want| classes.iter().any(|c| c == want))
    }
}

impl std::str::FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn read_ident(chars: &[char], pos: &mut usize) -> String {
    let start = *pos;
    while *pos < chars.len() && is_ident_char(chars[*pos]) {
        *pos += 1;
    }
    chars[start..*pos].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compound() {
        let sel = Selector::parse("input.target").unwrap();
        assert_eq!(sel.tag.as_deref(), Some("input"));
        assert_eq!(sel.id, None);
        assert_eq!(sel.classes, vec!["target".to_string()]);

        let sel = Selector::parse("DIV#email.field.wide").unwrap();
        assert_eq!(sel.tag.as_deref(), Some("div"));
        assert_eq!(sel.id.as_deref(), Some("email"));
        assert_eq!(sel.classes.len(), 2);
    }

    #[test]
    fn test_parse_id_and_class_only() {
        assert_eq!(Selector::parse("#email").unwrap(), Selector::by_id("email"));

        let sel = Selector::parse(".error-msg").unwrap();
        assert_eq!(sel.tag, None);
        assert_eq!(sel.classes, vec!["error-msg".to_string()]);
    }

    #[test]
    fn test_parse_universal() {
        let sel = Selector::parse("*").unwrap();
        assert_eq!(sel, Selector::default());
        assert!(sel.matches_parts("span", "", &[]));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Selector::parse("  "), Err(SelectorError::Empty));
        assert!(Selector::parse("div span").is_err());
        assert!(Selector::parse("#").is_err());
        assert!(Selector::parse("#a#b").is_err());
        assert!(Selector::parse("div > span").is_err());
    }
}
