//! Same-page anchor references.
//!
//! A navigation link points at a section through an `href` fragment
//! (`#about`); the section exposes the same string as its `id`.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// The delimiter that marks an `href` as a same-page target.
pub const FRAGMENT_DELIMITER: char = '#';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnchorError {
    #[error("'{0}' is not a same-page anchor")]
    NotSamePage(String),
    #[error("anchor has an empty fragment")]
    Empty,
}

/// The identifier part of a same-page anchor, without the leading `#`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Anchor(Arc<str>);

impl Anchor {
    /// Creates an anchor from a bare element id.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Parses an `href` such as `#contact`.
    pub fn parse(href: &str) -> Result<Self, AnchorError> {
        let href = href.trim();
        let fragment = href
            .strip_prefix(FRAGMENT_DELIMITER)
            .ok_or_else(|| AnchorError::NotSamePage(href.to_string()))?;
        if fragment.is_empty() {
            return Err(AnchorError::Empty);
        }
        Ok(Self(fragment.into()))
    }

    /// The element id this anchor refers to.
    pub fn id(&self) -> &str {
        &self.0
    }

    /// The `href` form, `#<id>`.
    pub fn href(&self) -> String {
        format!("{}{}", FRAGMENT_DELIMITER, self.0)
    }

    /// Whether a link's `href` attribute points at this anchor.
    pub fn matches_href(&self, href: &str) -> bool {
        href.trim()
            .strip_prefix(FRAGMENT_DELIMITER)
            .is_some_and(|fragment| fragment == self.id())
    }
}

impl From<&str> for Anchor {
    fn from(id: &str) -> Self {
        Self(id.into())
    }
}

impl From<String> for Anchor {
    fn from(id: String) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for Anchor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", FRAGMENT_DELIMITER, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_same_page_anchor() {
        let anchor = Anchor::parse("#about").unwrap();
        assert_eq!(anchor.id(), "about");
        assert_eq!(anchor.href(), "#about");
        assert_eq!(anchor.to_string(), "#about");
    }

    #[test]
    fn test_parse_rejects_external_and_empty() {
        assert_eq!(
            Anchor::parse("https://example.com/#about"),
            Err(AnchorError::NotSamePage("https://example.com/#about".into()))
        );
        assert_eq!(Anchor::parse("#"), Err(AnchorError::Empty));
        assert!(Anchor::parse("about").is_err());
    }

    #[test]
    fn test_matches_href() {
        let anchor = Anchor::from("resume");
        assert!(anchor.matches_href("#resume"));
        assert!(anchor.matches_href(" #resume "));
        assert!(!anchor.matches_href("#resume-2"));
        assert!(!anchor.matches_href("resume"));
    }
}
