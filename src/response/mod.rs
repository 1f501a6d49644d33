//! Immutable views over the outcome of one engine call.
//!
//! Every response answers two questions the same way:
//!
//! - [`is_valid`](MatchResponse::is_valid): did the engine execute the
//!   expression at all?  `false` means the engine rejected it (bad syntax,
//!   unknown modifier, bad offset); the payload is then empty.
//! - [`is_successful`](MatchResponse::is_successful): did the call find or
//!   change anything?
//!
//! Check `is_valid` before reading anything into an empty payload.

pub mod grep;
pub mod matching;
pub mod replace;
pub mod split;

pub use grep::GrepResponse;
pub use matching::{MatchKind, MatchResponse};
pub use replace::ReplaceResponse;
pub use split::SplitResponse;

/// One capture group of one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    /// Group name for `(?<name>...)` groups.
    pub name: Option<String>,
    /// Matched text.  `None` only for unmatched groups under
    /// [`MatchFlags::unmatched_as_null`](crate::MatchFlags::unmatched_as_null).
    pub text: Option<String>,
    /// Byte offset into the subject, recorded under
    /// [`MatchFlags::offset_capture`](crate::MatchFlags::offset_capture).
    pub offset: Option<usize>,
}

impl Capture {
    pub fn new(text: &str) -> Self {
        Self {
            name: None,
            text: Some(text.to_string()),
            offset: None,
        }
    }

    /// The matched text, or `""` for an unmatched group.
    pub fn as_str(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// All capture groups of a single match, in group order.  Index 0 is the
/// whole match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Occurrence {
    captures: Vec<Capture>,
}

impl Occurrence {
    pub fn new(captures: Vec<Capture>) -> Self {
        Self { captures }
    }

    pub fn get(&self, index: usize) -> Option<&Capture> {
        self.captures.get(index)
    }

    /// The capture of the group called `name`.
    pub fn name(&self, name: &str) -> Option<&Capture> {
        self.captures
            .iter()
            .find(|c| c.name.as_deref() == Some(name))
    }

    /// Text of the whole match.
    pub fn whole(&self) -> &str {
        self.captures.first().map(Capture::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.captures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Capture> {
        self.captures.iter()
    }
}

impl<'a> IntoIterator for &'a Occurrence {
    type Item = &'a Capture;
    type IntoIter = std::slice::Iter<'a, Capture>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One fragment produced by a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub text: String,
    /// Byte offset into the subject, recorded under
    /// [`SplitFlags::offset_capture`](crate::SplitFlags::offset_capture).
    pub offset: Option<usize>,
}

impl Piece {
    pub fn new(text: &str, offset: Option<usize>) -> Self {
        Self {
            text: text.to_string(),
            offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, text: &str) -> Capture {
        Capture {
            name: Some(name.to_string()),
            ..Capture::new(text)
        }
    }

    #[test]
    fn unmatched_capture_reads_empty() {
        let c = Capture {
            name: None,
            text: None,
            offset: None,
        };
        assert_eq!(c.as_str(), "");
    }

    #[test]
    fn occurrence_accessors() {
        let o = Occurrence::new(vec![Capture::new("2024-07"), named("year", "2024")]);
        assert_eq!(o.whole(), "2024-07");
        assert_eq!(o.len(), 2);
        assert_eq!(o.name("year").map(Capture::as_str), Some("2024"));
        assert_eq!(o.name("month"), None);
        assert_eq!(o.iter().map(Capture::as_str).collect::<Vec<_>>(), ["2024-07", "2024"]);
    }

    #[test]
    fn empty_occurrence_has_empty_whole() {
        let o = Occurrence::default();
        assert!(o.is_empty());
        assert_eq!(o.whole(), "");
    }
}
