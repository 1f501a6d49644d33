//! Per-operation engine flags and the subject shape of a replace call.

/// Flags for match-first and match-all calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchFlags {
    /// Record the byte offset of every capture.
    pub offset_capture: bool,
    /// Report unmatched groups as `None` rather than the empty string.
    pub unmatched_as_null: bool,
}

impl MatchFlags {
    pub const NONE: MatchFlags = MatchFlags {
        offset_capture: false,
        unmatched_as_null: false,
    };

    pub fn with_offset_capture(mut self) -> Self {
        self.offset_capture = true;
        self
    }

    pub fn with_unmatched_as_null(mut self) -> Self {
        self.unmatched_as_null = true;
        self
    }
}

/// Flags for split calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitFlags {
    /// Drop empty pieces.
    pub no_empty: bool,
    /// Also return the capture groups of each delimiter match.
    pub delim_capture: bool,
    /// Record the byte offset of every piece.
    pub offset_capture: bool,
}

impl SplitFlags {
    pub const NONE: SplitFlags = SplitFlags {
        no_empty: false,
        delim_capture: false,
        offset_capture: false,
    };

    pub fn with_no_empty(mut self) -> Self {
        self.no_empty = true;
        self
    }

    pub fn with_delim_capture(mut self) -> Self {
        self.delim_capture = true;
        self
    }

    pub fn with_offset_capture(mut self) -> Self {
        self.offset_capture = true;
        self
    }
}

/// Flags for grep calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GrepFlags {
    /// Keep the elements that do *not* match.
    pub invert: bool,
}

impl GrepFlags {
    pub const NONE: GrepFlags = GrepFlags { invert: false };
    pub const INVERT: GrepFlags = GrepFlags { invert: true };
}

/// The subject of a replace call: one string or a list of strings.  The
/// result of the call has the same shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    Text(String),
    List(Vec<String>),
}

impl Subject {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Subject::Text(s) => Some(s),
            Subject::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Subject::Text(_) => None,
            Subject::List(items) => Some(items),
        }
    }
}

impl From<&str> for Subject {
    fn from(s: &str) -> Self {
        Subject::Text(s.to_string())
    }
}

impl From<String> for Subject {
    fn from(s: String) -> Self {
        Subject::Text(s)
    }
}

impl From<Vec<String>> for Subject {
    fn from(items: Vec<String>) -> Self {
        Subject::List(items)
    }
}

impl From<&[&str]> for Subject {
    fn from(items: &[&str]) -> Self {
        Subject::List(items.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Subject {
    fn from(items: [&str; N]) -> Self {
        Subject::List(items.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_builders() {
        assert_eq!(MatchFlags::default(), MatchFlags::NONE);
        assert!(MatchFlags::NONE.with_offset_capture().offset_capture);
        let split = SplitFlags::NONE.with_no_empty().with_delim_capture();
        assert!(split.no_empty && split.delim_capture && !split.offset_capture);
        assert!(GrepFlags::INVERT.invert);
    }

    #[test]
    fn subject_shapes() {
        assert_eq!(Subject::from("abc").as_text(), Some("abc"));
        assert_eq!(Subject::from("abc").as_list(), None);
        let list = Subject::from(["a", "b"]);
        assert_eq!(list.as_list(), Some(&["a".to_string(), "b".to_string()][..]));
        assert_eq!(list.as_text(), None);
    }
}
