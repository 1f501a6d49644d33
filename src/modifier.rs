//! Mode flags appended after the closing delimiter.

use std::fmt;

use phf::{Map, phf_map};

/// A single mode flag of a wrapped expression.
///
/// An expression with no modifiers is represented by an empty modifier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    CaseInsensitive,   // i
    MultiLine,         // m: `^`/`$` match at line boundaries
    DotMatchesNewline, // s
    IgnoreWhitespace,  // x
    Ungreedy,          // U: swaps greedy and lazy quantifiers
    Utf8,              // u
}

/// Map of modifier characters to their flag.  Case matters: `U` and `u`
/// are different modifiers.
const CHAR_TO_MODIFIER_MAP: Map<char, Modifier> = phf_map! {
    'i' => Modifier::CaseInsensitive,
    'm' => Modifier::MultiLine,
    's' => Modifier::DotMatchesNewline,
    'x' => Modifier::IgnoreWhitespace,
    'U' => Modifier::Ungreedy,
    'u' => Modifier::Utf8,
};

impl Modifier {
    pub fn as_char(self) -> char {
        match self {
            Modifier::CaseInsensitive => 'i',
            Modifier::MultiLine => 'm',
            Modifier::DotMatchesNewline => 's',
            Modifier::IgnoreWhitespace => 'x',
            Modifier::Ungreedy => 'U',
            Modifier::Utf8 => 'u',
        }
    }

    /// Look up the modifier written as `ch`.
    pub fn from_char(ch: char) -> Option<Modifier> {
        CHAR_TO_MODIFIER_MAP.get(&ch).copied()
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_modifier_round_trips() {
        for m in [
            Modifier::CaseInsensitive,
            Modifier::MultiLine,
            Modifier::DotMatchesNewline,
            Modifier::IgnoreWhitespace,
            Modifier::Ungreedy,
            Modifier::Utf8,
        ] {
            assert_eq!(Modifier::from_char(m.as_char()), Some(m));
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(Modifier::from_char('U'), Some(Modifier::Ungreedy));
        assert_eq!(Modifier::from_char('u'), Some(Modifier::Utf8));
        assert_eq!(Modifier::from_char('I'), None);
    }

    #[test]
    fn unknown_modifier() {
        assert_eq!(Modifier::from_char('e'), None);
        assert_eq!(Modifier::from_char(' '), None);
    }
}
