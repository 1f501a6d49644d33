//! Delimiters that wrap a pattern in its serialized form.

use std::fmt;

use crate::error::BuildError;

/// The character written on both sides of a pattern, e.g. `/[0-9]/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Delimiter {
    #[default]
    Slash,
    Tilde,
    At,
    Semicolon,
    Percent,
    /// `´`, the only non-ASCII delimiter.
    AcuteAccent,
    Hash,
}

impl Delimiter {
    pub const ALL: [Delimiter; 7] = [
        Delimiter::Slash,
        Delimiter::Tilde,
        Delimiter::At,
        Delimiter::Semicolon,
        Delimiter::Percent,
        Delimiter::AcuteAccent,
        Delimiter::Hash,
    ];

    pub fn as_char(self) -> char {
        match self {
            Delimiter::Slash => '/',
            Delimiter::Tilde => '~',
            Delimiter::At => '@',
            Delimiter::Semicolon => ';',
            Delimiter::Percent => '%',
            Delimiter::AcuteAccent => '´',
            Delimiter::Hash => '#',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Delimiter {
    type Error = BuildError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Delimiter::ALL
            .into_iter()
            .find(|d| d.as_char() == ch)
            .ok_or(BuildError::UnknownDelimiter(ch))
    }
}
