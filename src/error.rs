//! Validation errors raised while assembling a pattern.

/// Errors returned synchronously by validated builder calls.
///
/// Failures of the matching engine are not `BuildError`s; they are recorded
/// on the response of the call that triggered them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A digit argument outside `0..=9`.
    DigitRange(i32),
    /// A single-character argument that is empty or longer than one char.
    CharacterLength(String),
    /// A character with no matching [`Delimiter`](crate::Delimiter).
    UnknownDelimiter(char),
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DigitRange(n) => write!(f, "The digit has to be between 0 and 9, got {n}"),
            Self::CharacterLength(s) => {
                write!(f, "A char has to be exactly one character long, got {s:?}")
            }
            Self::UnknownDelimiter(c) => write!(f, "Unknown delimiter: {c:?}"),
        }
    }
}

impl std::error::Error for BuildError {}

/// Check that `n` is a single decimal digit.
pub(crate) fn check_digit(n: i32) -> Result<i32, BuildError> {
    if (0..=9).contains(&n) {
        Ok(n)
    } else {
        Err(BuildError::DigitRange(n))
    }
}

/// Check that `s` holds exactly one character and return it.
pub(crate) fn check_single_char(s: &str) -> Result<char, BuildError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(BuildError::CharacterLength(s.to_string())),
    }
}
