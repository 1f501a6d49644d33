//! Literal escaping.

use crate::delimiter::Delimiter;

/// Escape every metacharacter in `text` so that it matches itself.
///
/// When `delimiter` is given, occurrences of its char are escaped as well,
/// so the result can be placed between that delimiter on both sides.
///
/// ```
/// use regular::{Delimiter, quote};
///
/// assert_eq!(quote("1.5+2", None), r"1\.5\+2");
/// assert_eq!(quote("a/b", Some(Delimiter::Slash)), r"a\/b");
/// ```
pub fn quote(text: &str, delimiter: Option<Delimiter>) -> String {
    escape(text, delimiter.map(Delimiter::as_char))
}

pub(crate) fn escape(text: &str, delimiter: Option<char>) -> String {
    let escaped = regex::escape(text);
    match delimiter {
        // Metacharacter delimiters are already escaped above.
        Some(d) if regex::escape(&d.to_string()).chars().count() == 1 => {
            escaped.replace(d, &format!("\\{d}"))
        }
        _ => escaped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metacharacters() {
        assert_eq!(quote(r"a.b*c?", None), r"a\.b\*c\?");
        assert_eq!(quote("(x)[y]{z}", None), r"\(x\)\[y\]\{z\}");
        assert_eq!(quote(r"^$|\", None), r"\^\$\|\\");
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(quote("hello world", None), "hello world");
        assert_eq!(quote("", None), "");
    }

    #[test]
    fn delimiter_escaped_once() {
        assert_eq!(quote("a/b", Some(Delimiter::Slash)), r"a\/b");
        assert_eq!(quote("a/b", None), "a/b");
        assert_eq!(quote("a#b", Some(Delimiter::Hash)), r"a\#b");
        assert_eq!(quote("a´b", Some(Delimiter::AcuteAccent)), r"a\´b");
    }
}
