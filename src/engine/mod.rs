//! The matching engine behind every [`Expression`](crate::Expression) call.
//!
//! Builders never match anything themselves.  They serialize to a wrapped
//! expression such as `/[6-9]/i` and hand it to an [`Engine`] together with
//! the subject.  An `Err` from the engine means the call could not run at
//! all; the builder records it on the response instead of returning it.
//!
//! | Primitive     | Returns                                          |
//! |---------------|--------------------------------------------------|
//! | `match_first` | the first match at or after the offset, if any   |
//! | `match_all`   | every non-overlapping match                      |
//! | `replace`     | the substituted subject and substitution count   |
//! | `split`       | the pieces between matches                       |
//! | `grep`        | the elements that match (or don't, if inverted)  |
//! | `quote`       | the text with all metacharacters escaped         |

pub mod quote;
pub mod regex_engine;
pub mod wrapped;

use anyhow::Result;

use crate::flags::{GrepFlags, MatchFlags, SplitFlags, Subject};
use crate::response::{Occurrence, Piece};

pub use regex_engine::RegexEngine;

pub trait Engine {
    fn match_first(
        &self,
        expression: &str,
        subject: &str,
        flags: MatchFlags,
        offset: usize,
    ) -> Result<Option<Occurrence>>;

    fn match_all(
        &self,
        expression: &str,
        subject: &str,
        flags: MatchFlags,
        offset: usize,
    ) -> Result<Vec<Occurrence>>;

    /// `limit` caps substitutions per subject string; `None` is unlimited.
    fn replace(
        &self,
        expression: &str,
        replacement: &str,
        subject: &Subject,
        limit: Option<usize>,
    ) -> Result<(Subject, usize)>;

    /// `limit` caps the number of pieces; `None` and `Some(0)` are
    /// unlimited.
    fn split(
        &self,
        expression: &str,
        subject: &str,
        limit: Option<usize>,
        flags: SplitFlags,
    ) -> Result<Vec<Piece>>;

    fn grep(&self, expression: &str, items: &[String], flags: GrepFlags) -> Result<Vec<String>>;

    fn quote(&self, text: &str, delimiter: Option<char>) -> String {
        quote::escape(text, delimiter)
    }
}
