//! Fragment vocabulary shared by [`Expression`](crate::Expression) and
//! [`Group`].
//!
//! Every method appends one fragment to the accumulated pattern and hands
//! the builder back for chaining.  Nothing here checks that the resulting
//! pattern is well formed; only the digit and single-character arguments
//! are validated.
//!
//! | Method                    | Fragment            |
//! |---------------------------|---------------------|
//! | `digit_between(3, 7)`     | `[3-7]`             |
//! | `digit(None)`             | `[0-9]`             |
//! | `not_digit(Some(4))`      | `[^4]`              |
//! | `any_digit()`             | `\d`                |
//! | `no_digit()`              | `\D`                |
//! | `char("a")`               | `a`                 |
//! | `char("abc")`             | `[abc]`             |
//! | `not_char("a-z")`         | `[^a-z]`            |
//! | `char_range("a", "f")`    | `[a-f]`             |
//! | `group(g)`                | `(g)`               |
//! | `non_capturing_group(g)`  | `(?:g)`             |
//! | `named_group("y", g)`     | `(?<y>g)`           |
//! | `repeat(2, Some(4))`      | `{2,4}`             |
//! | `repeat_at_least(2)`      | `{2,}`              |
//! | `repeat_at_most(4)`       | `{0,4}`             |
//! | `whitespace()`            | `\s`                |
//! | `start_of_string()`       | `^`                 |

use crate::error::{BuildError, check_digit, check_single_char};
use crate::group::Group;

pub trait PatternBuilder: Sized {
    /// The accumulated pattern text.
    fn pattern(&self) -> &str;

    fn pattern_mut(&mut self) -> &mut String;

    /// Append `fragment` verbatim, unescaped.
    fn add(mut self, fragment: &str) -> Self {
        self.pattern_mut().push_str(fragment);
        self
    }

    /// Append a digit range.  The arguments may come in either order; the
    /// range is always written ascending.
    fn digit_between(self, m: i32, n: i32) -> Result<Self, BuildError> {
        let (m, n) = (check_digit(m)?, check_digit(n)?);
        Ok(self.add(&format!("[{}-{}]", m.min(n), m.max(n))))
    }

    /// Append `[n]`, or `[0-9]` when `n` is `None`.
    fn digit(self, n: Option<i32>) -> Result<Self, BuildError> {
        Ok(match n {
            Some(n) => self.add(&format!("[{}]", check_digit(n)?)),
            None => self.add("[0-9]"),
        })
    }

    /// Append `[^n]`, or `[^0-9]` when `n` is `None`.
    fn not_digit(self, n: Option<i32>) -> Result<Self, BuildError> {
        Ok(match n {
            Some(n) => self.add(&format!("[^{}]", check_digit(n)?)),
            None => self.add("[^0-9]"),
        })
    }

    fn any_digit(self) -> Self {
        self.add(r"\d")
    }

    fn no_digit(self) -> Self {
        self.add(r"\D")
    }

    /// A single char is appended literally, anything longer becomes a
    /// character class.
    fn char(self, c: &str) -> Self {
        if c.chars().count() > 1 {
            self.add(&format!("[{c}]"))
        } else {
            self.add(c)
        }
    }

    fn not_char(self, c: &str) -> Self {
        self.add(&format!("[^{c}]"))
    }

    /// Append `[from-to]`.  Both bounds must be exactly one character.
    fn char_range(self, from: &str, to: &str) -> Result<Self, BuildError> {
        let (from, to) = (check_single_char(from)?, check_single_char(to)?);
        Ok(self.add(&format!("[{from}-{to}]")))
    }

    /// Like [`char`](Self::char) for a single char; otherwise appended
    /// verbatim.
    fn charset(self, c: &str) -> Self {
        if c.chars().count() == 1 {
            self.char(c)
        } else {
            self.add(c)
        }
    }

    fn group(self, group: Group) -> Self {
        self.add(&format!("({})", group.pattern()))
    }

    fn non_capturing_group(self, group: Group) -> Self {
        self.add(&format!("(?:{})", group.pattern()))
    }

    fn named_group(self, name: &str, group: Group) -> Self {
        self.add(&format!("(?<{name}>{})", group.pattern()))
    }

    /// Repeat the previous fragment exactly `m` times, or `m` to `n` times.
    /// No check is made that `m <= n`.
    fn repeat(self, m: usize, n: Option<usize>) -> Self {
        match n {
            Some(n) => self.add(&format!("{{{m},{n}}}")),
            None => self.add(&format!("{{{m}}}")),
        }
    }

    fn repeat_between(self, from: usize, to: usize) -> Self {
        self.repeat(from, Some(to))
    }

    fn repeat_at_least(self, n: usize) -> Self {
        self.add(&format!("{{{n},}}"))
    }

    fn repeat_at_most(self, n: usize) -> Self {
        self.repeat(0, Some(n))
    }

    fn repeat_exactly(self, n: usize) -> Self {
        self.repeat(n, None)
    }

    fn whitespace(self) -> Self {
        self.add(r"\s")
    }

    fn linebreak(self) -> Self {
        self.add(r"\n")
    }

    fn tab(self) -> Self {
        self.add(r"\t")
    }

    fn start_of_string(self) -> Self {
        self.add("^")
    }

    fn end_of_string(self) -> Self {
        self.add("$")
    }
}
