//! Headless builder for sub-patterns.

use std::fmt;

use crate::builder::PatternBuilder;

/// A pattern fragment with no delimiter and no modifiers.
///
/// A `Group` is consumed by one of the group methods of a parent builder,
/// which wraps its text in `(...)`, `(?:...)` or `(?<name>...)`.
///
/// ```
/// use regular::{Expression, Group, PatternBuilder};
///
/// let group = Group::new().digit_between(3, 7).unwrap().add("[^e-v]");
/// let expression = Expression::new().group(group).repeat(4, Some(6));
///
/// assert_eq!(expression.to_expression(), "/([3-7][^e-v]){4,6}/");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    pattern: String,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pattern(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
        }
    }

    pub fn into_pattern(self) -> String {
        self.pattern
    }
}

impl PatternBuilder for Group {
    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn pattern_mut(&mut self) -> &mut String {
        &mut self.pattern
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
