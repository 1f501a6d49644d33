//! The full expression builder.

use std::fmt;

use itertools::Itertools;
use log::{debug, trace};

use crate::builder::PatternBuilder;
use crate::delimiter::Delimiter;
use crate::engine::quote::quote;
use crate::engine::{Engine, RegexEngine};
use crate::flags::{GrepFlags, MatchFlags, SplitFlags, Subject};
use crate::modifier::Modifier;
use crate::response::{GrepResponse, MatchKind, MatchResponse, ReplaceResponse, SplitResponse};

/// A pattern together with its delimiter and modifiers.
///
/// The serialized form is always `delimiter + pattern + delimiter +
/// modifiers`.  Nothing is validated beyond the digit and single-char
/// arguments of [`PatternBuilder`]; a malformed pattern shows up as an
/// invalid response once it is run.
///
/// ```
/// use regular::{Delimiter, Expression, Modifier, PatternBuilder};
///
/// let expression = Expression::from_pattern("^[^1-8]")
///     .char("abc")
///     .not_char("b")
///     .add(".*")
///     .set_modifier(Modifier::CaseInsensitive)
///     .set_delimiter(Delimiter::Hash);
///
/// assert_eq!(expression.to_expression(), "#^[^1-8][abc][^b].*#i");
/// ```
#[derive(Debug, Clone)]
pub struct Expression<E = RegexEngine> {
    pattern: String,
    delimiter: Delimiter,
    modifiers: Vec<Modifier>,
    engine: E,
}

impl Expression<RegexEngine> {
    /// An empty pattern, `/` delimiter, no modifiers, default engine.
    pub fn new() -> Self {
        Self::with_engine(RegexEngine::default())
    }

    pub fn from_pattern(pattern: &str) -> Self {
        Self::new().set_pattern(pattern)
    }

    /// Escape `text` so it matches literally; see [`quote`].
    pub fn quote(text: &str, delimiter: Option<Delimiter>) -> String {
        quote(text, delimiter)
    }
}

impl Default for Expression<RegexEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Engine> Expression<E> {
    pub fn with_engine(engine: E) -> Self {
        Self {
            pattern: String::new(),
            delimiter: Delimiter::default(),
            modifiers: Vec::new(),
            engine,
        }
    }

    /// Replace the pattern text verbatim.
    pub fn set_pattern(mut self, pattern: &str) -> Self {
        self.pattern = pattern.to_string();
        self
    }

    pub fn set_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Replace the modifiers with exactly `modifier`.
    pub fn set_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers = vec![modifier];
        self
    }

    /// Replace the modifiers, keeping their order.  Repeats are dropped.
    pub fn set_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers = modifiers.into_iter().unique().collect();
        self
    }

    /// Append `modifier` unless it is already set.
    pub fn add_modifier(mut self, modifier: Modifier) -> Self {
        if !self.modifiers.contains(&modifier) {
            self.modifiers.push(modifier);
        }
        self
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Serialize to the wrapped expression handed to the engine.
    pub fn to_expression(&self) -> String {
        format!(
            "{d}{}{d}{}",
            self.pattern,
            self.modifiers.iter().join(""),
            d = self.delimiter
        )
    }

    /// Find the first match in `subject`.
    pub fn matches(&self, subject: &str) -> MatchResponse {
        self.matches_with(subject, MatchFlags::NONE, 0)
    }

    /// Find the first match at or after byte `offset`.
    pub fn matches_with(&self, subject: &str, flags: MatchFlags, offset: usize) -> MatchResponse {
        let expression = self.serialize();
        let outcome = self
            .engine
            .match_first(&expression, subject, flags, offset)
            .map(|found| found.into_iter().collect());
        log_failure(&expression, &outcome);
        MatchResponse::new(
            expression,
            subject.to_string(),
            flags,
            offset,
            MatchKind::First,
            outcome,
        )
    }

    /// Find every match in `subject`.
    pub fn matches_all(&self, subject: &str) -> MatchResponse {
        self.matches_all_with(subject, MatchFlags::NONE, 0)
    }

    pub fn matches_all_with(&self, subject: &str, flags: MatchFlags, offset: usize) -> MatchResponse {
        let expression = self.serialize();
        let outcome = self.engine.match_all(&expression, subject, flags, offset);
        log_failure(&expression, &outcome);
        MatchResponse::new(
            expression,
            subject.to_string(),
            flags,
            offset,
            MatchKind::All,
            outcome,
        )
    }

    /// Substitute `replacement` for at most `limit` matches in each subject
    /// string.  `$1` and `${name}` refer to capture groups.
    pub fn replace(
        &self,
        replacement: &str,
        subject: impl Into<Subject>,
        limit: Option<usize>,
    ) -> ReplaceResponse {
        let expression = self.serialize();
        let subject = subject.into();
        let outcome = self
            .engine
            .replace(&expression, replacement, &subject, limit);
        log_failure(&expression, &outcome);
        ReplaceResponse::new(
            expression,
            replacement.to_string(),
            subject,
            limit,
            outcome,
        )
    }

    pub fn split(&self, subject: &str, limit: Option<usize>, flags: SplitFlags) -> SplitResponse {
        let expression = self.serialize();
        let outcome = self.engine.split(&expression, subject, limit, flags);
        log_failure(&expression, &outcome);
        SplitResponse::new(expression, subject.to_string(), limit, flags, outcome)
    }

    /// Keep the elements of `items` that match (or, with
    /// [`GrepFlags::INVERT`], that don't).
    pub fn grep<I, S>(&self, items: I, flags: GrepFlags) -> GrepResponse
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let expression = self.serialize();
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        let outcome = self.engine.grep(&expression, &items, flags);
        log_failure(&expression, &outcome);
        GrepResponse::new(expression, items, flags, outcome)
    }

    fn serialize(&self) -> String {
        let expression = self.to_expression();
        trace!("running {expression}");
        expression
    }
}

fn log_failure<T>(expression: &str, outcome: &anyhow::Result<T>) {
    if let Err(err) = outcome {
        debug!("engine rejected {expression}: {err:#}");
    }
}

impl<E> PatternBuilder for Expression<E> {
    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn pattern_mut(&mut self) -> &mut String {
        &mut self.pattern
    }
}

impl<E: Engine> fmt::Display for Expression<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_expression())
    }
}
