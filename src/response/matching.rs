//! Response of match-first and match-all calls.

use crate::flags::MatchFlags;

use super::{Capture, Occurrence};

/// Which match primitive produced a [`MatchResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The first match at or after the offset.
    First,
    /// Every non-overlapping match at or after the offset.
    All,
}

/// The outcome of [`Expression::matches`](crate::Expression::matches) or
/// [`Expression::matches_all`](crate::Expression::matches_all).
///
/// The raw nested structure is always kept in
/// [`occurrences`](Self::occurrences).  [`matches`](Self::matches) is a
/// flattened convenience view whose meaning depends on the kind:
///
/// - `First`: every capture of the single match, whole match first.
/// - `All`: the whole-match text of every occurrence.
#[derive(Debug)]
pub struct MatchResponse {
    expression: String,
    subject: String,
    flags: MatchFlags,
    offset: usize,
    kind: MatchKind,
    outcome: anyhow::Result<Vec<Occurrence>>,
}

impl MatchResponse {
    pub(crate) fn new(
        expression: String,
        subject: String,
        flags: MatchFlags,
        offset: usize,
        kind: MatchKind,
        outcome: anyhow::Result<Vec<Occurrence>>,
    ) -> Self {
        Self {
            expression,
            subject,
            flags,
            offset,
            kind,
            outcome,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn flags(&self) -> MatchFlags {
        self.flags
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn kind(&self) -> MatchKind {
        self.kind
    }

    /// Why the engine rejected the call, if it did.
    pub fn error(&self) -> Option<&anyhow::Error> {
        self.outcome.as_ref().err()
    }

    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn is_successful(&self) -> bool {
        !self.occurrences().is_empty()
    }

    /// Every match found, each with all of its captures.  Empty when the
    /// call was invalid or found nothing.
    pub fn occurrences(&self) -> &[Occurrence] {
        match &self.outcome {
            Ok(occurrences) => occurrences,
            Err(_) => &[],
        }
    }

    /// The captures regrouped by group index: element `i` holds group `i`
    /// of every occurrence, in occurrence order.
    pub fn pattern_order(&self) -> Vec<Vec<Option<&str>>> {
        let groups = self.occurrences().iter().map(Occurrence::len).max().unwrap_or(0);
        (0..groups)
            .map(|i| {
                self.occurrences()
                    .iter()
                    .map(|o| o.get(i).and_then(|c| c.text.as_deref()))
                    .collect()
            })
            .collect()
    }

    /// Flattened view of the matched values; see the type docs.
    pub fn matches(&self) -> Vec<&str> {
        match self.kind {
            MatchKind::First => self
                .occurrences()
                .first()
                .map(|o| o.iter().map(Capture::as_str).collect())
                .unwrap_or_default(),
            MatchKind::All => self.occurrences().iter().map(Occurrence::whole).collect(),
        }
    }

    /// Number of entries in [`matches`](Self::matches).  For `All` this is
    /// the number of occurrences.
    pub fn count(&self) -> usize {
        self.matches().len()
    }

    /// Text of the named group in the first occurrence.
    pub fn named(&self, name: &str) -> Option<&str> {
        self.occurrences()
            .first()
            .and_then(|o| o.name(name))
            .map(Capture::as_str)
    }
}
