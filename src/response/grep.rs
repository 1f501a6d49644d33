//! Response of grep calls.

use crate::flags::GrepFlags;

/// The outcome of [`Expression::grep`](crate::Expression::grep).
#[derive(Debug)]
pub struct GrepResponse {
    expression: String,
    items: Vec<String>,
    flags: GrepFlags,
    outcome: anyhow::Result<Vec<String>>,
}

impl GrepResponse {
    pub(crate) fn new(
        expression: String,
        items: Vec<String>,
        flags: GrepFlags,
        outcome: anyhow::Result<Vec<String>>,
    ) -> Self {
        Self {
            expression,
            items,
            flags,
            outcome,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The elements that were filtered.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn flags(&self) -> GrepFlags {
        self.flags
    }

    /// Whether non-matching elements were kept instead of matching ones.
    pub fn is_inverted(&self) -> bool {
        self.flags.invert
    }

    /// The kept elements in their original order, indexed from zero.
    pub fn matched(&self) -> &[String] {
        match &self.outcome {
            Ok(matched) => matched,
            Err(_) => &[],
        }
    }

    pub fn count(&self) -> usize {
        self.matched().len()
    }

    pub fn error(&self) -> Option<&anyhow::Error> {
        self.outcome.as_ref().err()
    }

    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn is_successful(&self) -> bool {
        self.count() > 0
    }
}
