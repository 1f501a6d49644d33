//! Response of split calls.

use crate::flags::SplitFlags;

use super::Piece;

/// The outcome of [`Expression::split`](crate::Expression::split).
#[derive(Debug)]
pub struct SplitResponse {
    expression: String,
    subject: String,
    limit: Option<usize>,
    flags: SplitFlags,
    outcome: anyhow::Result<Vec<Piece>>,
}

impl SplitResponse {
    pub(crate) fn new(
        expression: String,
        subject: String,
        limit: Option<usize>,
        flags: SplitFlags,
        outcome: anyhow::Result<Vec<Piece>>,
    ) -> Self {
        Self {
            expression,
            subject,
            limit,
            flags,
            outcome,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn flags(&self) -> SplitFlags {
        self.flags
    }

    pub fn pieces(&self) -> &[Piece] {
        match &self.outcome {
            Ok(pieces) => pieces,
            Err(_) => &[],
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.pieces().iter().map(|p| p.text.as_str()).collect()
    }

    pub fn count(&self) -> usize {
        self.pieces().len()
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
