//! Response of replace calls.

use crate::flags::Subject;

/// The outcome of [`Expression::replace`](crate::Expression::replace).
#[derive(Debug)]
pub struct ReplaceResponse {
    expression: String,
    replacement: String,
    subject: Subject,
    limit: Option<usize>,
    outcome: anyhow::Result<(Subject, usize)>,
}

impl ReplaceResponse {
    pub(crate) fn new(
        expression: String,
        replacement: String,
        subject: Subject,
        limit: Option<usize>,
        outcome: anyhow::Result<(Subject, usize)>,
    ) -> Self {
        Self {
            expression,
            replacement,
            subject,
            limit,
            outcome,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Maximum substitutions per subject string; `None` is unlimited.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// The substituted value, shaped like the subject.  `None` when the
    /// engine rejected the call.
    pub fn result(&self) -> Option<&Subject> {
        self.outcome.as_ref().ok().map(|(result, _)| result)
    }

    /// Number of substitutions performed.
    pub fn count(&self) -> usize {
        self.outcome.as_ref().map(|(_, count)| *count).unwrap_or(0)
    }

    pub fn error(&self) -> Option<&anyhow::Error> {
        self.outcome.as_ref().err()
    }

    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Whether the result differs from the subject.
    pub fn is_successful(&self) -> bool {
        self.result().is_some_and(|result| *result != self.subject)
    }
}
