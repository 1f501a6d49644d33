//! [`Engine`] implementation backed by the `regex` crate.
//!
//! All offsets are **byte** offsets into the subject.

use anyhow::{Context, Result, bail};
use regex::{Captures, Regex, RegexBuilder};

use crate::flags::{GrepFlags, MatchFlags, SplitFlags, Subject};
use crate::modifier::Modifier;
use crate::response::{Capture, Occurrence, Piece};

use super::{Engine, wrapped};

/// The default matching engine.
///
/// ```
/// use regular::{Engine, MatchFlags, RegexEngine};
///
/// let engine = RegexEngine::new().with_size_limit(1 << 20);
/// let found = engine.match_all("/[6-9]/", "7 and 9", MatchFlags::NONE, 0).unwrap();
/// assert_eq!(found.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegexEngine {
    size_limit: Option<usize>,
    nest_limit: Option<u32>,
}

impl RegexEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the compiled size of every expression, in bytes.
    pub fn with_size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }

    /// Cap the nesting depth of every expression.
    pub fn with_nest_limit(mut self, depth: u32) -> Self {
        self.nest_limit = Some(depth);
        self
    }

    /// Parse a wrapped expression and compile it with its modifiers applied.
    pub fn compile(&self, expression: &str) -> Result<Regex> {
        let wrapped = wrapped::parse(expression)?;
        let mut builder = RegexBuilder::new(&wrapped.pattern);
        for modifier in &wrapped.modifiers {
            match modifier {
                Modifier::CaseInsensitive => builder.case_insensitive(true),
                Modifier::MultiLine => builder.multi_line(true),
                Modifier::DotMatchesNewline => builder.dot_matches_new_line(true),
                Modifier::IgnoreWhitespace => builder.ignore_whitespace(true),
                Modifier::Ungreedy => builder.swap_greed(true),
                // Subjects are `&str`, so matching is always UTF-8 aware.
                Modifier::Utf8 => builder.unicode(true),
            };
        }
        if let Some(bytes) = self.size_limit {
            builder.size_limit(bytes);
        }
        if let Some(depth) = self.nest_limit {
            builder.nest_limit(depth);
        }
        builder
            .build()
            .with_context(|| format!("failed to compile {expression}"))
    }
}

impl Engine for RegexEngine {
    fn match_first(
        &self,
        expression: &str,
        subject: &str,
        flags: MatchFlags,
        offset: usize,
    ) -> Result<Option<Occurrence>> {
        check_offset(subject, offset)?;
        let re = self.compile(expression)?;
        Ok(re
            .captures_at(subject, offset)
            .map(|caps| occurrence(&re, &caps, flags)))
    }

    fn match_all(
        &self,
        expression: &str,
        subject: &str,
        flags: MatchFlags,
        offset: usize,
    ) -> Result<Vec<Occurrence>> {
        check_offset(subject, offset)?;
        let re = self.compile(expression)?;
        Ok(captures_from(&re, subject, offset)
            .iter()
            .map(|caps| occurrence(&re, caps, flags))
            .collect())
    }

    fn replace(
        &self,
        expression: &str,
        replacement: &str,
        subject: &Subject,
        limit: Option<usize>,
    ) -> Result<(Subject, usize)> {
        let re = self.compile(expression)?;
        Ok(match subject {
            Subject::Text(text) => {
                let (out, count) = replace_one(&re, replacement, text, limit);
                (Subject::Text(out), count)
            }
            Subject::List(items) => {
                let mut total = 0;
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    let (replaced, count) = replace_one(&re, replacement, item, limit);
                    out.push(replaced);
                    total += count;
                }
                (Subject::List(out), total)
            }
        })
    }

    fn split(
        &self,
        expression: &str,
        subject: &str,
        limit: Option<usize>,
        flags: SplitFlags,
    ) -> Result<Vec<Piece>> {
        let re = self.compile(expression)?;
        let limit = limit.filter(|&n| n > 0);
        let piece = |text: &str, offset: usize| Piece::new(text, flags.offset_capture.then_some(offset));
        let keep = |text: &str| !(flags.no_empty && text.is_empty());

        let mut pieces = Vec::new();
        let mut split_count = 0usize;
        let mut last = 0;
        for caps in captures_from(&re, subject, 0) {
            // The last allowed piece is the rest of the subject.
            if limit.is_some_and(|n| split_count + 1 >= n) {
                break;
            }
            let Some(whole) = caps.get(0) else { continue };
            let text = &subject[last..whole.start()];
            if keep(text) {
                pieces.push(piece(text, last));
                split_count += 1;
            }
            if flags.delim_capture {
                for group in caps.iter().skip(1).flatten() {
                    if keep(group.as_str()) {
                        pieces.push(piece(group.as_str(), group.start()));
                    }
                }
            }
            last = whole.end();
        }
        let rest = &subject[last..];
        if keep(rest) {
            pieces.push(piece(rest, last));
        }
        Ok(pieces)
    }

    fn grep(&self, expression: &str, items: &[String], flags: GrepFlags) -> Result<Vec<String>> {
        let re = self.compile(expression)?;
        Ok(items
            .iter()
            .filter(|item| re.is_match(item) != flags.invert)
            .cloned()
            .collect())
    }
}

fn check_offset(subject: &str, offset: usize) -> Result<()> {
    if offset > subject.len() {
        bail!(
            "offset {offset} is past the end of the subject ({} bytes)",
            subject.len()
        );
    }
    if !subject.is_char_boundary(offset) {
        bail!("offset {offset} is not on a character boundary");
    }
    Ok(())
}

/// Every non-overlapping match starting at or after `offset`.
///
/// After an empty match the search resumes one char further on, and an empty
/// match ending where the previous match ended is skipped.
fn captures_from<'h>(re: &Regex, subject: &'h str, offset: usize) -> Vec<Captures<'h>> {
    let mut found = Vec::new();
    let mut at = offset;
    let mut last_end = None;
    while at <= subject.len() {
        let Some(caps) = re.captures_at(subject, at) else {
            break;
        };
        let Some(whole) = caps.get(0) else { break };
        let end = whole.end();
        if whole.is_empty() {
            at = next_char_boundary(subject, end);
            if last_end == Some(end) {
                continue;
            }
        } else {
            at = end;
        }
        last_end = Some(end);
        found.push(caps);
    }
    found
}

fn next_char_boundary(subject: &str, at: usize) -> usize {
    subject[at..]
        .chars()
        .next()
        .map_or(at + 1, |c| at + c.len_utf8())
}

fn occurrence(re: &Regex, caps: &Captures<'_>, flags: MatchFlags) -> Occurrence {
    Occurrence::new(
        re.capture_names()
            .enumerate()
            .map(|(i, name)| {
                let group = caps.get(i);
                Capture {
                    name: name.map(str::to_string),
                    text: match group {
                        Some(m) => Some(m.as_str().to_string()),
                        None if flags.unmatched_as_null => None,
                        None => Some(String::new()),
                    },
                    offset: group.filter(|_| flags.offset_capture).map(|m| m.start()),
                }
            })
            .collect(),
    )
}

fn replace_one(re: &Regex, replacement: &str, subject: &str, limit: Option<usize>) -> (String, usize) {
    let mut out = String::with_capacity(subject.len());
    let mut last = 0;
    let mut count = 0;
    for caps in captures_from(re, subject, 0)
        .iter()
        .take(limit.unwrap_or(usize::MAX))
    {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&subject[last..whole.start()]);
        caps.expand(replacement, &mut out);
        last = whole.end();
        count += 1;
    }
    out.push_str(&subject[last..]);
    (out, count)
}
