//! Parser for wrapped expressions of the form
//! `<delimiter><pattern><delimiter><modifiers>`.
//!
//! - Leading whitespace is skipped.
//! - The delimiter must not be alphanumeric, a backslash or NUL.
//! - `(`, `[`, `{` and `<` close with their partner and may nest inside the
//!   pattern; any other delimiter closes with itself.
//! - A backslash escapes the next char, so `\/` does not end a `/`-delimited
//!   pattern.  The escaped delimiter is rewritten to the engine's literal
//!   form, since the engine does not accept every escaped punctuation char.
//! - Every char after the closing delimiter must be a modifier.  Spaces and
//!   line breaks there are ignored.

use anyhow::{Result, bail};

use crate::modifier::Modifier;

/// A wrapped expression split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedExpression {
    pub delimiter: char,
    pub pattern: String,
    /// In the order written, without duplicates.
    pub modifiers: Vec<Modifier>,
}

/// Split a wrapped expression into delimiter, pattern and modifiers.
pub fn parse(input: &str) -> Result<WrappedExpression> {
    let mut chars = input.trim_start().chars();

    let open = match chars.next() {
        None => bail!("empty regular expression"),
        Some(c) if c.is_alphanumeric() || c == '\\' || c == '\0' => {
            bail!("delimiter must not be alphanumeric, backslash, or NUL")
        }
        Some(c) => c,
    };
    let close = closing_delimiter(open);

    let mut pattern = String::new();
    let mut depth = 0usize;
    loop {
        match chars.next() {
            None => bail!("no ending delimiter '{close}' found"),
            Some('\\') => match chars.next() {
                Some(c) if c == close && open == close => {
                    pattern.push_str(&regex::escape(&c.to_string()));
                }
                Some(c) => {
                    pattern.push('\\');
                    pattern.push(c);
                }
                None => bail!("no ending delimiter '{close}' found"),
            },
            Some(c) if c == close && depth == 0 => break,
            Some(c) if c == close => {
                depth -= 1;
                pattern.push(c);
            }
            Some(c) if c == open => {
                // Only reachable for bracket-style delimiters.
                depth += 1;
                pattern.push(c);
            }
            Some(c) => pattern.push(c),
        }
    }

    let mut modifiers = Vec::new();
    for ch in chars {
        if matches!(ch, ' ' | '\n' | '\r') {
            continue;
        }
        match Modifier::from_char(ch) {
            Some(m) if !modifiers.contains(&m) => modifiers.push(m),
            Some(_) => {}
            None => bail!("unknown modifier '{ch}'"),
        }
    }

    Ok(WrappedExpression {
        delimiter: open,
        pattern,
        modifiers,
    })
}

fn closing_delimiter(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        '<' => '>',
        other => other,
    }
}
