//! Whitespace normalisation and clause-based line breaking.
//!
//! The formatter re-scans its input with the same lexer as the classifier, so
//! string literals and comments pass through verbatim while everything around
//! them is re-flowed:
//!
//! 1. whitespace runs collapse to one space (to a newline right after a line
//!    comment, so the comment cannot swallow the code that follows);
//! 2. a comma outside parentheses becomes `,\n` plus the configured indent;
//! 3. each clause keyword in `CLAUSE_KEYWORDS` starts a new line;
//! 4. the result is trimmed.
//!
//! Only whitespace changes. Output is stable under a second pass for input
//! without literals or comments.
use crate::sql::lexer::{LexemeKind, is_whitespace, lex};
use crate::*;

/// Keywords that start a new line, matched case-insensitively as whole words.
pub const CLAUSE_KEYWORDS: [&str; 14] = [
    "FROM", "WHERE", "JOIN", "INNER", "LEFT", "RIGHT", "FULL", "ON", "AND", "OR", "ORDER",
    "GROUP", "HAVING", "LIMIT",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Spaces placed after the newline of a top-level comma break.
    pub indent: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

/// Re-flow SQL text with the default options.
pub fn format(sql: &str) -> String {
    format_with(sql, &FormatOptions::default())
}

/// Pending separator owed before the next piece of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gap {
    None,
    Space,
    Newline,
}

/// Re-flow SQL text.
///
/// ```rust
/// use sqlprism::prelude::*;
///
/// let sql = "select id, 'a,  b' from t  where x=1 and y=2";
/// assert_eq!(
///     format_with(sql, &FormatOptions { indent: 2 }),
///     "select id,\n  'a,  b'\nfrom t\nwhere x=1\nand y=2"
/// );
/// ```
pub fn format_with(sql: &str, options: &FormatOptions) -> String {
    let mut out = String::with_capacity(sql.len() + sql.len() / 4);
    let mut gap = Gap::None;
    // Whitespace seen while `line_start` is set is dropped.
    let mut line_start = true;
    let mut depth = 0usize;
    // End of the last protected span written; trimming never cuts below it.
    let mut floor = 0;

    for lexeme in lex(sql) {
        match lexeme.kind {
            LexemeKind::Whitespace => {
                if !line_start && gap == Gap::None {
                    gap = Gap::Space;
                }
            }
            LexemeKind::Word if is_clause_keyword(lexeme.text) => {
                trim_spaces(&mut out, floor);
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str(lexeme.text);
                gap = Gap::None;
                line_start = false;
            }
            LexemeKind::Punct(',') if depth == 0 => {
                flush(&mut out, gap);
                out.push_str(",\n");
                out.extend(std::iter::repeat_n(' ', options.indent));
                gap = Gap::None;
                line_start = true;
            }
            kind => {
                flush(&mut out, gap);
                out.push_str(lexeme.text);
                gap = Gap::None;
                line_start = false;
                match kind {
                    LexemeKind::Punct('(') => depth += 1,
                    LexemeKind::Punct(')') => depth = depth.saturating_sub(1),
                    LexemeKind::LineComment => gap = Gap::Newline,
                    _ => {}
                }
                if kind.is_protected() {
                    floor = out.len();
                }
            }
        }
    }

    let end = out
        .trim_end_matches(|c: char| c.is_ascii() && is_whitespace(c as u8))
        .len()
        .max(floor);
    out.truncate(end);
    trace!(bytes = sql.len(), formatted = out.len(), "formatted sql");
    out
}

fn is_clause_keyword(word: &str) -> bool {
    CLAUSE_KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(word))
}

fn flush(out: &mut String, gap: Gap) {
    match gap {
        Gap::None => {}
        Gap::Space => out.push(' '),
        Gap::Newline => out.push('\n'),
    }
}

fn trim_spaces(out: &mut String, floor: usize) {
    while out.len() > floor && out.ends_with(' ') {
        out.pop();
    }
}
