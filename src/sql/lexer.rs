use std::iter::FusedIterator;

/// Raw lexical unit found by `lex`.
///
/// Comments and string literals are *protected*: they are located before
/// anything else at a given position and their contents are never looked at
/// again, neither by the classifier nor by the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LexemeKind {
    /// `/* ... */`, or `/*` to end of input when unterminated.
    BlockComment,
    /// `--` up to, not including, the next `\r` or `\n`.
    LineComment,
    /// `'...'` with `''` as an escaped quote, or `'` to end of input.
    String,
    /// Maximal run of ASCII whitespace.
    Whitespace,
    /// Maximal run of `[A-Za-z0-9_]`.
    Word,
    /// Any other single character.
    Punct(char),
}

impl LexemeKind {
    pub(crate) fn is_protected(self) -> bool {
        matches!(
            self,
            LexemeKind::BlockComment | LexemeKind::LineComment | LexemeKind::String
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Lexeme<'a> {
    pub kind: LexemeKind,
    pub text: &'a str,
    pub start: usize,
}

/// Single pass O(n) scanner over SQL text.
///
/// Every byte of the input lands in exactly one lexeme, in order. Boundaries
/// only ever fall on ASCII bytes or after a whole character, so slicing is
/// always valid UTF-8. Malformed input (unterminated literal or comment)
/// yields a lexeme running to end of input; scanning never fails.
pub(crate) struct Lexer<'a> {
    sql: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

pub(crate) fn lex(sql: &str) -> Lexer<'_> {
    Lexer {
        sql,
        bytes: sql.as_bytes(),
        pos: 0,
    }
}

pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

pub(crate) fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

impl<'a> Lexer<'a> {
    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn block_comment_end(&self, start: usize) -> usize {
        let body = start + 2;
        self.sql[body..]
            .find("*/")
            .map_or(self.sql.len(), |i| body + i + 2)
    }

    fn line_comment_end(&self, start: usize) -> usize {
        self.sql[start..]
            .find(['\r', '\n'])
            .map_or(self.sql.len(), |i| start + i)
    }

    fn string_end(&self, start: usize) -> usize {
        let mut i = start + 1;
        while let Some(offset) = self.sql[i..].find('\'') {
            let quote = i + offset;
            if self.bytes.get(quote + 1) == Some(&b'\'') {
                i = quote + 2; // escaped quote
                continue;
            }
            return quote + 1;
        }
        self.sql.len()
    }

    fn run_end(&self, start: usize, accept: fn(u8) -> bool) -> usize {
        self.bytes[start..]
            .iter()
            .position(|&b| !accept(b))
            .map_or(self.bytes.len(), |i| start + i)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Lexeme<'a>> {
        let start = self.pos;
        let b = self.peek_at(0)?;

        let (kind, end) = match b {
            b'/' if self.peek_at(1) == Some(b'*') => {
                (LexemeKind::BlockComment, self.block_comment_end(start))
            }
            b'-' if self.peek_at(1) == Some(b'-') => {
                (LexemeKind::LineComment, self.line_comment_end(start))
            }
            b'\'' => (LexemeKind::String, self.string_end(start)),
            b if is_whitespace(b) => (LexemeKind::Whitespace, self.run_end(start, is_whitespace)),
            b if is_word(b) => (LexemeKind::Word, self.run_end(start, is_word)),
            _ => {
                let c = self.sql[start..].chars().next()?;
                (LexemeKind::Punct(c), start + c.len_utf8())
            }
        };

        self.pos = end;
        Some(Lexeme {
            kind,
            text: &self.sql[start..end],
            start,
        })
    }
}

impl FusedIterator for Lexer<'_> {}
