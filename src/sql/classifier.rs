use crate::sql::{
    category::Category,
    lexer::{Lexeme, LexemeKind, Lexer, lex},
    token::Token,
    vocabulary::WordSet,
};
use crate::trace;
use itertools::{Itertools as _, MultiPeek};

/// Classify SQL text into highlighted tokens.
///
/// One left-to-right scan decides every classification, with the following
/// precedence at each position:
/// 1. block comment, line comment and string literal (protected spans);
/// 2. whole-word digit runs as `Number`;
/// 3. words in `keywords` as `Keyword`;
/// 4. words in `functions` as `Function`, only when the next character is
///    `(` (spaces or tabs in between are allowed);
/// 5. everything else as plain text, merged into as few tokens as possible.
///
/// Because protected spans are consumed whole, a keyword inside a string or
/// comment is never highlighted.
///
/// Guarantees:
/// - Joining every token's `text` in order yields `sql` exactly.
/// - Tokens are non-empty and their spans are contiguous.
/// - Never panics and never fails; unterminated literals or comments run to
///   end of input.
///
/// ```rust
/// use sqlprism::prelude::*;
///
/// let tokens = classify("SELECT 'FROM' -- x", WordSet::keywords(), WordSet::functions());
/// let categories: Vec<_> = tokens.iter().map(|t| (t.text, t.category)).collect();
/// assert_eq!(categories, vec![
///     ("SELECT", Some(Category::Keyword)),
///     (" ", None),
///     ("'FROM'", Some(Category::String)),
///     (" ", None),
///     ("-- x", Some(Category::Comment)),
/// ]);
/// ```
pub fn classify<'a>(sql: &'a str, keywords: &WordSet, functions: &WordSet) -> Vec<Token<'a>> {
    let mut out = Vec::new();
    let mut plain_start: Option<usize> = None;
    let mut lexemes = lex(sql).multipeek();

    while let Some(lexeme) = lexemes.next() {
        let category = match lexeme.kind {
            LexemeKind::BlockComment | LexemeKind::LineComment => Some(Category::Comment),
            LexemeKind::String => Some(Category::String),
            LexemeKind::Word => word_category(lexeme.text, keywords, functions, &mut lexemes),
            LexemeKind::Whitespace | LexemeKind::Punct(_) => None,
        };

        let Some(category) = category else {
            plain_start.get_or_insert(lexeme.start);
            continue;
        };
        if let Some(start) = plain_start.take() {
            out.push(Token::plain(&sql[start..lexeme.start], start));
        }
        out.push(Token::new(lexeme.text, Some(category), lexeme.start));
    }

    if let Some(start) = plain_start {
        out.push(Token::plain(&sql[start..], start));
    }

    trace!(bytes = sql.len(), tokens = out.len(), "classified sql");
    out
}

fn word_category(
    word: &str,
    keywords: &WordSet,
    functions: &WordSet,
    rest: &mut MultiPeek<Lexer<'_>>,
) -> Option<Category> {
    if word.bytes().all(|b| b.is_ascii_digit()) {
        return Some(Category::Number);
    }
    if keywords.contains(word) {
        return Some(Category::Keyword);
    }
    if functions.contains(word) && opens_call(rest) {
        return Some(Category::Function);
    }
    None
}

/// True if the upcoming lexemes are `(`, optionally preceded by spaces/tabs.
fn opens_call(rest: &mut MultiPeek<Lexer<'_>>) -> bool {
    let mut next: Option<Lexeme<'_>> = rest.peek().copied();
    if next.is_some_and(|l| {
        l.kind == LexemeKind::Whitespace && l.text.bytes().all(|b| b == b' ' || b == b'\t')
    }) {
        next = rest.peek().copied();
    }
    rest.reset_peek();
    next.is_some_and(|l| l.kind == LexemeKind::Punct('('))
}
