//! Token model pairing a slice of the input with its `Category`.
//!
//! A `Token` borrows its text from the SQL string given to the classifier and
//! records the byte span it came from. Tokens produced by one `classify` call
//! partition the input: spans are contiguous, non-empty and in order, so
//! joining every `text` gives the input back unchanged.
use crate::sql::category::Category;

/// A classified slice of SQL text with its inclusive start and exclusive end
/// byte offsets.
///
/// Invariants:
/// - `end == start + text.len()`
/// - `[start, end)` is a valid slice range of the original input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub category: Option<Category>,
    pub start: usize,
    pub end: usize,
}

impl<'a> Token<'a> {
    /// Construct a token for `text` found at byte offset `start`.
    pub const fn new(text: &'a str, category: Option<Category>, start: usize) -> Self {
        Self {
            text,
            category,
            start,
            end: start + text.len(),
        }
    }

    /// Construct an unclassified token.
    pub const fn plain(text: &'a str, start: usize) -> Self {
        Self::new(text, None, start)
    }

    /// Byte length of this token (`end - start`).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True if the token's length is zero. Never true for classifier output.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_plain(&self) -> bool {
        self.category.is_none()
    }

    /// Returns true if this token carries the given category.
    pub fn is(&self, category: Category) -> bool {
        self.category == Some(category)
    }

    /// Returns true if the byte offset lies within this token's span.
    ///
    /// NOTE: End is exclusive, so `offset == end` returns false.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Convenience: convert to a `(start, end)` tuple.
    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}
