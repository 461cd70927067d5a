//! Lexical classification of SQL text for highlighting.
//!
//! This module groups the building blocks of the highlighter. Nothing here
//! parses SQL structurally; it only decides, for every byte of the input,
//! which display category it belongs to.
//!
//! Modules:
//! - `category`   : Closed set of highlight categories (keyword, function, ...).
//! - `token`      : Token struct pairing a text slice with its category and span.
//! - `vocabulary` : Case-insensitive `WordSet`s and the built-in SQL word lists.
//! - `lexer`      : Single pass scanner locating comments, strings, words.
//! - `classifier` : `classify`, turning the lexer output into tokens.
//!
//! Design Principles:
//! 1. Total over all input: malformed SQL degrades, it never errors.
//! 2. Lossless: tokens borrow from and reconstruct the input exactly.
//! 3. Strings and comments are located first and never re-examined.
//! 4. Word lists are passed in explicitly, never read from hidden globals.
//!
//! Public Re‑exports:
//! You can `use sqlprism::{classify, Token, Category, WordSet};` directly,
//! or pull everything via the `prelude` submodule.
//!
//! Example:
//! ```rust
//! use sqlprism::prelude::*;
//!
//! let tokens = classify("SELECT a FROM t", WordSet::keywords(), WordSet::functions());
//! assert!(tokens.iter().any(|t| t.is(Category::Keyword) && t.text == "FROM"));
//! assert!(tokens.iter().any(|t| t.is_plain() && t.text == " a "));
//! ```

pub mod category;
pub mod classifier;
mod classifier_tests;
pub(crate) mod lexer;
pub mod token;
pub mod vocabulary;

pub use category::Category;
pub use classifier::classify;
pub use token::Token;
pub use vocabulary::{SQL_FUNCTIONS, SQL_KEYWORDS, WordSet};

/// Convenience prelude re‑exporting the most commonly used items.
///
/// Import with:
/// `use sqlprism::prelude::*;`
pub mod prelude {
    pub use super::{Category, Token, WordSet, classify};
    pub use crate::formatter::{FormatOptions, format, format_with};
    pub use crate::render::{highlight, render};
}
