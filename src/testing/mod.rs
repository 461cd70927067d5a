#![cfg(test)]
use crate::*;
use itertools::Itertools as _;
pub use rstest::*;

pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

/// Classify with the built-in vocabulary.
pub(crate) fn classify_sql(sql: &str) -> Vec<Token<'_>> {
    common_init();
    classify(sql, WordSet::keywords(), WordSet::functions())
}

/// `(text, category)` pairs, the shape most assertions compare against.
pub(crate) fn pairs<'a>(tokens: &[Token<'a>]) -> Vec<(&'a str, Option<Category>)> {
    tokens.iter().map(|t| (t.text, t.category)).collect()
}

/// Texts of every token carrying `category`, in order.
pub(crate) fn texts_of<'a>(tokens: &[Token<'a>], category: Category) -> Vec<&'a str> {
    tokens
        .iter()
        .filter(|t| t.is(category))
        .map(|t| t.text)
        .collect()
}

pub(crate) fn rejoin(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| t.text).join("")
}

mod helper_tests {
    use super::*;

    #[test]
    fn rejoin_restores_input() {
        let sql = "SELECT 1";
        assert_eq!(rejoin(&classify_sql(sql)), sql);
    }

    #[test]
    fn texts_of_filters_by_category() {
        let tokens = classify_sql("SELECT a FROM b");
        assert_eq!(texts_of(&tokens, Category::Keyword), vec!["SELECT", "FROM"]);
        assert!(texts_of(&tokens, Category::String).is_empty());
    }
}
