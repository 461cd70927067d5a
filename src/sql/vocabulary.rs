//! Case-insensitive word sets used to recognise keywords and builtin functions.
//!
//! The classifier never reaches for hidden globals: callers pass the sets they
//! want to highlight against. `WordSet::keywords()` and `WordSet::functions()`
//! expose the built-in SQL vocabulary as process-wide read-only values; custom
//! sets can be collected from any iterator of strings.
//!
//! Design notes:
//! - Words are stored lower-cased (ASCII) and looked up by lower-casing the
//!   candidate once, so `select`, `SELECT` and `SeLeCt` all match.
//! - Only ASCII case folding is applied; SQL reserved words are ASCII.
use std::{collections::HashSet, sync::LazyLock};

/// Reserved words highlighted as `keyword` by default.
pub const SQL_KEYWORDS: &[&str] = &[
    "add", "all", "alter", "and", "any", "as", "asc", "begin", "between", "by", "cascade",
    "case", "check", "column", "commit", "constraint", "create", "cross", "database",
    "default", "delete", "desc", "distinct", "drop", "else", "end", "except", "exists",
    "fetch", "first", "foreign", "from", "full", "grant", "group", "having", "if", "in",
    "index", "inner", "insert", "intersect", "into", "is", "join", "key", "last", "left",
    "like", "limit", "minus", "natural", "next", "not", "null", "nulls", "offset", "on",
    "only", "or", "order", "outer", "over", "partition", "primary", "procedure",
    "recursive", "references", "revoke", "right", "rollback", "row", "rows", "select",
    "set", "table", "then", "top", "transaction", "trigger", "truncate", "union", "unique",
    "update", "using", "values", "view", "when", "where", "window", "with",
];

/// Builtin function names highlighted as `function` when followed by `(`.
pub const SQL_FUNCTIONS: &[&str] = &[
    "abs", "avg", "cast", "ceil", "ceiling", "char_length", "coalesce", "concat", "count",
    "cume_dist", "current_date", "current_timestamp", "date", "date_trunc", "dateadd",
    "datediff", "day", "dense_rank", "extract", "first_value", "floor", "getdate",
    "group_concat", "ifnull", "isnull", "lag", "last_value", "lead", "len", "length",
    "listagg", "lower", "ltrim", "max", "min", "mod", "month", "now", "ntile", "nullif",
    "nvl", "percent_rank", "power", "rank", "replace", "round", "row_number", "rtrim",
    "sqrt", "string_agg", "substr", "substring", "sum", "to_char", "to_date", "trim",
    "upper", "year",
];

/// An immutable, case-insensitive set of words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Build a set from any list of words, in any casing.
    pub fn new<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
        words.into_iter().collect()
    }

    /// Built-in SQL keywords, shared read-only for the process lifetime.
    pub fn keywords() -> &'static WordSet {
        static KEYWORDS: LazyLock<WordSet> = LazyLock::new(|| WordSet::new(SQL_KEYWORDS));
        &KEYWORDS
    }

    /// Built-in SQL function names, shared read-only for the process lifetime.
    pub fn functions() -> &'static WordSet {
        static FUNCTIONS: LazyLock<WordSet> = LazyLock::new(|| WordSet::new(SQL_FUNCTIONS));
        &FUNCTIONS
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_ascii_lowercase().as_str())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }
}
