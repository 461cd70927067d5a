//! Lexical categories a highlighted token can carry.
//!
//! The set is closed: anything the classifier does not place in one of these
//! categories is plain text (`Option<Category>::None` on a `Token`). The
//! display form doubles as the CSS class emitted by the renderer, so existing
//! stylesheets keyed on `keyword`, `function`, `string`, `number` and
//! `comment` keep working.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Category {
    /// Reserved SQL word, e.g. `SELECT`.
    #[display("keyword")]
    Keyword,
    /// Builtin function name directly followed by `(`.
    #[display("function")]
    Function,
    /// Single-quoted literal, including its quotes.
    #[display("string")]
    String,
    /// Whole-word run of decimal digits.
    #[display("number")]
    Number,
    /// `-- line` or `/* block */` comment.
    #[display("comment")]
    Comment,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Category::Keyword,
        Category::Function,
        Category::String,
        Category::Number,
        Category::Comment,
    ];

    /// CSS class name used when rendering this category.
    pub const fn css_class(self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Function => "function",
            Category::String => "string",
            Category::Number => "number",
            Category::Comment => "comment",
        }
    }

    /// Strings and comments are never re-classified internally.
    pub const fn is_protected(self) -> bool {
        matches!(self, Category::String | Category::Comment)
    }
}
