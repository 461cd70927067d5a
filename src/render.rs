//! HTML rendering of classified tokens.
use crate::*;

/// Render tokens as an HTML fragment.
///
/// Plain tokens are written escaped; every classified token becomes
/// `<span class="CATEGORY">…</span>` with the category's CSS class. Each token
/// produces exactly one output unit, in order.
pub fn render(tokens: &[Token<'_>]) -> String {
    let mut html = String::with_capacity(tokens.iter().map(|t| t.len() + 32).sum());
    for token in tokens {
        match token.category {
            None => escape_into(&mut html, token.text),
            Some(category) => {
                html.push_str("<span class=\"");
                html.push_str(category.css_class());
                html.push_str("\">");
                escape_into(&mut html, token.text);
                html.push_str("</span>");
            }
        }
    }
    html
}

/// Classify then render in one call.
///
/// ```rust
/// use sqlprism::prelude::*;
///
/// let html = highlight("SELECT 1 < 2", WordSet::keywords(), WordSet::functions());
/// assert_eq!(
///     html,
///     r#"<span class="keyword">SELECT</span> <span class="number">1</span> &lt; <span class="number">2</span>"#
/// );
/// ```
pub fn highlight(sql: &str, keywords: &WordSet, functions: &WordSet) -> String {
    let tokens = classify(sql, keywords, functions);
    let html = render(&tokens);
    trace!(tokens = tokens.len(), html = html.len(), "highlighted sql");
    html
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}
