#![cfg(test)]
use crate::testing::{classify_sql, pairs, rejoin, texts_of};
use crate::*;
use rstest::rstest;

const K: Option<Category> = Some(Category::Keyword);
const F: Option<Category> = Some(Category::Function);
const S: Option<Category> = Some(Category::String);
const N: Option<Category> = Some(Category::Number);
const C: Option<Category> = Some(Category::Comment);

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn select_star_with_minimal_keywords() {
        let keywords = WordSet::new(["select", "from"]);
        let tokens = classify("SELECT * FROM t WHERE x = 1", &keywords, &WordSet::default());
        assert_eq!(
            pairs(&tokens),
            vec![
                ("SELECT", K),
                (" * ", None),
                ("FROM", K),
                (" t WHERE x = ", None),
                ("1", N),
            ]
        );
    }

    #[test]
    fn select_star_with_builtin_keywords() {
        let tokens = classify_sql("SELECT * FROM t WHERE x = 1");
        assert_eq!(
            pairs(&tokens),
            vec![
                ("SELECT", K),
                (" * ", None),
                ("FROM", K),
                (" t ", None),
                ("WHERE", K),
                (" x = ", None),
                ("1", N),
            ]
        );
    }

    #[test]
    fn leading_line_comment() {
        let tokens = classify_sql("-- comment\nSELECT 1");
        assert_eq!(
            pairs(&tokens),
            vec![
                ("-- comment", C),
                ("\n", None),
                ("SELECT", K),
                (" ", None),
                ("1", N),
            ]
        );
    }

    #[test]
    fn function_call() {
        let tokens = classify_sql("SELECT COUNT(id) FROM t");
        assert_eq!(
            pairs(&tokens),
            vec![
                ("SELECT", K),
                (" ", None),
                ("COUNT", F),
                ("(id) ", None),
                ("FROM", K),
                (" t", None),
            ]
        );
    }

    #[test]
    fn keyword_inside_string_is_not_highlighted() {
        let tokens = classify_sql("SELECT 'FROM is not a clause here'");
        assert_eq!(
            pairs(&tokens),
            vec![
                ("SELECT", K),
                (" ", None),
                ("'FROM is not a clause here'", S),
            ]
        );
    }

    #[test]
    fn escaped_quote_stays_in_one_literal() {
        let tokens = classify_sql("SELECT 'it''s ok' FROM t");
        assert_eq!(texts_of(&tokens, Category::String), vec!["'it''s ok'"]);
        assert_eq!(texts_of(&tokens, Category::Keyword), vec!["SELECT", "FROM"]);
    }
}

#[cfg(test)]
mod words {
    use super::*;

    #[rstest]
    #[case("select a from b")]
    #[case("SELECT a FROM b")]
    #[case("SeLeCt a FrOm b")]
    fn keywords_are_case_insensitive(#[case] sql: &str) {
        let tokens = classify_sql(sql);
        assert_eq!(texts_of(&tokens, Category::Keyword).len(), 2);
    }

    #[rstest]
    #[case("SELECTed")]
    #[case("from_date")]
    #[case("_select")]
    #[case("select2")]
    fn keywords_match_whole_words_only(#[case] sql: &str) {
        let tokens = classify_sql(sql);
        assert_eq!(pairs(&tokens), vec![(sql, None)]);
    }

    #[rstest]
    #[case("col2")]
    #[case("12abc")]
    #[case("x_1")]
    fn digits_inside_words_are_plain(#[case] sql: &str) {
        assert_eq!(pairs(&classify_sql(sql)), vec![(sql, None)]);
    }

    #[test]
    fn decimal_splits_into_two_numbers() {
        let tokens = classify_sql("3.14");
        assert_eq!(pairs(&tokens), vec![("3", N), (".", None), ("14", N)]);
    }

    #[test]
    fn numbers_next_to_operators() {
        let tokens = classify_sql("a>=10+2");
        assert_eq!(texts_of(&tokens, Category::Number), vec!["10", "2"]);
    }

    #[rstest]
    #[case("COUNT(*)", true)]
    #[case("count (x)", true)]
    #[case("sum\t(x)", true)]
    #[case("COUNT", false)]
    #[case("count x", false)]
    #[case("count\n(x)", false)]
    #[case("count, (x)", false)]
    fn functions_need_an_opening_paren(#[case] sql: &str, #[case] is_function: bool) {
        let tokens = classify_sql(sql);
        assert_eq!(tokens[0].is(Category::Function), is_function, "{sql}");
    }

    #[test]
    fn keyword_wins_over_function() {
        let both = WordSet::new(["left"]);
        let tokens = classify("LEFT(name, 3)", &both, &both);
        assert_eq!(tokens[0].category, K);
    }

    #[test]
    fn custom_word_sets() {
        let keywords = WordSet::new(["match", "return"]);
        let functions = WordSet::new(["id"]);
        let tokens = classify("MATCH (n) RETURN id(n)", &keywords, &functions);
        assert_eq!(texts_of(&tokens, Category::Keyword), vec!["MATCH", "RETURN"]);
        assert_eq!(texts_of(&tokens, Category::Function), vec!["id"]);
    }

    #[test]
    fn empty_word_sets_still_find_literals() {
        let empty = WordSet::default();
        let tokens = classify("SELECT 'a', 1 -- c", &empty, &empty);
        assert_eq!(
            pairs(&tokens),
            vec![
                ("SELECT ", None),
                ("'a'", S),
                (", ", None),
                ("1", N),
                (" ", None),
                ("-- c", C),
            ]
        );
    }
}

#[cfg(test)]
mod protected_spans {
    use super::*;

    #[test]
    fn block_comment_hides_keywords_and_numbers() {
        let tokens = classify_sql("SELECT /* FROM 42 COUNT(x) */ 1");
        assert_eq!(
            pairs(&tokens),
            vec![
                ("SELECT", K),
                (" ", None),
                ("/* FROM 42 COUNT(x) */", C),
                (" ", None),
                ("1", N),
            ]
        );
    }

    #[test]
    fn unterminated_block_comment_runs_to_end() {
        let tokens = classify_sql("SELECT 1 /* FROM t\nWHERE");
        assert_eq!(tokens.last().unwrap().text, "/* FROM t\nWHERE");
        assert_eq!(tokens.last().unwrap().category, C);
    }

    #[test]
    fn unterminated_string_runs_to_end() {
        let tokens = classify_sql("SELECT 'oops FROM t");
        assert_eq!(pairs(&tokens), vec![("SELECT", K), (" ", None), ("'oops FROM t", S)]);
    }

    #[test]
    fn line_comment_leaves_newline_plain() {
        let tokens = classify_sql("1 -- FROM\n2");
        assert_eq!(
            pairs(&tokens),
            vec![("1", N), (" ", None), ("-- FROM", C), ("\n", None), ("2", N)]
        );
    }

    #[test]
    fn line_comment_leaves_crlf_plain() {
        let tokens = classify_sql("-- c\r\nSELECT 1");
        assert_eq!(
            pairs(&tokens),
            vec![("-- c", C), ("\r\n", None), ("SELECT", K), (" ", None), ("1", N)]
        );
    }

    #[test]
    fn comment_markers_inside_string() {
        let tokens = classify_sql("SELECT '-- not /* a comment'");
        assert_eq!(texts_of(&tokens, Category::String), vec!["'-- not /* a comment'"]);
        assert!(texts_of(&tokens, Category::Comment).is_empty());
    }

    #[test]
    fn quote_inside_comment() {
        let tokens = classify_sql("-- it's\nSELECT 'x'");
        assert_eq!(texts_of(&tokens, Category::Comment), vec!["-- it's"]);
        assert_eq!(texts_of(&tokens, Category::String), vec!["'x'"]);
    }

    #[test]
    fn adjacent_strings() {
        let tokens = classify_sql("'a' 'b'");
        assert_eq!(pairs(&tokens), vec![("'a'", S), (" ", None), ("'b'", S)]);
    }
}

#[cfg(test)]
mod invariants {
    use super::*;

    const CORPUS: &[&str] = &[
        "",
        " ",
        "SELECT * FROM t WHERE x = 1",
        "select e.name, d.name from employees e inner join departments d on e.dept_id = d.id",
        "SELECT 'it''s ok' FROM t",
        "SELECT COUNT(*), SUM(price) FROM orders GROUP BY customer_id HAVING COUNT(*) > 5",
        "/* header */\n-- note\nSELECT 1; /* open",
        "WITH RECURSIVE cte AS (SELECT 1 UNION ALL SELECT n + 1 FROM cte WHERE n < 10) SELECT * FROM cte",
        "SELECT 'unterminated FROM t",
        "SELECT naïve, 'ünïcödé', 42 -- ✓ done",
        "a''b'c'd--e/*f*/g",
        "--\n--\n/**/''",
    ];

    #[test]
    fn tokens_rejoin_to_input() {
        for sql in CORPUS {
            assert_eq!(&rejoin(&classify_sql(sql)), sql);
        }
    }

    #[test]
    fn spans_partition_input() {
        for sql in CORPUS {
            let tokens = classify_sql(sql);
            let mut expected_start = 0;
            for token in &tokens {
                assert!(!token.is_empty(), "empty token in {sql:?}");
                assert_eq!(token.start, expected_start, "gap or overlap in {sql:?}");
                assert_eq!(&sql[token.start..token.end], token.text);
                expected_start = token.end;
            }
            assert_eq!(expected_start, sql.len());
        }
    }

    #[test]
    fn plain_tokens_are_never_adjacent() {
        for sql in CORPUS {
            let tokens = classify_sql(sql);
            for pair in tokens.windows(2) {
                assert!(
                    !(pair[0].is_plain() && pair[1].is_plain()),
                    "unmerged plain text in {sql:?}"
                );
            }
        }
    }

    #[test]
    fn nothing_starts_inside_protected_spans() {
        for sql in CORPUS {
            let tokens = classify_sql(sql);
            let protected: Vec<_> = tokens
                .iter()
                .filter(|t| t.category.is_some_and(Category::is_protected))
                .collect();
            for token in tokens.iter().filter(|t| !t.is_plain()) {
                for span in &protected {
                    if span.start != token.start {
                        assert!(
                            !span.contains(token.start),
                            "{:?} starts inside {:?} in {sql:?}",
                            token.text,
                            span.text
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(classify_sql("").is_empty());
    }
}
