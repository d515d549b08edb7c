//! Integration tests for the uppercase-terms rule
//!
//! Runs the rule through the full parse and dispatch pipeline with `RuleTester`.

use serde_json::json;
use termlint_core::{ExpectedError, InvalidCase, Linter, LinterConfig, RuleOption, RuleTester};
use termlint_rule_uppercase_terms::create;

fn found(term: &str) -> ExpectedError {
    ExpectedError::new(format!(
        "Found term \"{}\", use \"{}\" instead.",
        term,
        term.to_uppercase()
    ))
}

mod valid_cases {
    use super::*;

    #[test]
    fn allows_term_in_link() {
        RuleTester::new(create)
            .run(&["We can link to a literal param [id](#id)."], &[])
            .unwrap();
    }

    #[test]
    fn allows_uppercase_term() {
        RuleTester::new(create)
            .run(&["We can refer to its ID."], &[])
            .unwrap();
    }

    #[test]
    fn allows_term_in_inline_code() {
        RuleTester::new(create)
            .run(&["Using `id` in backticks should be fine."], &[])
            .unwrap();
    }

    #[test]
    fn allows_term_deep_inside_link() {
        RuleTester::new(create)
            .run(&["See [**the _id_ field**](#fields)."], &[])
            .unwrap();
    }

    #[test]
    fn allows_empty_term_list() {
        RuleTester::new(create)
            .with_options(json!({ "terms": [] }))
            .run(&["id url api"], &[])
            .unwrap();
    }

    #[test]
    fn ignores_fenced_code_blocks() {
        RuleTester::new(create)
            .run(&["```\nlet id = 1;\n```"], &[])
            .unwrap();
    }
}

mod invalid_cases {
    use super::*;

    #[test]
    fn reports_lowercase_term_in_sentence() {
        RuleTester::new(create)
            .run(
                &[],
                &[
                    InvalidCase::new(
                        "We shouldn't be able to use id lowercase in a sentence.",
                        vec![found("id").at(1, 29)],
                    ),
                    InvalidCase::new(
                        "We shouldn’t be able to use id lowercase in a sentence.",
                        vec![found("id").at(1, 29)],
                    ),
                ],
            )
            .unwrap();
    }

    #[test]
    fn reports_term_inside_word() {
        // Terms are not anchored to word boundaries.
        RuleTester::new(create)
            .run(
                &[],
                &[InvalidCase::new(
                    "The use of the term *in* a word should be okay, like video.",
                    vec![found("id").at(1, 55)],
                )],
            )
            .unwrap();
    }

    #[test]
    fn reports_once_per_node_and_term() {
        RuleTester::new(create)
            .run(
                &[],
                &[InvalidCase::new(
                    "id, id and id.\n\nA second paragraph with an id.",
                    vec![found("id").at(1, 1), found("id").at(3, 28)],
                )],
            )
            .unwrap();
    }

    #[test]
    fn reports_text_next_to_link() {
        RuleTester::new(create)
            .run(
                &[],
                &[InvalidCase::new(
                    "An id next to [a link](#id).",
                    vec![found("id").at(1, 4)],
                )],
            )
            .unwrap();
    }

    #[test]
    fn reports_each_configured_term() {
        RuleTester::new(create)
            .with_options(json!({ "terms": ["url", "id"] }))
            .run(
                &[],
                &[InvalidCase::new(
                    "Send the id to the url.",
                    vec![found("id").at(1, 10), found("url").at(1, 20)],
                )],
            )
            .unwrap();
    }

    #[test]
    fn treats_terms_as_patterns() {
        RuleTester::new(create)
            .with_options(json!({ "terms": ["i."] }))
            .run(
                &[],
                &[InvalidCase::new("Look at it.", vec![found("i.").at(1, 9)])],
            )
            .unwrap();
    }

    #[test]
    fn supports_look_ahead_terms() {
        RuleTester::new(create)
            .with_options(json!({ "terms": ["id(?!e)"] }))
            .run(
                &["The use of the term *in* a word should be okay, like video."],
                &[InvalidCase::new("Pass an id.", vec![found("id(?!e)").at(1, 9)])],
            )
            .unwrap();
    }

    #[test]
    fn reports_in_plain_text() {
        RuleTester::new(create)
            .with_extension("txt")
            .run(
                &[],
                &[InvalidCase::new(
                    "Using `id` in backticks.",
                    vec![found("id").at(1, 8)],
                )],
            )
            .unwrap();
    }
}

mod linter {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn same_document_twice_gives_same_diagnostics() {
        let linter = Linter::new(LinterConfig::default()).unwrap();
        let source = "An id.\n\n* a list item with an id\n* [id](#id)";

        let first = linter.lint_text(source, "md").unwrap();
        let second = linter.lint_text(source, "md").unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn config_file_options_reach_the_rule() {
        let config = LinterConfig::from_json(
            r#"{
                // only flag "api"
                "rules": { "uppercase-terms": { "terms": ["api"] } }
            }"#,
        )
        .unwrap();
        assert_eq!(
            config.rules["uppercase-terms"],
            RuleOption::Options(json!({ "terms": ["api"] }))
        );

        let diagnostics = Linter::new(config)
            .unwrap()
            .lint_text("The id and the api.", "md")
            .unwrap();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Found term \"api\", use \"API\" instead.");
    }
}
