//! contains(), split() and match() tests

mod common;

use std::rc::Rc;

use common::{Scripted, init_logging};
use jlib_core::functions::{contains, match_pattern, split};
use jlib_core::matcher::{RegexMatcher, extract_matches};
use jlib_core::{JlibError, Pattern};
use serde_json::json;

fn regex(pattern: &str) -> Pattern {
    Pattern::Matcher(Rc::new(RegexMatcher::new(pattern).expect("test regex should compile")))
}

#[cfg(test)]
mod contains_tests {
    use super::*;

    #[test]
    fn test_literal_containment() {
        assert!(contains("hello world", &Pattern::from("o w")).expect("contains should succeed"));
        assert!(!contains("hello world", &Pattern::from("xyz")).expect("contains should succeed"));
        assert!(contains("anything", &Pattern::from("")).expect("empty literal is contained"));
    }

    #[test]
    fn test_matcher_without_matches_stops_after_one_call() {
        init_logging();
        let matcher = Scripted::new(Vec::new());
        let found = contains("subject", &matcher.pattern()).expect("contains should succeed");
        assert!(!found);
        assert_eq!(matcher.calls(), 1);
    }

    #[test]
    fn test_matcher_short_circuits_after_first_match() {
        let subject = "a a a";
        let matcher = Scripted::spans(subject, &[(0, 1), (2, 3), (4, 5)]);
        let found = contains(subject, &matcher.pattern()).expect("contains should succeed");
        assert!(found);
        assert_eq!(matcher.calls(), 1, "no continuation should be called");
    }

    #[test]
    fn test_regex_containment() {
        assert!(contains("order #1234", &regex(r"#\d+")).expect("contains should succeed"));
        assert!(!contains("order #", &regex(r"#\d+")).expect("contains should succeed"));
    }
}

#[cfg(test)]
mod split_tests {
    use super::*;

    #[test]
    fn test_literal_separator() {
        let parts = split("a,b,,c", &Pattern::from(","), None).expect("split should succeed");
        assert_eq!(parts, vec!["a", "b", "", "c"]);
    }

    #[test]
    fn test_missing_separator_yields_whole_subject() {
        let parts = split("abc", &Pattern::from("x"), None).expect("split should succeed");
        assert_eq!(parts, vec!["abc"]);
    }

    #[test]
    fn test_empty_separator_splits_characters() {
        let parts = split("héllo", &Pattern::from(""), None).expect("split should succeed");
        assert_eq!(parts, vec!["h", "é", "l", "l", "o"]);

        let parts = split("", &Pattern::from(""), None).expect("split should succeed");
        assert!(parts.is_empty());
    }

    #[test]
    fn test_literal_limit_truncates() {
        let parts = split("a,b,c", &Pattern::from(","), Some(2)).expect("split should succeed");
        assert_eq!(parts, vec!["a", "b"]);

        let parts = split("a,b,c", &Pattern::from(","), Some(0)).expect("split should succeed");
        assert!(parts.is_empty());

        let parts = split("a,b,c", &Pattern::from(","), Some(10)).expect("split should succeed");
        assert_eq!(parts.len(), 3);
    }

    #[test]
    fn test_negative_limit_is_rejected() {
        let result = split("a,b", &Pattern::from(","), Some(-1));
        assert!(matches!(result, Err(JlibError::Argument(_))));
    }

    #[test]
    fn test_regex_separator() {
        let parts = split("one, two,three ,  four", &regex(r"\s*,\s*"), None)
            .expect("split should succeed");
        assert_eq!(parts, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_regex_separator_with_multibyte_text() {
        let parts = split("α-β—γ", &regex("[-—]"), None).expect("split should succeed");
        assert_eq!(parts, vec!["α", "β", "γ"]);
    }

    #[test]
    fn test_matcher_limit_enumerates_everything_first() {
        let subject = "a;b;c;d";
        let matcher = Scripted::spans(subject, &[(1, 2), (3, 4), (5, 6)]);

        let parts = split(subject, &matcher.pattern(), Some(1)).expect("split should succeed");

        assert_eq!(parts, vec!["a"]);
        // All three matches and the terminal call, despite the limit
        assert_eq!(matcher.calls(), 4);
    }

    #[test]
    fn test_rejoining_with_separator_text_reconstructs_subject() {
        let subject = "key = value;  other=thing ;last= one";
        let separator = RegexMatcher::new(r"\s*[=;]\s*").expect("test regex should compile");

        let parts = split(subject, &Pattern::Matcher(Rc::new(separator.clone())), None)
            .expect("split should succeed");
        let separators =
            extract_matches(&separator, subject, None).expect("driver should succeed");

        assert_eq!(parts.len(), separators.len() + 1);
        let mut rebuilt = parts[0].clone();
        for (sep, part) in separators.iter().zip(&parts[1..]) {
            rebuilt.push_str(&sep.value);
            rebuilt.push_str(part);
        }
        assert_eq!(rebuilt, subject);
    }
}

#[cfg(test)]
mod match_tests {
    use super::*;

    #[test]
    fn test_match_records() {
        let matcher = RegexMatcher::new(r"(\d)(\d)?").expect("test regex should compile");
        let result = match_pattern("a1b22", &matcher, None).expect("match should succeed");
        assert_eq!(
            result,
            vec![
                json!({"match": "1", "index": 1, "groups": ["1", ""]}),
                json!({"match": "22", "index": 3, "groups": ["2", "2"]}),
            ]
        );
    }

    #[test]
    fn test_match_limit() {
        let matcher = RegexMatcher::new(r"\d").expect("test regex should compile");
        let result = match_pattern("1 2 3", &matcher, Some(2)).expect("match should succeed");
        assert_eq!(result.len(), 2);

        let result = match_pattern("1 2 3", &matcher, Some(0)).expect("match should succeed");
        assert!(result.is_empty());
    }

    #[test]
    fn test_match_negative_limit() {
        let matcher = RegexMatcher::new(r"\d").expect("test regex should compile");
        let result = match_pattern("1 2 3", &matcher, Some(-3));
        assert!(matches!(result, Err(JlibError::Argument(_))));
    }

    #[test]
    fn test_match_index_counts_characters() {
        let matcher = RegexMatcher::new("wörld").expect("test regex should compile");
        let result = match_pattern("héllo wörld", &matcher, None).expect("match should succeed");
        assert_eq!(result, vec![json!({"match": "wörld", "index": 6, "groups": []})]);
    }
}
