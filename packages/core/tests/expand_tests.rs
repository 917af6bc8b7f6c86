//! `$` token expansion tests

use jlib_core::MatchRecord;
use jlib_core::functions::expand_replacement;

fn record(value: &str, groups: &[&str]) -> MatchRecord {
    MatchRecord {
        value: value.to_string(),
        start: 0,
        end: value.chars().count(),
        groups: groups.iter().map(|g| (*g).to_string()).collect(),
    }
}

#[cfg(test)]
mod expand_tests {
    use super::*;

    #[test]
    fn test_full_match_and_group() {
        assert_eq!(expand_replacement("$0-$1", &record("X", &["Y"])), "X-Y");
    }

    #[test]
    fn test_escaped_dollar() {
        assert_eq!(expand_replacement("$$1", &record("X", &["Y"])), "$1");
        assert_eq!(expand_replacement("$$$1", &record("X", &["Y"])), "$Y");
    }

    #[test]
    fn test_trailing_dollar() {
        assert_eq!(expand_replacement("a$", &record("X", &[])), "a$");
    }

    #[test]
    fn test_dollar_before_other_character() {
        assert_eq!(expand_replacement("$x $ y", &record("X", &["Y"])), "$x $ y");
    }

    #[test]
    fn test_zero_consumes_one_digit() {
        assert_eq!(expand_replacement("$01", &record("X", &["Y"])), "X1");
    }

    #[test]
    fn test_out_of_range_group_keeps_digits() {
        assert_eq!(expand_replacement("$2", &record("X", &["Y"])), "$2");
        assert_eq!(expand_replacement("[$9]", &record("X", &[])), "[$9]");
    }

    #[test]
    fn test_longest_valid_prefix_wins() {
        let groups: Vec<String> = (1..=12).map(|i| format!("g{i}")).collect();
        let many = MatchRecord {
            value: "X".to_string(),
            start: 0,
            end: 1,
            groups,
        };
        assert_eq!(expand_replacement("$12", &many), "g12");
        assert_eq!(expand_replacement("$123", &many), "g123");
        assert_eq!(expand_replacement("$13", &many), "g13");

        let few = record("X", &["a", "b", "c"]);
        assert_eq!(expand_replacement("$12", &few), "a2");
        assert_eq!(expand_replacement("$31", &few), "c1");
    }

    #[test]
    fn test_multibyte_text_passes_through() {
        assert_eq!(expand_replacement("é$1ü", &record("X", &["ß"])), "éßü");
    }

    #[test]
    fn test_no_tokens() {
        assert_eq!(expand_replacement("plain", &record("X", &["Y"])), "plain");
        assert_eq!(expand_replacement("", &record("X", &["Y"])), "");
    }
}
