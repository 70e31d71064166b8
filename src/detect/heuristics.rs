//! Regex heuristics that catch skills the vocabulary misses.
//!
//! These are approximate by design. Each rule is an independent strategy
//! so vocabularies and heuristics can be swapped without touching the
//! orchestration logic.

use once_cell::sync::Lazy;
use regex::Regex;

/// A pattern-matching strategy producing candidate skill tokens.
pub trait TokenRule: Send + Sync {
    fn find(&self, text: &str) -> Vec<String>;
}

/// Short, ambiguous language names (`go`, `r`, `dart`) and symbol-bearing
/// ones (`c++`, `c#`). The regex over-matches; isolated-word validation
/// happens against the surrounding characters since `\b` cannot sit after
/// `+` or `#`.
static LANG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)c\+\+|c#|go|r|dart").unwrap());

/// Mixed-case compound words such as `NextJS` or `SalesForce`: an initial
/// capital, a lowercase run, then another capital inside the same token.
static CAMEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+[A-Z]\w*").unwrap());

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

pub struct LanguageTokenRule;

impl TokenRule for LanguageTokenRule {
    fn find(&self, text: &str) -> Vec<String> {
        LANG_RE
            .find_iter(text)
            .filter(|m| {
                let before_ok = text[..m.start()]
                    .chars()
                    .next_back()
                    .map(|c| !is_word_char(c))
                    .unwrap_or(true);
                // A following word char means we are inside a longer token
                // ("go" in "google"); a following +/# means a longer symbol
                // name we did not fully capture.
                let after_ok = text[m.end()..]
                    .chars()
                    .next()
                    .map(|c| !is_word_char(c) && c != '+' && c != '#')
                    .unwrap_or(true);
                before_ok && after_ok
            })
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

pub struct CamelCompoundRule;

impl TokenRule for CamelCompoundRule {
    fn find(&self, text: &str) -> Vec<String> {
        CAMEL_RE
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_rule_finds_isolated_tokens() {
        let rule = LanguageTokenRule;
        let hits = rule.find("Fluent in Go, R and C++ since 2015.");
        assert!(hits.contains(&"Go".to_string()));
        assert!(hits.contains(&"R".to_string()));
        assert!(hits.contains(&"C++".to_string()));
    }

    #[test]
    fn language_rule_rejects_embedded_tokens() {
        let rule = LanguageTokenRule;
        assert!(rule.find("worked at google on cargo tooling").is_empty());
        assert!(rule.find("category theory").is_empty());
    }

    #[test]
    fn language_rule_matches_case_insensitively() {
        let rule = LanguageTokenRule;
        let hits = rule.find("c# and GO");
        assert!(hits.contains(&"c#".to_string()));
        assert!(hits.contains(&"GO".to_string()));
    }

    #[test]
    fn camel_rule_finds_compound_words() {
        let rule = CamelCompoundRule;
        let hits = rule.find("Built dashboards in SalesForce and NextJS apps.");
        assert_eq!(hits, vec!["SalesForce".to_string(), "NextJS".to_string()]);
    }

    #[test]
    fn camel_rule_needs_a_second_interior_capital() {
        // Single-capital names like "Salesforce" are the vocabulary's job.
        let rule = CamelCompoundRule;
        assert!(rule.find("Salesforce").is_empty());
    }

    #[test]
    fn camel_rule_ignores_plain_words() {
        let rule = CamelCompoundRule;
        assert!(rule.find("Experienced engineer, UPPERCASE and lowercase").is_empty());
    }

    #[test]
    fn camel_rule_does_not_start_mid_token() {
        let rule = CamelCompoundRule;
        assert!(rule.find("ABCdefGhi").is_empty());
    }
}
