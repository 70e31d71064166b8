use std::collections::HashSet;

use aho_corasick::AhoCorasick;
use once_cell::sync::OnceCell;

use crate::detect::heuristics::{CamelCompoundRule, LanguageTokenRule, TokenRule};
use crate::error::{Error, Result};
use crate::vocabulary::SkillVocabulary;

/// Matched tokens longer than this are over-greedy false positives.
const MAX_SKILL_LEN: usize = 40;

/// Hybrid skill detector: case-insensitive vocabulary phrase matching plus
/// regex heuristics for tokens the vocabulary misses.
///
/// The phrase automaton is expensive to build, so it is compiled lazily on
/// first use and shared read-only afterwards. A detector is immutable; a
/// different vocabulary means constructing a new detector, never mutating
/// this one in place.
pub struct SkillDetector {
    vocabulary: SkillVocabulary,
    matcher: OnceCell<AhoCorasick>,
    rules: Vec<Box<dyn TokenRule>>,
}

impl SkillDetector {
    pub fn new(vocabulary: SkillVocabulary) -> Self {
        Self {
            vocabulary,
            matcher: OnceCell::new(),
            rules: vec![Box::new(LanguageTokenRule), Box::new(CamelCompoundRule)],
        }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    fn matcher(&self) -> Result<&AhoCorasick> {
        self.matcher.get_or_try_init(|| {
            let patterns: Vec<&str> = self.vocabulary.phrases().collect();
            AhoCorasick::builder()
                .ascii_case_insensitive(true)
                .match_kind(aho_corasick::MatchKind::LeftmostLongest)
                .build(&patterns)
                .map_err(|e| Error::Pattern(e.to_string()))
        })
    }

    /// Detects skills in `text`, returning trimmed surface forms sorted
    /// case-insensitively and deduplicated. Empty input yields an empty
    /// list. Pure over (text, vocabulary); recall is heuristic.
    pub fn detect(&self, text: &str) -> Result<Vec<String>> {
        let matcher = self.matcher()?;

        let mut hits: HashSet<String> = HashSet::new();

        // Vocabulary phrases must align with word boundaries on both sides,
        // otherwise "java" fires inside "javascript".
        for mat in matcher.find_iter(text) {
            if word_boundary_before(text, mat.start()) && word_boundary_after(text, mat.end()) {
                hits.insert(text[mat.start()..mat.end()].to_string());
            }
        }

        for rule in &self.rules {
            hits.extend(rule.find(text));
        }

        let mut skills: Vec<String> = hits
            .into_iter()
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty() && h.chars().count() <= MAX_SKILL_LEN)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        skills.sort_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });

        Ok(skills)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn word_boundary_before(text: &str, start: usize) -> bool {
    text[..start]
        .chars()
        .next_back()
        .map(|c| !is_word_char(c))
        .unwrap_or(true)
}

fn word_boundary_after(text: &str, end: usize) -> bool {
    text[end..]
        .chars()
        .next()
        .map(|c| !is_word_char(c))
        .unwrap_or(true)
}
