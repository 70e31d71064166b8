use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::error::Result;

/// Built-in skill phrase set, distilled from GitHub topics and Stack
/// Overflow survey data. Lowercase; multi-word phrases allowed.
static DEFAULT_SKILLS: Lazy<HashSet<String>> = Lazy::new(|| {
    [
        "python", "java", "javascript", "typescript", "go", "rust", "c", "c++", "c#",
        "react", "nextjs", "vue", "angular", "node", "express", "spring", "django",
        "flask", "fastapi", "tensorflow", "pytorch", "keras", "scikit-learn", "pandas",
        "numpy", "sql", "postgresql", "mysql", "mongodb", "redis", "docker",
        "kubernetes", "aws", "gcp", "azure", "linux", "git", "jenkins", "terraform",
        "ansible", "tailwind", "graphql", "spark", "hadoop", "airflow", "tableau",
        "power bi", "matplotlib", "seaborn", "nlp", "opencv", "bash", "rabbitmq",
        "kafka", "elasticsearch", "jira", "salesforce", "figma", "adobe xd",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
});

/// Deduplicated set of lowercase skill phrases used for lexical matching.
///
/// A non-empty caller-supplied seed replaces the built-in set; an empty
/// seed falls back to the default.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    phrases: HashSet<String>,
}

impl SkillVocabulary {
    pub fn with_default() -> Self {
        Self {
            phrases: DEFAULT_SKILLS.clone(),
        }
    }

    pub fn from_seed<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: HashSet<String> = seed
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        if phrases.is_empty() {
            Self::with_default()
        } else {
            Self { phrases }
        }
    }

    /// Loads a newline-delimited phrase list, one skill per line.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_seed(content.lines()))
    }

    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(|s| s.as_str())
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.phrases.contains(&phrase.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::with_default()
    }
}
