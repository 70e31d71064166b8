pub mod config;
pub mod error;
pub mod models;
pub mod text;
pub mod vocabulary;
pub mod detect;
pub mod dates;
pub mod matching;
pub mod llm;
pub mod ingest;
pub mod analysis;

pub use config::Config;
pub use error::{Error, Result};
pub use vocabulary::SkillVocabulary;
pub use detect::SkillDetector;
pub use analysis::ResumeParser;
pub use matching::SimilarityMatcher;
pub use llm::{ClaudeProvider, SkillProvider};
pub use ingest::{PlainTextExtractor, TextExtractor};
