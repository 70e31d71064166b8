pub mod heuristics;
pub mod skills;

pub use heuristics::{CamelCompoundRule, LanguageTokenRule, TokenRule};
pub use skills::SkillDetector;
