pub mod claude;
pub mod parser;
pub mod prompts;
pub mod provider;

pub use claude::ClaudeProvider;
pub use parser::parse_skill_list;
pub use provider::SkillProvider;
