use async_trait::async_trait;

use crate::error::Result;

/// Alternative skill-detection path backed by a language model. The core
/// only depends on getting a list of skill strings back; malformed
/// responses degrade to an empty list, never an error.
#[async_trait]
pub trait SkillProvider: Send + Sync {
    async fn extract_skills(&self, resume_text: &str) -> Result<Vec<String>>;
    fn max_context_chars(&self) -> usize;
    fn name(&self) -> &str;
}
