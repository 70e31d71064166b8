use std::cmp::Ordering;
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;

use crate::error::Result;
use crate::matching::embedder::{Embedder, MiniLmEmbedder};
use crate::models::{MatchReport, SkillMatch};

/// Matches query skills against a corpus of candidate skills by cosine
/// similarity in the embedder's vector space.
#[derive(Clone)]
pub struct SimilarityMatcher {
    embedder: Arc<dyn Embedder>,
}

impl SimilarityMatcher {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }

    /// Uses the process-wide MiniLM model, loading it on first call.
    pub fn with_default_model() -> Result<Self> {
        Ok(Self::new(MiniLmEmbedder::global()?))
    }

    /// Returns up to `top_k` corpus entries ordered by decreasing cosine
    /// similarity to `query`; ties keep original corpus order. An empty
    /// corpus returns an empty list, which callers read as "no match".
    ///
    /// The query is encoded once and the corpus once per call.
    pub fn best_match(&self, query: &str, corpus: &[String], top_k: usize) -> Result<Vec<String>> {
        if corpus.is_empty() || top_k == 0 {
            return Ok(Vec::new());
        }

        let query_vecs = self.embedder.embed(std::slice::from_ref(&query.to_string()))?;
        let corpus_vecs = self.embedder.embed(corpus)?;

        let Some(query_vec) = query_vecs.first() else {
            return Ok(Vec::new());
        };

        let similarities: Vec<f32> = corpus_vecs
            .iter()
            .map(|v| cosine_similarity(query_vec, v))
            .collect();

        let mut order: Vec<usize> = (0..corpus.len()).collect();
        // Stable sort keeps corpus order for equal scores.
        order.sort_by(|&a, &b| {
            similarities[b]
                .partial_cmp(&similarities[a])
                .unwrap_or(Ordering::Equal)
        });

        Ok(order
            .into_iter()
            .take(top_k)
            .map(|i| corpus[i].clone())
            .collect())
    }

    /// Matches every job requirement against the candidate's skills,
    /// top-1 each, independently: one corpus skill may satisfy several
    /// requirements. Requirements are dispatched concurrently across
    /// blocking tasks; a failed task degrades to "no match" rather than
    /// failing the report.
    pub async fn match_requirements(
        &self,
        requirements: &[String],
        candidate_skills: &[String],
        concurrency: usize,
    ) -> Result<MatchReport> {
        let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));

        let mut match_futures = Vec::with_capacity(requirements.len());

        for requirement in requirements {
            let matcher = self.clone();
            let corpus = candidate_skills.to_vec();
            let requirement = requirement.clone();
            let sem = semaphore.clone();

            match_futures.push(async move {
                let _permit = sem.acquire().await.ok();

                let query = requirement.clone();
                let result =
                    tokio::task::spawn_blocking(move || matcher.best_match(&query, &corpus, 1))
                        .await;

                let matched = match result {
                    Ok(Ok(found)) => found.into_iter().next(),
                    Ok(Err(e)) => {
                        tracing::warn!(requirement = %requirement, "skill match failed: {e}");
                        None
                    }
                    Err(e) => {
                        tracing::warn!(requirement = %requirement, "match task panicked: {e}");
                        None
                    }
                };

                SkillMatch {
                    requirement,
                    matched,
                }
            });
        }

        let matches = join_all(match_futures).await;
        Ok(MatchReport { matches })
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::embedder::HashEmbedder;

    fn matcher() -> SimilarityMatcher {
        SimilarityMatcher::new(Arc::new(HashEmbedder::default()))
    }

    fn corpus(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_corpus_returns_empty() {
        let found = matcher().best_match("kubernetes", &[], 1).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn exact_match_ranks_first() {
        let found = matcher()
            .best_match("kubernetes", &corpus(&["docker", "kubernetes", "excel"]), 1)
            .unwrap();
        assert_eq!(found, vec!["kubernetes"]);
    }

    #[test]
    fn top_k_bounds_results_and_ties_keep_corpus_order() {
        let found = matcher()
            .best_match("kubernetes", &corpus(&["docker", "kubernetes", "excel"]), 2)
            .unwrap();
        assert_eq!(found, vec!["kubernetes", "docker"]);

        let all = matcher()
            .best_match("kubernetes", &corpus(&["docker", "excel"]), 10)
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn shared_words_score_above_disjoint_ones() {
        let found = matcher()
            .best_match(
                "power bi reporting",
                &corpus(&["excel", "power bi", "photoshop"]),
                1,
            )
            .unwrap();
        assert_eq!(found, vec!["power bi"]);
    }

    #[test]
    fn cosine_of_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn match_requirements_is_independent_per_query() {
        let report = matcher()
            .match_requirements(
                &corpus(&["kubernetes", "kubernetes administration"]),
                &corpus(&["docker", "kubernetes"]),
                4,
            )
            .await
            .unwrap();

        assert_eq!(report.matches.len(), 2);
        assert_eq!(report.matches[0].requirement, "kubernetes");
        assert_eq!(report.matches[0].matched.as_deref(), Some("kubernetes"));
        // The same corpus skill may satisfy multiple requirements.
        assert_eq!(report.matches[1].matched.as_deref(), Some("kubernetes"));
        assert_eq!(report.matched_count(), 2);
    }

    #[tokio::test]
    async fn match_requirements_with_empty_corpus_yields_no_matches() {
        let report = matcher()
            .match_requirements(&corpus(&["kubernetes"]), &[], 2)
            .await
            .unwrap();
        assert_eq!(report.matches.len(), 1);
        assert!(report.matches[0].matched.is_none());
    }
}
