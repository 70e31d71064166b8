//! Embedding backends for semantic skill matching.
//!
//! The pretrained model is a pluggable dependency: `MiniLmEmbedder` wraps
//! fastembed's MiniLM sentence encoder, `HashEmbedder` is a deterministic
//! feature-hashing fallback that needs no model download (and keeps tests
//! offline).

use std::sync::{Arc, Mutex};

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use once_cell::sync::OnceCell;

use crate::error::{Error, Result};

/// Maps texts into fixed-size dense vectors in a shared space.
///
/// Implementations must accept a whole corpus per call so encoding can be
/// batched instead of repeated per element.
pub trait Embedder: Send + Sync {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
    fn dimension(&self) -> usize;
    fn name(&self) -> &str;
}

static GLOBAL_MODEL: OnceCell<Arc<MiniLmEmbedder>> = OnceCell::new();

/// all-MiniLM-L6-v2 via fastembed. Loading the ONNX model is expensive, so
/// the instance is process-wide: first use pays the cost, later callers
/// share it read-only.
pub struct MiniLmEmbedder {
    // Session access is serialized; each call still encodes a full batch.
    model: Mutex<TextEmbedding>,
}

impl MiniLmEmbedder {
    /// Returns the process-wide instance, loading the model on first use.
    /// Concurrent first-use is guarded by the cell's one-time barrier.
    pub fn global() -> Result<Arc<Self>> {
        GLOBAL_MODEL
            .get_or_try_init(|| {
                tracing::info!("Loading MiniLM embedding model");
                Ok(Arc::new(Self::load()?))
            })
            .cloned()
    }

    fn load() -> Result<Self> {
        let model = TextEmbedding::try_new(
            InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(false),
        )
        .map_err(|e| Error::Embedding(format!("Failed to load embedding model: {e}")))?;

        Ok(Self {
            model: Mutex::new(model),
        })
    }
}

impl Embedder for MiniLmEmbedder {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let mut model = self
            .model
            .lock()
            .map_err(|_| Error::Embedding("Embedding model lock poisoned".to_string()))?;

        model
            .embed(texts.to_vec(), None)
            .map_err(|e| Error::Embedding(e.to_string()))
    }

    fn dimension(&self) -> usize {
        384
    }

    fn name(&self) -> &str {
        "all-MiniLM-L6-v2"
    }
}

/// FNV-1a feature-hashing embedder: each lowercase word hashes into a
/// bucket, vectors are L2-normalized. Identical strings embed identically,
/// so exact matches score cosine 1.0; shared words score proportionally.
pub struct HashEmbedder {
    dim: usize,
}

impl HashEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim: dim.max(1) }
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(256)
    }
}

impl Embedder for HashEmbedder {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }

    fn dimension(&self) -> usize {
        self.dim
    }

    fn name(&self) -> &str {
        "fnv1a-hash"
    }
}

impl HashEmbedder {
    fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dim];

        for token in text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let bucket = (fnv1a(token.as_bytes()) % self.dim as u64) as usize;
            vector[bucket] += 1.0;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for &b in bytes {
        hash ^= b as u64;
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_embedder_is_deterministic() {
        let e = HashEmbedder::default();
        let a = e.embed(&["kubernetes".to_string()]).unwrap();
        let b = e.embed(&["kubernetes".to_string()]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn hash_embedder_normalizes() {
        let e = HashEmbedder::default();
        let v = &e.embed(&["docker compose".to_string()]).unwrap()[0];
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn hash_embedder_handles_empty_text() {
        let e = HashEmbedder::default();
        let v = &e.embed(&[String::new()]).unwrap()[0];
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn hash_embedder_is_case_insensitive() {
        let e = HashEmbedder::default();
        let a = e.embed(&["Docker".to_string(), "docker".to_string()]).unwrap();
        assert_eq!(a[0], a[1]);
    }
}
