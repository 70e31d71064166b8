pub mod embedder;
pub mod similarity;

pub use embedder::{Embedder, HashEmbedder, MiniLmEmbedder};
pub use similarity::SimilarityMatcher;
