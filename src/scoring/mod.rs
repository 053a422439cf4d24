//! Text-level building blocks: normalization, phonetic codes, similarity.

pub mod normalize;
pub mod phonetic;
pub mod similarity;

pub use normalize::normalize;
pub use phonetic::phonetic_code;
pub use similarity::{explain, sequence_ratio, similarity, SimilarityBreakdown, DEFAULT_PHONETIC_BOOST};
