use crate::ranking::Scorer;
use crate::scoring::{explain, DEFAULT_PHONETIC_BOOST};

/// Sequence-ratio + Soundex scorer for person names
#[derive(Debug, Clone)]
pub struct FuzzyNameScorer {
    phonetic_boost: f64,
}

impl FuzzyNameScorer {
    pub fn new(phonetic_boost: f64) -> Self {
        Self { phonetic_boost }
    }

    pub fn phonetic_boost(&self) -> f64 {
        self.phonetic_boost
    }
}

impl Default for FuzzyNameScorer {
    fn default() -> Self {
        Self::new(DEFAULT_PHONETIC_BOOST)
    }
}

impl Scorer for FuzzyNameScorer {
    fn score(&self, query: &str, name: &str) -> f64 {
        explain(query, name, self.phonetic_boost).score
    }

    fn name(&self) -> &str {
        "fuzzy-soundex"
    }
}
