//! Typing assistance: prefix completions from a trie and "did you mean"
//! corrections from a length-bucketed edit-distance index.

pub mod config;
pub mod corrector;
pub mod distance;
pub mod error;
pub mod router;
pub mod trie;

pub use config::AssistConfig;
pub use corrector::{Corrector, Suggestion};
pub use distance::{distance, distance_within};
pub use error::ConfigError;
pub use router::{InputRouter, InputSuggestions, active_token};
pub use trie::PrefixIndex;

/// Small demo word list.
pub const SAMPLE_VOCABULARY: [&str; 18] = [
    "machine",
    "learning",
    "macbook",
    "neural",
    "network",
    "neuron",
    "natural",
    "language",
    "processing",
    "marine",
    "medicine",
    "marching",
    "model",
    "deep",
    "learning",
    "data",
    "science",
    "algorithm",
];

/// Case folding applied to indexed words and query keys alike.
pub fn fold_case(word: &str) -> String {
    word.to_lowercase()
}
