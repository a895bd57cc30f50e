//! libviet-core
//!
//! Language model, frequency tables, text utilities and configuration shared
//! by the Vietnamese suggestion and autocorrect crates.
//!
//! Public API:
//! - `NGramModel` - Trainable next-word model with discounted backoff
//! - `Vocabulary` / `BigramTable` - Frequency priors loaded from CSV dumps
//! - `PrefixIndex` - Folded prefix buckets for typeahead retrieval
//! - `Config` - Model and suggestion settings
//! - `Error` - Failures raised by the loaders and the model
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod tokenizer;
pub use tokenizer::{tokenize, tokenize_lower};

pub mod fold;
pub use fold::{fold, fold_lower};

pub mod distance;
pub use distance::edit_distance;

pub mod vocabulary;
pub use vocabulary::{BigramTable, Vocabulary};

pub mod prefix_index;
pub use prefix_index::PrefixIndex;

pub mod ngram;
pub use ngram::{MatchWeights, ModelStats, NGramModel};

/// Generic configuration for the language model and next-word suggestion.
///
/// Autocorrect-specific options live in `AutocorrectConfig` in the `libviet`
/// crate, which flattens this struct.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// N-gram order used when training (>= 2)
    pub order: usize,
    /// Absolute discount D, strictly between 0 and 1
    pub discount: f64,
    /// Cap on candidates pulled from one prefix bucket or the popularity fallback
    pub extra_pool: usize,

    // Prefix weighting
    /// Multiplier when a candidate matches the prefix only after folding
    pub folded_match_bonus: f64,
    /// Multiplier for pure-ASCII alphabetic candidates
    pub ascii_penalty: f64,

    // Serving
    /// Upper bound on `k` accepted by the engine
    pub max_suggestions: usize,
    /// Entries in the (context, prefix, k) -> suggestions cache
    pub suggest_cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            order: 3,
            discount: 0.75,
            extra_pool: 200,
            folded_match_bonus: 1.12,
            ascii_penalty: 0.90,
            max_suggestions: 20,
            suggest_cache_size: 1000,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Prefix weights as consumed by [`NGramModel`].
    pub fn match_weights(&self) -> MatchWeights {
        MatchWeights {
            folded_match_bonus: self.folded_match_bonus,
            ascii_penalty: self.ascii_penalty,
        }
    }
}
