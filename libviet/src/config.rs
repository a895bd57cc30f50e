use serde::{Deserialize, Serialize};

use crate::contextual::ContextWeights;
use crate::ranker::CandidateRanker;

/// Autocorrect configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All generic options from `libviet_core::Config` (flattened via serde)
/// - Candidate generation bounds for the ranker
/// - Re-scoring weights of the contextual corrector
/// - Minimum counts applied when loading the frequency tables
///
/// # Example
///
/// ```rust
/// use libviet::AutocorrectConfig;
///
/// let config = AutocorrectConfig::from_toml_str("top_k = 5\norder = 4\n").unwrap();
/// assert_eq!(config.top_k, 5);
/// assert_eq!(config.base().order, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AutocorrectConfig {
    /// Base configuration fields (model order, discount, prefix weights, caching)
    #[serde(flatten)]
    pub base: libviet_core::Config,

    /// Largest edit distance a correction may be from the typed word
    pub max_edit_distance: usize,
    /// Candidates re-scored per token by the contextual corrector
    pub top_k: usize,

    // Contextual re-scoring
    pub bigram_weight: f64,
    pub unigram_weight: f64,
    pub distance_penalty: f64,

    // Table loading
    pub vocab_min_freq: u64,
    pub bigram_min_freq: u64,

    /// Entries in the token -> correction cache
    pub autocorrect_cache_size: usize,
}

impl Default for AutocorrectConfig {
    fn default() -> Self {
        Self {
            base: libviet_core::Config::default(),
            max_edit_distance: 2,
            top_k: 3,
            bigram_weight: 0.6,
            unigram_weight: 1.2,
            distance_penalty: 2.0,
            vocab_min_freq: 1,
            bigram_min_freq: 2,
            autocorrect_cache_size: 1000,
        }
    }
}

impl AutocorrectConfig {
    /// Get a reference to the base config
    pub fn base(&self) -> &libviet_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut libviet_core::Config {
        &mut self.base
    }

    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> libviet_core::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> libviet_core::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn context_weights(&self) -> ContextWeights {
        ContextWeights {
            bigram: self.bigram_weight,
            unigram: self.unigram_weight,
            distance: self.distance_penalty,
        }
    }

    pub fn ranker(&self) -> CandidateRanker {
        CandidateRanker::new(self.max_edit_distance, self.top_k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let cfg = AutocorrectConfig::default();
        assert_eq!(cfg.context_weights(), ContextWeights::default());
        assert_eq!(cfg.ranker(), CandidateRanker::new(2, 3));
        assert_eq!(cfg.base().discount, 0.75);
    }

    #[test]
    fn flattened_toml_round_trip() {
        let mut cfg = AutocorrectConfig::default();
        cfg.base_mut().extra_pool = 64;
        cfg.bigram_min_freq = 5;
        let text = cfg.to_toml_string().unwrap();
        assert!(text.contains("extra_pool = 64"));
        assert_eq!(AutocorrectConfig::from_toml_str(&text).unwrap(), cfg);
    }
}
