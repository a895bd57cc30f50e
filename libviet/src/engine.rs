//! Vietnamese typing assistant engine
//!
//! Bundles the next-word model and both correctors behind one handle with
//! result caches, which is what a serving layer talks to.

use std::path::Path;
use std::sync::Arc;

use libviet_core::{BigramTable, NGramModel, Vocabulary};
use tracing::info;

use crate::cache::{BoundedCache, CacheStats};
use crate::config::AutocorrectConfig;
use crate::contextual::ContextualAutocorrector;
use crate::hard_rules::apply_hard_rules;
use crate::keyboard::KeyboardFixer;
use crate::live::LiveAutocorrector;
use crate::normalize::normalize;

/// File names expected by [`Engine::from_data_dir`].
pub const MODEL_FILE: &str = "ngram.bin";
pub const VOCAB_FILE: &str = "vocab.csv";
pub const BIGRAM_FILE: &str = "bigram.csv";

type SuggestKey = (String, Option<String>, usize);

/// Public engine for libviet.
///
/// All components are immutable after construction; the only interior
/// mutability is in the caches, so an `Engine` can sit behind an `Arc` and
/// serve several threads.
#[derive(Debug)]
pub struct Engine {
    model: Arc<NGramModel>,
    keyboard: KeyboardFixer,
    live: LiveAutocorrector,
    contextual: ContextualAutocorrector,
    config: AutocorrectConfig,
    suggest_cache: BoundedCache<SuggestKey, Vec<String>>,
    token_cache: BoundedCache<String, String>,
}

impl Engine {
    /// Build an engine from already loaded parts.
    ///
    /// The prefix weights of `config` replace those stored in the model.
    pub fn new(
        mut model: NGramModel,
        vocab: Vocabulary,
        bigrams: BigramTable,
        config: AutocorrectConfig,
    ) -> Self {
        model.set_weights(config.base.match_weights());
        let vocab = Arc::new(vocab);
        let keyboard = KeyboardFixer::with_max_distance(Arc::clone(&vocab), config.max_edit_distance);
        let contextual = ContextualAutocorrector::new(Arc::clone(&vocab), Arc::new(bigrams))
            .with_ranker(config.ranker())
            .with_weights(config.context_weights());

        Self {
            model: Arc::new(model),
            live: LiveAutocorrector::with_keyboard(keyboard.clone()),
            keyboard,
            contextual,
            suggest_cache: BoundedCache::new(config.base.suggest_cache_size),
            token_cache: BoundedCache::new(config.autocorrect_cache_size),
            config,
        }
    }

    /// Load an engine from a directory containing runtime artifacts.
    ///
    /// Expected layout (data-dir):
    ///  - ngram.bin    (trained model, see `NGramModel::save`)
    ///  - vocab.csv    (`word,count`)
    ///  - bigram.csv   (`word1,word2,count`)
    pub fn from_data_dir<P: AsRef<Path>>(
        data_dir: P,
        config: AutocorrectConfig,
    ) -> libviet_core::Result<Self> {
        let data_dir = data_dir.as_ref();

        let model = NGramModel::load(data_dir.join(MODEL_FILE))?;
        let vocab = Vocabulary::load_csv(data_dir.join(VOCAB_FILE), config.vocab_min_freq)?;
        let bigrams = BigramTable::load_csv(data_dir.join(BIGRAM_FILE), config.bigram_min_freq)?;

        info!(
            data_dir = %data_dir.display(),
            vocab = vocab.len(),
            bigrams = bigrams.len(),
            "engine ready"
        );
        Ok(Self::new(model, vocab, bigrams, config))
    }

    pub fn model(&self) -> &NGramModel {
        &self.model
    }

    pub fn config(&self) -> &AutocorrectConfig {
        &self.config
    }

    /// Next-word suggestions. `k` is clamped into `1..=max_suggestions`.
    pub fn suggest(&self, context: &str, prefix: Option<&str>, k: usize) -> Vec<String> {
        let k = k.clamp(1, self.config.base.max_suggestions.max(1));
        let prefix = prefix.map(str::trim).filter(|p| !p.is_empty());
        let key = (context.to_string(), prefix.map(str::to_string), k);
        self.suggest_cache
            .get_or_insert_with(key, || self.model.suggest(context, prefix, k))
    }

    /// Live correction of one typed token.
    pub fn autocorrect_token(&self, token: &str) -> String {
        self.token_cache
            .get_or_insert_with(token.to_string(), || self.live.correct_token(token))
    }

    /// Live correction of every whitespace-separated token.
    pub fn autocorrect_line(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|t| self.autocorrect_token(t))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whole-sentence correction: normalize, hard rules and keyboard fix per
    /// token, then contextual correction of the result.
    pub fn correct_sentence(&self, text: &str) -> String {
        let repaired: Vec<String> = normalize(text)
            .split_whitespace()
            .map(|t| self.keyboard.fix_common_keyboard(&apply_hard_rules(t)))
            .collect();
        self.contextual.correct_sentence(&repaired.join(" "))
    }

    /// (suggest, autocorrect) cache statistics.
    pub fn cache_stats(&self) -> (CacheStats, CacheStats) {
        (self.suggest_cache.stats(), self.token_cache.stats())
    }

    /// Clear both caches (useful for testing or memory management).
    pub fn clear_caches(&self) {
        self.suggest_cache.clear();
        self.token_cache.clear();
    }
}
