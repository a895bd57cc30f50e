// libviet/src/keyboard.rs
//
// Repairs keyboard artifacts: telex sequences that were not converted by the
// input method, and near-miss spellings of known words.

use std::sync::Arc;

use libviet_core::Vocabulary;
use tracing::trace;

use crate::normalize::share_vowel;
use crate::ranker::CandidateRanker;
use crate::telex::telex_to_vietnamese;

#[derive(Debug, Clone)]
pub struct KeyboardFixer {
    vocab: Arc<Vocabulary>,
    ranker: CandidateRanker,
}

impl KeyboardFixer {
    /// Ranking uses a distance bound of 2 and keeps the single best word.
    pub fn new(vocab: Arc<Vocabulary>) -> Self {
        Self::with_max_distance(vocab, 2)
    }

    pub fn with_max_distance(vocab: Arc<Vocabulary>, max_distance: usize) -> Self {
        Self {
            vocab,
            ranker: CandidateRanker::new(max_distance, 1),
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Best vocabulary word for `word`, or `word` itself.
    ///
    /// 1. telex conversion hitting the vocabulary wins;
    /// 2. a word already in the vocabulary is kept;
    /// 3. otherwise rank the words sharing a vowel with the converted form
    ///    (all words if none do) and take the best one in range.
    pub fn fix_common_keyboard(&self, word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }
        let fixed = telex_to_vietnamese(word);
        if self.vocab.contains(&fixed) {
            return fixed;
        }
        if self.vocab.contains(word) {
            return word.to_string();
        }

        let sharing: Vec<(&str, u64)> = self
            .vocab
            .iter()
            .filter(|(w, _)| share_vowel(&fixed, w))
            .collect();

        let ranked = if sharing.is_empty() {
            self.ranker.rank_entries(&fixed, self.vocab.iter())
        } else {
            self.ranker.rank_entries(&fixed, sharing)
        };

        match ranked.into_iter().next() {
            Some(best) => {
                trace!(word, fixed = %fixed, best = %best.word, distance = best.distance, "keyboard fix");
                best.word
            }
            None => word.to_string(),
        }
    }
}
