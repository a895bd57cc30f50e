// libviet/src/contextual.rs
//
// Sentence-level correction. Tokens are repaired left to right and each
// choice is scored against the already corrected previous token, so a fix
// early in the sentence changes the context seen by later tokens.

use std::sync::Arc;

use libviet_core::distance::edit_distance;
use libviet_core::{BigramTable, Vocabulary};
use tracing::trace;

use crate::hard_rules::apply_hard_rules;
use crate::ranker::CandidateRanker;

/// Weights of the candidate re-scoring formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextWeights {
    pub bigram: f64,
    pub unigram: f64,
    pub distance: f64,
}

impl Default for ContextWeights {
    fn default() -> Self {
        Self {
            bigram: 0.6,
            unigram: 1.2,
            distance: 2.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContextualAutocorrector {
    vocab: Arc<Vocabulary>,
    bigrams: Arc<BigramTable>,
    ranker: CandidateRanker,
    weights: ContextWeights,
}

impl ContextualAutocorrector {
    pub fn new(vocab: Arc<Vocabulary>, bigrams: Arc<BigramTable>) -> Self {
        Self {
            vocab,
            bigrams,
            ranker: CandidateRanker::new(2, 3),
            weights: ContextWeights::default(),
        }
    }

    pub fn with_ranker(mut self, ranker: CandidateRanker) -> Self {
        self.ranker = ranker;
        self
    }

    pub fn with_weights(mut self, weights: ContextWeights) -> Self {
        self.weights = weights;
        self
    }

    /// `bigram` weight times `ln(count(prev, cand) + 1)` plus `unigram` weight
    /// times `ln(freq(cand) + 1)`, minus `distance` weight per edit. Unknown
    /// counts are treated as 1.
    pub fn score(&self, prev: &str, word: &str, cand: &str) -> f64 {
        let bigram = self.bigrams.frequency(prev, cand).unwrap_or(1) as f64;
        let unigram = self.vocab.frequency(cand).unwrap_or(1) as f64;
        let dist = edit_distance(word, cand) as f64;
        self.weights.bigram * (bigram + 1.0).ln() + self.weights.unigram * (unigram + 1.0).ln()
            - self.weights.distance * dist
    }

    /// Correct every token after the first.
    ///
    /// Per token: a changing hard rule wins, vocabulary words stay, else the
    /// ranked candidate with the best [`score`](Self::score) is taken.
    ///
    /// The sentence is lowercased and split on whitespace; the result is
    /// joined with single spaces.
    pub fn correct_sentence(&self, sentence: &str) -> String {
        let lowered = sentence.to_lowercase();
        let mut words = lowered.split_whitespace();
        let Some(first) = words.next() else {
            return String::new();
        };

        let mut corrected: Vec<String> = vec![first.to_string()];
        for w in words {
            let prev = corrected.last().map(String::as_str).unwrap_or_default();
            let fixed = self.correct_word(prev, w);
            corrected.push(fixed);
        }
        corrected.join(" ")
    }

    fn correct_word(&self, prev: &str, w: &str) -> String {
        let ruled = apply_hard_rules(w);
        if ruled != w {
            return ruled;
        }
        if self.vocab.contains(w) {
            return w.to_string();
        }

        let mut best: Option<(&str, f64)> = None;
        let cands = self.ranker.rank_entries(w, self.vocab.iter());
        for cand in &cands {
            let s = self.score(prev, w, &cand.word);
            if best.map_or(true, |(_, b)| s > b) {
                best = Some((cand.word.as_str(), s));
            }
        }

        match best {
            Some((word, score)) => {
                trace!(prev, input = w, word, score, "contextual correction");
                word.to_string()
            }
            None => w.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corrector() -> ContextualAutocorrector {
        let vocab: Vocabulary = [
            ("tôi", 900u64),
            ("đi", 800),
            ("học", 300),
            ("hộc", 320),
            ("nhà", 100),
            ("nha", 1),
            ("về", 400),
        ]
        .into_iter()
        .collect();
        let mut bigrams = BigramTable::new();
        bigrams.insert("đi", "hộc", 2);
        bigrams.insert("đi", "học", 50);
        ContextualAutocorrector::new(Arc::new(vocab), Arc::new(bigrams))
    }

    #[test]
    fn exact_vocabulary_word_is_kept() {
        let c = corrector();
        // "học" is more frequent and one edit away.
        assert_eq!(c.correct_sentence("tôi hộc"), "tôi hộc");
        assert_eq!(c.correct_sentence("nha"), "nha");
    }

    #[test]
    fn hard_rule_applies_to_known_word() {
        let c = corrector();
        assert_eq!(c.correct_sentence("về nha"), "về nhà");
    }

    #[test]
    fn first_token_is_never_changed() {
        let c = corrector();
        assert_eq!(c.correct_sentence("toi đi"), "toi đi");
    }

    #[test]
    fn hard_rules_short_circuit() {
        let c = corrector();
        assert_eq!(c.correct_sentence("tôi chaof"), "tôi chào");
    }

    #[test]
    fn bigram_context_picks_candidate() {
        let c = corrector();
        // "hôc" is one edit from both; "hộc" is more frequent but "đi học"
        // is the far more common pair.
        assert_eq!(c.correct_sentence("tôi đi hôc"), "tôi đi học");
    }

    #[test]
    fn unknown_token_without_candidates_is_kept() {
        let c = corrector();
        assert_eq!(c.correct_sentence("tôi qqqqqqqq"), "tôi qqqqqqqq");
    }

    #[test]
    fn lowercases_and_collapses_whitespace() {
        let c = corrector();
        assert_eq!(c.correct_sentence("  Tôi   ĐI  "), "tôi đi");
        assert_eq!(c.correct_sentence("   "), "");
    }
}
