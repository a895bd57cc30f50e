//! N-gram language model with Kneser-Ney style discounted backoff.
//!
//! Counts are gathered in one left-to-right pass over a corpus; every
//! sentence is padded with `N-1` start sentinels and one end sentinel.
//! Inference ranks the continuations of the last `N-1` typed tokens,
//! optionally constrained by a partially typed prefix.
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use bincode::Options;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use unicode_normalization::UnicodeNormalization;

use crate::fold::{fold_lower, is_ascii_only};
use crate::prefix_index::PrefixIndex;
use crate::tokenizer::{is_wordlike, tokenize_lower};
use crate::{Config, Error, Result};

pub const START: &str = "<s>";
pub const END: &str = "</s>";

const MAGIC: [u8; 4] = *b"VNLM";
const FORMAT_VERSION: u32 = 1;

fn is_sentinel(w: &str) -> bool {
    w == START || w == END
}

/// Prefix-match weighting applied on top of the smoothed probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    /// Multiplier for candidates matching the prefix only after folding.
    pub folded_match_bonus: f64,
    /// Multiplier for pure-ASCII alphabetic candidates.
    pub ascii_penalty: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            folded_match_bonus: 1.12,
            ascii_penalty: 0.90,
        }
    }
}

/// Size summary of a trained model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelStats {
    pub order: usize,
    pub vocab_size: usize,
    /// Distinct k-gram types for k = 1..=order.
    pub ngram_types: Vec<usize>,
    pub histories: usize,
    pub unique_bigrams: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NGramModel {
    n: usize,
    discount: f64,
    extra_pool: usize,
    weights: MatchWeights,

    /// counts[k - 1]: k-gram -> occurrences
    counts: Vec<HashMap<Vec<String>, u64>>,

    /// (N-1)-token history -> next word -> occurrences
    next: HashMap<Vec<String>, BTreeMap<String, u64>>,

    vocab: BTreeSet<String>,

    /// word -> number of distinct left neighbours
    cont_count: HashMap<String, u64>,
    total_unique_bigrams: u64,

    prefix: PrefixIndex,
}

impl Default for NGramModel {
    fn default() -> Self {
        let cfg = Config::default();
        let mut m = Self::untrained(cfg.order, cfg.discount, cfg.extra_pool);
        m.weights = cfg.match_weights();
        m
    }
}

impl NGramModel {
    /// Create an untrained model. Orders below 2 are raised to 2.
    ///
    /// Fails with [`Error::InvalidParameter`] unless `0 < discount < 1`.
    pub fn new(order: usize, discount: f64, extra_pool: usize) -> Result<Self> {
        if !(discount > 0.0 && discount < 1.0) {
            return Err(Error::InvalidParameter(format!(
                "discount must be in (0, 1), got {discount}"
            )));
        }
        Ok(Self::untrained(order, discount, extra_pool))
    }

    /// Create an untrained model with the order, discount, pool and weights
    /// of `cfg`.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let mut m = Self::new(cfg.order, cfg.discount, cfg.extra_pool)?;
        m.weights = cfg.match_weights();
        Ok(m)
    }

    fn untrained(order: usize, discount: f64, extra_pool: usize) -> Self {
        let n = order.max(2);
        Self {
            n,
            discount,
            extra_pool,
            weights: MatchWeights::default(),
            counts: vec![HashMap::new(); n],
            next: HashMap::new(),
            vocab: BTreeSet::new(),
            cont_count: HashMap::new(),
            total_unique_bigrams: 1,
            prefix: PrefixIndex::default(),
        }
    }

    pub fn order(&self) -> usize {
        self.n
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn extra_pool(&self) -> usize {
        self.extra_pool
    }

    pub fn weights(&self) -> MatchWeights {
        self.weights
    }

    /// Override the prefix-match weights, e.g. from a serving config.
    pub fn set_weights(&mut self, weights: MatchWeights) {
        self.weights = weights;
    }

    /// True if the token was seen in training (sentinels included).
    pub fn contains(&self, word: &str) -> bool {
        self.vocab.contains(word)
    }

    // --- Training ---

    /// Train from a UTF-8 corpus, one sentence per line.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected.
    pub fn fit<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::CorpusNotFound(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };
        let mut reader = BufReader::with_capacity(1 << 20, file);

        let mut buf = Vec::new();
        let mut lines = 0u64;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            self.observe(&String::from_utf8_lossy(&buf));
            lines += 1;
            if lines % 500_000 == 0 {
                debug!(lines, "training progress");
            }
        }

        self.finish();
        info!(corpus = %path.display(), lines, vocab = self.vocab.len(), "fitted n-gram model");
        Ok(())
    }

    /// Train from in-memory sentences with the same semantics as [`fit`](Self::fit).
    pub fn fit_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.observe(line.as_ref());
        }
        self.finish();
    }

    fn observe(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        let mut t: Vec<String> = vec![START.to_string(); self.n - 1];
        t.extend(tokenize_lower(line));
        t.push(END.to_string());

        for w in &t {
            if !self.vocab.contains(w) {
                self.vocab.insert(w.clone());
            }
        }

        for k in 1..=self.n {
            let table = &mut self.counts[k - 1];
            for gram in t.windows(k) {
                *table.entry(gram.to_vec()).or_insert(0) += 1;
            }
        }

        for gram in t.windows(self.n) {
            let (hist, w) = gram.split_at(self.n - 1);
            *self
                .next
                .entry(hist.to_vec())
                .or_default()
                .entry(w[0].clone())
                .or_insert(0) += 1;
        }
    }

    fn finish(&mut self) {
        self.build_continuation_counts();
        self.build_prefix_index();
    }

    fn build_continuation_counts(&mut self) {
        let mut cc: HashMap<String, u64> = HashMap::new();
        for gram in self.counts[1].keys() {
            *cc.entry(gram[1].clone()).or_insert(0) += 1;
        }
        self.cont_count = cc;
        self.total_unique_bigrams = (self.counts[1].len() as u64).max(1);
    }

    fn build_prefix_index(&mut self) {
        let cont = &self.cont_count;
        self.prefix = PrefixIndex::build(
            self.vocab
                .iter()
                .map(String::as_str)
                .filter(|w| !is_sentinel(w)),
            |w| cont.get(w).copied().unwrap_or(0),
        );
    }

    /// Rebuild the prefix indices if they are missing. Returns true if a
    /// rebuild happened.
    pub fn repair_prefix_index(&mut self) -> bool {
        if !self.prefix.is_empty() {
            return false;
        }
        self.build_prefix_index();
        true
    }

    // --- Probabilities ---

    /// Share of bigram types that end in `w`.
    pub fn continuation_prob(&self, w: &str) -> f64 {
        self.cont_count.get(w).copied().unwrap_or(0) as f64 / self.total_unique_bigrams as f64
    }

    /// Count of an n-gram of any trained order, 0 if unseen.
    pub fn count(&self, gram: &[&str]) -> u64 {
        if gram.is_empty() || gram.len() > self.n {
            return 0;
        }
        let key: Vec<String> = gram.iter().map(|s| s.to_string()).collect();
        self.counts[gram.len() - 1].get(&key).copied().unwrap_or(0)
    }

    fn history_for(&self, context: &str) -> Vec<String> {
        let tokens = tokenize_lower(context);
        let width = self.n - 1;
        let take = tokens.len().min(width);
        let mut hist = vec![START.to_string(); width - take];
        hist.extend_from_slice(&tokens[tokens.len() - take..]);
        hist
    }

    // --- Inference ---

    /// Up to `k` likely next words for `context`, best first.
    pub fn suggest(&self, context: &str, prefix: Option<&str>, k: usize) -> Vec<String> {
        self.suggest_scored(context, prefix, k)
            .into_iter()
            .map(|(w, _)| w)
            .collect()
    }

    /// Like [`suggest`](Self::suggest) but keeps the scores.
    pub fn suggest_scored(
        &self,
        context: &str,
        prefix: Option<&str>,
        k: usize,
    ) -> Vec<(String, f64)> {
        if k == 0 {
            return Vec::new();
        }

        let matcher = PrefixMatcher::new(prefix.unwrap_or(""), self.weights);
        let hist = self.history_for(context);

        let cdict = self.next.get(&hist);
        let (denom, uniq_next) = match cdict {
            Some(m) => (m.values().sum::<u64>(), m.len()),
            None => (0, 0),
        };

        let mut seen: HashSet<&str> = HashSet::new();
        let mut pool: Vec<&str> = Vec::new();

        if let Some(m) = cdict {
            for w in m.keys().map(String::as_str) {
                if matcher.accepts(w) && matcher.keep(w) && seen.insert(w) {
                    pool.push(w);
                }
            }
        }

        if matcher.is_active() {
            for w in self.prefix.candidates(&matcher.lower, self.extra_pool) {
                if matcher.accepts(w) && matcher.keep(w) && seen.insert(w) {
                    pool.push(w);
                }
            }
        }

        let d = self.discount;
        let lambda = if denom > 0 {
            (d * uniq_next as f64) / denom as f64
        } else {
            0.0
        };

        let mut scored: Vec<(&str, f64)> = pool
            .into_iter()
            .map(|w| {
                let p = if denom == 0 {
                    self.continuation_prob(w)
                } else {
                    let num = cdict.and_then(|m| m.get(w)).copied().unwrap_or(0) as f64;
                    let p_ml = (num - d).max(0.0) / denom as f64;
                    p_ml + lambda * self.continuation_prob(w)
                };
                (w, p * matcher.weight(w))
            })
            .collect();

        if scored.is_empty() && !matcher.is_active() {
            let backoff = if denom == 0 { 1.0 } else { lambda };
            scored = self
                .popular_words(&matcher)
                .into_iter()
                .map(|w| (w, backoff * self.continuation_prob(w) * matcher.weight(w)))
                .collect();
        }

        // Stable: equal scores keep retrieval order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(k)
            .map(|(w, s)| (w.to_string(), s))
            .collect()
    }

    fn popular_words(&self, matcher: &PrefixMatcher) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .vocab
            .iter()
            .map(String::as_str)
            .filter(|w| matcher.keep(w))
            .collect();
        words.sort_by(|a, b| {
            self.continuation_prob(b)
                .partial_cmp(&self.continuation_prob(a))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        words.truncate(self.extra_pool);
        words
    }

    pub fn stats(&self) -> ModelStats {
        ModelStats {
            order: self.n,
            vocab_size: self.vocab.len(),
            ngram_types: self.counts.iter().map(HashMap::len).collect(),
            histories: self.next.len(),
            unique_bigrams: self.total_unique_bigrams,
        }
    }

    // --- Serialization ---

    /// Write the versioned model artifact.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(&MAGIC)?;
        writer.write_all(&FORMAT_VERSION.to_le_bytes())?;
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;
        info!(path = %path.display(), vocab = self.vocab.len(), "saved n-gram model");
        Ok(())
    }

    /// Read a model artifact written by [`save`](Self::save).
    ///
    /// Prefix indices are always populated when this returns `Ok`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::model_load(path, e.to_string()))?;
        let len = file
            .metadata()
            .map_err(|e| Error::model_load(path, e.to_string()))?
            .len();
        let mut reader = BufReader::new(file);

        let mut header = [0u8; 8];
        reader
            .read_exact(&mut header)
            .map_err(|_| Error::model_load(path, "truncated header"))?;
        if header[..4] != MAGIC {
            return Err(Error::model_load(path, "not a libviet model (bad magic)"));
        }
        let version = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);
        if version != FORMAT_VERSION {
            return Err(Error::model_load(
                path,
                format!("unsupported format version {version}, expected {FORMAT_VERSION}"),
            ));
        }

        // Length prefixes inside the payload can never exceed the file size.
        let mut model: Self = bincode::DefaultOptions::new()
            .with_fixint_encoding()
            .allow_trailing_bytes()
            .with_limit(len)
            .deserialize_from(reader)
            .map_err(|e| Error::model_load(path, format!("corrupt payload: {e}")))?;
        model.validate().map_err(|reason| Error::model_load(path, reason))?;

        if model.repair_prefix_index() {
            warn!(path = %path.display(), "model had no prefix index; rebuilt after load");
        }
        info!(path = %path.display(), order = model.n, vocab = model.vocab.len(), "loaded n-gram model");
        Ok(model)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.n < 2 {
            return Err(format!("order must be >= 2, found {}", self.n));
        }
        if !(self.discount > 0.0 && self.discount < 1.0) {
            return Err(format!("discount must be in (0, 1), found {}", self.discount));
        }
        if self.counts.len() != self.n {
            return Err(format!(
                "expected {} count tables, found {}",
                self.n,
                self.counts.len()
            ));
        }
        if self.total_unique_bigrams == 0 {
            return Err("total_unique_bigrams must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Prefix constraint of one `suggest` call.
struct PrefixMatcher {
    lower: String,
    folded: String,
    weights: MatchWeights,
}

impl PrefixMatcher {
    fn new(prefix: &str, weights: MatchWeights) -> Self {
        let lower = prefix.trim().nfc().collect::<String>().to_lowercase();
        let folded = fold_lower(&lower);
        Self {
            lower,
            folded,
            weights,
        }
    }

    fn is_active(&self) -> bool {
        !self.lower.is_empty()
    }

    fn accepts(&self, w: &str) -> bool {
        if !self.is_active() {
            return true;
        }
        w.starts_with(&self.lower) || fold_lower(w).starts_with(&self.folded)
    }

    fn keep(&self, w: &str) -> bool {
        if is_sentinel(w) {
            return false;
        }
        if self.is_active() && w.chars().count() < 2 {
            return false;
        }
        is_wordlike(w)
    }

    /// Prefer accented words reached by a tone-less prefix; demote ASCII words.
    fn weight(&self, w: &str) -> f64 {
        if !self.is_active() {
            return 1.0;
        }
        let exact = w.starts_with(&self.lower);
        let folded = fold_lower(w).starts_with(&self.folded);
        let mut wgt = 1.0;
        if folded && !exact {
            wgt *= self.weights.folded_match_bonus;
        }
        if is_ascii_only(w) && w.chars().any(char::is_alphabetic) {
            wgt *= self.weights.ascii_penalty;
        }
        wgt
    }
}
