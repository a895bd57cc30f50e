//! Popularity-sorted prefix buckets for typeahead retrieval.
//!
//! Every vocabulary word is filed under its 2-char and 3-char keys. Keys are
//! lowercased, diacritic-folded and space-padded, so `"đi"` lives under
//! `"di"` / `"di "` and is found whether or not the user typed the stroke.
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::fold::fold_lower;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrefixIndex {
    two: HashMap<String, Vec<String>>,
    three: HashMap<String, Vec<String>>,
}

impl PrefixIndex {
    /// Bucket key of the given width.
    pub fn key(word: &str, width: usize) -> String {
        let mut key: String = fold_lower(word).chars().take(width).collect();
        let len = key.chars().count();
        key.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
        key
    }

    /// Build both indices; each bucket is ordered by `popularity` descending,
    /// ties broken by the word itself so rebuilds are reproducible.
    pub fn build<'a, I, F>(words: I, popularity: F) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        F: Fn(&str) -> u64,
    {
        let mut two: HashMap<String, Vec<String>> = HashMap::new();
        let mut three: HashMap<String, Vec<String>> = HashMap::new();

        for w in words {
            two.entry(Self::key(w, 2)).or_default().push(w.to_string());
            three.entry(Self::key(w, 3)).or_default().push(w.to_string());
        }

        for bucket in two.values_mut().chain(three.values_mut()) {
            bucket.sort_by(|a, b| popularity(b).cmp(&popularity(a)).then_with(|| a.cmp(b)));
        }

        Self { two, three }
    }

    /// True when either index is missing, e.g. in an artifact written before
    /// the index existed.
    pub fn is_empty(&self) -> bool {
        self.two.is_empty() || self.three.is_empty()
    }

    /// Up to `pool` words for a typed prefix, most popular first.
    ///
    /// Prefixes of three or more chars read the 3-char bucket and top up from
    /// the 2-char bucket; shorter prefixes read the 2-char bucket alone.
    pub fn candidates(&self, prefix: &str, pool: usize) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();

        if prefix.chars().count() >= 3 && !self.three.is_empty() {
            if let Some(bucket) = self.three.get(&Self::key(prefix, 3)) {
                out.extend(bucket.iter().map(String::as_str));
            }
            if out.len() < pool {
                let seen: HashSet<&str> = out.iter().copied().collect();
                if let Some(bucket) = self.two.get(&Self::key(prefix, 2)) {
                    out.extend(
                        bucket
                            .iter()
                            .map(String::as_str)
                            .filter(|w| !seen.contains(w)),
                    );
                }
            }
        } else if let Some(bucket) = self.two.get(&Self::key(prefix, 2)) {
            out.extend(bucket.iter().map(String::as_str));
        }

        out.truncate(pool);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PrefixIndex {
        let words = ["chào", "cháu", "chơi", "cha", "con", "c"];
        let pop = |w: &str| match w {
            "chào" => 10,
            "cháu" => 3,
            "chơi" => 7,
            "cha" => 1,
            _ => 0,
        };
        PrefixIndex::build(words, pop)
    }

    #[test]
    fn keys_are_folded_and_padded() {
        assert_eq!(PrefixIndex::key("Đi", 3), "di ");
        assert_eq!(PrefixIndex::key("c", 2), "c ");
        assert_eq!(PrefixIndex::key("trường", 3), "tru");
    }

    #[test]
    fn buckets_sorted_by_popularity() {
        let idx = sample();
        // "chao" folds to the same 3-char key as "chào", "cháu" and "cha".
        assert_eq!(idx.candidates("chao", 10)[..3], ["chào", "cháu", "cha"]);
        // Topped up with the rest of the "ch" bucket.
        assert!(idx.candidates("chao", 10).contains(&"chơi"));
    }

    #[test]
    fn short_prefix_uses_two_char_bucket() {
        let idx = sample();
        assert_eq!(idx.candidates("ch", 10), vec!["chào", "chơi", "cháu", "cha"]);
        assert_eq!(idx.candidates("co", 10), vec!["con"]);
    }

    #[test]
    fn pool_cap_truncates() {
        let idx = sample();
        assert_eq!(idx.candidates("ch", 2), vec!["chào", "chơi"]);
    }

    #[test]
    fn empty_index() {
        let idx = PrefixIndex::default();
        assert!(idx.is_empty());
        assert!(idx.candidates("abc", 5).is_empty());
    }
}
