// libviet/src/hard_rules.rs
//
// Static repair rules for the most common noisy spellings. Consulted before
// any statistical correction: an exact table hit wins, then the first
// matching fallback pattern in declared order.

use ahash::AHashMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::rule_groups::{RuleGroup, FALLBACK_LEADS, MERGE_ORDER};

/// Compiled rule table shared by every corrector.
pub static RULES: Lazy<RuleTable> = Lazy::new(|| {
    RuleTable::from_groups(MERGE_ORDER, FALLBACK_LEADS).expect("fallback patterns are valid")
});

/// `lead[a-z]*` anchored at both ends.
#[derive(Debug, Clone)]
pub struct PrefixPattern {
    lead: &'static str,
    re: Regex,
    target: &'static str,
}

impl PrefixPattern {
    pub fn new(lead: &'static str, target: &'static str) -> Result<Self, regex::Error> {
        let re = Regex::new(&format!("^(?:{lead})[a-z]*$"))?;
        Ok(Self { lead, re, target })
    }

    pub fn is_match(&self, word: &str) -> bool {
        self.re.is_match(word)
    }
}

/// Which rule fired for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleHit {
    Exact(&'static str),
    Pattern {
        lead: &'static str,
        target: &'static str,
    },
}

impl RuleHit {
    pub fn target(&self) -> &'static str {
        match *self {
            RuleHit::Exact(t) => t,
            RuleHit::Pattern { target, .. } => target,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RuleTable {
    exact: AHashMap<&'static str, &'static str>,
    patterns: Vec<PrefixPattern>,
}

impl RuleTable {
    /// Merge `groups` in order (later groups override) and compile the
    /// fallback leads.
    pub fn from_groups(
        groups: &[RuleGroup],
        leads: &[(&'static str, &'static str)],
    ) -> Result<Self, regex::Error> {
        let mut exact = AHashMap::new();
        for group in groups {
            for &(key, target) in group.iter() {
                exact.insert(key, target);
            }
        }
        let patterns = leads
            .iter()
            .map(|&(lead, target)| PrefixPattern::new(lead, target))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { exact, patterns })
    }

    /// Number of exact entries.
    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }

    /// Look up an already lowercased, trimmed word.
    pub fn lookup(&self, word: &str) -> Option<RuleHit> {
        if let Some(&target) = self.exact.get(word) {
            return Some(RuleHit::Exact(target));
        }
        self.patterns
            .iter()
            .find(|p| p.is_match(word))
            .map(|p| RuleHit::Pattern {
                lead: p.lead,
                target: p.target,
            })
    }

    /// Rewrite `word` if a rule applies, else return it unchanged.
    pub fn apply(&self, word: &str) -> String {
        let w = word.trim().to_lowercase();
        match self.lookup(&w) {
            Some(hit) => {
                tracing::trace!(word, ?hit, "hard rule");
                hit.target().to_string()
            }
            None => word.to_string(),
        }
    }
}

/// Apply the built-in rule table.
pub fn apply_hard_rules(word: &str) -> String {
    RULES.apply(word)
}
