//! libviet crate root
//!
//! This crate provides the Vietnamese autocorrect pipeline (normalizer, hard
//! rules, telex conversion, candidate ranking, contextual and live
//! correctors) and a high-level `Engine` that composes it with the shared
//! `libviet-core` language model.
//!
//! Public API exported here:
//! - `Engine` from `engine`
//! - `AutocorrectConfig` from `config`
//! - `LiveAutocorrector` and `ContextualAutocorrector`
//! - `apply_hard_rules`, `telex_to_vietnamese`, `normalize`

pub mod cache;
pub mod config;
pub mod contextual;
pub mod engine;
pub mod hard_rules;
pub mod keyboard;
pub mod live;
pub mod normalize;
pub mod ranker;
pub mod rule_groups;
pub mod telex;

// Convenience re-exports for common types used by callers.
pub use cache::{BoundedCache, CacheStats};
pub use config::AutocorrectConfig;
pub use contextual::{ContextWeights, ContextualAutocorrector};
pub use engine::Engine;
pub use hard_rules::{apply_hard_rules, RuleTable};
pub use keyboard::KeyboardFixer;
pub use live::LiveAutocorrector;
pub use normalize::normalize;
pub use ranker::{CandidateRanker, RankedCandidate};
pub use telex::telex_to_vietnamese;

// Re-export the core types an `Engine` is built from.
pub use libviet_core::{BigramTable, Config, Error, NGramModel, Result, Vocabulary};
