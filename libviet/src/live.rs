// libviet/src/live.rs
//
// Token-at-a-time correction for text being typed.

use std::sync::Arc;

use libviet_core::Vocabulary;
use phf::phf_set;

use crate::hard_rules::apply_hard_rules;
use crate::keyboard::KeyboardFixer;
use crate::normalize::normalize;

/// Short real words that look like noisy spellings of something else.
/// They are returned as typed.
pub static KEEP_IF_USER_TYPED: phf::Set<&'static str> = phf_set! {
    "trời", "mây", "máy", "may", "mà", "mã", "thật", "thiệt", "nay", "hôm", "này",
};

#[derive(Debug, Clone)]
pub struct LiveAutocorrector {
    keyboard: KeyboardFixer,
}

impl LiveAutocorrector {
    pub fn new(vocab: Arc<Vocabulary>) -> Self {
        Self {
            keyboard: KeyboardFixer::new(vocab),
        }
    }

    pub fn with_keyboard(keyboard: KeyboardFixer) -> Self {
        Self { keyboard }
    }

    /// Correct one token.
    ///
    /// Allow-listed words come back normalized. Otherwise the hard rules and
    /// then the keyboard fix are tried on the normalized form, each only
    /// counting when it changes something. When neither does, or the token
    /// has no letters at all, it is returned exactly as typed, punctuation
    /// and case included.
    pub fn correct_token(&self, token: &str) -> String {
        if token.is_empty() {
            return String::new();
        }

        let w = normalize(token);
        if w.is_empty() {
            return token.to_string();
        }
        if KEEP_IF_USER_TYPED.contains(w.as_str()) {
            return w;
        }

        let ruled = apply_hard_rules(&w);
        if ruled != w {
            return ruled;
        }

        let fixed = self.keyboard.fix_common_keyboard(&w);
        if fixed != w {
            return fixed;
        }

        token.to_string()
    }

    /// Correct each whitespace-separated token and join with single spaces.
    pub fn correct_line(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|t| self.correct_token(t))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live() -> LiveAutocorrector {
        let vocab: Vocabulary = [
            ("trời", 500u64),
            ("đẹp", 300),
            ("quá", 200),
            ("hôm", 150),
            ("nay", 150),
            ("học", 250),
            ("đi", 400),
            ("là", 300),
        ]
        .into_iter()
        .collect();
        LiveAutocorrector::new(Arc::new(vocab))
    }

    #[test]
    fn empty_token() {
        assert_eq!(live().correct_token(""), "");
    }

    #[test]
    fn allow_list_returns_normalized_form() {
        assert_eq!(live().correct_token("May"), "may");
        assert_eq!(live().correct_token("Hôm!"), "hôm");
    }

    #[test]
    fn rules_then_keyboard() {
        let l = live();
        assert_eq!(l.correct_token("trowif"), "trời");
        assert_eq!(l.correct_token("quas"), "quá");
    }

    #[test]
    fn untouched_token_keeps_original_spelling() {
        let l = live();
        assert_eq!(l.correct_token("Học,"), "Học,");
        assert_eq!(l.correct_token("2024"), "2024");
    }

    #[test]
    fn tokens_without_letters_are_kept() {
        let l = live();
        for t in ["2024", "!", "?", ":)", "123", "..."] {
            assert_eq!(l.correct_token(t), t);
        }
        assert_eq!(l.correct_line("hôm nay 8 giờ !"), "hôm nay 8 giờ !");
    }

    #[test]
    fn line_correction() {
        let l = live();
        assert_eq!(l.correct_line("  hom nay   trowif depj quas "), "hôm nay trời đẹp quá");
    }
}
