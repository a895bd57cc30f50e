//! Word / punctuation tokenizer.
//!
//! A token is either a run of Unicode word characters or a single
//! non-space, non-word symbol, so `"Chào bạn!"` yields `["Chào", "bạn", "!"]`.
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+|[^\w\s]").expect("token pattern is valid"));

/// Split `text` into word and punctuation tokens, preserving case.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Tokenize for the language model: NFC-compose and lowercase first so that
/// training and inference agree on one spelling of every accented word.
pub fn tokenize_lower(text: &str) -> Vec<String> {
    let composed: String = text.nfc().collect::<String>().to_lowercase();
    tokenize(&composed)
}

/// True if the token carries at least one letter or digit.
pub fn is_wordlike(token: &str) -> bool {
    token.chars().any(char::is_alphanumeric)
}
