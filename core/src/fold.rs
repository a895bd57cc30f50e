//! Diacritic folding for "typed without tone marks" matching.
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Strip combining tone and vowel marks, mapping `đ`/`Đ` to `d`/`D`.
///
/// `"trường"` folds to `"truong"`, `"Đà Nẵng"` to `"Da Nang"`.
pub fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'đ' => 'd',
            'Đ' => 'D',
            other => other,
        })
        .collect()
}

/// Lowercase then fold.
pub fn fold_lower(s: &str) -> String {
    fold(&s.to_lowercase())
}

/// True if every char is ASCII.
pub fn is_ascii_only(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_tones_and_vowel_marks() {
        assert_eq!(fold("trường"), "truong");
        assert_eq!(fold("nắng"), "nang");
        assert_eq!(fold("học"), "hoc");
    }

    #[test]
    fn folds_d_stroke() {
        assert_eq!(fold("đẹp"), "dep");
        assert_eq!(fold_lower("Đà Nẵng"), "da nang");
    }

    #[test]
    fn ascii_is_unchanged() {
        assert_eq!(fold("hello"), "hello");
        assert!(is_ascii_only("hello"));
        assert!(!is_ascii_only("chào"));
    }
}
