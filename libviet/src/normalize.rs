// libviet/src/normalize.rs
//
// Text normalization for the autocorrect pipeline, plus the Vietnamese
// vowel inventory shared by the telex and keyboard modules.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Everything that is not a Vietnamese letter or whitespace.
static NON_VIET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"[^a-zàáảãạăằắẳẵặâầấẩẫậèéẻẽẹêềếểễệ",
        r"ìíỉĩịòóỏõọôồốổỗộơờớởỡợùúủũụưừứửữự",
        r"ỳýỷỹỵđ\s]"
    ))
    .expect("letter class is valid")
});

/// Lowercase, NFC-compose, drop digits, punctuation and foreign letters, trim.
///
/// ```
/// assert_eq!(libviet::normalize("  Trời ĐẸP!! 123 "), "trời đẹp");
/// ```
pub fn normalize(text: &str) -> String {
    let composed: String = text.to_lowercase().nfc().collect();
    NON_VIET.replace_all(&composed, "").trim().to_string()
}

/// Base letter of a (possibly toned) char, ignoring vowel modifiers as well.
fn base_letter(c: char) -> char {
    let mut base = c;
    let mut first = true;
    unicode_normalization::char::decompose_canonical(c, |d| {
        if first {
            base = d;
            first = false;
        }
    });
    base
}

/// True for any Vietnamese vowel, with or without marks.
pub fn is_vowel(c: char) -> bool {
    matches!(
        base_letter(c).to_ascii_lowercase(),
        'a' | 'e' | 'i' | 'o' | 'u' | 'y'
    )
}

/// True if `a` and `b` have at least one vowel char in common.
pub fn share_vowel(a: &str, b: &str) -> bool {
    a.chars().filter(|&c| is_vowel(c)).any(|c| b.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_non_letters() {
        assert_eq!(normalize("Chào bạn, khỏe không?"), "chào bạn khỏe không");
        assert_eq!(normalize("xyz123"), "xyz");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn composes_decomposed_input() {
        assert_eq!(normalize("Ho\u{0323}c"), "học");
    }

    #[test]
    fn vowels() {
        for c in ['a', 'ă', 'ầ', 'ơ', 'ự', 'y', 'ỵ', 'Ê'] {
            assert!(is_vowel(c), "{c}");
        }
        for c in ['b', 'đ', 'd', 'w', ' '] {
            assert!(!is_vowel(c), "{c}");
        }
    }

    #[test]
    fn shared_vowels() {
        assert!(share_vowel("trơi", "mơ"));
        // Toned and untoned forms are different chars.
        assert!(!share_vowel("ơ", "ờ"));
        assert!(!share_vowel("bcd", "abc"));
    }
}
