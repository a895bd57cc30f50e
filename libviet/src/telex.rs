// libviet/src/telex.rs
//
// Telex is the ASCII convention for typing Vietnamese: doubled or
// w-suffixed letters produce modified vowels (aa -> â, ow -> ơ, dd -> đ) and
// one of five trailing letters selects the tone (s f r x j).

use phf::phf_map;

use crate::normalize::is_vowel;

/// Telex digraphs, applied in this order.
pub const DIGRAPHS: &[(&str, &str)] = &[
    ("aw", "ă"),
    ("aa", "â"),
    ("dd", "đ"),
    ("ee", "ê"),
    ("oo", "ô"),
    ("ow", "ơ"),
    ("uw", "ư"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// sắc
    Acute,
    /// huyền
    Grave,
    /// hỏi
    Hook,
    /// ngã
    Tilde,
    /// nặng
    Dot,
}

impl Tone {
    fn index(self) -> usize {
        match self {
            Tone::Acute => 0,
            Tone::Grave => 1,
            Tone::Hook => 2,
            Tone::Tilde => 3,
            Tone::Dot => 4,
        }
    }
}

static TONE_KEYS: phf::Map<char, Tone> = phf_map! {
    's' => Tone::Acute,
    'f' => Tone::Grave,
    'r' => Tone::Hook,
    'x' => Tone::Tilde,
    'j' => Tone::Dot,
};

/// Untoned vowel -> [sắc, huyền, hỏi, ngã, nặng].
static TONED: phf::Map<char, [char; 5]> = phf_map! {
    'a' => ['á', 'à', 'ả', 'ã', 'ạ'],
    'ă' => ['ắ', 'ằ', 'ẳ', 'ẵ', 'ặ'],
    'â' => ['ấ', 'ầ', 'ẩ', 'ẫ', 'ậ'],
    'e' => ['é', 'è', 'ẻ', 'ẽ', 'ẹ'],
    'ê' => ['ế', 'ề', 'ể', 'ễ', 'ệ'],
    'i' => ['í', 'ì', 'ỉ', 'ĩ', 'ị'],
    'o' => ['ó', 'ò', 'ỏ', 'õ', 'ọ'],
    'ô' => ['ố', 'ồ', 'ổ', 'ỗ', 'ộ'],
    'ơ' => ['ớ', 'ờ', 'ở', 'ỡ', 'ợ'],
    'u' => ['ú', 'ù', 'ủ', 'ũ', 'ụ'],
    'ư' => ['ứ', 'ừ', 'ử', 'ữ', 'ự'],
    'y' => ['ý', 'ỳ', 'ỷ', 'ỹ', 'ỵ'],
};

fn is_modified(c: char) -> bool {
    matches!(c, 'ă' | 'â' | 'ê' | 'ô' | 'ơ' | 'ư')
}

/// Convert a telex-typed word to Vietnamese.
///
/// Tone keys are only read after the initial consonant cluster, so the `s`
/// of `sangs` is kept as a consonant. When several tone keys are present the
/// last one wins and all of them are removed. Without a tone key no tone is
/// added.
///
/// ```
/// use libviet::telex::telex_to_vietnamese;
/// assert_eq!(telex_to_vietnamese("chaof"), "chào");
/// assert_eq!(telex_to_vietnamese("trowif"), "trời");
/// assert_eq!(telex_to_vietnamese("ddepj"), "đẹp");
/// ```
pub fn telex_to_vietnamese(word: &str) -> String {
    let onset_len = word
        .char_indices()
        .find(|&(_, c)| is_vowel(c))
        .map_or(word.len(), |(i, _)| i);
    let (onset, rest) = word.split_at(onset_len);

    let mut tone = None;
    let mut body = String::with_capacity(word.len());
    body.push_str(onset);
    for c in rest.chars() {
        match TONE_KEYS.get(&c) {
            Some(&t) => tone = Some(t),
            None => body.push(c),
        }
    }

    for &(from, to) in DIGRAPHS {
        if body.contains(from) {
            body = body.replace(from, to);
        }
    }

    match tone {
        Some(t) => place_tone(&body, t),
        None => body,
    }
}

/// Put `tone` on the main vowel of the last vowel cluster.
pub fn place_tone(word: &str, tone: Tone) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    let Some(end) = chars.iter().rposition(|&c| is_vowel(c)) else {
        return word.to_string();
    };
    let mut start = end;
    while start > 0 && is_vowel(chars[start - 1]) {
        start -= 1;
    }

    // "qu" and "gi" act as consonants in front of another vowel.
    if end > start && start > 0 {
        let glide = matches!((chars[start - 1], chars[start]), ('q', 'u') | ('g', 'i'));
        if glide {
            start += 1;
        }
    }

    let len = end - start + 1;
    let closed = end + 1 < chars.len();
    let target = if let Some(m) = (start..=end).rev().find(|&i| is_modified(chars[i])) {
        m
    } else if len == 1 || (len == 2 && !closed) {
        start
    } else if closed {
        end
    } else {
        start + 1
    };

    if let Some(row) = TONED.get(&chars[target]) {
        chars[target] = row[tone.index()];
    }
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_on_open_two_vowel_cluster() {
        assert_eq!(telex_to_vietnamese("chaof"), "chào");
        assert_eq!(telex_to_vietnamese("muaf"), "mùa");
        assert_eq!(telex_to_vietnamese("xauj"), "xạu");
    }

    #[test]
    fn modified_vowel_takes_the_tone() {
        assert_eq!(telex_to_vietnamese("trowif"), "trời");
        assert_eq!(telex_to_vietnamese("ddepj"), "đẹp");
        assert_eq!(telex_to_vietnamese("nguwowif"), "người");
    }

    #[test]
    fn closed_syllable_uses_last_vowel() {
        assert_eq!(telex_to_vietnamese("hocj"), "học");
        assert_eq!(telex_to_vietnamese("toans"), "toán");
        assert_eq!(telex_to_vietnamese("sangs"), "sáng");
    }

    #[test]
    fn glides_after_q_and_g() {
        assert_eq!(telex_to_vietnamese("quas"), "quá");
        assert_eq!(telex_to_vietnamese("gias"), "giá");
        assert_eq!(telex_to_vietnamese("gif"), "gì");
    }

    #[test]
    fn last_tone_key_wins() {
        assert_eq!(telex_to_vietnamese("bas"), "bá");
        assert_eq!(telex_to_vietnamese("basf"), "bà");
    }

    #[test]
    fn no_tone_key_no_tone() {
        assert_eq!(telex_to_vietnamese("ddaay"), "đây");
        assert_eq!(telex_to_vietnamese("nha"), "nha");
        assert_eq!(telex_to_vietnamese("trời"), "trời");
        assert_eq!(telex_to_vietnamese(""), "");
    }

    #[test]
    fn words_without_vowels_pass_through() {
        assert_eq!(telex_to_vietnamese("str"), "str");
    }
}
