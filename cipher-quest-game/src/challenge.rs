//! Puzzle generation and answer checking.
//!
//! A [`CipherChallenge`] is never stored: it is rebuilt from its [`Level`]
//! whenever a screen needs it. Each level also exposes a decoder
//! "workbench" ([`DecoderSetting`] + [`preview`]) that the screens drive with
//! the player's current guess.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::ciphers::{
    SubstitutionKey, atbash, base64_decode, base64_encode, book_decode, book_encode,
    caesar_decode, caesar_encode, substitution_decode, substitution_encode, vigenere_decode,
    vigenere_encode, xor_decode, xor_encode,
};
use crate::levels::{CipherKind, Level};

pub const ROT13_SHIFT: i32 = 13;
pub const XOR_KEY: &str = "TOKYO";
pub const VIGENERE_KEY: &str = "MERLIN";
pub const TIME_KEY_YEAR: u32 = 1885;
pub const TERMINAL_PLACEHOLDER: &str = "MULTI_PART_PUZZLE";

/// One plaintext letter per symbol.
pub const HIEROGLYPH_KEY: &[(char, char)] = &[
    ('a', '𓂀'),
    ('n', '𓈖'),
    ('c', '𓎡'),
    ('i', '𓇋'),
    ('e', '𓇌'),
    ('t', '𓏏'),
    ('w', '𓅱'),
    ('s', '𓋴'),
    ('d', '𓂧'),
    ('o', '𓍯'),
    ('m', '𓅓'),
];

pub const ALIEN_KEY: &[(char, char)] = &[
    ('g', '◊'),
    ('r', '∆'),
    ('e', '∑'),
    ('t', '†'),
    ('i', '∞'),
    ('n', '≈'),
    ('s', '∫'),
    ('h', '∏'),
    ('u', '∪'),
    ('m', '∅'),
    ('a', '⊕'),
];

/// Two pages of the evening paper; level 7 points into it.
pub const NEWSPAPER: &[&[&str]] = &[
    &[
        "DAILY NEWS - Evening Edition",
        "The detective found the",
        "evidence of the CASE in the old warehouse.",
    ],
    &["SPORTS The big game was abruptly CLOSED due to rain yesterday evening."],
];

/// Encoding layers of the final level, listed in the order they are peeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Layer {
    Base64,
    Caesar(i32),
    Atbash,
}

pub const FIREWALL_LAYERS: [Layer; 3] = [Layer::Base64, Layer::Caesar(7), Layer::Atbash];

impl Layer {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Base64 => "Base64".to_string(),
            Self::Caesar(shift) => format!("Caesar ({shift})"),
            Self::Atbash => "Atbash".to_string(),
        }
    }

    #[must_use]
    pub fn wrap(self, text: &str) -> String {
        match self {
            Self::Base64 => base64_encode(text),
            Self::Caesar(shift) => caesar_encode(text, shift),
            Self::Atbash => atbash(text),
        }
    }

    #[must_use]
    pub fn peel(self, text: &str) -> String {
        match self {
            Self::Base64 => base64_decode(text),
            Self::Caesar(shift) => caesar_decode(text, shift),
            Self::Atbash => atbash(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChallengeKey {
    Shift(i32),
    Word(&'static str),
    Year(u32),
}

/// Display-only material that accompanies some challenges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChallengeExtra {
    SymbolMap(SubstitutionKey),
    Newspaper(&'static [&'static [&'static str]]),
    Layers(Vec<Layer>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CipherChallenge {
    pub encoded: String,
    pub solution: &'static str,
    pub key: Option<ChallengeKey>,
    pub extra: Option<ChallengeExtra>,
}

/// Caesar shift derived from a year: last two digits, wrapped to the alphabet.
#[must_use]
pub fn year_shift(year: u32) -> i32 {
    i32::try_from(year % 100 % 26).unwrap_or(0)
}

#[must_use]
pub fn hieroglyph_key() -> SubstitutionKey {
    SubstitutionKey::from_pairs(HIEROGLYPH_KEY)
}

#[must_use]
pub fn alien_key() -> SubstitutionKey {
    SubstitutionKey::from_pairs(ALIEN_KEY)
}

fn challenge(level: &Level, encoded: String) -> CipherChallenge {
    CipherChallenge {
        encoded,
        solution: level.solution,
        key: None,
        extra: None,
    }
}

/// Build the puzzle text for `level` by running its cipher over the solution.
#[must_use]
pub fn generate_challenge(level: &Level) -> CipherChallenge {
    let solution = level.solution;
    match level.cipher {
        CipherKind::Caesar => CipherChallenge {
            key: Some(ChallengeKey::Shift(ROT13_SHIFT)),
            ..challenge(level, caesar_encode(solution, ROT13_SHIFT))
        },
        CipherKind::Atbash => challenge(level, atbash(solution)),
        CipherKind::MultiPart => challenge(level, TERMINAL_PLACEHOLDER.to_string()),
        CipherKind::HieroglyphSubstitution => {
            let key = hieroglyph_key();
            CipherChallenge {
                extra: Some(ChallengeExtra::SymbolMap(key.clone())),
                ..challenge(level, substitution_encode(solution, &key))
            }
        }
        CipherKind::Xor => CipherChallenge {
            key: Some(ChallengeKey::Word(XOR_KEY)),
            ..challenge(level, xor_encode(solution, XOR_KEY))
        },
        CipherKind::Vigenere => CipherChallenge {
            key: Some(ChallengeKey::Word(VIGENERE_KEY)),
            ..challenge(level, vigenere_encode(solution, VIGENERE_KEY))
        },
        CipherKind::Book => CipherChallenge {
            extra: Some(ChallengeExtra::Newspaper(NEWSPAPER)),
            ..challenge(level, book_encode(solution, NEWSPAPER))
        },
        CipherKind::AlienSubstitution => {
            let key = alien_key();
            CipherChallenge {
                extra: Some(ChallengeExtra::SymbolMap(key.clone())),
                ..challenge(level, substitution_encode(solution, &key))
            }
        }
        CipherKind::TimeCaesar => CipherChallenge {
            key: Some(ChallengeKey::Year(TIME_KEY_YEAR)),
            ..challenge(level, caesar_encode(solution, year_shift(TIME_KEY_YEAR)))
        },
        CipherKind::MultiLayer => {
            let encoded = FIREWALL_LAYERS
                .iter()
                .rev()
                .fold(solution.to_string(), |text, layer| layer.wrap(&text));
            CipherChallenge {
                extra: Some(ChallengeExtra::Layers(FIREWALL_LAYERS.to_vec())),
                ..challenge(level, encoded)
            }
        }
    }
}

/// The player's current input on a level's decoder tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecoderSetting {
    Shift(i32),
    Reflect(bool),
    Keyword(String),
    Year(u32),
    PeelLayers(usize),
    Legend,
    References,
    Terminal,
}

impl DecoderSetting {
    /// Starting position of the tool when a level opens.
    #[must_use]
    pub const fn initial(cipher: CipherKind) -> Self {
        match cipher {
            CipherKind::Caesar => Self::Shift(0),
            CipherKind::Atbash => Self::Reflect(false),
            CipherKind::Xor | CipherKind::Vigenere => Self::Keyword(String::new()),
            CipherKind::TimeCaesar => Self::Year(1900),
            CipherKind::MultiLayer => Self::PeelLayers(0),
            CipherKind::HieroglyphSubstitution | CipherKind::AlienSubstitution => Self::Legend,
            CipherKind::Book => Self::References,
            CipherKind::MultiPart => Self::Terminal,
        }
    }

    /// The setting that fully decodes `challenge`, read from its key material.
    #[must_use]
    pub fn solving(cipher: CipherKind, challenge: &CipherChallenge) -> Self {
        match (&challenge.key, cipher) {
            (Some(ChallengeKey::Shift(shift)), _) => Self::Shift(*shift),
            (Some(ChallengeKey::Word(word)), _) => Self::Keyword((*word).to_string()),
            (Some(ChallengeKey::Year(year)), _) => Self::Year(*year),
            (None, CipherKind::Atbash) => Self::Reflect(true),
            (None, CipherKind::MultiLayer) => Self::PeelLayers(FIREWALL_LAYERS.len()),
            (None, other) => Self::initial(other),
        }
    }
}

/// Run the level's decoder over the challenge text with the given setting.
/// A setting that does not belong to the level's cipher shows the encoded
/// text unchanged.
#[must_use]
pub fn preview(level: &Level, challenge: &CipherChallenge, setting: &DecoderSetting) -> String {
    let encoded = challenge.encoded.as_str();
    match (level.cipher, setting) {
        (CipherKind::Caesar | CipherKind::TimeCaesar, DecoderSetting::Shift(shift)) => {
            caesar_decode(encoded, *shift)
        }
        (CipherKind::TimeCaesar, DecoderSetting::Year(year)) => {
            caesar_decode(encoded, year_shift(*year))
        }
        (CipherKind::Atbash, DecoderSetting::Reflect(true)) => atbash(encoded),
        (CipherKind::Xor, DecoderSetting::Keyword(key)) => xor_decode(encoded, key),
        (CipherKind::Vigenere, DecoderSetting::Keyword(key)) => vigenere_decode(encoded, key),
        (
            CipherKind::HieroglyphSubstitution | CipherKind::AlienSubstitution,
            DecoderSetting::Legend,
        ) => match &challenge.extra {
            Some(ChallengeExtra::SymbolMap(key)) => substitution_decode(encoded, key),
            _ => encoded.to_string(),
        },
        (CipherKind::Book, DecoderSetting::References) => match &challenge.extra {
            Some(ChallengeExtra::Newspaper(book)) => book_decode(encoded, book),
            _ => encoded.to_string(),
        },
        (CipherKind::MultiLayer, DecoderSetting::PeelLayers(count)) => FIREWALL_LAYERS
            .iter()
            .take(*count)
            .fold(encoded.to_string(), |text, layer| layer.peel(&text)),
        _ => encoded.to_string(),
    }
}

static NON_WORD: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"[^\w\s]").ok());
static WHITESPACE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\s+").ok());

/// Lowercase, strip punctuation and collapse whitespace.
#[must_use]
pub fn normalize_answer(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD
        .as_ref()
        .map_or_else(|| lowered.clone(), |re| re.replace_all(&lowered, "").into_owned());
    let collapsed = WHITESPACE
        .as_ref()
        .map_or_else(|| stripped.clone(), |re| re.replace_all(&stripped, " ").into_owned());
    collapsed.trim().to_string()
}

#[must_use]
pub fn answers_match(input: &str, expected: &str) -> bool {
    normalize_answer(input) == normalize_answer(expected)
}

#[must_use]
pub fn check_answer(level: &Level, input: &str) -> bool {
    answers_match(input, level.solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::{LEVELS, level};

    fn encoded(id: u8) -> String {
        generate_challenge(level(id).unwrap()).encoded
    }

    #[test]
    fn first_level_is_rot13() {
        let lvl = level(1).unwrap();
        let challenge = generate_challenge(lvl);
        assert_eq!(challenge.encoded, "URYYB JBEYQ");
        assert_eq!(challenge.key, Some(ChallengeKey::Shift(13)));
        assert_eq!(caesar_decode(&challenge.encoded, 13), "HELLO WORLD");
        assert_eq!(
            preview(lvl, &challenge, &DecoderSetting::Shift(13)),
            "HELLO WORLD"
        );
    }

    #[test]
    fn fixed_encodings_match_reference_texts() {
        assert_eq!(encoded(2), "SVCGVXS XIBHGZO");
        assert_eq!(encoded(3), TERMINAL_PLACEHOLDER);
        assert_eq!(encoded(4), "𓂀𓈖𓎡𓇋𓇌𓈖𓏏 𓅱𓇋𓋴𓂧𓍯𓅓");
        assert_eq!(encoded(5), "1a a 4 17 6f 10 1d e 18 2 7");
        assert_eq!(encoded(6), "YEXTK FBICW");
        assert_eq!(encoded(7), "1-3-4 2-1-7");
        assert_eq!(encoded(8), "◊∆∑∑†∞≈◊∫ ∏∪∅⊕≈");
        assert_eq!(encoded(9), "APTL WHYHKVE");
        assert_eq!(encoded(10), "QlBDQ0RTVSBHRVpZQ0xDRA==");
    }

    #[test]
    fn every_challenge_decodes_with_its_own_key() {
        for lvl in LEVELS.iter().filter(|l| l.cipher != CipherKind::MultiPart) {
            let challenge = generate_challenge(lvl);
            let setting = DecoderSetting::solving(lvl.cipher, &challenge);
            let decoded = preview(lvl, &challenge, &setting);
            assert!(check_answer(lvl, &decoded), "level {} decoded {decoded:?}", lvl.id);
        }
    }

    #[test]
    fn symbol_maps_are_injective() {
        assert!(hieroglyph_key().is_injective());
        assert!(alien_key().is_injective());
        assert_eq!(hieroglyph_key().len(), HIEROGLYPH_KEY.len());
        assert_eq!(alien_key().len(), ALIEN_KEY.len());
    }

    #[test]
    fn layers_peel_one_at_a_time() {
        let lvl = level(10).unwrap();
        let challenge = generate_challenge(lvl);
        assert_eq!(
            preview(lvl, &challenge, &DecoderSetting::PeelLayers(1)),
            "BPCCDSU GEZYCLCD"
        );
        assert_eq!(
            preview(lvl, &challenge, &DecoderSetting::PeelLayers(2)),
            "UIVVWLN ZXSRVEVW"
        );
        assert_eq!(
            preview(lvl, &challenge, &DecoderSetting::PeelLayers(9)),
            "FREEDOM ACHIEVED"
        );
        let labels: Vec<String> = FIREWALL_LAYERS.iter().map(|l| l.label()).collect();
        assert_eq!(labels, ["Base64", "Caesar (7)", "Atbash"]);
    }

    #[test]
    fn year_dial_drives_time_caesar() {
        assert_eq!(year_shift(1885), 7);
        assert_eq!(year_shift(1999), 21);
        assert_eq!(year_shift(2000), 0);
        let lvl = level(9).unwrap();
        let challenge = generate_challenge(lvl);
        assert_eq!(
            preview(lvl, &challenge, &DecoderSetting::Year(1885)),
            "TIME PARADOX"
        );
        assert_ne!(
            preview(lvl, &challenge, &DecoderSetting::Year(1886)),
            "TIME PARADOX"
        );
    }

    #[test]
    fn mismatched_setting_shows_encoded_text() {
        let lvl = level(2).unwrap();
        let challenge = generate_challenge(lvl);
        assert_eq!(
            preview(lvl, &challenge, &DecoderSetting::Shift(3)),
            challenge.encoded
        );
        assert_eq!(
            preview(lvl, &challenge, &DecoderSetting::Reflect(false)),
            challenge.encoded
        );
    }

    #[test]
    fn answers_ignore_case_spacing_and_punctuation() {
        let lvl = level(1).unwrap();
        assert!(check_answer(lvl, "hello world"));
        assert!(check_answer(lvl, "  Hello,   World! "));
        assert!(!check_answer(lvl, "hello"));
        assert!(!check_answer(lvl, "helloworld"));
        assert_eq!(
            normalize_answer("If you've gotten this far,\tyou already know."),
            "if youve gotten this far you already know"
        );
    }
}
