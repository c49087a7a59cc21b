//! Classical cipher transforms backing the puzzle levels.
//!
//! Every function here is total: decoders handed malformed input return an
//! empty string rather than an error, and letters outside ASCII pass through
//! untouched.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

const ALPHABET_LEN: i32 = 26;

/// Reduce any shift into `0..26`.
#[must_use]
pub fn reduce_shift(shift: i32) -> u8 {
    u8::try_from(shift.rem_euclid(ALPHABET_LEN)).unwrap_or(0)
}

fn shift_letter(c: char, shift: u8) -> char {
    let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
    let offset = (c as u8 - base + shift) % 26;
    char::from(base + offset)
}

/// Shift every ASCII letter forward by `shift` positions, preserving case.
#[must_use]
pub fn caesar_encode(text: &str, shift: i32) -> String {
    let shift = reduce_shift(shift);
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                shift_letter(c, shift)
            } else {
                c
            }
        })
        .collect()
}

/// Undo [`caesar_encode`] with the same shift.
#[must_use]
pub fn caesar_decode(text: &str, shift: i32) -> String {
    caesar_encode(text, ALPHABET_LEN - i32::from(reduce_shift(shift)))
}

/// Reflect each ASCII letter around the middle of the alphabet (A↔Z).
///
/// Atbash is its own inverse, so this is used for both directions.
#[must_use]
pub fn atbash(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                char::from(b'Z' - (c as u8 - b'A'))
            } else if c.is_ascii_lowercase() {
                char::from(b'z' - (c as u8 - b'a'))
            } else {
                c
            }
        })
        .collect()
}

#[must_use]
pub fn base64_encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode standard Base64 into UTF-8 text; empty on malformed input.
#[must_use]
pub fn base64_decode(text: &str) -> String {
    STANDARD
        .decode(text.trim())
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_default()
}

#[must_use]
pub fn hex_encode(text: &str) -> String {
    hex::encode(text.as_bytes())
}

/// Decode a contiguous hex string into UTF-8 text; empty on malformed input.
#[must_use]
pub fn hex_decode(text: &str) -> String {
    hex::decode(text.trim())
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_default()
}

/// XOR `data` against a repeating `key`. An empty key leaves the data as-is.
#[must_use]
pub fn xor_bytes(data: &[u8], key: &[u8]) -> Vec<u8> {
    if key.is_empty() {
        return data.to_vec();
    }
    data.iter()
        .zip(key.iter().cycle())
        .map(|(byte, k)| byte ^ k)
        .collect()
}

/// XOR `text` with `key` and render the bytes as space separated, unpadded
/// lowercase hex (`"1a a 4"`).
#[must_use]
pub fn xor_encode(text: &str, key: &str) -> String {
    xor_bytes(text.as_bytes(), key.as_bytes())
        .iter()
        .map(|byte| format!("{byte:x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inverse of [`xor_encode`]. Any token that is not a hex byte yields an
/// empty result.
#[must_use]
pub fn xor_decode(encoded: &str, key: &str) -> String {
    let bytes: Option<Vec<u8>> = encoded
        .split_whitespace()
        .map(|token| u8::from_str_radix(token, 16).ok())
        .collect();
    bytes
        .map(|bytes| xor_bytes(&bytes, key.as_bytes()))
        .and_then(|plain| String::from_utf8(plain).ok())
        .unwrap_or_default()
}

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Character mapping for a simple substitution cipher.
///
/// Keys are lowercase plaintext characters; lookups lower-case the input
/// first. When the same plaintext character is inserted twice the later
/// mapping wins.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubstitutionKey {
    forward: BTreeMap<char, char>,
}

impl SubstitutionKey {
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let forward = pairs
            .into_iter()
            .map(|(plain, cipher)| (lower(plain), cipher))
            .collect();
        Self { forward }
    }

    #[must_use]
    pub fn from_pairs(pairs: &[(char, char)]) -> Self {
        Self::new(pairs.iter().copied())
    }

    #[must_use]
    pub fn encode_char(&self, plain: char) -> Option<char> {
        self.forward.get(&lower(plain)).copied()
    }

    /// Reverse mapping. If two plaintext characters share a symbol, the one
    /// that sorts last wins.
    #[must_use]
    pub fn inverse(&self) -> BTreeMap<char, char> {
        self.forward
            .iter()
            .map(|(plain, cipher)| (*cipher, *plain))
            .collect()
    }

    /// True when no two plaintext characters share a symbol.
    #[must_use]
    pub fn is_injective(&self) -> bool {
        self.inverse().len() == self.forward.len()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.forward.iter().map(|(plain, cipher)| (*plain, *cipher))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

#[must_use]
pub fn substitution_encode(text: &str, key: &SubstitutionKey) -> String {
    text.chars()
        .map(|c| key.encode_char(c).unwrap_or(c))
        .collect()
}

/// Map symbols back to their (lowercase) plaintext characters.
#[must_use]
pub fn substitution_decode(text: &str, key: &SubstitutionKey) -> String {
    let reverse = key.inverse();
    text.chars()
        .map(|c| reverse.get(&lower(c)).copied().unwrap_or(c))
        .collect()
}

fn keyword_shifts(key: &str) -> Vec<u8> {
    key.chars()
        .map(|k| {
            if k.is_ascii_alphabetic() {
                k.to_ascii_uppercase() as u8 - b'A'
            } else {
                0
            }
        })
        .collect()
}

fn vigenere(text: &str, key: &str, invert: bool) -> String {
    let shifts = keyword_shifts(key);
    if shifts.is_empty() {
        return text.to_string();
    }
    let mut cycle = shifts.iter().cycle();
    text.chars()
        .map(|c| {
            if !c.is_ascii_alphabetic() {
                return c;
            }
            let shift = cycle.next().copied().unwrap_or(0);
            let shift = if invert { (26 - shift) % 26 } else { shift };
            shift_letter(c, shift)
        })
        .collect()
}

/// Shift each letter by the matching keyword letter (A=0). The keyword only
/// advances on letters; non-letter keyword characters shift by zero.
#[must_use]
pub fn vigenere_encode(text: &str, key: &str) -> String {
    vigenere(text, key, false)
}

#[must_use]
pub fn vigenere_decode(text: &str, key: &str) -> String {
    vigenere(text, key, true)
}

/// A 1-based `page-line-word` pointer into a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookRef {
    pub page: usize,
    pub line: usize,
    pub word: usize,
}

impl fmt::Display for BookRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.page, self.line, self.word)
    }
}

impl FromStr for BookRef {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('-').map(str::parse::<usize>);
        let (Some(Ok(page)), Some(Ok(line)), Some(Ok(word)), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(());
        };
        if page == 0 || line == 0 || word == 0 {
            return Err(());
        }
        Ok(Self { page, line, word })
    }
}

fn bare_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_uppercase)
        .collect()
}

fn book_word(book: &[&[&str]], at: BookRef) -> Option<String> {
    let line = book
        .get(at.page.checked_sub(1)?)?
        .get(at.line.checked_sub(1)?)?;
    line.split_whitespace()
        .nth(at.word.checked_sub(1)?)
        .map(bare_word)
        .filter(|w| !w.is_empty())
}

fn book_find(book: &[&[&str]], target: &str) -> Option<BookRef> {
    book.iter().enumerate().find_map(|(p, page)| {
        page.iter().enumerate().find_map(|(l, line)| {
            line.split_whitespace()
                .position(|w| bare_word(w) == target)
                .map(|w| BookRef {
                    page: p + 1,
                    line: l + 1,
                    word: w + 1,
                })
        })
    })
}

/// Point at the first occurrence of each word of `text` in `book`.
/// Words the book does not contain become `?`.
#[must_use]
pub fn book_encode(text: &str, book: &[&[&str]]) -> String {
    text.split_whitespace()
        .map(|word| {
            book_find(book, &bare_word(word))
                .map_or_else(|| "?".to_string(), |at| at.to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve whitespace separated references; unresolvable ones become `?`.
#[must_use]
pub fn book_decode(refs: &str, book: &[&[&str]]) -> String {
    refs.split_whitespace()
        .map(|token| {
            token
                .parse::<BookRef>()
                .ok()
                .and_then(|at| book_word(book, at))
                .unwrap_or_else(|| "?".to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}
