// src/generators/alphabet.rs
use std::fmt;

use serde::{Deserialize, Serialize};

pub const LOWERCASE_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE_LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"~!@#$%^&*()_+`-={}|[]\\:\"<>?,./";

/// One of the four fixed character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// Every class, in the order required characters are placed.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Lowercase => LOWERCASE_LETTERS,
            CharClass::Uppercase => UPPERCASE_LETTERS,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Lowercase => write!(f, "lowercase"),
            CharClass::Uppercase => write!(f, "uppercase"),
            CharClass::Digit => write!(f, "digit"),
            CharClass::Symbol => write!(f, "symbol"),
        }
    }
}

/// A required class paired with the characters that satisfy it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredAlphabet {
    pub class: CharClass,
    pub alphabet: &'static [u8],
}

impl From<CharClass> for RequiredAlphabet {
    fn from(class: CharClass) -> Self {
        Self {
            class,
            alphabet: class.alphabet(),
        }
    }
}

/// Union of all four classes. Filler characters are drawn from here no
/// matter which classes a policy requires.
pub fn full_alphabet() -> Vec<u8> {
    CharClass::ALL
        .iter()
        .flat_map(|class| class.alphabet().iter().copied())
        .collect()
}
