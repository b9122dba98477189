//! Character classes and their single-character providers.

use rand::{Rng, RngCore};

const LOWERCASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8; 10] = b"0123456789";
const SYMBOLS: &[u8; 21] = b"(){}[]=<>/,.!@#$%&*+-";

/// Returns one random character from a fixed alphabet.
pub type Provider = fn(&mut dyn RngCore) -> char;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn provider(self) -> Provider {
        match self {
            CharacterClass::Lowercase => sample_lowercase,
            CharacterClass::Uppercase => sample_uppercase,
            CharacterClass::Digit => sample_digit,
            CharacterClass::Symbol => sample_symbol,
        }
    }

    #[cfg(test)]
    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }
}

pub fn sample_lowercase(rng: &mut dyn RngCore) -> char {
    (b'a' + rng.gen_range(0..26u8)) as char
}

pub fn sample_uppercase(rng: &mut dyn RngCore) -> char {
    (b'A' + rng.gen_range(0..26u8)) as char
}

pub fn sample_digit(rng: &mut dyn RngCore) -> char {
    (b'0' + rng.gen_range(0..10u8)) as char
}

/// Uniform pick from `(){}[]=<>/,.!@#$%&*+-`.
pub fn sample_symbol(rng: &mut dyn RngCore) -> char {
    SYMBOLS[rng.gen_range(0..SYMBOLS.len())] as char
}
