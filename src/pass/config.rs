//! Per-request generation config and length normalization.

use std::collections::BTreeSet;

use super::charset::CharacterClass;

/// Upper bound applied when normalizing user-entered lengths.
pub const MAX_LENGTH: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationConfig {
    pub length: usize,
    pub classes: BTreeSet<CharacterClass>,
}

impl GenerationConfig {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            classes: BTreeSet::new(),
        }
    }

    pub fn with(mut self, class: CharacterClass) -> Self {
        self.classes.insert(class);
        self
    }

    /// Build a config from the three form toggles. Letters enable both cases.
    pub fn from_toggles(length: usize, letters: bool, numbers: bool, symbols: bool) -> Self {
        let mut config = Self::new(length);
        if letters {
            config.classes.insert(CharacterClass::Lowercase);
            config.classes.insert(CharacterClass::Uppercase);
        }
        if numbers {
            config.classes.insert(CharacterClass::Digit);
        }
        if symbols {
            config.classes.insert(CharacterClass::Symbol);
        }
        config
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() || self.length == 0
    }

    /// Effective alphabet size, used for the entropy readout.
    pub fn pool_size(&self) -> usize {
        self.classes.iter().map(|c| c.alphabet().len()).sum()
    }
}

/// Normalize a raw length field: garbage, empty and negative input become 0,
/// fractions truncate, and the result is capped at [`MAX_LENGTH`].
pub fn coerce_length(raw: &str) -> usize {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }
    if let Ok(n) = raw.parse::<usize>() {
        return n.min(MAX_LENGTH);
    }
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => (n.trunc() as usize).min(MAX_LENGTH),
        Ok(n) if n == f64::INFINITY => MAX_LENGTH,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_toggle_enables_both_cases() {
        let config = GenerationConfig::from_toggles(10, true, false, false);
        assert!(config.classes.contains(&CharacterClass::Lowercase));
        assert!(config.classes.contains(&CharacterClass::Uppercase));
        assert_eq!(config.classes.len(), 2);
        assert_eq!(config.pool_size(), 52);
    }

    #[test]
    fn all_toggles_off_is_empty() {
        let config = GenerationConfig::from_toggles(10, false, false, false);
        assert!(config.is_empty());
        assert_eq!(config.pool_size(), 0);
    }

    #[test]
    fn with_is_order_independent() {
        let a = GenerationConfig::new(4)
            .with(CharacterClass::Symbol)
            .with(CharacterClass::Digit);
        let b = GenerationConfig::new(4)
            .with(CharacterClass::Digit)
            .with(CharacterClass::Symbol);
        assert_eq!(a, b);
    }

    #[test]
    fn coerce_length_normalizes() {
        assert_eq!(coerce_length("12"), 12);
        assert_eq!(coerce_length("  8 "), 8);
        assert_eq!(coerce_length(""), 0);
        assert_eq!(coerce_length("abc"), 0);
        assert_eq!(coerce_length("-5"), 0);
        assert_eq!(coerce_length("7.9"), 7);
        assert_eq!(coerce_length("NaN"), 0);
        assert_eq!(coerce_length("1e2"), 100);
        assert_eq!(coerce_length("999999"), MAX_LENGTH);
        assert_eq!(coerce_length("inf"), MAX_LENGTH);
    }
}
