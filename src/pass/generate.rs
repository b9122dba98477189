//! Password generation.

use rand::{Rng, RngCore};

use super::charset::Provider;
use super::config::GenerationConfig;

/// Generate a single password from the thread-local RNG.
pub fn generate(config: &GenerationConfig) -> String {
    generate_with(config, &mut rand::thread_rng())
}

/// Generate a single password from `rng`.
///
/// Each output position picks one of the enabled providers uniformly and
/// takes one character from it. No enabled class yields an empty string.
pub fn generate_with(config: &GenerationConfig, rng: &mut dyn RngCore) -> String {
    let providers: Vec<Provider> = config.classes.iter().map(|c| c.provider()).collect();

    if providers.is_empty() {
        return String::new();
    }

    let mut password = String::with_capacity(config.length);
    for _ in 0..config.length {
        let provider = providers[rng.gen_range(0..providers.len())];
        password.push(provider(rng));
    }
    password
}

/// Generate `count` independent passwords.
pub fn generate_batch(config: &GenerationConfig, count: usize) -> Vec<String> {
    (0..count).map(|_| generate(config)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::CharacterClass;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    fn in_enabled_alphabet(config: &GenerationConfig, c: char) -> bool {
        config.classes.iter().any(|class| class.contains(c))
    }

    #[test]
    fn digits_only() {
        let config = GenerationConfig::new(8).with(CharacterClass::Digit);
        let password = generate(&config);
        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn lowercase_and_symbols() {
        let config = GenerationConfig::new(12)
            .with(CharacterClass::Lowercase)
            .with(CharacterClass::Symbol);
        for _ in 0..50 {
            let password = generate(&config);
            assert_eq!(password.chars().count(), 12);
            assert!(password.chars().all(|c| {
                c.is_ascii_lowercase() || CharacterClass::Symbol.contains(c)
            }));
        }
    }

    #[test]
    fn no_classes_yields_empty() {
        assert_eq!(generate(&GenerationConfig::new(5)), "");
        assert_eq!(generate(&GenerationConfig::new(0)), "");
    }

    #[test]
    fn zero_length_yields_empty() {
        let config = GenerationConfig::from_toggles(0, true, true, true);
        assert_eq!(generate(&config), "");
    }

    #[test]
    fn exact_length_for_every_class_combination() {
        let mut rng = StdRng::seed_from_u64(3);
        for mask in 1u8..16 {
            let mut config = GenerationConfig::new(0);
            for (bit, class) in ALL.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    config.classes.insert(*class);
                }
            }
            for length in [1, 2, 3, 7, 64] {
                config.length = length;
                let password = generate_with(&config, &mut rng);
                assert_eq!(password.chars().count(), length);
                assert!(password.chars().all(|c| in_enabled_alphabet(&config, c)));
            }
        }
    }

    #[test]
    fn every_enabled_class_is_drawn_from() {
        let config = GenerationConfig::from_toggles(4000, true, true, true);
        let mut rng = StdRng::seed_from_u64(11);
        let password = generate_with(&config, &mut rng);
        for class in ALL {
            assert!(
                password.chars().any(|c| class.contains(c)),
                "{class:?} never sampled"
            );
        }
    }

    fn share_of(config: &GenerationConfig, seed: u64, pick: fn(char) -> bool) -> f64 {
        let password = generate_with(config, &mut StdRng::seed_from_u64(seed));
        password.chars().filter(|&c| pick(c)).count() as f64 / config.length as f64
    }

    #[test]
    fn classes_are_picked_evenly() {
        let config = GenerationConfig::new(20_000)
            .with(CharacterClass::Lowercase)
            .with(CharacterClass::Digit);
        let share = share_of(&config, 21, |c| c.is_ascii_lowercase());
        assert!((share - 0.5).abs() < 0.03, "lowercase share {share}");
    }

    #[test]
    fn letters_toggle_counts_as_two_classes() {
        // Lowercase, uppercase and digits each get a third of the positions.
        let config = GenerationConfig::from_toggles(20_000, true, true, false);
        let share = share_of(&config, 22, |c| c.is_ascii_alphabetic());
        assert!((share - 2.0 / 3.0).abs() < 0.03, "letter share {share}");
    }

    #[test]
    fn same_seed_same_password() {
        let config = GenerationConfig::from_toggles(32, true, true, true);
        let a = generate_with(&config, &mut StdRng::seed_from_u64(99));
        let b = generate_with(&config, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn batch_count() {
        let config = GenerationConfig::new(6).with(CharacterClass::Uppercase);
        let batch = generate_batch(&config, 4);
        assert_eq!(batch.len(), 4);
        assert!(batch.iter().all(|p| p.len() == 6));
        assert!(generate_batch(&config, 0).is_empty());
    }
}
