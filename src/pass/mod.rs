//! Password generation.

pub mod charset;
pub mod config;
mod generate;

pub use charset::CharacterClass;
pub use config::{GenerationConfig, coerce_length};
pub use generate::{generate, generate_batch, generate_with};
