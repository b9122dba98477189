//! Remembered generator options.

mod file;

use std::path::Path;

use crate::error::Result;
use crate::pass::GenerationConfig;

pub use file::{default_path, log_path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub letters: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self> {
        Self::load_from(&default_path())
    }

    pub fn save_to_file(&self) -> Result<()> {
        self.save_to(&default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        file::load(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        file::save(self, path)
    }

    pub fn to_config(&self) -> GenerationConfig {
        GenerationConfig::from_toggles(self.pass_length, self.letters, self.numbers, self.symbols)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            letters: true,
            numbers: true,
            symbols: true,
        }
    }
}
