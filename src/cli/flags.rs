use clap::{Parser, ValueEnum};

use crate::pass::{CharacterClass, coerce_length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClassArg {
    #[value(alias = "lowercase")]
    Lower,
    #[value(alias = "uppercase")]
    Upper,
    /// Lowercase and uppercase
    Letters,
    #[value(alias = "numbers")]
    Digits,
    Symbols,
}

impl ClassArg {
    pub fn classes(self) -> &'static [CharacterClass] {
        match self {
            ClassArg::Lower => &[CharacterClass::Lowercase],
            ClassArg::Upper => &[CharacterClass::Uppercase],
            ClassArg::Letters => &[CharacterClass::Lowercase, CharacterClass::Uppercase],
            ClassArg::Digits => &[CharacterClass::Digit],
            ClassArg::Symbols => &[CharacterClass::Symbol],
        }
    }
}

/// Random password generator. Runs the interactive screen when started
/// without arguments from a terminal.
#[derive(Parser, Debug)]
#[command(name = "genpass", version, about)]
pub struct CliFlags {
    /// Password length; anything that is not a non-negative number counts as 0
    #[arg(short, long, value_parser = parse_length, allow_hyphen_values = true)]
    pub length: Option<usize>,

    /// Exact character classes to use, comma separated; overrides the toggles.
    /// Given with no value, no class is selected.
    #[arg(short, long, value_enum, value_delimiter = ',', num_args = 0..)]
    pub classes: Option<Vec<ClassArg>>,

    /// Leave out letters
    #[arg(long)]
    pub no_letters: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Number of passwords to generate
    #[arg(short, long, default_value_t = 1)]
    pub number: usize,

    /// Copy to the clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Start from the saved settings instead of the built-in defaults
    #[arg(short, long)]
    pub saved: bool,

    /// Remember the resulting length and toggles
    #[arg(long)]
    pub save: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,

    /// Open the interactive screen
    #[arg(short, long)]
    pub interactive: bool,
}

fn parse_length(raw: &str) -> Result<usize, String> {
    Ok(coerce_length(raw))
}
