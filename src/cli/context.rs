//! CLI context - bundles flags and resolved settings.

use std::io::{ErrorKind, Write};

use copypasta::ClipboardProvider;
use log::{debug, info};
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::clipboard;
use crate::error::Result;
use crate::pass::{self, GenerationConfig};
use crate::settings::{self, Settings};
use crate::terminal::{calculate_entropy, entropy_strength};

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Resolve settings from the flags, loading the saved ones for `--saved`.
    pub fn new(flags: CliFlags) -> Self {
        let base = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };
        Self::with_base(flags, base)
    }

    pub fn with_base(flags: CliFlags, base: Settings) -> Self {
        let mut settings = base;
        if let Some(len) = flags.length {
            settings.pass_length = len;
        }
        if flags.no_letters {
            settings.letters = false;
        }
        if flags.no_numbers {
            settings.numbers = false;
        }
        if flags.no_symbols {
            settings.symbols = false;
        }
        Self { settings, flags }
    }

    /// The generator request for this run. An explicit class list replaces
    /// the toggles.
    pub fn config(&self) -> GenerationConfig {
        match &self.flags.classes {
            Some(list) => list
                .iter()
                .flat_map(|arg| arg.classes().iter().copied())
                .fold(
                    GenerationConfig::new(self.settings.pass_length),
                    GenerationConfig::with,
                ),
            None => self.settings.to_config(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        quiet::set(self.flags.quiet);

        if self.flags.save {
            self.settings.save_to_file()?;
            prompts::settings_saved(&settings::default_path().display().to_string());
        }

        let config = self.config();
        if config.classes.is_empty() {
            prompts::no_class_selected();
            return Ok(());
        }
        if config.length == 0 {
            prompts::zero_length();
            return Ok(());
        }

        let bits = calculate_entropy(config.length, config.pool_size());
        info!(
            "generating {} password(s): {:.1} bits each ({})",
            self.flags.number,
            bits,
            entropy_strength(bits)
        );

        if self.flags.clipboard {
            match clipboard::open() {
                Ok(mut ctx) => {
                    copy_batch(&config, self.flags.number, &mut ctx);
                    return Ok(());
                }
                Err(e) => {
                    debug!("{}", e);
                    if !prompts::clipboard_fallback_prompt() {
                        return Ok(());
                    }
                }
            }
        }

        let stdout = std::io::stdout();
        write_passwords(&config, self.flags.number, &mut stdout.lock())
    }
}

/// Copy `count` passwords to the clipboard as one newline-separated string.
fn copy_batch(config: &GenerationConfig, count: usize, ctx: &mut dyn ClipboardProvider) {
    let mut passwords = pass::generate_batch(config, count);
    let mut joined = passwords.join("\n");
    passwords.iter_mut().for_each(|p| p.zeroize());

    let copied = clipboard::copy(ctx, &joined);
    joined.zeroize();
    match copied {
        Ok(()) => prompts::clipboard_copied(count),
        Err(e) => prompts::clipboard_error(&e.to_string()),
    }
}

/// Stream `count` passwords to `out`, one per line, wiping each after it is
/// written. A closed pipe ends the output quietly.
fn write_passwords<W: Write>(
    config: &GenerationConfig,
    count: usize,
    out: &mut W,
) -> Result<()> {
    let written = (0..count).try_for_each(|_| {
        let mut password = pass::generate(config);
        password.push('\n');
        let result = out.write_all(password.as_bytes());
        password.zeroize();
        result
    });

    match written.and_then(|()| out.flush()) {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("output closed early");
            Ok(())
        }
        other => Ok(other?),
    }
}
