//! Interactive screen state and key handling.

use std::time::Instant;

use copypasta::ClipboardProvider;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, warn};
use rand::RngCore;
use zeroize::Zeroize;

use super::copy_label::CopyLabel;
use crate::clipboard;
use crate::pass::config::MAX_LENGTH;
use crate::pass::{self, GenerationConfig, coerce_length};
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

pub struct App {
    pub length_input: String,
    pub letters: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub options_visible: bool,
    pub password: Option<String>,
    pub copy_label: CopyLabel,
    pub last_error: Option<String>,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        Self {
            length_input: settings.pass_length.to_string(),
            letters: settings.letters,
            numbers: settings.numbers,
            symbols: settings.symbols,
            options_visible: true,
            password: None,
            copy_label: CopyLabel::default(),
            last_error: None,
        }
    }

    pub fn config(&self) -> GenerationConfig {
        GenerationConfig::from_toggles(
            coerce_length(&self.length_input),
            self.letters,
            self.numbers,
            self.symbols,
        )
    }

    pub fn settings(&self) -> Settings {
        Settings {
            pass_length: coerce_length(&self.length_input),
            letters: self.letters,
            numbers: self.numbers,
            symbols: self.symbols,
        }
    }

    /// Replace the displayed password. An empty result keeps the current one.
    pub fn generate(&mut self, rng: &mut dyn RngCore) {
        let password = pass::generate_with(&self.config(), rng);
        if password.is_empty() {
            debug!("nothing generated: no class selected or zero length");
            return;
        }
        if let Some(mut old) = self.password.replace(password) {
            old.zeroize();
        }
        // The clipboard still holds the previous password.
        self.copy_label.cancel();
        self.last_error = None;
    }

    /// Copy the displayed password and start the confirmation timer.
    pub fn copy(&mut self, clipboard: &mut dyn ClipboardProvider, now: Instant) {
        let Some(password) = self.password.as_deref() else {
            return;
        };
        match clipboard::copy(clipboard, password) {
            Ok(()) => {
                self.copy_label.confirm(now);
                self.last_error = None;
            }
            Err(e) => {
                warn!("{}", e);
                self.copy_label.fail(now);
                self.last_error = Some(e.to_string());
            }
        }
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.copy_label.tick(now)
    }

    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        now: Instant,
        clipboard: &mut dyn ClipboardProvider,
        rng: &mut dyn RngCore,
    ) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::Continue;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => return Action::Quit,
            KeyCode::Char('u') if ctrl => {
                if self.options_visible {
                    self.length_input.clear();
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => return Action::Quit,
            KeyCode::Enter | KeyCode::Char('g') => self.generate(rng),
            KeyCode::Char('c') => self.copy(clipboard, now),
            KeyCode::Char('o') => self.options_visible = !self.options_visible,
            _ if self.options_visible => self.edit_options(key.code),
            _ => {}
        }
        Action::Continue
    }

    fn edit_options(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('l') => self.letters = !self.letters,
            KeyCode::Char('n') => self.numbers = !self.numbers,
            KeyCode::Char('s') => self.symbols = !self.symbols,
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let mut candidate = if self.length_input == "0" {
                    String::new()
                } else {
                    self.length_input.clone()
                };
                candidate.push(c);
                if candidate.parse::<usize>().is_ok_and(|n| n <= MAX_LENGTH) {
                    self.length_input = candidate;
                }
            }
            KeyCode::Backspace => {
                self.length_input.pop();
            }
            _ => {}
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(password) = self.password.as_mut() {
            password.zeroize();
        }
    }
}
