//! Screen rendering.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use super::app::App;
use super::copy_label::LabelState;
use crate::pass::CharacterClass;
use crate::terminal::{
    BOLD, BOX_WIDTH, DIM, GREEN, RED, RESET, box_bottom, box_line, box_rule, box_top,
    calculate_entropy, entropy_strength,
};

const PASSWORD_COLS: usize = BOX_WIDTH - 4;

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

fn alphabet(class: CharacterClass) -> String {
    String::from_utf8_lossy(class.alphabet()).into_owned()
}

/// Draw the whole screen into `out`.
pub fn render<W: Write>(app: &App, out: &mut W) -> io::Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;

    box_top(out, "Password Generator")?;
    let toggle = if app.options_visible { "Hide options" } else { "Show options" };
    box_line(out, &format!("[o] {toggle}"))?;

    if app.options_visible {
        draw_options(app, out)?;
    }

    box_rule(out)?;
    draw_password(app, out)?;

    box_rule(out)?;
    box_line(
        out,
        &format!("{DIM}Enter: generate   c: copy   o: options   q: quit{RESET}"),
    )?;
    box_bottom(out)?;
    out.flush()
}

fn draw_options<W: Write>(app: &App, out: &mut W) -> io::Result<()> {
    box_rule(out)?;
    box_line(out, &format!("Length: {BOLD}{}{RESET}_", app.length_input))?;
    box_line(
        out,
        &format!("[l] {} Letters (a-z, A-Z)", checkbox(app.letters)),
    )?;
    box_line(
        out,
        &format!("[n] {} Numbers (0-9)", checkbox(app.numbers)),
    )?;
    box_line(
        out,
        &format!(
            "[s] {} Symbols {}",
            checkbox(app.symbols),
            alphabet(CharacterClass::Symbol)
        ),
    )?;

    let config = app.config();
    if config.is_empty() {
        box_line(out, &format!("{RED}Select at least one class and a length{RESET}"))?;
    } else {
        let bits = calculate_entropy(config.length, config.pool_size());
        box_line(
            out,
            &format!("Entropy: {:.1} bits ({})", bits, entropy_strength(bits)),
        )?;
    }
    Ok(())
}

fn draw_password<W: Write>(app: &App, out: &mut W) -> io::Result<()> {
    let Some(password) = app.password.as_deref() else {
        return box_line(out, &format!("{DIM}Press Enter to generate a password{RESET}"));
    };

    // Passwords are ASCII, so byte chunks are char chunks.
    for chunk in password.as_bytes().chunks(PASSWORD_COLS) {
        let line = String::from_utf8_lossy(chunk);
        box_line(out, &format!("{BOLD}{GREEN}{line}{RESET}"))?;
    }

    let label = match app.copy_label.state() {
        LabelState::Idle => app.copy_label.text().to_string(),
        LabelState::Copied => format!("{GREEN}{}{RESET}", app.copy_label.text()),
        LabelState::Failed => format!("{RED}{}{RESET}", app.copy_label.text()),
    };
    box_line(out, &format!("[c] {label}"))?;
    if let Some(err) = &app.last_error {
        box_line(out, &format!("{RED}{err}{RESET}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use std::time::Instant;

    fn rendered(app: &App) -> String {
        let mut buf = Vec::new();
        render(app, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn shows_options_and_prompt() {
        let app = App::new(&Settings::default());
        let screen = rendered(&app);
        assert!(screen.contains("Hide options"));
        assert!(screen.contains("[x] Letters"));
        assert!(screen.contains("(){}[]=<>/,.!@#$%&*+-"));
        assert!(screen.contains("Press Enter to generate"));
        assert!(!screen.contains("[c] Copy"));
    }

    #[test]
    fn hidden_options_are_not_drawn() {
        let mut app = App::new(&Settings::default());
        app.options_visible = false;
        let screen = rendered(&app);
        assert!(screen.contains("Show options"));
        assert!(!screen.contains("Letters"));
    }

    #[test]
    fn long_passwords_wrap() {
        let mut app = App::new(&Settings::default());
        app.password = Some("a".repeat(PASSWORD_COLS + 5));
        app.copy_label.confirm(Instant::now());
        let screen = rendered(&app);
        assert!(screen.contains(&"a".repeat(PASSWORD_COLS)));
        assert!(screen.contains(&format!("{GREEN}aaaaa{RESET}")));
        assert!(screen.contains("Copied!"));
    }

    #[test]
    fn empty_selection_warns() {
        let mut app = App::new(&Settings::default());
        app.letters = false;
        app.numbers = false;
        app.symbols = false;
        assert!(rendered(&app).contains("Select at least one class"));
    }
}
