//! Terminal output utilities.
//!
//! Box drawing, entropy readout, ANSI helpers.

use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const RED: &str = "\x1b[38;5;9m";

// ============================================================================
// Box Drawing (raw-mode safe: every line ends in \r\n)
// ============================================================================

pub const BOX_WIDTH: usize = 60;

/// ┌─ Title ───────────────────────────┐
pub fn box_top<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    if title.is_empty() {
        return write!(out, "┌{}┐\r\n", "─".repeat(BOX_WIDTH - 2));
    }
    let title_part = format!("─ {} ", title);
    let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
    write!(out, "┌{}{}┐\r\n", title_part, "─".repeat(remaining))
}

/// │ content                                        │
pub fn box_line<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    write!(out, "│ {}{} │\r\n", content, " ".repeat(padding))
}

/// ├───────────────────────────────────────────────┤
pub fn box_rule<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "├{}┤\r\n", "─".repeat(BOX_WIDTH - 2))
}

/// └───────────────────────────────────────────────┘
pub fn box_bottom<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "└{}┘\r\n", "─".repeat(BOX_WIDTH - 2))
}

/// Display width ignoring ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Entropy
// ============================================================================

pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_width_skips_escapes() {
        assert_eq!(console_width("abc"), 3);
        assert_eq!(console_width(&format!("{GREEN}abc{RESET}")), 3);
    }

    #[test]
    fn box_line_pads_to_width() {
        let mut buf = Vec::new();
        box_line(&mut buf, &format!("{BOLD}hi{RESET}")).unwrap();
        let line = String::from_utf8(buf).unwrap();
        let visible = console_width(line.trim_end_matches("\r\n"));
        assert_eq!(visible, BOX_WIDTH);
    }

    #[test]
    fn box_top_embeds_title() {
        let mut buf = Vec::new();
        box_top(&mut buf, "Options").unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert!(line.starts_with("┌─ Options "));
        assert_eq!(line.trim_end().chars().count(), BOX_WIDTH);
    }

    #[test]
    fn entropy() {
        assert_eq!(calculate_entropy(10, 0), 0.0);
        assert_eq!(calculate_entropy(8, 2), 8.0);
        assert_eq!(entropy_strength(calculate_entropy(8, 10)), "Weak");
        assert_eq!(entropy_strength(calculate_entropy(12, 83)), "Strong");
        assert_eq!(entropy_strength(calculate_entropy(40, 83)), "Very Strong");
    }
}
