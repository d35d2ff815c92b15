//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers, and terminal reset.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[33m";

// ============================================================================
// Terminal Control
// ============================================================================

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any lingering style.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 74;
const INNER_WIDTH: usize = BOX_WIDTH - 4;
const FLAG_COL: usize = 24;

/// ┌─ Title ──────┐
pub fn box_top(title: &str) {
    println!("{}", top_border(title));
}

/// │ content      │
pub fn box_line(content: &str) {
    println!("{}", padded_line(content));
}

/// └──────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Flag in a fixed column, description word-wrapped beside it.
pub fn box_opt(flag: &str, desc: &str) {
    let desc_lines = wrap(desc, INNER_WIDTH - FLAG_COL);
    let indent = " ".repeat(FLAG_COL);
    for (i, line) in desc_lines.iter().enumerate() {
        let lead = if i == 0 {
            format!("{:<width$}", flag, width = FLAG_COL)
        } else {
            indent.clone()
        };
        box_line(&format!("{lead}{line}"));
    }
    if desc_lines.is_empty() {
        box_line(flag);
    }
}

fn top_border(title: &str) -> String {
    if title.is_empty() {
        return format!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    }
    let title_part = format!("─ {title} ");
    let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
    format!("┌{}{}┐", title_part, "─".repeat(remaining))
}

fn padded_line(content: &str) -> String {
    let padding = INNER_WIDTH.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Display width ignoring ANSI escape sequences.
fn console_width(s: &str) -> usize {
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
