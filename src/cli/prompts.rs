//! User-facing messages on stderr.

use std::io::Write;

use super::quiet;
use crate::terminal::{RED, RESET, YELLOW};

/// Yellow warning, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if let Some(line) = warning_line(msg, quiet::enabled()) {
        eprintln!("{line}");
    }
}

fn warning_line(msg: &str, quiet: bool) -> Option<String> {
    (!quiet).then(|| format!("{YELLOW}{msg}{RESET}"))
}

/// Red error. Always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn usage_hint() {
    if !quiet::enabled() {
        eprintln!("Run `passgen --help` for usage.");
    }
}

pub fn clipboard_copied() {
    if !quiet::enabled() {
        eprintln!("*** -COPIED TO CLIPBOARD- ***");
    }
}

pub fn clipboard_unavailable(err: &str) {
    warn(&format!("Clipboard unavailable: {err}"));
}

pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

/// Clipboard unavailable: print to the terminal instead? Non-interactive or
/// quiet runs fall back without asking.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    if accepts_default_yes(&input) {
        return true;
    }

    eprintln!("Aborted.");
    false
}

fn accepts_default_yes(input: &str) -> bool {
    let input = input.trim().to_lowercase();
    input.is_empty() || input == "y" || input == "yes"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_mode_drops_warnings() {
        assert_eq!(
            warning_line("Clipboard unavailable: no display", false),
            Some(format!("{YELLOW}Clipboard unavailable: no display{RESET}"))
        );
        assert_eq!(warning_line("Clipboard unavailable: no display", true), None);
    }

    #[test]
    fn empty_answer_means_yes() {
        assert!(accepts_default_yes("\n"));
        assert!(accepts_default_yes("Y\n"));
        assert!(accepts_default_yes(" yes "));
        assert!(!accepts_default_yes("n\n"));
        assert!(!accepts_default_yes("nope"));
    }
}
