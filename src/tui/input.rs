//! Answer sources for the interactive prompts.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};
use thiserror::Error;
use zeroize::Zeroize;

use crate::terminal::{RawModeGuard, flush};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input cancelled")]
    Cancelled,
    #[error("unexpected end of input")]
    Eof,
    #[error("not a whole number: {0}")]
    InvalidNumber(String),
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Which keys a raw-mode prompt accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accept {
    /// Digits and a sign.
    Integer,
    Text,
}

impl Accept {
    fn allows(self, c: char) -> bool {
        match self {
            Accept::Integer => c.is_ascii_digit() || c == '-' || c == '+',
            Accept::Text => !c.is_control(),
        }
    }
}

/// Something that can show a prompt and hand back one answer.
pub trait AnswerSource {
    fn answer(&mut self, prompt: &str, accept: Accept) -> Result<String, InputError>;
}

/// Reads whitespace-separated answers, so `16 y y y n` on one line answers
/// all five prompts. Blank lines are skipped. Used when stdin is not a
/// terminal, and by tests.
pub struct Lines<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Lines<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> AnswerSource for Lines<R, W> {
    fn answer(&mut self, prompt: &str, _accept: Accept) -> Result<String, InputError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        while self.pending.is_empty() {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(InputError::Eof);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        line.zeroize();
        self.pending.pop_front().ok_or(InputError::Eof)
    }
}

/// Reads answers with the terminal in raw mode: Esc or Ctrl+C cancels,
/// Ctrl+U clears, Backspace edits.
pub struct RawTerminal;

impl AnswerSource for RawTerminal {
    fn answer(&mut self, prompt: &str, accept: Accept) -> Result<String, InputError> {
        let guard = RawModeGuard::new()?;
        print!("{prompt}");
        flush();

        let mut answer = String::new();
        let outcome = loop {
            let key = match read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => key,
                Ok(_) => continue,
                Err(e) => break Err(InputError::Io(e)),
            };
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('c') if ctrl => break Err(InputError::Cancelled),
                KeyCode::Char('d') if ctrl && answer.is_empty() => break Err(InputError::Eof),
                KeyCode::Esc => break Err(InputError::Cancelled),
                KeyCode::Enter => break Ok(()),
                KeyCode::Char('u') if ctrl => {
                    for _ in 0..answer.chars().count() {
                        print!("\x08 \x08");
                    }
                    answer.clear();
                }
                KeyCode::Backspace => {
                    if answer.pop().is_some() {
                        print!("\x08 \x08");
                    }
                }
                KeyCode::Char(c) if !ctrl && accept.allows(c) => {
                    answer.push(c);
                    print!("{c}");
                }
                _ => {}
            }
            flush();
        };

        drop(guard);
        println!();

        match outcome {
            Ok(()) => Ok(answer.trim().to_string()),
            Err(e) => Err(e),
        }
    }
}

/// Parse a length answer. Sign and range are the generator's concern.
pub fn parse_length(answer: &str) -> Result<i64, InputError> {
    answer
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidNumber(answer.trim().to_string()))
}

/// Only `y` (any case) means yes.
pub fn parse_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn yes_is_strictly_y() {
        assert!(parse_yes("y"));
        assert!(parse_yes("Y"));
        assert!(parse_yes(" y "));
        assert!(!parse_yes("yes"));
        assert!(!parse_yes("n"));
        assert!(!parse_yes(""));
    }

    #[test]
    fn lengths() {
        assert_eq!(parse_length("12").unwrap(), 12);
        assert_eq!(parse_length(" 7 ").unwrap(), 7);
        assert_eq!(parse_length("-3").unwrap(), -3);
        assert_eq!(parse_length("0").unwrap(), 0);
        assert!(matches!(parse_length("twelve"), Err(InputError::InvalidNumber(s)) if s == "twelve"));
        assert!(matches!(parse_length(""), Err(InputError::InvalidNumber(_))));
    }

    #[test]
    fn lines_echo_prompt_and_trim() {
        let mut src = Lines::new(Cursor::new("  16 \r\nn\n"), Vec::new());
        assert_eq!(src.answer("Length: ", Accept::Integer).unwrap(), "16");
        assert_eq!(src.answer("More? ", Accept::Text).unwrap(), "n");
        let shown = String::from_utf8(src.into_output()).unwrap();
        assert_eq!(shown, "Length: More? ");
    }

    #[test]
    fn lines_split_tokens_and_skip_blanks() {
        let mut src = Lines::new(Cursor::new("\n  \n12 y\n\nn\n"), Vec::new());
        assert_eq!(src.answer("a", Accept::Integer).unwrap(), "12");
        assert_eq!(src.answer("b", Accept::Text).unwrap(), "y");
        assert_eq!(src.answer("c", Accept::Text).unwrap(), "n");
        assert!(matches!(src.answer("d", Accept::Text), Err(InputError::Eof)));
    }

    #[test]
    fn lines_report_eof() {
        let mut src = Lines::new(Cursor::new(""), Vec::new());
        assert!(matches!(src.answer("x", Accept::Text), Err(InputError::Eof)));
    }

    #[test]
    fn integer_keys() {
        assert!(Accept::Integer.allows('7'));
        assert!(Accept::Integer.allows('-'));
        assert!(!Accept::Integer.allows('a'));
        assert!(Accept::Text.allows('y'));
        assert!(!Accept::Text.allows('\t'));
    }
}
