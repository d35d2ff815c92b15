//! CLI context - bundles settings, flags, and clipboard state.

use std::io::Write;

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use zeroize::Zeroize;

use super::{CliFlags, ParseError, prompts, quiet};
use crate::pass::{self, entropy::Strength};
use crate::settings::Settings;
use crate::tui::print_help;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Generate(#[from] crate::error::Error),
    #[error("failed to write password: {0}")]
    Output(#[from] std::io::Error),
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    pub fn new(args: &[String]) -> Result<Self, RunError> {
        let flags = super::parse(args)?;
        let mut settings = Settings::default();
        flags.apply(&mut settings);
        Ok(Self {
            settings,
            flags,
            clipboard: None,
        })
    }

    pub fn run(&mut self) -> Result<(), RunError> {
        if self.flags.help {
            print_help();
            return Ok(());
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }

        quiet::set(self.settings.quiet);
        if !self.open_clipboard() {
            return Ok(());
        }
        self.generate_output(&mut std::io::stdout().lock())
    }

    /// Returns false when the user declined the terminal fallback.
    fn open_clipboard(&mut self) -> bool {
        if !self.settings.to_clipboard {
            return true;
        }
        match ClipboardContext::new() {
            Ok(ctx) => {
                self.clipboard = Some(ctx);
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "clipboard unavailable");
                prompts::clipboard_unavailable(&e.to_string());
                self.settings.to_clipboard = false;
                prompts::clipboard_fallback_prompt()
            }
        }
    }

    /// Generate one password and hand it to the clipboard, or write it as a
    /// single line to `out`.
    fn generate_output<W: Write>(&mut self, out: &mut W) -> Result<(), RunError> {
        let password = pass::generate(self.settings.length, self.settings.classes)?;

        let bits = self.settings.entropy_bits();
        tracing::debug!(
            bits,
            strength = %Strength::of(bits),
            source = crate::rng::source_name(),
            "password generated"
        );

        if let Some(ctx) = self.clipboard.as_mut() {
            match ctx.set_contents(password.to_string()) {
                Ok(()) => {
                    if let Ok(mut echoed) = ctx.get_contents() {
                        echoed.zeroize();
                    }
                    prompts::clipboard_copied();
                }
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
            return Ok(());
        }

        let mut line = Vec::with_capacity(password.len() + 1);
        line.extend_from_slice(password.as_bytes());
        line.push(b'\n');
        let result = out.write_all(&line).and_then(|()| out.flush());
        line.zeroize();
        result?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::ClassSet;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passgen")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn new_applies_flags() {
        let ctx = Context::new(&args(&["-l", "24", "--no-special"])).unwrap();
        assert_eq!(ctx.settings.length, 24);
        assert_eq!(
            ctx.settings.classes,
            ClassSet {
                special: false,
                ..ClassSet::ALL
            }
        );
    }

    #[test]
    fn new_rejects_bad_flags() {
        assert!(matches!(
            Context::new(&args(&["--bogus"])),
            Err(RunError::Parse(ParseError::UnknownArg(_)))
        ));
    }

    #[test]
    fn invalid_request_surfaces_generate_error() {
        let mut ctx = Context::new(&args(&["-l", "0"])).unwrap();
        assert!(matches!(
            ctx.run(),
            Err(RunError::Generate(crate::error::Error::InvalidArgument(_)))
        ));

        let mut ctx = Context::new(&args(&[
            "--no-upper",
            "--no-lower",
            "--no-digits",
            "--no-special",
        ]))
        .unwrap();
        assert!(matches!(ctx.run(), Err(RunError::Generate(_))));
    }

    #[test]
    fn password_is_written_as_one_line() {
        let mut ctx = Context::new(&args(&["-l", "8", "--no-upper", "--no-special"])).unwrap();
        let mut out = Vec::new();
        ctx.generate_output(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let line = text.strip_suffix('\n').unwrap();
        assert_eq!(line.len(), 8);
        assert!(!line.contains('\n'));
        assert!(line.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn rejected_request_writes_nothing() {
        let mut ctx = Context::new(&args(&["-l", "-3"])).unwrap();
        let mut out = Vec::new();
        assert!(ctx.generate_output(&mut out).is_err());
        assert!(out.is_empty());
    }
}
