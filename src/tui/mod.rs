//! Interactive prompts.

mod input;
mod text;

use std::io;

use zeroize::Zeroize;

pub use input::*;
pub use text::*;

use crate::cli::{prompts, quiet};
use crate::pass::{self, CharClass, ClassSet, entropy::Strength};
use crate::rng;
use crate::settings::Settings;

/// Ask for a length and the four class toggles.
pub fn ask_settings<S: AnswerSource + ?Sized>(src: &mut S) -> Result<Settings, InputError> {
    let length = parse_length(&src.answer(LENGTH_PROMPT, Accept::Integer)?)?;

    let mut classes = ClassSet::NONE;
    for class in CharClass::ALL {
        let answer = src.answer(&class_prompt(class), Accept::Text)?;
        classes.set(class, parse_yes(&answer));
    }
    tracing::debug!(length, ?classes, "prompt answers");

    Ok(Settings {
        length,
        classes,
        ..Settings::default()
    })
}

/// Result lines shown under the prompts.
pub fn summary(password: &str, settings: &Settings) -> String {
    let bits = settings.entropy_bits();
    format!(
        "Generated password: {password}\nEntropy: {bits:.1} bits ({}) • Source: {} • Pool: {} chars",
        Strength::of(bits),
        rng::source_name(),
        settings.pool_size(),
    )
}

/// Generate from the answered settings and render the result lines.
pub fn generate_summary(settings: &Settings) -> crate::Result<String> {
    let password = pass::generate(settings.length, settings.classes)?;
    Ok(summary(&password, settings))
}

/// Run interactive mode. Returns the process exit code.
pub fn run() -> i32 {
    crate::logging::init(false);

    let answers = if quiet::is_interactive() {
        ask_settings(&mut RawTerminal)
    } else {
        let stdin = io::stdin();
        ask_settings(&mut Lines::new(stdin.lock(), io::stdout()))
    };

    let settings = match answers {
        Ok(settings) => settings,
        Err(InputError::Cancelled) => {
            crate::terminal::reset_terminal();
            return 130;
        }
        Err(e) => {
            prompts::error(&e.to_string());
            return 1;
        }
    };

    match generate_summary(&settings) {
        Ok(mut out) => {
            println!("{out}");
            out.zeroize();
            0
        }
        Err(e) => {
            prompts::error(&e.to_string());
            1
        }
    }
}
