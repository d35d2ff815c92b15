mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, RunError};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Run CLI mode. Returns the process exit code.
pub fn run(args: &[String]) -> i32 {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::usage_hint();
            return 2;
        }
    };
    crate::logging::init(ctx.settings.quiet);

    match ctx.run() {
        Ok(()) => 0,
        Err(e) => {
            prompts::error(&e.to_string());
            1
        }
    }
}
