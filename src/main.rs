use std::env;
use std::process;

use passgen::{cli, exits, tui};

fn main() {
    exits::install_handlers();
    exits::harden();

    let args: Vec<String> = env::args().collect();

    let code = match args.len() {
        1 => tui::run(),
        _ => cli::run(&args),
    };
    process::exit(code);
}
