use crate::pass::CharClass;
use crate::terminal::{box_bottom, box_line, box_opt, box_top};

pub const LENGTH_PROMPT: &str = "Password length: ";

pub fn class_prompt(class: CharClass) -> String {
    format!("Include {}? (y/n): ", class.label())
}

pub fn print_help() {
    box_top("Passgen");
    box_line("Random passwords from an OS-backed cryptographic generator.");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: run without arguments. Asks for a length, then");
    box_line("     whether to include each character class (y/n).");
    box_line("  2) Client: pass flags (e.g. -l 20 --no-special) to print a");
    box_line("     password directly.");
    box_line("");
    box_line("USAGE:");
    box_line("  passgen [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters in the password (default: 16)");
    box_opt("      --no-upper", "Leave out uppercase letters A-Z");
    box_opt("      --no-lower", "Leave out lowercase letters a-z");
    box_opt("      --no-digits", "Leave out digits 0-9");
    box_opt("      --no-special", "Leave out special characters !@#$%^&*()-_=+[]{}|;:,.<>?");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress warnings and confirmations");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Show this help");
    box_opt("  -v, --version", "Show version");
    box_line("");
    box_line("ENVIRONMENT:");
    box_opt("  PASSGEN_LOG", "Diagnostic log filter, e.g. debug (default: warn)");
    box_bottom();
}
