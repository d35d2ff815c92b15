use thiserror::Error;

use super::CliFlags;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

/// Parse `args` (program name first) into flags.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "--no-special" => flags.no_special = true,
            "-l" | "--length" => {
                // Negative values are taken as values, not flags.
                let value = iter
                    .next()
                    .ok_or_else(|| ParseError::MissingValue(arg.clone()))?;
                flags.length = Some(parse_length(value)?);
            }
            other => {
                if let Some(value) = other.strip_prefix("--length=") {
                    flags.length = Some(parse_length(value)?);
                } else {
                    return Err(ParseError::UnknownArg(other.to_string()));
                }
            }
        }
    }

    Ok(flags)
}

fn parse_length(value: &str) -> Result<i64, ParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.to_string()))
}
