use std::io::{BufRead, IsTerminal};

use clap::{Args, Subcommand};
use hexsaurus_codec::DEFAULT_SEPARATOR;

use crate::exit::{io_error, CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod envinfo;
pub mod table;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Turn hex strings into pronounceable words.
    Encode(EncodeArgs),
    /// Turn words back into hex strings.
    Decode(DecodeArgs),
    /// Print the digit-to-sound table.
    Table(TableArgs),
    /// Show version information.
    Version(VersionArgs),
    /// Report table identity, separator resolution and a codec self-check.
    Envinfo(EnvinfoArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Table(args) => table::run(args, format),
        Command::Version(args) => version::run(args),
        Command::Envinfo(args) => envinfo::run(args, format),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Hex strings to encode. Reads stdin lines when omitted.
    pub inputs: Vec<String>,
    /// Separator placed between words. Sounds fall back to "-".
    #[arg(
        long,
        short = 's',
        env = "HEXSAURUS_SEPARATOR",
        default_value = DEFAULT_SEPARATOR,
        allow_hyphen_values = true
    )]
    pub separator: String,
    /// Fail on input that is not hexadecimal instead of printing nothing.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Word strings to decode. Reads stdin lines when omitted.
    pub inputs: Vec<String>,
    /// Ignore word positions and tokenize around consonants only.
    #[arg(long)]
    pub lossy: bool,
}

#[derive(Args, Debug, Default)]
pub struct TableArgs {
    /// List sounds alphabetically instead of digits in order.
    #[arg(long)]
    pub by_sound: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

#[derive(Args, Debug)]
pub struct EnvinfoArgs {
    /// Separator whose resolution is reported.
    #[arg(
        long,
        short = 's',
        env = "HEXSAURUS_SEPARATOR",
        default_value = DEFAULT_SEPARATOR,
        allow_hyphen_values = true
    )]
    pub separator: String,
}

/// Positional inputs, or non-blank stdin lines when there are none.
pub fn collect_inputs(inputs: Vec<String>) -> CliResult<Vec<String>> {
    if !inputs.is_empty() {
        return Ok(inputs);
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::new(
            USAGE,
            "no input given (pass arguments or pipe lines on stdin)",
        ));
    }
    read_lines(stdin.lock())
}

fn read_lines(reader: impl BufRead) -> CliResult<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|err| io_error("failed reading stdin", err))?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::exit::DATA_INVALID;

    #[test]
    fn explicit_inputs_skip_stdin() {
        let inputs = collect_inputs(vec!["abc".to_string()]).unwrap();
        assert_eq!(inputs, vec!["abc".to_string()]);
    }

    #[test]
    fn read_lines_trims_and_skips_blank_lines() {
        let lines = read_lines(Cursor::new("0a1b\r\n\n  ff  \n")).unwrap();
        assert_eq!(lines, vec!["0a1b".to_string(), "ff".to_string()]);
    }

    #[test]
    fn read_lines_rejects_invalid_utf8() {
        let err = read_lines(Cursor::new(vec![0xff, 0xfe, b'\n'])).unwrap_err();
        assert_eq!(err.code, DATA_INVALID);
    }
}
