mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "hexsaurus",
    version,
    about = "Pronounceable words for hexadecimal strings"
)]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        env = "HEXSAURUS_LOG_LEVEL",
        default_value = "warn",
        global = true
    )]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_encode_subcommand() {
        let cli = Cli::try_parse_from([
            "hexsaurus",
            "encode",
            "0a1b2c3d4f",
            "--separator",
            "_",
            "--strict",
        ])
        .expect("encode args should parse");

        match cli.command {
            Command::Encode(args) => {
                assert_eq!(args.inputs, vec!["0a1b2c3d4f".to_string()]);
                assert_eq!(args.separator, "_");
                assert!(args.strict);
            }
            other => panic!("expected encode, got {other:?}"),
        }
    }

    #[test]
    fn separator_accepts_leading_hyphen() {
        let cli = Cli::try_parse_from(["hexsaurus", "encode", "ff", "-s", "-."])
            .expect("hyphen separator should parse");
        match cli.command {
            Command::Encode(args) => assert_eq!(args.separator, "-."),
            other => panic!("expected encode, got {other:?}"),
        }
    }

    #[test]
    fn parses_decode_with_global_format() {
        let cli = Cli::try_parse_from(["hexsaurus", "decode", "bocoad-taiwayz", "--format", "raw"])
            .expect("decode args should parse");
        assert!(matches!(cli.format, Some(OutputFormat::Raw)));
        assert!(matches!(cli.command, Command::Decode(_)));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = Cli::try_parse_from(["hexsaurus", "--log-level", "loud", "table"])
            .expect_err("unknown level should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
