use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

pub const CONVERSION_SCHEMA_ID: &str =
    "https://schemas.3leaps.dev/hexsaurus/cli/v1/conversion.schema.json";

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encode,
    Decode,
}

/// One converted input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: String,
    pub output: String,
}

#[derive(Serialize)]
struct ConversionOutput<'a> {
    schema_id: &'a str,
    direction: Direction,
    input: &'a str,
    output: &'a str,
    valid: bool,
}

pub fn print_conversions(direction: Direction, conversions: &[Conversion], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            for conversion in conversions {
                println!("{}", conversion_json(direction, conversion));
            }
        }
        OutputFormat::Table => {
            let (input_header, output_header) = match direction {
                Direction::Encode => ("HEX", "WORDS"),
                Direction::Decode => ("WORDS", "HEX"),
            };
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec![input_header, output_header]);
            for conversion in conversions {
                table.add_row(vec![conversion.input.as_str(), conversion.output.as_str()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for conversion in conversions {
                println!("{} -> {}", conversion.input, conversion.output);
            }
        }
        OutputFormat::Raw => {
            for conversion in conversions {
                println!("{}", conversion.output);
            }
        }
    }
}

fn conversion_json(direction: Direction, conversion: &Conversion) -> String {
    let out = ConversionOutput {
        schema_id: CONVERSION_SCHEMA_ID,
        direction,
        input: &conversion.input,
        output: &conversion.output,
        valid: conversion.input.is_empty() || !conversion.output.is_empty(),
    };
    serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
}
