use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use hexsaurus_codec::{DigitTable, Sound, HEX_DIGITS, REFERENCE_TABLE, TABLE_VERSION};
use serde::Serialize;

use crate::cmd::TableArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Debug, Serialize)]
struct TableEntry {
    digit: char,
    consonant: &'static str,
    vowel: &'static str,
}

#[derive(Debug, Serialize)]
struct TableOutput {
    schema_id: &'static str,
    table_version: u32,
    entries: Vec<TableEntry>,
}

#[derive(Debug, Serialize)]
struct SoundEntry {
    sound: &'static str,
    kind: &'static str,
    digit: char,
}

#[derive(Debug, Serialize)]
struct SoundsOutput {
    schema_id: &'static str,
    table_version: u32,
    sounds: Vec<SoundEntry>,
}

pub fn run(args: TableArgs, format: OutputFormat) -> CliResult<i32> {
    if args.by_sound {
        let output = SoundsOutput {
            schema_id: "https://schemas.3leaps.dev/hexsaurus/cli/v1/sound-index.schema.json",
            table_version: TABLE_VERSION,
            sounds: sound_entries(&REFERENCE_TABLE),
        };
        print_sounds(&output, format);
        return Ok(SUCCESS);
    }

    let output = TableOutput {
        schema_id: "https://schemas.3leaps.dev/hexsaurus/cli/v1/digit-table.schema.json",
        table_version: TABLE_VERSION,
        entries: table_entries(&REFERENCE_TABLE),
    };

    print_table(&output, format);
    Ok(SUCCESS)
}

fn table_entries(table: &DigitTable) -> Vec<TableEntry> {
    HEX_DIGITS
        .iter()
        .zip(table.consonants.iter().zip(table.vowels.iter()))
        .map(|(&digit, (&consonant, &vowel))| TableEntry {
            digit,
            consonant,
            vowel,
        })
        .collect()
}

/// Every sound in alphabetical order, for decoding by hand.
fn sound_entries(table: &DigitTable) -> Vec<SoundEntry> {
    let mut sounds: Vec<Sound> = table.sounds().collect();
    sounds.sort_by(|a, b| a.text.cmp(b.text));
    sounds
        .into_iter()
        .map(|sound| SoundEntry {
            sound: sound.text,
            kind: sound.kind.as_str(),
            digit: sound.digit,
        })
        .collect()
}

fn print_sounds(output: &SoundsOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(output).unwrap_or_else(|_| "{}".to_string())
        ),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["SOUND", "KIND", "DIGIT"]);
            for entry in &output.sounds {
                table.add_row(vec![
                    entry.sound.to_string(),
                    entry.kind.to_string(),
                    entry.digit.to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            for entry in &output.sounds {
                println!("{:<3} {:<9} {}", entry.sound, entry.kind, entry.digit);
            }
        }
    }
}

fn print_table(output: &TableOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(output).unwrap_or_else(|_| "{}".to_string())
        ),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["DIGIT", "CONSONANT", "VOWEL"]);
            for entry in &output.entries {
                table.add_row(vec![
                    entry.digit.to_string(),
                    entry.consonant.to_string(),
                    entry.vowel.to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("hexsaurus digit table (v{})\n", output.table_version);
            for entry in &output.entries {
                println!("  {}  {:<3} {}", entry.digit, entry.consonant, entry.vowel);
            }
        }
        OutputFormat::Raw => {
            for entry in &output.entries {
                println!("{} {} {}", entry.digit, entry.consonant, entry.vowel);
            }
        }
    }
}
