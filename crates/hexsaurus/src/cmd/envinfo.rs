use std::collections::BTreeMap;

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use hexsaurus_codec::{Codec, CHUNK_LEN, TABLE_VERSION};
use serde::Serialize;

use crate::cmd::EnvinfoArgs;
use crate::exit::{CliResult, FAILURE, SUCCESS};
use crate::output::OutputFormat;

pub const ENVINFO_SCHEMA_ID: &str =
    "https://schemas.3leaps.dev/hexsaurus/cli/v1/envinfo.schema.json";

const ENV_VARS: [&str; 3] = ["HEXSAURUS_SEPARATOR", "HEXSAURUS_LOG_LEVEL", "RUST_LOG"];

/// Hex pushed through the codec to check that encode and decode agree.
const SELF_CHECK_HEX: &str = "0123456789abcdf";

#[derive(Serialize)]
struct SeparatorReport {
    requested: String,
    effective: String,
    fell_back: bool,
}

#[derive(Serialize)]
struct SelfCheck {
    hex: &'static str,
    words: String,
    decoded: String,
    ok: bool,
}

#[derive(Serialize)]
struct EnvinfoReport {
    schema_id: &'static str,
    version: &'static str,
    table_version: u32,
    table_fingerprint: String,
    chunk_len: usize,
    separator: SeparatorReport,
    self_check: SelfCheck,
    build_target: &'static str,
    rustc: &'static str,
    environment: BTreeMap<&'static str, Option<String>>,
}

pub fn run(args: EnvinfoArgs, format: OutputFormat) -> CliResult<i32> {
    let report = build_report(&Codec::with_separator(args.separator));
    print_report(&report, format);

    if report.self_check.ok {
        Ok(SUCCESS)
    } else {
        Ok(FAILURE)
    }
}

fn build_report(codec: &Codec) -> EnvinfoReport {
    let requested = codec.config().separator.clone();
    let effective = codec.effective_separator().to_string();
    let words = codec.encode(SELF_CHECK_HEX);
    let decoded = codec.decode(&words);

    EnvinfoReport {
        schema_id: ENVINFO_SCHEMA_ID,
        version: env!("CARGO_PKG_VERSION"),
        table_version: TABLE_VERSION,
        table_fingerprint: format!("{:016x}", codec.table().fingerprint()),
        chunk_len: CHUNK_LEN,
        separator: SeparatorReport {
            fell_back: requested != effective,
            requested,
            effective,
        },
        self_check: SelfCheck {
            hex: SELF_CHECK_HEX,
            ok: decoded == SELF_CHECK_HEX,
            words,
            decoded,
        },
        build_target: option_env!("HEXSAURUS_BUILD_TARGET").unwrap_or("unknown"),
        rustc: option_env!("RUSTC_VERSION").unwrap_or("unknown"),
        environment: ENV_VARS
            .iter()
            .map(|&name| (name, std::env::var(name).ok()))
            .collect(),
    }
}

fn print_report(report: &EnvinfoReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
        ),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["KEY", "VALUE"]);
            for (key, value) in report_rows(report) {
                table.add_row(vec![key, value]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for (key, value) in report_rows(report) {
                println!("{key:<22} {value}");
            }
        }
        OutputFormat::Raw => println!("{}", report.table_fingerprint),
    }
}

fn report_rows(report: &EnvinfoReport) -> Vec<(String, String)> {
    let separator = &report.separator;
    let mut rows = vec![
        ("version".to_string(), report.version.to_string()),
        (
            "table".to_string(),
            format!("v{} ({})", report.table_version, report.table_fingerprint),
        ),
        ("chunk length".to_string(), report.chunk_len.to_string()),
        (
            "separator".to_string(),
            if separator.fell_back {
                format!("{:?} -> {:?} (sound)", separator.requested, separator.effective)
            } else {
                format!("{:?}", separator.effective)
            },
        ),
        (
            "self check".to_string(),
            format!(
                "{} -> {} -> {} ({})",
                report.self_check.hex,
                report.self_check.words,
                report.self_check.decoded,
                if report.self_check.ok { "ok" } else { "MISMATCH" }
            ),
        ),
        ("build target".to_string(), report.build_target.to_string()),
        ("rustc".to_string(), report.rustc.to_string()),
    ];
    for (name, value) in &report.environment {
        rows.push((
            name.to_string(),
            value.clone().unwrap_or_else(|| "(not set)".to_string()),
        ));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexsaurus_codec::REFERENCE_TABLE;

    #[test]
    fn report_carries_table_identity() {
        let report = build_report(&Codec::new());
        assert_eq!(report.table_version, TABLE_VERSION);
        assert_eq!(
            report.table_fingerprint,
            format!("{:016x}", REFERENCE_TABLE.fingerprint())
        );
        assert_eq!(report.table_fingerprint.len(), 16);
        assert_eq!(report.chunk_len, 5);
    }

    #[test]
    fn report_shows_separator_fallback() {
        let report = build_report(&Codec::with_separator("oo"));
        assert_eq!(report.separator.requested, "oo");
        assert_eq!(report.separator.effective, "-");
        assert!(report.separator.fell_back);

        let report = build_report(&Codec::with_separator("::"));
        assert_eq!(report.separator.effective, "::");
        assert!(!report.separator.fell_back);
    }

    #[test]
    fn self_check_round_trips_reference_table() {
        let report = build_report(&Codec::with_separator(" "));
        assert_eq!(report.self_check.words, "baadaih jeymip roatooz");
        assert_eq!(report.self_check.decoded, SELF_CHECK_HEX);
        assert!(report.self_check.ok);
    }

    #[test]
    fn report_json_has_schema_id() {
        let json = serde_json::to_value(build_report(&Codec::new()))
            .expect("envinfo report should serialize");
        assert_eq!(json["schema_id"], ENVINFO_SCHEMA_ID);
        assert_eq!(json["separator"]["effective"], "-");
        assert!(json["environment"]
            .as_object()
            .is_some_and(|env| env.contains_key("HEXSAURUS_SEPARATOR")));
    }

    #[test]
    fn rows_flag_fallback_separator() {
        let report = build_report(&Codec::with_separator("b"));
        let rows = report_rows(&report);
        let (_, separator) = rows
            .iter()
            .find(|(key, _)| key == "separator")
            .expect("separator row");
        assert_eq!(separator, "\"b\" -> \"-\" (sound)");
    }
}
