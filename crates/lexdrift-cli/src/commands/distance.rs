// crates/lexdrift-cli/src/commands/distance.rs
//
// `lexdrift distance <a> <b>` — case-folded edit distance between two strings.

use clap::Args;
use lexdrift_engine::{edit_distance, text_distance};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{fixed3, format_json, format_table, OutputFormat};

/// Distance command.
#[derive(Debug, Args)]
pub struct DistanceCmd {
    /// First string.
    #[arg()]
    pub a: String,

    /// Second string.
    #[arg()]
    pub b: String,
}

#[derive(Debug, Serialize)]
struct DistanceReport {
    edits: usize,
    normalized: f64,
}

#[derive(Tabled)]
struct DistanceRow {
    #[tabled(rename = "Edits")]
    edits: usize,
    #[tabled(rename = "Normalized")]
    normalized: String,
}

/// Run the distance command.
pub fn run(cmd: &DistanceCmd, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let report = DistanceReport {
        edits: edit_distance(&cmd.a.to_lowercase(), &cmd.b.to_lowercase()),
        normalized: text_distance(&cmd.a, &cmd.b),
    };

    match format {
        OutputFormat::Json => println!("{}", format_json(&report)?),
        OutputFormat::Table => println!(
            "{}",
            format_table(&[DistanceRow {
                edits: report.edits,
                normalized: fixed3(report.normalized),
            }])
        ),
    }

    Ok(())
}
