// crates/lexdrift-cli/src/commands/tokenize.rs
//
// `lexdrift tokenize <text>` — show the content words drift would mutate.

use clap::Args;
use lexdrift_engine::tokenize;
use tabled::Tabled;

use crate::output::{format_json, format_table, OutputFormat};

/// Tokenize command.
#[derive(Debug, Args)]
pub struct TokenizeCmd {
    /// Text to split into content words.
    #[arg()]
    pub text: String,
}

#[derive(Tabled)]
struct WordRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Word")]
    word: String,
}

/// Run the tokenize command.
pub fn run(cmd: &TokenizeCmd, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let words = tokenize(&cmd.text);

    match format {
        OutputFormat::Json => println!("{}", format_json(&words)?),
        OutputFormat::Table => {
            if words.is_empty() {
                println!("No content words.");
            } else {
                let rows: Vec<WordRow> = words
                    .into_iter()
                    .enumerate()
                    .map(|(position, word)| WordRow { position, word })
                    .collect();
                println!("{}", format_table(&rows));
            }
        }
    }

    Ok(())
}
