// crates/lexdrift-cli/src/commands/variants.rs
//
// `lexdrift variants <word>` — list morphological candidates for a word.

use clap::Args;
use lexdrift_engine::morphological_variants;

use crate::output::{format_json, OutputFormat};

/// Morphological variants command.
#[derive(Debug, Args)]
pub struct VariantsCmd {
    /// Word to expand (lowercased before expansion).
    #[arg()]
    pub word: String,
}

/// Run the variants command.
pub fn run(cmd: &VariantsCmd, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let variants = morphological_variants(&cmd.word.to_lowercase());

    match format {
        OutputFormat::Json => println!("{}", format_json(&variants)?),
        OutputFormat::Table => {
            println!("Variants of \"{}\": {}", cmd.word, variants.len());
            for v in &variants {
                println!("  {}", v);
            }
        }
    }

    Ok(())
}
