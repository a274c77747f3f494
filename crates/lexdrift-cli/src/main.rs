// crates/lexdrift-cli/src/main.rs
//
// CLI entrypoint for Lexdrift.
//
// Loads configuration, initializes tracing, and dispatches to the run,
// tokenize, distance and variants subcommands.

mod commands;
mod config;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::distance::DistanceCmd;
use commands::run::RunCmd;
use commands::tokenize::TokenizeCmd;
use commands::variants::VariantsCmd;
use config::{expand_tilde, DriftConfig, DEFAULT_CONFIG_PATH};
use output::OutputFormat;

/// Lexdrift CLI — iterative semantic drift of a term and its definition.
#[derive(Parser, Debug)]
#[command(
    name = "lexdrift",
    version = "0.1.0",
    about = "Lexdrift: bounded, stochastic drift of a term and its definition"
)]
struct Cli {
    /// Path to the TOML configuration file [default: ~/.lexdrift/config.toml].
    #[arg(long, global = true)]
    config: Option<String>,

    /// Output format (overrides config).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Drift a term and definition and print the accepted iterations.
    Run(RunCmd),

    /// Print the content words of a text.
    Tokenize(TokenizeCmd),

    /// Print the case-folded edit distance between two strings.
    Distance(DistanceCmd),

    /// Print the morphological variants of a word.
    Variants(VariantsCmd),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // An explicit --config must load; the default path is optional.
    let (config, load_warning) = match &cli.config {
        Some(path) => (DriftConfig::load(&PathBuf::from(expand_tilde(path)))?, None),
        None => {
            let path = PathBuf::from(expand_tilde(DEFAULT_CONFIG_PATH));
            if path.exists() {
                match DriftConfig::load(&path) {
                    Ok(cfg) => (cfg, None),
                    Err(e) => (DriftConfig::default(), Some(e)),
                }
            } else {
                (DriftConfig::default(), None)
            }
        }
    };

    init_tracing(&config.log_level);
    if let Some(e) = load_warning {
        tracing::warn!("Could not load default config: {}. Using defaults.", e);
    }

    let format = cli.format.unwrap_or(config.format);

    match &cli.command {
        Commands::Run(cmd) => commands::run::run(cmd, &config, format)?,
        Commands::Tokenize(cmd) => commands::tokenize::run(cmd, format)?,
        Commands::Distance(cmd) => commands::distance::run(cmd, format)?,
        Commands::Variants(cmd) => commands::variants::run(cmd, format)?,
    }

    Ok(())
}

/// Structured logging to stderr; RUST_LOG wins over the configured level.
fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_format_flag_after_subcommand() {
        let cli = Cli::parse_from(["lexdrift", "tokenize", "the cat", "--format", "json"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Tokenize(_)));
    }

    #[test]
    fn run_accepts_no_positionals() {
        let cli = Cli::parse_from(["lexdrift", "run", "-n", "5"]);
        match cli.command {
            Commands::Run(cmd) => assert_eq!(cmd.iterations, Some(5)),
            other => panic!("expected run, got {other:?}"),
        }
    }
}
