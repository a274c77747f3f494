// crates/lexdrift-cli/src/commands/run.rs
//
// `lexdrift run [TERM] [DEFINITION]` — execute a drift run and render the report.

use clap::Args;
use lexdrift_core::seed::seed_from_text;
use lexdrift_core::{ControlParameters, DriftError, DriftReport, IterationRecord};
use lexdrift_engine::SemanticDrift;
use tabled::Tabled;

use crate::config::DriftConfig;
use crate::output::{fixed3, format_json, format_table, word_list, OutputFormat};

/// Term used when none is given on the command line.
pub const DEMO_TERM: &str = "Feminine grotesque";

/// Definition used when none is given on the command line.
pub const DEMO_DEFINITION: &str = "Reclaiming the monstrous-feminine as site of power";

/// Drift run command.
#[derive(Debug, Args)]
pub struct RunCmd {
    /// Original term (T0).
    #[arg(default_value = DEMO_TERM)]
    pub term: String,

    /// Original definition (D0).
    #[arg(default_value = DEMO_DEFINITION)]
    pub definition: String,

    /// Iteration budget (overrides config).
    #[arg(long, short = 'n')]
    pub iterations: Option<usize>,

    /// RNG seed for a reproducible run (overrides config).
    #[arg(long, conflicts_with = "seed_from_input")]
    pub seed: Option<u64>,

    /// Derive the seed from the term and definition.
    #[arg(long)]
    pub seed_from_input: bool,

    /// Starting temperature (theta).
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Starting randomness (rho).
    #[arg(long)]
    pub randomness: Option<f64>,

    /// Selector threshold (delta).
    #[arg(long)]
    pub drift_threshold: Option<f64>,

    /// Intensity limiter (lambda).
    #[arg(long)]
    pub drift_limiter: Option<f64>,
}

impl RunCmd {
    /// Merge command-line overrides over the loaded config.
    fn build(&self, config: &DriftConfig) -> SemanticDrift {
        let base = config.control_parameters();
        let params = ControlParameters::new(
            self.temperature.unwrap_or(base.temperature),
            self.randomness.unwrap_or(base.randomness),
            self.drift_threshold.unwrap_or(base.drift_threshold),
            self.drift_limiter.unwrap_or(base.drift_limiter),
        );

        let mut drift = SemanticDrift::new()
            .with_params(params)
            .with_max_iterations(self.iterations.unwrap_or(config.max_iterations));

        let seed = if self.seed_from_input {
            Some(seed_from_text(&self.term, &self.definition))
        } else {
            self.seed.or(config.seed)
        };
        if let Some(seed) = seed {
            drift = drift.with_seed(seed);
        }
        drift
    }
}

/// A row of the transformation sequence table.
#[derive(Tabled)]
struct IterationRow {
    #[tabled(rename = "i")]
    index: usize,
    #[tabled(rename = "Ti")]
    term: String,
    #[tabled(rename = "Di")]
    definition: String,
    #[tabled(rename = "d(T)+d(D)")]
    distance: String,
    #[tabled(rename = "<= 2y")]
    bound: String,
    #[tabled(rename = "theta")]
    temperature: String,
    #[tabled(rename = "rho")]
    randomness: String,
}

impl From<&IterationRecord> for IterationRow {
    fn from(r: &IterationRecord) -> Self {
        Self {
            index: r.index,
            term: r.term.clone(),
            definition: r.definition.clone(),
            distance: fixed3(r.total_distance),
            bound: fixed3(2.0 * r.tolerance),
            temperature: fixed3(r.temperature),
            randomness: fixed3(r.randomness),
        }
    }
}

/// A row of the output variations table.
#[derive(Tabled)]
struct SnapshotRow {
    #[tabled(rename = "Variation")]
    label: String,
    #[tabled(rename = "i")]
    index: usize,
    #[tabled(rename = "Ti")]
    term: String,
    #[tabled(rename = "Di")]
    definition: String,
    #[tabled(rename = "x")]
    accepted_index: usize,
    #[tabled(rename = "y")]
    convergence_score: String,
    #[tabled(rename = "theta")]
    temperature: String,
    #[tabled(rename = "rho")]
    randomness: String,
}

/// Run the drift command.
pub fn run(cmd: &RunCmd, config: &DriftConfig, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    if cmd.term.trim().is_empty() && cmd.definition.trim().is_empty() {
        return Err(DriftError::InvalidInput("term and definition are both empty".to_string()).into());
    }

    let drift = cmd.build(config);
    tracing::debug!(?drift, "configured drift run");
    let report = drift.execute(&cmd.term, &cmd.definition);

    match format {
        OutputFormat::Json => println!("{}", format_json(&report)?),
        OutputFormat::Table => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &DriftReport) {
    println!("=== SEMANTIC DRIFT ===");
    println!("Input T0: {}", report.input.term);
    println!("Input D0: {}", report.input.definition);
    println!("Run:      {}", report.run_id);
    println!();

    println!("Input variables");
    println!("---------------");
    println!("W(T0) = {}", word_list(&report.input.term_words));
    println!("W(D0) = {}", word_list(&report.input.definition_words));
    println!();

    println!("Transformation sequence");
    println!("-----------------------");
    if report.iterations.is_empty() {
        println!("  (no iteration satisfied the distance constraint)");
    } else {
        let rows: Vec<IterationRow> = report.iterations.iter().map(IterationRow::from).collect();
        println!("{}", format_table(&rows));
    }
    println!();

    println!("Output variations");
    println!("-----------------");
    if report.snapshots.is_empty() {
        println!("  (fewer than 4 accepted iterations; no variations)");
    } else {
        let rows: Vec<SnapshotRow> = report
            .snapshots
            .iter()
            .map(|(label, r)| SnapshotRow {
                label: label.to_string(),
                index: r.index,
                term: r.term.clone(),
                definition: r.definition.clone(),
                accepted_index: r.accepted_index,
                convergence_score: fixed3(r.convergence_score),
                temperature: fixed3(r.temperature),
                randomness: fixed3(r.randomness),
            })
            .collect();
        println!("{}", format_table(&rows));
    }
    println!();

    let p = &report.final_parameters;
    println!("Summary");
    println!("-------");
    println!(
        "  Accepted iterations: {} of {}",
        report.iterations.len(),
        report.iterations_run()
    );
    println!(
        "  Final parameters:    theta={}, rho={}, lambda={}, delta={}",
        fixed3(p.temperature),
        fixed3(p.randomness),
        fixed3(p.drift_limiter),
        fixed3(p.drift_threshold)
    );
}
