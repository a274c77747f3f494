// crates/lexdrift-cli/src/output.rs
//
// Output formatting utilities for the Lexdrift CLI.
// Supports table and JSON output modes.

use clap::ValueEnum;
use lexdrift_core::DriftError;
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed table output (default).
    #[default]
    Table,
    /// JSON output for machine consumption.
    Json,
}

/// Format a slice of Tabled items as a table string.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Format a serializable value as a pretty-printed JSON string.
pub fn format_json<T: Serialize>(data: &T) -> Result<String, DriftError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Three-decimal rendering used for distances and parameters.
pub fn fixed3(value: f64) -> String {
    format!("{:.3}", value)
}

/// Render a word list the way the drift summary shows it: ['a', 'b'].
pub fn word_list(words: &[String]) -> String {
    let quoted: Vec<String> = words.iter().map(|w| format!("'{}'", w)).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "Word")]
        word: String,
    }

    #[test]
    fn table_contains_header_and_rows() {
        let rendered = format_table(&[Row { word: "drift".to_string() }]);
        assert!(rendered.contains("Word"));
        assert!(rendered.contains("drift"));
    }

    #[test]
    fn json_is_pretty_printed() {
        let rendered = format_json(&vec!["a", "b"]).unwrap();
        assert!(rendered.contains('\n'));
    }

    #[test]
    fn word_list_quotes_entries() {
        let words = vec!["feminine".to_string(), "grotesque".to_string()];
        assert_eq!(word_list(&words), "['feminine', 'grotesque']");
        assert_eq!(word_list(&[]), "[]");
    }

    #[test]
    fn fixed3_rounds() {
        assert_eq!(fixed3(0.12345), "0.123");
    }
}
