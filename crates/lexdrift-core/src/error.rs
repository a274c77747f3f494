// crates/lexdrift-core/src/error.rs

use thiserror::Error;

/// Workspace-wide error types for Lexdrift.
///
/// The drift engine itself never fails; these cover the outer surfaces
/// (configuration loading, report rendering, argument handling).
#[derive(Debug, Error)]
pub enum DriftError {
    /// Configuration file could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Input that cannot be served (e.g. nothing to drift).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for DriftError {
    fn from(e: serde_json::Error) -> Self {
        DriftError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_error_maps_to_serialization() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let drift_err: DriftError = err.into();
        assert!(matches!(drift_err, DriftError::Serialization(_)));
    }

    #[test]
    fn display_includes_category() {
        let err = DriftError::InvalidInput("empty term".to_string());
        assert_eq!(err.to_string(), "Invalid input: empty term");
    }
}
