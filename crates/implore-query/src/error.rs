//! Error types for implore-query

use thiserror::Error;

/// Result type alias for query operations
pub type Result<T> = std::result::Result<T, QueryError>;

/// Errors raised at the edges of the interpreter.
///
/// Interpretation itself never fails: an unmatched query yields an empty
/// [`Interpretation`](crate::Interpretation). These variants cover input that
/// is rejected before it reaches the interpreter, and configuration that could
/// not be turned into one.
#[derive(Error, Debug)]
#[cfg_attr(feature = "native", derive(uniffi::Error), uniffi(flat_error))]
pub enum QueryError {
    /// Caller passed something that is not query text
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Lexicon or rule configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors that can occur when building a lexicon or rule set
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("Duplicate concept key: {0}")]
    DuplicateConcept(String),

    #[error("Duplicate rule name: {0}")]
    DuplicateRule(String),

    #[error("Invalid pattern for rule '{name}': {reason}")]
    InvalidPattern { name: String, reason: String },

    #[error("Rule '{name}' must capture exactly 2 groups, found {found}")]
    CaptureGroups { name: String, found: usize },
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_wraps_into_query_error() {
        let err: QueryError = ConfigError::DuplicateConcept("parks".to_string()).into();
        assert!(matches!(err, QueryError::Config(ConfigError::DuplicateConcept(_))));
        assert_eq!(
            err.to_string(),
            "Configuration error: Duplicate concept key: parks"
        );
    }

    #[test]
    fn capture_group_message() {
        let err = ConfigError::CaptureGroups {
            name: "within".to_string(),
            found: 1,
        };
        assert_eq!(
            err.to_string(),
            "Rule 'within' must capture exactly 2 groups, found 1"
        );
    }
}
