//! Error types for linkrank

use thiserror::Error;

/// Result type alias using LinkRankError
pub type Result<T> = std::result::Result<T, LinkRankError>;

/// Error type alias for convenience
pub type Error = LinkRankError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for linkrank
#[derive(Debug, Error)]
pub enum LinkRankError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Graph has no pages")]
    EmptyGraph,

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Page links to itself: {0}")]
    SelfLink(String),

    #[error("Dangling link from {source_page} to {target}")]
    DanglingLink { source_page: String, target: String },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Iteration did not converge after {iterations} rounds (max delta {max_delta})")]
    NotConverged { iterations: usize, max_delta: f64 },

    #[error("Corpus not found: {0}")]
    CorpusNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl LinkRankError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PageNotFound(_) | Self::CorpusNotFound(_) => exit_codes::NOT_FOUND,
            Self::InvalidParameter(_)
            | Self::Config(_)
            | Self::InvalidInput(_)
            | Self::EmptyGraph
            | Self::SelfLink(_)
            | Self::DanglingLink { .. } => exit_codes::INVALID_INPUT,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            LinkRankError::PageNotFound("a.html".into()).exit_code(),
            exit_codes::NOT_FOUND
        );
        assert_eq!(
            LinkRankError::InvalidParameter("n".into()).exit_code(),
            exit_codes::INVALID_INPUT
        );
        assert_eq!(
            LinkRankError::NotConverged {
                iterations: 3,
                max_delta: 0.5
            }
            .exit_code(),
            exit_codes::GENERAL_ERROR
        );
    }
}
