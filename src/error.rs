use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvectionError>;

#[derive(Error, Debug)]
pub enum AdvectionError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Two containers that must share a shape do not.
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: String,
        actual: String,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv output failed: {0}")]
    Csv(#[from] csv::Error),
}

impl AdvectionError {
    pub fn shape(context: &'static str, expected: (usize, usize), actual: (usize, usize)) -> Self {
        AdvectionError::DimensionMismatch {
            context,
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    pub fn length(context: &'static str, expected: usize, actual: usize) -> Self {
        AdvectionError::DimensionMismatch {
            context,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}
