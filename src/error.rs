//! Error type shared by every stage of a conversion run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a conversion run.
#[derive(Debug, Error)]
pub enum RetemplateError {
    #[error("Error: The file {} does not exist.", .0.display())]
    InputNotFound(PathBuf),

    #[error("Error: {} has no file name to derive an output path from.", .0.display())]
    InvalidInputPath(PathBuf),

    #[error("Error: Invalid suffix {0:?}: must be non-empty and contain no path separators.")]
    InvalidSuffix(String),

    #[error("Error: Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error: Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error: Failed to render report: {0}")]
    Report(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RetemplateError>;
