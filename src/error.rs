use std::path::PathBuf;

use thiserror::Error;

/// Raised when a file cannot be checked because its content is not valid for
/// its file type (currently only JSON has a real syntax check).
#[derive(Debug, Error)]
#[error("Failed to parse {} due to syntax errors: {reason}", filename.display())]
pub struct ParseError {
    pub filename: PathBuf,
    pub reason: String,
}
