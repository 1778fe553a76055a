use std::path::PathBuf;

use pipe_profile_core::ProfileError;

/// Errors raised while reading or writing scan data and side files.
#[derive(thiserror::Error, Debug)]
pub enum ScanIoError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("line {line}: cannot parse {token:?} as a number")]
    Parse { line: usize, token: String },
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
