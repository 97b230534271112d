use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal conditions for a run. A line that fails validation is not an
/// error; it is skipped with a diagnostic and the run continues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Error: File not found - {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("No valid data to process.")]
    NoValidData,

    #[error(transparent)]
    Io(#[from] io::Error),
}
