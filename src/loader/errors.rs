//! Load error types
//!
//! [`LoadError`] covers the failures that stop a load outright. Malformed
//! lines are not errors: they are skipped and counted in
//! [`LoadedRecords::skipped`](super::LoadedRecords::skipped).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort reading a data file
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened (missing, permissions, ...)
    #[error("Error reading file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An I/O failure occurred after the file was opened
    #[error("Error reading file {} at line {line}: {source}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Open { path, .. } => path,
            LoadError::Read { path, .. } => path,
        }
    }
}
