//! Error types for tree printing

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that terminate a traversal.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A directory could not be listed: missing, not a directory, or unreadable.
    #[error("cannot access '{}': {}", .path.display(), .source)]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl TreeError {
    pub(crate) fn access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TreeError::Access {
            path: path.into(),
            source,
        }
    }
}
