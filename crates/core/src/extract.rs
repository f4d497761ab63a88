use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::file_index::FileIndex;

/// Failure while extracting declarations from one input file.
///
/// Extraction failures are local to a file: callers attempt every input and
/// report each failure before aborting the comparison.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("file not found at {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExtractError {
    /// The input path the failure refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::Read { path, .. } => path,
        }
    }
}

/// Extraction seam between build-file formats and the comparison pipeline.
///
/// Implementations scan one file and return its dependency index. No side
/// effects beyond reading the file.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// # Errors
    /// Returns error if the file does not exist or cannot be read as text.
    async fn extract(&self, path: &Path) -> Result<FileIndex, ExtractError>;
}
