// src/ports/file_sink.rs
// DOCUMENTATION: Destination for downloaded documents
// PURPOSE: Save-as seam for the document exporter

use crate::errors::ClientError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Stores a downloaded file under a name
#[async_trait]
pub trait FileSink: Send + Sync {
    /// Returns where the file ended up
    async fn save(&self, filename: &str, contents: &[u8]) -> Result<PathBuf, ClientError>;
}

/// Saves files into a local directory
/// DOCUMENTATION: Bytes go to a transient `<name>.part` file which is
/// renamed into place once complete, and removed if anything fails
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Reject names that would escape the target directory
fn check_filename(filename: &str) -> Result<(), ClientError> {
    let bad = filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains('/')
        || filename.contains('\\');

    if bad {
        return Err(ClientError::InvalidInput(format!(
            "not a plain file name: {:?}",
            filename
        )));
    }
    Ok(())
}

#[async_trait]
impl FileSink for DirectorySink {
    async fn save(&self, filename: &str, contents: &[u8]) -> Result<PathBuf, ClientError> {
        check_filename(filename)?;

        tokio::fs::create_dir_all(&self.dir).await?;

        let target = self.dir.join(filename);
        let transient = self.dir.join(format!("{}.part", filename));

        if let Err(e) = tokio::fs::write(&transient, contents).await {
            let _ = tokio::fs::remove_file(&transient).await;
            return Err(e.into());
        }

        if let Err(e) = tokio::fs::rename(&transient, &target).await {
            let _ = tokio::fs::remove_file(&transient).await;
            return Err(e.into());
        }

        log::info!("Saved {} ({} bytes)", target.display(), contents.len());
        Ok(target)
    }
}
