use crate::error::{NdiffError, NdiffResult};
use std::path::{Path, PathBuf};

/// A text input, read whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    path: PathBuf,
    content: String,
}

impl InputFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Loads the inputs of a comparison from the file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct Workspace;

impl Workspace {
    pub async fn read_input(&self, path: &Path) -> NdiffResult<InputFile> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| NdiffError::input_unavailable(path, e))?;

        log::debug!("read {} bytes from {}", content.len(), path.display());
        Ok(InputFile {
            path: path.to_path_buf(),
            content,
        })
    }

    /// Reads both inputs concurrently; the first failure wins.
    pub async fn read_pair(
        &self,
        source: &Path,
        target: &Path,
    ) -> NdiffResult<(InputFile, InputFile)> {
        tokio::try_join!(self.read_input(source), self.read_input(target))
    }
}
