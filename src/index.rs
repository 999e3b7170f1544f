//! # Index Record
//!
//! Four-line plaintext record describing the most recently published artifact.
//!
//! Layout, each line newline-terminated:
//!
//! ```text
//! <branch>
//! <commit sha>
//! <artifact base name>
//! <username>
//! ```

use crate::config::BuildMetadata;
use std::io::Write;
use tempfile::NamedTempFile;

/// Index record for one published artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRecord {
    pub branch: String,
    pub commit_sha: String,
    pub artifact: String,
    pub username: String,
}

impl IndexRecord {
    pub fn new(build: &BuildMetadata, artifact: impl Into<String>) -> Self {
        Self {
            branch: build.branch.clone(),
            commit_sha: build.commit_sha.clone(),
            artifact: artifact.into(),
            username: build.username.clone(),
        }
    }

    /// Render the record as uploaded
    pub fn render(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}\n",
            self.branch, self.commit_sha, self.artifact, self.username
        )
    }

    /// Write the rendered record to a fresh temporary file
    ///
    /// The file is flushed before returning and removed when the handle is
    /// dropped, on every exit path.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created or written.
    pub fn write_temp(&self) -> std::io::Result<NamedTempFile> {
        let mut file = tempfile::Builder::new()
            .prefix("artifact-index-")
            .suffix(".txt")
            .tempfile()?;
        file.write_all(self.render().as_bytes())?;
        file.flush()?;
        Ok(file)
    }
}
