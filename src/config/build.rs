//! # Build Metadata
//!
//! CI build identity recorded in the index object.

/// Branch, commit and user of the CI build that produced the artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMetadata {
    /// Source-control branch (`CIRCLE_BRANCH`)
    pub branch: String,
    /// Commit identifier (`CIRCLE_SHA1`)
    pub commit_sha: String,
    /// User that triggered the build (`CIRCLE_USERNAME`)
    pub username: String,
}
