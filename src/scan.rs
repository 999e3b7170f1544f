//! # Artifact Discovery
//!
//! Recursive walk of the build output directory yielding matching artifact files.
//!
//! Entries come back in the walker's natural order. Nothing is sorted, so
//! when several artifacts match, the order they are published in (and which
//! one the index ends up naming) is whatever the filesystem reports.

use crate::matcher::ArtifactMatcher;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// A matched artifact file on local disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Full path to the file
    pub path: PathBuf,
    /// Base name, used for the object key and the index record
    pub name: String,
}

/// Lazily walk `root` and yield every regular file whose base name matches
///
/// A missing root yields nothing. Entries that cannot be read are skipped
/// with a warning, as are base names that are not valid UTF-8. Symbolic
/// links to regular files are yielded; directory links are not descended.
pub fn discover_artifacts<'a>(
    root: &Path,
    matcher: &'a ArtifactMatcher,
) -> impl Iterator<Item = Artifact> + 'a {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log_walk_error(&err);
                None
            }
        })
        .filter(is_regular_file)
        .filter_map(move |entry| {
            let Some(name) = entry.file_name().to_str() else {
                debug!(
                    "Skipping file with non UTF-8 name: {}",
                    entry.path().display()
                );
                return None;
            };
            if !matcher.matches(name) {
                return None;
            }
            let name = name.to_string();
            debug!("Found artifact: {}", entry.path().display());
            Some(Artifact {
                path: entry.into_path(),
                name,
            })
        })
}

/// Regular file, or a symlink resolving to one
fn is_regular_file(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn log_walk_error(err: &walkdir::Error) {
    let not_found = err.io_error().map(std::io::Error::kind) == Some(ErrorKind::NotFound);
    if err.depth() == 0 && not_found {
        let root = err
            .path()
            .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
        info!("Build directory {} does not exist, nothing to publish", root);
    } else {
        warn!("Skipping unreadable entry: {}", err);
    }
}
