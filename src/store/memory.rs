//! # In-Memory Store
//!
//! Records every upload in call order. Can be told to reject a key to
//! exercise failure paths.

use super::{ObjectStore, StoreError};
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// One recorded upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: String,
    /// Local path the body was read from
    pub source_path: PathBuf,
}

/// Store that keeps uploads in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    puts: Mutex<Vec<StoredObject>>,
    attempts: Mutex<Vec<(String, PathBuf)>>,
    fail_keys: HashSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every upload to `key`
    #[must_use]
    pub fn failing_on(mut self, key: impl Into<String>) -> Self {
        self.fail_keys.insert(key.into());
        self
    }

    /// Every upload in call order, failed attempts excluded
    pub fn puts(&self) -> Vec<StoredObject> {
        self.puts
            .lock()
            .map(|puts| puts.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Every `(key, source path)` passed to `put_file`, failed attempts included
    pub fn attempts(&self) -> Vec<(String, PathBuf)> {
        self.attempts
            .lock()
            .map(|attempts| attempts.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Current body of `key`; later uploads overwrite earlier ones
    pub fn object(&self, key: &str) -> Option<Vec<u8>> {
        self.puts()
            .into_iter()
            .rev()
            .find(|object| object.key == key)
            .map(|object| object.body)
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn put_file(
        &self,
        key: &str,
        path: &Path,
        content_type: &str,
    ) -> Result<(), StoreError> {
        match self.attempts.lock() {
            Ok(mut attempts) => attempts.push((key.to_string(), path.to_path_buf())),
            Err(poisoned) => poisoned
                .into_inner()
                .push((key.to_string(), path.to_path_buf())),
        }

        let body = tokio::fs::read(path)
            .await
            .map_err(|e| StoreError::read(key, path, e))?;

        if self.fail_keys.contains(key) {
            return Err(StoreError::Upload {
                key: key.to_string(),
                message: "rejected by memory store".to_string(),
            });
        }

        let object = StoredObject {
            key: key.to_string(),
            body,
            content_type: content_type.to_string(),
            source_path: path.to_path_buf(),
        };
        match self.puts.lock() {
            Ok(mut puts) => puts.push(object),
            Err(poisoned) => poisoned.into_inner().push(object),
        }
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_with(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_records_in_call_order_and_overwrites() {
        let store = MemoryStore::new();
        let first = temp_with("first");
        let second = temp_with("second");

        store.put_file("k", first.path(), "text/plain").await.unwrap();
        store.put_file("k", second.path(), "text/plain").await.unwrap();

        assert_eq!(store.puts().len(), 2);
        assert_eq!(store.object("k"), Some(b"second".to_vec()));
        assert_eq!(store.object("other"), None);
    }

    #[tokio::test]
    async fn test_failing_key_is_not_recorded() {
        let store = MemoryStore::new().failing_on("bad");
        let file = temp_with("x");

        let err = store
            .put_file("bad", file.path(), "text/plain")
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Upload { .. }));
        assert!(store.puts().is_empty());
        assert_eq!(store.attempts().len(), 1);
        assert_eq!(store.attempts()[0].0, "bad");
    }
}
