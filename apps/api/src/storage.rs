//! Local upload storage.
//!
//! Uploaded PDFs are kept on disk under the configured upload directory with
//! a random prefix so repeated uploads of the same filename never collide.
//! Reads are guarded against path traversal by sanitizing the requested name
//! before joining it onto the upload root.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates the upload directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("failed to create upload dir {}", self.root.display()))?;
        Ok(())
    }

    /// Persists `bytes` under a uuid-prefixed sanitized name and returns the
    /// stored filename.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String> {
        let stored_name = format!("{}_{}", Uuid::new_v4(), sanitize_filename(original_name));
        let path = self.root.join(&stored_name);
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("failed to write upload {}", path.display()))?;
        Ok(stored_name)
    }

    /// Reads a previously stored file. Returns `None` when the name does not
    /// resolve to a file inside the upload directory.
    pub async fn read(&self, stored_name: &str) -> Result<Option<Vec<u8>>> {
        let safe = sanitize_filename(stored_name);
        if safe != stored_name {
            return Ok(None);
        }
        let path = self.root.join(&safe);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("failed to read upload {}", path.display()))
            }
        }
    }
}

/// Reduces an arbitrary client-supplied filename to a safe basename.
///
/// Directory components are stripped, anything outside `[A-Za-z0-9._-]` maps
/// to `_`, and leading dots are removed so hidden files and `..` cannot be
/// produced. An empty result falls back to `upload`.
pub fn sanitize_filename(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mapped: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = mapped.trim_start_matches('.').to_string();
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed
    }
}
