//! Catalog document store
//!
//! One JSON file, read whole and replaced whole. Writes go through a sibling
//! temp file and a rename so readers see either the old or the new document.

use std::path::{Path, PathBuf};

use serde_json::Value;
use shared::AppError;
use thiserror::Error;
use uuid::Uuid;

/// Catalog store failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("catalog file not found: {0}")]
    Missing(PathBuf),

    #[error("failed to read catalog file: {0}")]
    Read(#[source] std::io::Error),

    #[error("catalog file is not valid JSON: {0}")]
    Corrupted(#[source] serde_json::Error),

    #[error("failed to serialize catalog: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write catalog file: {0}")]
    Write(#[source] std::io::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Missing(_) | StoreError::Read(_) => AppError::catalog_unavailable(),
            StoreError::Corrupted(e) => {
                AppError::catalog_corrupted().with_detail("line", e.line() as u64)
            }
            StoreError::Serialize(_) | StoreError::Write(_) => AppError::catalog_write_failed(),
        }
    }
}

/// JSON file holding the catalog document
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole document
    ///
    /// A file that exists but does not parse is reported as
    /// [`StoreError::Corrupted`] and left as it is.
    pub async fn read(&self) -> Result<Value, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::Missing(self.path.clone()));
            }
            Err(e) => return Err(StoreError::Read(e)),
        };

        serde_json::from_slice(&bytes).map_err(StoreError::Corrupted)
    }

    /// Replace the document with `document`, pretty-printed
    ///
    /// No schema check and no concurrency control: the last writer wins.
    pub async fn write(&self, document: &Value) -> Result<(), StoreError> {
        let body = serde_json::to_vec_pretty(document).map_err(StoreError::Serialize)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(StoreError::Write)?;
        }

        // Atomic write: tmp file + rename
        let tmp_path = self.tmp_path();
        if let Err(e) = tokio::fs::write(&tmp_path, &body).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(StoreError::Write(e));
        }
        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(StoreError::Write(e));
        }

        tracing::debug!(path = %self.path.display(), bytes = body.len(), "Catalog written");
        Ok(())
    }

    /// `.products.json.<uuid>.tmp` next to the target
    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "catalog".into());
        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()))
    }
}
