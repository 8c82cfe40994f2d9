use std::sync::Arc;
use std::time::Instant;

use crate::core::Config;
use crate::store::{CatalogStore, ImageStore};

/// Server state, shared by every handler
///
/// Cheap to clone: everything lives behind an `Arc`.
///
/// | Field | Description |
/// |-------|-------------|
/// | config | immutable configuration |
/// | catalog | catalog document store |
/// | images | upload directory |
/// | started_at | process start, for `/health` uptime |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub catalog: Arc<CatalogStore>,
    pub images: Arc<ImageStore>,
    started_at: Instant,
}

impl ServerState {
    /// Build the state from configuration
    ///
    /// Nothing is touched on disk here: the catalog file and the upload
    /// directory are resolved lazily on first use.
    pub fn initialize(config: &Config) -> Self {
        let catalog = CatalogStore::new(config.data_file_path());
        let images = ImageStore::new(config.upload_dir_path(), config.upload_dir.clone());

        tracing::debug!(
            data_file = %catalog.path().display(),
            upload_dir = %images.dir().display(),
            "Server state initialized"
        );

        Self {
            config: Arc::new(config.clone()),
            catalog: Arc::new(catalog),
            images: Arc::new(images),
            started_at: Instant::now(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
