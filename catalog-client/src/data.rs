//! Catalog data access shared by every view
//!
//! Reads fall back to the embedded seed catalog when the server cannot be
//! used; the fallback is never written back. The admin read only falls back
//! when the server is unreachable or answers with an error status.

use std::sync::Arc;

use shared::seed::{empty_catalog, seed_catalog};
use shared::{Catalog, ErrorCode, SaveResponse, UploadResponse};

use crate::http::{CatalogApi, UploadFile};
use crate::ClientResult;

/// Where a loaded catalog came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Server,
    /// Server unreachable or returned an error
    Fallback,
}

/// A catalog plus its origin
#[derive(Debug, Clone)]
pub struct Loaded {
    pub catalog: Catalog,
    pub origin: Origin,
}

impl Loaded {
    fn server(catalog: Catalog) -> Self {
        tracing::debug!(products = catalog.products.len(), "Catalog loaded");
        Self {
            catalog,
            origin: Origin::Server,
        }
    }

    fn fallback(catalog: Catalog) -> Self {
        Self {
            catalog,
            origin: Origin::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == Origin::Fallback
    }
}

/// Data access over a [`CatalogApi`]
#[derive(Clone)]
pub struct CatalogSource {
    api: Arc<dyn CatalogApi>,
}

impl CatalogSource {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &dyn CatalogApi {
        self.api.as_ref()
    }

    /// Catalog for the storefront and detail views (seed on any failure)
    pub async fn load_catalog(&self) -> Loaded {
        match self.api.fetch_catalog().await {
            Ok(catalog) => Loaded::server(catalog),
            Err(e) => {
                tracing::warn!(error = %e, "Catalog unavailable, using embedded fallback");
                Loaded::fallback(seed_catalog())
            }
        }
    }

    /// Catalog for the admin view
    ///
    /// Seed categories without products when the server is unreachable or
    /// reports an error. A response that does not decode as a catalog is
    /// returned as an error: the stored document exists and saving over it
    /// from an empty catalog would destroy it.
    pub async fn load_catalog_for_admin(&self) -> ClientResult<Loaded> {
        match self.api.fetch_catalog().await {
            Ok(catalog) => Ok(Loaded::server(catalog)),
            Err(e) if e.allows_fallback() => {
                tracing::warn!(error = %e, "Catalog unavailable, starting from an empty catalog");
                Ok(Loaded::fallback(empty_catalog()))
            }
            Err(e) => {
                tracing::error!(error = %e, "Stored catalog cannot be decoded");
                Err(e)
            }
        }
    }

    /// Whether the server currently holds a document a save would replace
    ///
    /// `false` only when the server is unreachable (the save fails anyway) or
    /// reports the catalog file as unavailable.
    pub async fn has_stored_document(&self) -> bool {
        match self.api.fetch_catalog().await {
            Ok(_) => true,
            Err(e) => !(e.is_unreachable() || e.code() == Some(ErrorCode::CatalogUnavailable)),
        }
    }

    /// Replace the stored catalog
    pub async fn save_catalog(&self, catalog: &Catalog) -> ClientResult<SaveResponse> {
        let response = self.api.save_catalog(catalog).await?;
        tracing::info!(products = catalog.products.len(), "Catalog saved");
        Ok(response)
    }

    pub async fn upload_image(&self, file: &UploadFile) -> ClientResult<UploadResponse> {
        self.api.upload_image(file).await
    }
}
