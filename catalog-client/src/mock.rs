//! In-memory [`CatalogApi`] for view tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shared::{AppError, Catalog, ErrorCode, SaveResponse, UploadResponse};

use crate::http::{CatalogApi, UploadFile};
use crate::session::NavigationGuard;
use crate::{ClientError, ClientResult};

/// Stored document the server has but cannot hand out as a catalog
#[derive(Debug, Clone, Copy)]
enum Broken {
    /// Not JSON: the server answers 500 / 6202
    Corrupted,
    /// Valid JSON that does not decode as a catalog
    Undecodable,
}

#[derive(Default)]
struct Inner {
    /// `None` simulates a missing catalog file
    stored: Option<Catalog>,
    broken: Option<Broken>,
    fail_saves: bool,
    fetch_calls: usize,
    save_calls: usize,
    uploads: Vec<String>,
    /// Navigation started while a fetch is in flight
    race: Option<NavigationGuard>,
}

#[derive(Clone, Default)]
pub struct MockApi {
    inner: Arc<Mutex<Inner>>,
}

impl MockApi {
    pub fn with_catalog(catalog: Catalog) -> Arc<Self> {
        let api = Self::default();
        api.inner.lock().unwrap().stored = Some(catalog);
        Arc::new(api)
    }

    pub fn offline() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn corrupted() -> Arc<Self> {
        let api = Self::default();
        api.inner.lock().unwrap().broken = Some(Broken::Corrupted);
        Arc::new(api)
    }

    pub fn undecodable() -> Arc<Self> {
        let api = Self::default();
        api.inner.lock().unwrap().broken = Some(Broken::Undecodable);
        Arc::new(api)
    }

    /// Every fetch begins a new navigation on `guard` before answering
    pub fn racing(catalog: Catalog, guard: NavigationGuard) -> Arc<Self> {
        let api = Self::with_catalog(catalog);
        api.inner.lock().unwrap().race = Some(guard);
        api
    }

    pub fn fail_saves(&self) {
        self.inner.lock().unwrap().fail_saves = true;
    }

    pub fn stored(&self) -> Option<Catalog> {
        self.inner.lock().unwrap().stored.clone()
    }

    pub fn fetch_calls(&self) -> usize {
        self.inner.lock().unwrap().fetch_calls
    }

    pub fn save_calls(&self) -> usize {
        self.inner.lock().unwrap().save_calls
    }

    pub fn uploads(&self) -> Vec<String> {
        self.inner.lock().unwrap().uploads.clone()
    }
}

fn api_error(err: AppError) -> ClientError {
    ClientError::Api {
        status: err.http_status().as_u16(),
        code: Some(err.code),
        message: err.message,
    }
}

#[async_trait]
impl CatalogApi for MockApi {
    async fn fetch_catalog(&self) -> ClientResult<Catalog> {
        let mut inner = self.inner.lock().unwrap();
        inner.fetch_calls += 1;
        if let Some(guard) = &inner.race {
            guard.begin();
        }
        match inner.broken {
            Some(Broken::Corrupted) => Err(api_error(AppError::catalog_corrupted())),
            Some(Broken::Undecodable) => Err(ClientError::InvalidResponse(
                "invalid type: floating point `99.5`, expected u64 at line 1 column 120".into(),
            )),
            None => inner
                .stored
                .clone()
                .ok_or_else(|| api_error(AppError::catalog_unavailable())),
        }
    }

    async fn save_catalog(&self, catalog: &Catalog) -> ClientResult<SaveResponse> {
        let mut inner = self.inner.lock().unwrap();
        inner.save_calls += 1;
        if inner.fail_saves {
            return Err(api_error(AppError::new(ErrorCode::CatalogWriteFailed)));
        }
        inner.broken = None;
        inner.stored = Some(catalog.clone());
        Ok(SaveResponse::ok())
    }

    async fn upload_image(&self, file: &UploadFile) -> ClientResult<UploadResponse> {
        let mut inner = self.inner.lock().unwrap();
        let path = format!("assets/images/{}-{}", inner.uploads.len() + 1, file.file_name);
        inner.uploads.push(path.clone());
        Ok(UploadResponse::ok(path))
    }
}
