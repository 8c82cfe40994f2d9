//! HTTP client for the catalog server

use std::path::Path;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{Catalog, ErrorResponse, SaveResponse, UploadResponse};

use crate::{ClientConfig, ClientError, ClientResult};

pub const PRODUCTS_PATH: &str = "api/products";
pub const UPLOAD_PATH: &str = "api/upload";
/// Multipart field the server reads the file from
pub const IMAGE_FIELD: &str = "image";

/// A file picked for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    /// MIME type as reported by the picker, e.g. `image/png`
    pub content_type: String,
    pub data: Vec<u8>,
}

impl UploadFile {
    /// Content type is guessed from the file name
    pub fn new(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name,
            content_type,
            data,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Read a local file
    pub async fn from_path(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(file_name, data))
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Catalog server operations used by the views
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// GET /api/products
    async fn fetch_catalog(&self) -> ClientResult<Catalog>;

    /// POST /api/products, replacing the whole document
    async fn save_catalog(&self, catalog: &Catalog) -> ClientResult<SaveResponse>;

    /// POST /api/upload
    async fn upload_image(&self, file: &UploadFile) -> ClientResult<UploadResponse>;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET returning any JSON shape
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// POST with a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            // Prefer the structured error body
            if let Ok(body) = serde_json::from_str::<ErrorResponse>(&text) {
                return Err(ClientError::Api {
                    status: status.as_u16(),
                    code: body.error_code(),
                    message: body.error,
                });
            }
            return Err(ClientError::Api {
                status: status.as_u16(),
                code: None,
                message: text,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl CatalogApi for NetworkHttpClient {
    async fn fetch_catalog(&self) -> ClientResult<Catalog> {
        self.get(PRODUCTS_PATH).await
    }

    async fn save_catalog(&self, catalog: &Catalog) -> ClientResult<SaveResponse> {
        self.post(PRODUCTS_PATH, catalog).await
    }

    async fn upload_image(&self, file: &UploadFile) -> ClientResult<UploadResponse> {
        let part = Part::bytes(file.data.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self
            .client
            .post(self.url(UPLOAD_PATH))
            .multipart(form)
            .send()
            .await?;
        Self::handle_response(response).await
    }
}
