//! Admin: create, edit, delete and export products
//!
//! The whole catalog lives in memory; every change is sent to the server as
//! a full document. A failed save is reported but not rolled back.
//!
//! An admin opened on the fallback catalog only writes while the server has
//! no readable document, so it never replaces stored products it did not see.

mod form;

pub use form::{
    ImageEntry, ProductForm, REQUIRED_FIELDS_MESSAGE, RepeatedField, SpecPair, ValidationError,
};

use shared::{Catalog, ErrorCode, Product};
use thiserror::Error;

use crate::ClientError;
use crate::data::{CatalogSource, Origin};
use crate::http::UploadFile;

/// Client-side upload limit
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
/// List excerpt length
pub const LIST_SUMMARY_CHARS: usize = 50;
pub const EXPORT_FILE_NAME: &str = "products.json";

pub const SAVED_MESSAGE: &str = "บันทึกสินค้าเรียบร้อยแล้ว! ข้อมูลจะอัปเดตในหน้าหลักทันที";
pub const DELETED_MESSAGE: &str = "ลบสินค้าเรียบร้อยแล้ว!";
pub const DELETE_PROMPT: &str = "ต้องการลบสินค้านี้หรือไม่?";
pub const EMPTY_LIST_MESSAGE: &str = "ยังไม่มีสินค้า";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(u64),
}

/// Answer to [`DELETE_PROMPT`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// Picked file refused before any network call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejected {
    #[error("กรุณาเลือกไฟล์รูปภาพเท่านั้น")]
    NotAnImage(String),

    #[error("ไฟล์มีขนาดใหญ่เกิน 5MB")]
    TooLarge(usize),
}

impl UploadRejected {
    pub fn code(&self) -> ErrorCode {
        match self {
            UploadRejected::NotAnImage(_) => ErrorCode::UnsupportedFileFormat,
            UploadRejected::TooLarge(_) => ErrorCode::FileTooLarge,
        }
    }
}

/// Check type and size the way the file picker does
pub fn check_upload(file: &UploadFile) -> Result<(), UploadRejected> {
    if !file.content_type.starts_with("image/") {
        return Err(UploadRejected::NotAnImage(file.content_type.clone()));
    }
    if file.size() > MAX_UPLOAD_BYTES {
        return Err(UploadRejected::TooLarge(file.size()));
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    UploadRejected(#[from] UploadRejected),

    #[error("ไม่สามารถอัพโหลดไฟล์ได้: {0}")]
    Upload(#[source] ClientError),

    #[error("เกิดข้อผิดพลาดในการบันทึกข้อมูล: {0}")]
    Save(#[source] ClientError),

    #[error("ไม่สามารถโหลดข้อมูลสินค้าได้: {0}")]
    Load(#[source] ClientError),

    /// Opened on the fallback catalog while the server holds a document
    #[error("stored catalog was not loaded; reload before saving")]
    StoreNotLoaded,

    #[error("product {0} not found")]
    ProductNotFound(u64),

    #[error("no image row {0}")]
    NoSuchRow(usize),
}

impl AdminError {
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            AdminError::Validation(e) => Some(e.code()),
            AdminError::UploadRejected(e) => Some(e.code()),
            AdminError::Upload(e) | AdminError::Save(e) | AdminError::Load(e) => e.code(),
            AdminError::StoreNotLoaded => Some(ErrorCode::CatalogUnavailable),
            AdminError::ProductNotFound(_) => Some(ErrorCode::ProductNotFound),
            AdminError::NoSuchRow(_) => None,
        }
    }
}

/// Row of the product list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub id: u64,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub summary: String,
    /// Empty when the category code is unknown
    pub category_label: String,
    pub badge: String,
    pub price: String,
    pub image_count: usize,
    pub feature_count: usize,
}

impl ListItem {
    fn new(catalog: &Catalog, product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            icon: product.icon.clone(),
            color: product.color.clone(),
            summary: product.summary(LIST_SUMMARY_CHARS),
            category_label: catalog
                .category_label(&product.category)
                .unwrap_or_default()
                .to_string(),
            badge: product.badge.clone(),
            price: product.display_price(),
            image_count: product.images.len(),
            feature_count: product.features.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

pub struct Admin {
    source: CatalogSource,
    catalog: Catalog,
    origin: Origin,
    mode: FormMode,
    next_id: u64,
    form: ProductForm,
}

impl Admin {
    /// Load the catalog; an unreachable server gives an empty product list
    ///
    /// Fails when the server returns a document that is not a catalog.
    pub async fn open(source: CatalogSource) -> Result<Self, AdminError> {
        let loaded = source
            .load_catalog_for_admin()
            .await
            .map_err(AdminError::Load)?;
        let next_id = loaded.catalog.next_id();
        Ok(Self {
            source,
            catalog: loaded.catalog,
            origin: loaded.origin,
            mode: FormMode::Create,
            next_id,
            form: ProductForm::default(),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        &mut self.form
    }

    /// Category options for the form, in map order
    pub fn category_options(&self) -> Vec<(&str, &str)> {
        self.catalog
            .categories
            .iter()
            .map(|(code, label)| (code.as_str(), label.as_str()))
            .collect()
    }

    pub fn product_list(&self) -> Vec<ListItem> {
        self.catalog
            .products
            .iter()
            .map(|p| ListItem::new(&self.catalog, p))
            .collect()
    }

    /// Back to an empty create form
    pub fn reset_form(&mut self) {
        self.form = ProductForm::default();
        self.mode = FormMode::Create;
    }

    /// Upload `file` and put the returned path into image row `row`
    pub async fn attach_upload(&mut self, row: usize, file: UploadFile) -> Result<String, AdminError> {
        if self.form.images.get(row).is_none() {
            return Err(AdminError::NoSuchRow(row));
        }
        check_upload(&file)?;

        let response = self
            .source
            .upload_image(&file)
            .await
            .map_err(AdminError::Upload)?;

        self.form
            .images
            .update(row, ImageEntry::Uploaded(response.path.clone()));
        tracing::info!(file = %file.file_name, path = %response.path, "Image attached");
        Ok(response.path)
    }

    /// Load `id` into the form
    pub fn edit(&mut self, id: u64) -> Result<(), AdminError> {
        let product = self.catalog.find(id).ok_or(AdminError::ProductNotFound(id))?;
        self.form = ProductForm::from_product(product);
        self.mode = FormMode::Edit(id);
        Ok(())
    }

    /// Validate, apply to the in-memory catalog and save the whole document
    ///
    /// After a failed save the change stays in memory and the form stays in
    /// edit mode for the stored product, so submitting again retries it.
    pub async fn submit(&mut self) -> Result<u64, AdminError> {
        let id = match self.mode {
            FormMode::Edit(id) => {
                if self.catalog.find(id).is_none() {
                    return Err(AdminError::ProductNotFound(id));
                }
                id
            }
            FormMode::Create => self.next_id,
        };

        let mut product = self.form.to_product(id)?;
        self.ensure_writable().await?;

        match self.mode {
            FormMode::Edit(_) => {
                if let Some(existing) = self.catalog.find(id) {
                    product.extra = existing.extra.clone();
                }
                self.catalog.replace(product);
            }
            FormMode::Create => {
                self.catalog.push(product);
                self.next_id += 1;
            }
        }
        self.mode = FormMode::Edit(id);

        self.persist().await?;
        self.reset_form();
        Ok(id)
    }

    /// Remove `id` and save immediately
    pub async fn delete(&mut self, id: u64, confirmation: Confirmation) -> Result<DeleteOutcome, AdminError> {
        if confirmation == Confirmation::Cancelled {
            return Ok(DeleteOutcome::Cancelled);
        }

        if self.catalog.find(id).is_none() {
            return Err(AdminError::ProductNotFound(id));
        }
        self.ensure_writable().await?;
        self.catalog.remove(id);
        if self.mode == FormMode::Edit(id) {
            self.reset_form();
        }

        self.persist().await?;
        Ok(DeleteOutcome::Deleted)
    }

    /// The in-memory catalog as pretty JSON, for download
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.catalog)
    }

    /// Refuse to save a fallback catalog over a stored document
    async fn ensure_writable(&self) -> Result<(), AdminError> {
        if self.origin == Origin::Server || !self.source.has_stored_document().await {
            return Ok(());
        }
        tracing::error!("Refusing to overwrite a stored catalog that was never loaded");
        Err(AdminError::StoreNotLoaded)
    }

    async fn persist(&mut self) -> Result<(), AdminError> {
        self.source.save_catalog(&self.catalog).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to save catalog");
            AdminError::Save(e)
        })?;
        self.origin = Origin::Server;
        Ok(())
    }
}
