//! Product form state
//!
//! Images, features and specification pairs are edited as repeated rows.
//! Empty rows are allowed while editing and dropped on submit.

use shared::models::product::{DEFAULT_BADGE, DEFAULT_COLOR, DEFAULT_ICON};
use shared::{ErrorCode, Product, Specifications};
use thiserror::Error;

pub const REQUIRED_FIELDS_MESSAGE: &str = "กรุณากรอกข้อมูลที่จำเป็น (*) ให้ครบถ้วน";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field names, in form order
    #[error("กรุณากรอกข้อมูลที่จำเป็น (*) ให้ครบถ้วน: {}", .0.join(", "))]
    MissingRequired(Vec<&'static str>),

    #[error("invalid price: {0}")]
    InvalidPrice(String),
}

impl ValidationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingRequired(_) => ErrorCode::RequiredField,
            ValidationError::InvalidPrice(_) => ErrorCode::ProductInvalidPrice,
        }
    }
}

/// Ordered rows that never drop below one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatedField<T> {
    rows: Vec<T>,
}

impl<T: Default> Default for RepeatedField<T> {
    fn default() -> Self {
        Self {
            rows: vec![T::default()],
        }
    }
}

impl<T: Default> RepeatedField<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// One row per value, or a single empty row
    pub fn from_values(values: Vec<T>) -> Self {
        if values.is_empty() {
            Self::default()
        } else {
            Self { rows: values }
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.rows.get(index)
    }

    /// Append an empty row, returns its index
    pub fn add(&mut self) -> usize {
        self.rows.push(T::default());
        self.rows.len() - 1
    }

    /// Removing the last remaining row is a no-op
    pub fn remove(&mut self, index: usize) -> bool {
        if self.rows.len() <= 1 || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    pub fn update(&mut self, index: usize, value: T) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                *row = value;
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One image row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageEntry {
    /// Typed path or URL
    Path(String),
    /// Returned by the upload API; read-only and previewable
    Uploaded(String),
}

impl Default for ImageEntry {
    fn default() -> Self {
        ImageEntry::Path(String::new())
    }
}

impl ImageEntry {
    pub fn value(&self) -> &str {
        match self {
            ImageEntry::Path(p) | ImageEntry::Uploaded(p) => p,
        }
    }

    pub fn is_uploaded(&self) -> bool {
        matches!(self, ImageEntry::Uploaded(_))
    }

    /// Preview source, only for uploaded files
    pub fn preview(&self) -> Option<&str> {
        match self {
            ImageEntry::Uploaded(p) => Some(p),
            ImageEntry::Path(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecPair {
    pub key: String,
    pub value: String,
}

impl SpecPair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Raw form contents, as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub badge: String,
    pub icon: String,
    pub color: String,
    pub description: String,
    pub images: RepeatedField<ImageEntry>,
    pub features: RepeatedField<String>,
    pub specifications: RepeatedField<SpecPair>,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            price: String::new(),
            badge: String::new(),
            icon: String::new(),
            color: DEFAULT_COLOR.to_string(),
            description: String::new(),
            images: RepeatedField::new(),
            features: RepeatedField::new(),
            specifications: RepeatedField::new(),
        }
    }
}

impl ProductForm {
    /// Populate from a stored product for editing
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            badge: product.badge.clone(),
            icon: product.icon.clone(),
            color: product.color.clone(),
            description: product.description.clone(),
            images: RepeatedField::from_values(
                product.images.iter().cloned().map(ImageEntry::Path).collect(),
            ),
            features: RepeatedField::from_values(product.features.clone()),
            specifications: RepeatedField::from_values(
                product
                    .specifications
                    .iter()
                    .map(|(k, v)| SpecPair::new(k, v))
                    .collect(),
            ),
        }
    }

    /// Validate and build the record stored under `id`
    pub fn to_product(&self, id: u64) -> Result<Product, ValidationError> {
        let name = self.name.trim();
        let category = self.category.trim();
        let price = self.price.trim();
        let description = self.description.trim();

        let missing: Vec<&'static str> = [
            ("name", name),
            ("category", category),
            ("price", price),
            ("description", description),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingRequired(missing));
        }

        let price: u64 = price
            .parse()
            .map_err(|_| ValidationError::InvalidPrice(price.to_string()))?;

        let images = self
            .images
            .rows()
            .iter()
            .map(|entry| entry.value().trim())
            .filter(|path| !path.is_empty())
            .map(str::to_string)
            .collect();

        let features = self
            .features
            .rows()
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();

        let mut specifications = Specifications::new();
        for pair in self.specifications.rows() {
            let (key, value) = (pair.key.trim(), pair.value.trim());
            if !key.is_empty() && !value.is_empty() {
                specifications.insert(key.to_string(), value.to_string());
            }
        }

        Ok(Product {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price,
            badge: or_default(&self.badge, DEFAULT_BADGE),
            icon: or_default(&self.icon, DEFAULT_ICON),
            color: or_default(&self.color, DEFAULT_COLOR),
            description: description.to_string(),
            images,
            features,
            specifications,
            extra: Default::default(),
        })
    }
}

fn or_default(value: &str, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
