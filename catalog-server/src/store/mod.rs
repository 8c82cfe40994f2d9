//! On-disk storage
//!
//! - [`CatalogStore`] - the single JSON catalog document
//! - [`ImageStore`] - uploaded image files

pub mod catalog;
pub mod images;

pub use catalog::{CatalogStore, StoreError};
pub use images::{ImageStore, generate_file_name};
