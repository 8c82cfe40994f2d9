//! Catalog rules shared by every view
//!
//! - [`filter`] - category filter with the `all` sentinel
//! - [`paging`] - "load more" page cursor
//! - [`presentation`] - specification table and related products

pub mod filter;
pub mod paging;
pub mod presentation;

pub use filter::{ALL_SENTINEL, CategoryFilter};
pub use paging::{Batch, PAGE_SIZE, PageCursor};
pub use presentation::{RELATED_LIMIT, SpecRow, related_products, specification_table};
