//! API routes
//!
//! - [`products`] - catalog document read / replace
//! - [`upload`] - image upload
//! - [`health`] - health check

pub mod health;
pub mod products;
pub mod upload;
