//! View controllers
//!
//! Each controller owns the state its browser page held, without any
//! rendering.
//!
//! - [`storefront`] - listing, filters, load more
//! - [`detail`] - single product page
//! - [`admin`] - product management

pub mod admin;
pub mod detail;
pub mod storefront;

pub use admin::{Admin, AdminError, Confirmation, FormMode};
pub use detail::{DetailError, ProductDetail};
pub use storefront::Storefront;
