//! Utilities

pub mod logger;

pub use logger::{LoggerOptions, init_logger};
