//! Transient per-tab state
//!
//! [`SessionState`] is the only channel carrying the selected product from
//! the storefront to the detail view. [`NavigationGuard`] tells a view
//! whether an async response still belongs to the current navigation.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Session key kept for parity with the browser pages
pub const SELECTED_PRODUCT_KEY: &str = "selectedProductId";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    selected_product: Option<u64>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_product(&mut self, id: u64) {
        tracing::debug!(key = SELECTED_PRODUCT_KEY, id, "Product selected");
        self.selected_product = Some(id);
    }

    pub fn selected_product(&self) -> Option<u64> {
        self.selected_product
    }

    pub fn clear(&mut self) {
        self.selected_product = None;
    }
}

/// Ticket issued when a navigation starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Discards responses that arrive after a newer navigation began
#[derive(Debug, Clone, Default)]
pub struct NavigationGuard {
    current: Arc<AtomicU64>,
}

impl NavigationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a navigation; previously issued tickets become stale
    pub fn begin(&self) -> Ticket {
        Ticket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }
}
