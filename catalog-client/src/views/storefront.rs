//! Storefront: filter buttons, batched product grid, detail navigation

use shared::{Catalog, CategoryFilter, PageCursor, Product};

use crate::data::{CatalogSource, Loaded, Origin};
use crate::session::{NavigationGuard, SessionState};

pub const ALL_LABEL: &str = "ทั้งหมด";
pub const ALL_ICON: &str = "fas fa-th-large";
/// Icon for category codes without a dedicated one
pub const FALLBACK_ICON: &str = "fas fa-tag";
/// Card description excerpt length
pub const SUMMARY_CHARS: usize = 60;

pub fn category_icon(code: &str) -> &'static str {
    match code {
        "traffic" => "fas fa-traffic-light",
        "safety" => "fas fa-hard-hat",
        "fire" => "fas fa-fire-extinguisher",
        "warning" => "fas fa-exclamation-triangle",
        "road" => "fas fa-road",
        _ => FALLBACK_ICON,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub filter: CategoryFilter,
    pub label: String,
    pub icon: &'static str,
    pub count: usize,
    pub active: bool,
}

/// Product card as shown in the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: u64,
    pub name: String,
    pub badge: String,
    pub icon: String,
    pub color: String,
    pub image: Option<String>,
    pub summary: String,
    pub price: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            badge: product.badge.clone(),
            icon: product.icon.clone(),
            color: product.color.clone(),
            image: product.primary_image().map(str::to_string),
            summary: product.summary(SUMMARY_CHARS),
            price: product.display_price(),
        }
    }
}

/// Result of rendering one batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Cards appended by this batch
    pub cards: Vec<ProductCard>,
    /// Nothing left to load
    pub hide_load_more: bool,
    /// The current filter matches no product
    pub empty: bool,
}

pub struct Storefront {
    catalog: Catalog,
    origin: Origin,
    filter: CategoryFilter,
    filtered: Vec<Product>,
    cursor: PageCursor,
    rendered: Vec<ProductCard>,
}

impl Storefront {
    pub fn new(loaded: Loaded) -> Self {
        let filtered = loaded.catalog.products.clone();
        Self {
            catalog: loaded.catalog,
            origin: loaded.origin,
            filter: CategoryFilter::All,
            filtered,
            cursor: PageCursor::default(),
            rendered: Vec::new(),
        }
    }

    /// Load the catalog and render the first batch
    ///
    /// `None` when another navigation started on `guard` while loading.
    pub async fn open(source: &CatalogSource, guard: &NavigationGuard) -> Option<(Self, Page)> {
        let ticket = guard.begin();
        let loaded = source.load_catalog().await;
        if !guard.is_current(ticket) {
            tracing::debug!("Storefront load superseded");
            return None;
        }

        let mut storefront = Self::new(loaded);
        let page = storefront.load_more();
        Some((storefront, page))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn current_filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    /// Cards rendered since the last filter change
    pub fn rendered(&self) -> &[ProductCard] {
        &self.rendered
    }

    /// "All" first, then every category that has products, in map order
    pub fn filter_buttons(&self) -> Vec<FilterButton> {
        let counts = self.catalog.category_counts();
        let mut buttons = vec![FilterButton {
            filter: CategoryFilter::All,
            label: ALL_LABEL.to_string(),
            icon: ALL_ICON,
            count: self.catalog.products.len(),
            active: self.filter == CategoryFilter::All,
        }];

        for (code, label) in &self.catalog.categories {
            let count = counts.get(code.as_str()).copied().unwrap_or(0);
            if count == 0 {
                continue;
            }
            let filter = CategoryFilter::Category(code.clone());
            buttons.push(FilterButton {
                active: self.filter == filter,
                filter,
                label: label.clone(),
                icon: category_icon(code),
                count,
            });
        }
        buttons
    }

    /// Switch filter and render from the first batch
    pub fn select_filter(&mut self, filter: impl Into<CategoryFilter>) -> Page {
        self.filter = filter.into();
        self.filtered = self.filter.apply(&self.catalog.products);
        self.cursor.reset();
        self.rendered.clear();
        tracing::debug!(filter = %self.filter, matches = self.filtered.len(), "Filter selected");
        self.load_more()
    }

    /// Select the `n`-th filter button (1-based, as the 1-9 shortcuts do)
    pub fn select_filter_by_index(&mut self, n: usize) -> Option<Page> {
        let filter = self
            .filter_buttons()
            .into_iter()
            .nth(n.checked_sub(1)?)?
            .filter;
        Some(self.select_filter(filter))
    }

    /// Render the next batch of the filtered products
    pub fn load_more(&mut self) -> Page {
        let batch = self.cursor.next_batch(&self.filtered);
        let cards: Vec<ProductCard> = batch.items.iter().map(ProductCard::from).collect();
        self.rendered.extend(cards.iter().cloned());
        Page {
            cards,
            hide_load_more: batch.exhausted,
            empty: batch.empty,
        }
    }

    /// Remember `id` for the detail view
    pub fn open_detail(&self, id: u64, session: &mut SessionState) {
        session.select_product(id);
    }
}
