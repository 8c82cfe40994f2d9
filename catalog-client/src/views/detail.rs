//! Product detail: gallery, specification table, related products,
//! quantity and quote/contact links

use std::time::Duration;

use reqwest::Url;
use shared::catalog::{SpecRow, related_products, specification_table};
use shared::{Catalog, ErrorCode, Product};
use thiserror::Error;

use crate::data::CatalogSource;
use crate::session::{NavigationGuard, SessionState};
use crate::views::storefront::ProductCard;

/// Where the user is sent when no product can be shown
pub const STOREFRONT_PAGE: &str = "index.html";
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

pub const SITE_NAME: &str = "SafetyTech Pro";
pub const CONTACT_PHONE: &str = "021234567";
pub const LINE_SHARE_URL: &str = "https://line.me/R/opc/add";
pub const WHATSAPP_URL: &str = "https://wa.me";

pub const MIN_QUANTITY: u8 = 1;
pub const MAX_QUANTITY: u8 = 99;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetailError {
    #[error("ไม่พบข้อมูลสินค้า กรุณาเลือกสินค้าจากหน้าแรก")]
    NoSelection,

    #[error("ไม่พบสินค้าที่ต้องการ กรุณาเลือกสินค้าจากหน้าแรก")]
    ProductNotFound(u64),

    /// A newer navigation started while loading; drop this result
    #[error("navigation superseded")]
    Superseded,
}

/// Delayed navigation back to the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub target: &'static str,
    pub after: Duration,
}

impl DetailError {
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            DetailError::ProductNotFound(_) => Some(ErrorCode::ProductNotFound),
            DetailError::NoSelection | DetailError::Superseded => None,
        }
    }

    pub fn redirect(&self) -> Option<Redirect> {
        match self {
            DetailError::NoSelection | DetailError::ProductNotFound(_) => Some(Redirect {
                target: STOREFRONT_PAGE,
                after: REDIRECT_DELAY,
            }),
            DetailError::Superseded => None,
        }
    }
}

/// What the main picture area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainVisual {
    Image(String),
    Icon { icon: String, color: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub src: String,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct Gallery {
    images: Vec<String>,
    icon: String,
    color: String,
    active: usize,
    failed: bool,
}

impl Gallery {
    pub fn new(product: &Product) -> Self {
        Self {
            images: product.images.clone(),
            icon: product.icon.clone(),
            color: product.color.clone(),
            active: 0,
            failed: false,
        }
    }

    pub fn main_visual(&self) -> MainVisual {
        match self.images.get(self.active) {
            Some(src) if !self.failed => MainVisual::Image(src.clone()),
            _ => MainVisual::Icon {
                icon: self.icon.clone(),
                color: self.color.clone(),
            },
        }
    }

    /// Empty unless there is more than one image
    pub fn thumbnails(&self) -> Vec<Thumbnail> {
        if self.images.len() <= 1 {
            return Vec::new();
        }
        self.images
            .iter()
            .enumerate()
            .map(|(i, src)| Thumbnail {
                src: src.clone(),
                active: i == self.active,
            })
            .collect()
    }

    /// Out of range is a no-op
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.active = index;
        self.failed = false;
        true
    }

    /// The main image did not load; show the icon instead
    pub fn mark_image_failed(&mut self) {
        self.failed = true;
    }

    pub fn active_index(&self) -> usize {
        self.active
    }
}

/// Order quantity, always within 1..=99
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(u8);

impl Default for Quantity {
    fn default() -> Self {
        Self(MIN_QUANTITY)
    }
}

impl Quantity {
    pub fn new(value: i64) -> Self {
        Self(value.clamp(MIN_QUANTITY as i64, MAX_QUANTITY as i64) as u8)
    }

    /// Unparsable input becomes 1
    pub fn parse(input: &str) -> Self {
        input
            .trim()
            .parse::<i64>()
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn step(self, delta: i64) -> Self {
        Self::new(i64::from(self.0).saturating_add(delta))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

pub struct ProductDetail {
    catalog: Catalog,
    product: Product,
    gallery: Gallery,
    quantity: Quantity,
}

impl ProductDetail {
    /// Resolve the selected product against a catalog
    pub fn from_catalog(catalog: Catalog, session: &SessionState) -> Result<Self, DetailError> {
        let id = session.selected_product().ok_or(DetailError::NoSelection)?;
        let product = catalog
            .find(id)
            .cloned()
            .ok_or(DetailError::ProductNotFound(id))?;

        Ok(Self {
            gallery: Gallery::new(&product),
            catalog,
            product,
            quantity: Quantity::default(),
        })
    }

    /// Load the catalog and open the selected product
    ///
    /// Without a selection nothing is loaded. The result is discarded as
    /// [`DetailError::Superseded`] when another navigation started on `guard`
    /// in the meantime.
    pub async fn open(
        source: &CatalogSource,
        session: &SessionState,
        guard: &NavigationGuard,
    ) -> Result<Self, DetailError> {
        if session.selected_product().is_none() {
            tracing::warn!("No product selected, redirecting to the storefront");
            return Err(DetailError::NoSelection);
        }

        let ticket = guard.begin();
        let loaded = source.load_catalog().await;
        if !guard.is_current(ticket) {
            tracing::debug!("Detail load superseded");
            return Err(DetailError::Superseded);
        }

        Self::from_catalog(loaded.catalog, session).inspect_err(|e| {
            tracing::warn!(error = %e, "Cannot show product detail");
        })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn page_title(&self) -> String {
        format!("{} - {}", self.product.name, SITE_NAME)
    }

    pub fn display_price(&self) -> String {
        self.product.display_price()
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut Gallery {
        &mut self.gallery
    }

    pub fn spec_table(&self) -> Vec<SpecRow> {
        specification_table(&self.catalog, &self.product)
    }

    pub fn related(&self) -> Vec<ProductCard> {
        related_products(&self.catalog, &self.product)
            .into_iter()
            .map(ProductCard::from)
            .collect()
    }

    /// Switch to a related product (same session channel as the storefront)
    pub fn open_related(&self, id: u64, session: &mut SessionState) {
        session.select_product(id);
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn set_quantity_input(&mut self, input: &str) -> Quantity {
        self.quantity = Quantity::parse(input);
        self.quantity
    }

    pub fn change_quantity(&mut self, delta: i64) -> Quantity {
        self.quantity = self.quantity.step(delta);
        self.quantity
    }

    pub fn cart_message(&self) -> String {
        format!(
            "เพิ่ม \"{}\" จำนวน {} ชิ้น ลงตะกร้าแล้ว!",
            self.product.name,
            self.quantity.get()
        )
    }

    pub fn quote_message(&self) -> String {
        format!(
            "สวัสดีครับ ต้องการขอใบเสนอราคา \"{}\" จำนวน {} ชิ้น",
            self.product.name,
            self.quantity.get()
        )
    }

    pub fn contact_message(&self) -> String {
        format!("สวัสดีครับ ต้องการสอบถามเกี่ยวกับ \"{}\"", self.product.name)
    }

    /// LINE share link carrying the quote request
    pub fn quote_link(&self) -> Option<Url> {
        Url::parse_with_params(LINE_SHARE_URL, [("text", self.quote_message())]).ok()
    }

    /// WhatsApp chat link carrying the enquiry
    pub fn contact_link(&self) -> Option<Url> {
        Url::parse_with_params(
            &format!("{WHATSAPP_URL}/{CONTACT_PHONE}"),
            [("text", self.contact_message())],
        )
        .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockApi;
    use shared::seed::seed_catalog;

    fn catalog_with_images() -> Catalog {
        let mut catalog = seed_catalog();
        catalog.products[0].images = vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()];
        catalog.products[1].images = vec!["only.jpg".into()];
        for id in 4..=8 {
            let mut extra = catalog.products[0].clone();
            extra.id = id;
            extra.images.clear();
            catalog.push(extra);
        }
        catalog
    }

    fn open(id: u64) -> ProductDetail {
        let mut session = SessionState::new();
        session.select_product(id);
        ProductDetail::from_catalog(catalog_with_images(), &session).unwrap()
    }

    #[test]
    fn test_no_selection() {
        let err = ProductDetail::from_catalog(seed_catalog(), &SessionState::new())
            .err()
            .unwrap();
        assert_eq!(err, DetailError::NoSelection);
        assert_eq!(
            err.redirect(),
            Some(Redirect {
                target: "index.html",
                after: Duration::from_secs(2)
            })
        );
    }

    #[test]
    fn test_unknown_product() {
        let mut session = SessionState::new();
        session.select_product(42);
        let err = ProductDetail::from_catalog(seed_catalog(), &session)
            .err()
            .unwrap();
        assert_eq!(err, DetailError::ProductNotFound(42));
        assert_eq!(err.code(), Some(ErrorCode::ProductNotFound));
        assert!(err.redirect().is_some());
    }

    #[test]
    fn test_gallery_thumbnails_and_selection() {
        let mut detail = open(1);
        assert_eq!(detail.gallery().main_visual(), MainVisual::Image("a.jpg".into()));
        assert_eq!(detail.gallery().thumbnails().len(), 3);

        assert!(detail.gallery_mut().select(2));
        assert_eq!(detail.gallery().main_visual(), MainVisual::Image("c.jpg".into()));
        let active: Vec<bool> = detail.gallery().thumbnails().iter().map(|t| t.active).collect();
        assert_eq!(active, vec![false, false, true]);

        assert!(!detail.gallery_mut().select(3));
        assert_eq!(detail.gallery().active_index(), 2);
    }

    #[test]
    fn test_single_image_has_no_thumbnails() {
        let detail = open(2);
        assert!(detail.gallery().thumbnails().is_empty());
        assert_eq!(
            detail.gallery().main_visual(),
            MainVisual::Image("only.jpg".into())
        );
    }

    #[test]
    fn test_icon_fallback() {
        let detail = open(3);
        assert_eq!(
            detail.gallery().main_visual(),
            MainVisual::Icon {
                icon: "fas fa-fire-extinguisher".into(),
                color: "#ef4444".into()
            }
        );

        let mut detail = open(2);
        detail.gallery_mut().mark_image_failed();
        assert!(matches!(detail.gallery().main_visual(), MainVisual::Icon { .. }));
    }

    #[test]
    fn test_spec_table_and_related() {
        let detail = open(1);
        let rows = detail.spec_table();
        assert_eq!(rows[0], SpecRow::new("หมวดหมู่", "อุปกรณ์จราจร"));
        assert_eq!(rows[1], SpecRow::new("รหัสสินค้า", "SP-001"));
        assert_eq!(rows.len(), 4);

        let related: Vec<u64> = detail.related().iter().map(|c| c.id).collect();
        assert_eq!(related, vec![4, 5, 6]);
    }

    #[test]
    fn test_open_related_reselects() {
        let detail = open(1);
        let mut session = SessionState::new();
        detail.open_related(5, &mut session);
        assert_eq!(session.selected_product(), Some(5));
    }

    #[test]
    fn test_quantity_clamping() {
        assert_eq!(Quantity::parse("abc").get(), 1);
        assert_eq!(Quantity::parse("0").get(), 1);
        assert_eq!(Quantity::parse("150").get(), 99);
        assert_eq!(Quantity::parse(" 12 ").get(), 12);

        let mut detail = open(3);
        assert_eq!(detail.change_quantity(-1).get(), 1);
        assert_eq!(detail.change_quantity(5).get(), 6);
        assert_eq!(detail.set_quantity_input("1000").get(), 99);
        assert_eq!(detail.change_quantity(1).get(), 99);
        assert_eq!(detail.change_quantity(i64::MAX).get(), 99);
        assert_eq!(detail.change_quantity(i64::MIN).get(), 1);
    }

    #[test]
    fn test_quote_and_contact_links() {
        let mut detail = open(3);
        detail.set_quantity_input("2");
        assert_eq!(detail.page_title(), "ถังดับเพลิง CO2 - SafetyTech Pro");

        let quote = detail.quote_link().unwrap();
        assert_eq!(quote.host_str(), Some("line.me"));
        let text: Vec<String> = quote
            .query_pairs()
            .filter(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .collect();
        assert_eq!(text, vec![detail.quote_message()]);
        assert!(detail.quote_message().contains("จำนวน 2 ชิ้น"));

        let contact = detail.contact_link().unwrap();
        assert_eq!(contact.path(), "/021234567");
        assert!(contact.query().unwrap().starts_with("text="));
    }

    #[tokio::test]
    async fn test_open_loads_selected_product() {
        let source = CatalogSource::new(MockApi::with_catalog(seed_catalog()));
        let mut session = SessionState::new();
        session.select_product(2);

        let detail = ProductDetail::open(&source, &session, &NavigationGuard::new())
            .await
            .unwrap();
        assert_eq!(detail.product().name, "หมวกนิรภัย ABS");
    }

    #[tokio::test]
    async fn test_superseded_navigation_is_dropped() {
        let guard = NavigationGuard::new();
        let source = CatalogSource::new(MockApi::racing(seed_catalog(), guard.clone()));
        let mut session = SessionState::new();
        session.select_product(1);

        let err = ProductDetail::open(&source, &session, &guard)
            .await
            .err()
            .unwrap();
        assert_eq!(err, DetailError::Superseded);
        assert_eq!(err.redirect(), None);
    }

    #[tokio::test]
    async fn test_open_without_selection_skips_loading() {
        let api = MockApi::with_catalog(seed_catalog());
        let source = CatalogSource::new(api.clone());

        let err = ProductDetail::open(&source, &SessionState::new(), &NavigationGuard::new())
            .await
            .err()
            .unwrap();
        assert_eq!(err, DetailError::NoSelection);
        assert_eq!(api.fetch_calls(), 0);
    }
}
