//! Detail-page derived data: specification table and related products

use serde::{Deserialize, Serialize};

use crate::models::{Catalog, Product};

/// Maximum number of related products shown under a detail page
pub const RELATED_LIMIT: usize = 3;

pub const LABEL_CATEGORY: &str = "หมวดหมู่";
pub const LABEL_PRODUCT_CODE: &str = "รหัสสินค้า";
pub const LABEL_STATUS: &str = "สถานะ";
pub const LABEL_WARRANTY: &str = "การรับประกัน";
/// "Ready to ship"
pub const STATUS_READY: &str = "พร้อมส่ง";
/// "1 year"
pub const WARRANTY_ONE_YEAR: &str = "1 ปี";

/// One row of the specification table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecRow {
    pub label: String,
    pub value: String,
}

impl SpecRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Specification table for a product
///
/// Row order: category label, product code, the product's own
/// specifications in stored order, availability status, warranty.
/// An unknown category code yields an empty label value.
pub fn specification_table(catalog: &Catalog, product: &Product) -> Vec<SpecRow> {
    let mut rows = Vec::with_capacity(product.specifications.len() + 4);
    rows.push(SpecRow::new(
        LABEL_CATEGORY,
        catalog.category_label(&product.category).unwrap_or_default(),
    ));
    rows.push(SpecRow::new(LABEL_PRODUCT_CODE, product.product_code()));
    rows.extend(
        product
            .specifications
            .iter()
            .map(|(label, value)| SpecRow::new(label, value)),
    );
    rows.push(SpecRow::new(LABEL_STATUS, STATUS_READY));
    rows.push(SpecRow::new(LABEL_WARRANTY, WARRANTY_ONE_YEAR));
    rows
}

/// Up to [`RELATED_LIMIT`] other products of the same category, catalog order
pub fn related_products<'a>(catalog: &'a Catalog, product: &Product) -> Vec<&'a Product> {
    catalog
        .products
        .iter()
        .filter(|p| p.category == product.category && p.id != product.id)
        .take(RELATED_LIMIT)
        .collect()
}
