//! Product Model

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Badge shown when the admin leaves the field blank ("new product")
pub const DEFAULT_BADGE: &str = "สินค้าใหม่";
/// Icon shown when the admin leaves the field blank
pub const DEFAULT_ICON: &str = "fas fa-box";
/// Accent color preselected in the admin form
pub const DEFAULT_COLOR: &str = "#2563eb";

/// Label → value pairs, kept in the order they were entered
pub type Specifications = IndexMap<String, String>;

/// Product entity
///
/// `images`, `features` and `specifications` may be absent in stored
/// documents (the seed products have none); they deserialize as empty.
/// Keys this model does not know are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    /// Category code (key of the catalog's category map)
    pub category: String,
    /// Price in whole baht
    pub price: u64,
    #[serde(default = "default_badge")]
    pub badge: String,
    /// Font Awesome class list, e.g. `fas fa-hard-hat`
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default = "default_color")]
    pub color: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub specifications: Specifications,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_badge() -> String {
    DEFAULT_BADGE.to_string()
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Product {
    /// Display code: `SP-` followed by the id zero-padded to 3 digits
    pub fn product_code(&self) -> String {
        format!("SP-{:03}", self.id)
    }

    /// First image, used as the card and detail-page picture
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Card excerpt: the first `max_chars` characters followed by `...`
    pub fn summary(&self, max_chars: usize) -> String {
        let excerpt: String = self.description.chars().take(max_chars).collect();
        format!("{}...", excerpt)
    }

    /// Price formatted for display
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

/// Format a price as `฿` with thousands separators, e.g. `฿2,800`
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("฿{}", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64) -> Product {
        Product {
            id,
            name: "หมวกนิรภัย ABS".to_string(),
            category: "safety".to_string(),
            price: 150,
            badge: DEFAULT_BADGE.to_string(),
            icon: DEFAULT_ICON.to_string(),
            color: DEFAULT_COLOR.to_string(),
            description: "หมวกนิรภัย ABS มาตรฐาน มอก.".to_string(),
            images: vec![],
            features: vec![],
            specifications: Specifications::new(),
            extra: Default::default(),
        }
    }

    #[test]
    fn test_product_code_padding() {
        assert_eq!(product(1).product_code(), "SP-001");
        assert_eq!(product(42).product_code(), "SP-042");
        assert_eq!(product(1234).product_code(), "SP-1234");
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let json = r#"{
            "id": 3,
            "name": "ถังดับเพลิง CO2",
            "category": "fire",
            "price": 2800,
            "description": "ถังดับเพลิง CO2 ขนาด 5 ปอนด์"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.badge, DEFAULT_BADGE);
        assert_eq!(p.icon, DEFAULT_ICON);
        assert_eq!(p.color, DEFAULT_COLOR);
        assert!(p.images.is_empty());
        assert!(p.features.is_empty());
        assert!(p.specifications.is_empty());
        assert!(p.primary_image().is_none());
    }

    #[test]
    fn test_specifications_keep_entry_order() {
        let json = r#"{
            "id": 1, "name": "n", "category": "c", "price": 1, "description": "d",
            "specifications": {"ขนาด": "60x60", "วัสดุ": "อลูมิเนียม", "น้ำหนัก": "2kg"}
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = p.specifications.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["ขนาด", "วัสดุ", "น้ำหนัก"]);
    }

    #[test]
    fn test_summary_counts_characters() {
        let mut p = product(1);
        p.description = "abcdef".to_string();
        assert_eq!(p.summary(3), "abc...");
        p.description = "หมวกนิรภัย".to_string();
        assert_eq!(p.summary(4), "หมวก...");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "฿0");
        assert_eq!(format_price(150), "฿150");
        assert_eq!(format_price(2800), "฿2,800");
        assert_eq!(format_price(1234567), "฿1,234,567");
    }
}
