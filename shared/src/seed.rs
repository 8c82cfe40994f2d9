//! Embedded fallback catalog
//!
//! Used by the views only when the catalog cannot be loaded from the server.
//! Never written back.

use crate::models::{Catalog, CategoryMap, Product, Specifications};

/// Default category map (code, label), in display order
pub const SEED_CATEGORIES: [(&str, &str); 5] = [
    ("traffic", "อุปกรณ์จราจร"),
    ("safety", "อุปกรณ์เซฟตี้"),
    ("fire", "เครื่องดับเพลิง"),
    ("warning", "ป้ายเตือน"),
    ("road", "วัสดุงานถนน"),
];

/// Seed category map
pub fn seed_categories() -> CategoryMap {
    SEED_CATEGORIES
        .iter()
        .map(|(code, label)| (code.to_string(), label.to_string()))
        .collect()
}

/// Seed catalog: the default categories and three sample products
pub fn seed_catalog() -> Catalog {
    Catalog::new(
        seed_categories(),
        vec![
            sample(
                1,
                "ป้ายจราจรสี่เหลี่ยม",
                "traffic",
                500,
                "ขายดี",
                "fas fa-traffic-light",
                "#2563eb",
                "ป้ายจราจรขนาดมาตรฐาน ผลิตจากอลูมิเนียม ทนทาน แสงสะท้อนสูง",
            ),
            sample(
                2,
                "หมวกนิรภัย ABS",
                "safety",
                150,
                "มาตรฐาน",
                "fas fa-hard-hat",
                "#10b981",
                "หมวกนิรภัย ABS มาตรฐาน มอก. ปรับขนาดได้ ระบายอากาศดี",
            ),
            sample(
                3,
                "ถังดับเพลิง CO2",
                "fire",
                2800,
                "รับรอง",
                "fas fa-fire-extinguisher",
                "#ef4444",
                "ถังดับเพลิง CO2 ขนาด 5 ปอนด์ มาตรฐาน UL เหมาะกับไฟไฟฟ้า",
            ),
        ],
    )
}

/// Seed categories with no products (admin fallback)
pub fn empty_catalog() -> Catalog {
    Catalog::new(seed_categories(), Vec::new())
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: u64,
    name: &str,
    category: &str,
    price: u64,
    badge: &str,
    icon: &str,
    color: &str,
    description: &str,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        badge: badge.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        description: description.to_string(),
        images: Vec::new(),
        features: Vec::new(),
        specifications: Specifications::new(),
        extra: Default::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_is_consistent() {
        let catalog = seed_catalog();
        assert_eq!(catalog.categories.len(), 5);
        assert_eq!(catalog.products.len(), 3);
        assert!(catalog.has_unique_ids());
        assert!(
            catalog
                .products
                .iter()
                .all(|p| catalog.categories.contains_key(&p.category))
        );
        assert_eq!(catalog.next_id(), 4);
    }

    #[test]
    fn test_seed_category_order() {
        let codes: Vec<String> = seed_categories().into_keys().collect();
        assert_eq!(codes, vec!["traffic", "safety", "fire", "warning", "road"]);
    }

    #[test]
    fn test_empty_catalog_keeps_categories() {
        let catalog = empty_catalog();
        assert_eq!(catalog.categories.len(), 5);
        assert!(catalog.products.is_empty());
        assert_eq!(catalog.next_id(), 1);
    }
}
