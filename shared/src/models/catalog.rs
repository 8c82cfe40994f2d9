//! Catalog document
//!
//! The whole persisted state: the category map and the ordered product list.
//! Every save replaces the document as a unit.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::product::Product;

/// Category code → display label, in display order
pub type CategoryMap = IndexMap<String, String>;

/// Catalog document
///
/// Top-level keys other than `categories` and `products` are kept in `extra`
/// and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: CategoryMap,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Catalog {
    pub fn new(categories: CategoryMap, products: Vec<Product>) -> Self {
        Self {
            categories,
            products,
            extra: Map::new(),
        }
    }

    /// Id for the next created product: one past the largest id, or 1 when empty
    pub fn next_id(&self) -> u64 {
        self.products
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    pub fn find(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn category_label(&self, code: &str) -> Option<&str> {
        self.categories.get(code).map(String::as_str)
    }

    /// Number of products per category code, in first-seen order
    pub fn category_counts(&self) -> IndexMap<&str, usize> {
        let mut counts = IndexMap::new();
        for product in &self.products {
            *counts.entry(product.category.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Replace the product with the same id in place
    ///
    /// Returns `false` (and leaves the list untouched) when no product has that id.
    pub fn replace(&mut self, product: Product) -> bool {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product;
                true
            }
            None => false,
        }
    }

    /// Append a new product at the end of the list
    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Remove the product with the given id, keeping the order of the rest
    pub fn remove(&mut self, id: u64) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }

    /// Whether every product id appears once
    pub fn has_unique_ids(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.products.len());
        self.products.iter().all(|p| seen.insert(p.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::Specifications;

    fn product(id: u64, category: &str) -> Product {
        Product {
            id,
            name: format!("product {}", id),
            category: category.to_string(),
            price: id * 100,
            badge: "ขายดี".to_string(),
            icon: "fas fa-box".to_string(),
            color: "#2563eb".to_string(),
            description: "description".to_string(),
            images: vec![],
            features: vec![],
            specifications: Specifications::new(),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_next_id_empty_catalog() {
        assert_eq!(Catalog::default().next_id(), 1);
    }

    #[test]
    fn test_next_id_exceeds_every_id() {
        let catalog = Catalog::new(
            CategoryMap::new(),
            vec![product(4, "fire"), product(9, "fire"), product(2, "road")],
        );
        let next = catalog.next_id();
        assert_eq!(next, 10);
        assert!(catalog.products.iter().all(|p| p.id < next));
    }

    #[test]
    fn test_replace_in_place() {
        let mut catalog = Catalog::new(
            CategoryMap::new(),
            vec![product(1, "fire"), product(2, "road"), product(3, "fire")],
        );
        let mut updated = product(2, "traffic");
        updated.name = "renamed".to_string();

        assert!(catalog.replace(updated));
        assert_eq!(catalog.products[1].name, "renamed");
        assert_eq!(catalog.products[1].category, "traffic");
        assert_eq!(catalog.products.len(), 3);

        assert!(!catalog.replace(product(99, "fire")));
        assert_eq!(catalog.products.len(), 3);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut catalog = Catalog::new(
            CategoryMap::new(),
            vec![product(1, "fire"), product(2, "road"), product(3, "fire")],
        );
        let removed = catalog.remove(2).unwrap();
        assert_eq!(removed.id, 2);
        let ids: Vec<u64> = catalog.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(catalog.remove(2).is_none());
    }

    #[test]
    fn test_category_counts() {
        let catalog = Catalog::new(
            CategoryMap::new(),
            vec![product(1, "fire"), product(2, "road"), product(3, "fire")],
        );
        let counts = catalog.category_counts();
        assert_eq!(counts.get("fire"), Some(&2));
        assert_eq!(counts.get("road"), Some(&1));
        assert_eq!(counts.get("traffic"), None);
    }

    #[test]
    fn test_category_order_survives_roundtrip() {
        let json = r#"{
            "categories": {"traffic": "อุปกรณ์จราจร", "safety": "อุปกรณ์เซฟตี้", "fire": "เครื่องดับเพลิง"},
            "products": []
        }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        let back = serde_json::to_string(&catalog).unwrap();
        let again: Catalog = serde_json::from_str(&back).unwrap();
        let codes: Vec<&str> = again.categories.keys().map(String::as_str).collect();
        assert_eq!(codes, vec!["traffic", "safety", "fire"]);
        assert_eq!(again.category_label("fire"), Some("เครื่องดับเพลิง"));
    }

    #[test]
    fn test_missing_sections_deserialize_empty() {
        let catalog: Catalog = serde_json::from_str("{}").unwrap();
        assert!(catalog.categories.is_empty());
        assert!(catalog.products.is_empty());
    }

    #[test]
    fn test_unknown_keys_survive_roundtrip() {
        let json = r#"{
            "siteTitle": "SafetyTech Pro",
            "categories": {"fire": "เครื่องดับเพลิง"},
            "products": [{
                "id": 1, "name": "ถังดับเพลิง", "category": "fire", "price": 2800,
                "description": "CO2", "stock": 7
            }]
        }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.extra["siteTitle"], "SafetyTech Pro");
        assert_eq!(catalog.products[0].extra["stock"], 7);
        assert!(!catalog.products[0].extra.contains_key("price"));

        let back = serde_json::to_value(&catalog).unwrap();
        assert_eq!(back["siteTitle"], "SafetyTech Pro");
        assert_eq!(back["products"][0]["stock"], 7);
        assert_eq!(back["products"][0]["price"], 2800);
    }

    #[test]
    fn test_has_unique_ids() {
        let mut catalog = Catalog::new(
            CategoryMap::new(),
            vec![product(1, "fire"), product(2, "road")],
        );
        assert!(catalog.has_unique_ids());
        catalog.push(product(2, "fire"));
        assert!(!catalog.has_unique_ids());
    }
}
