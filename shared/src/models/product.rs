//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity
///
/// Owned by the backend; read-only to the client. `stock` is advisory
/// display data, never reserved or decremented locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Stock-keeping unit, normalized to uppercase A-Z0-9_- on create
    pub sku: String,
    pub description: Option<String>,
    /// Category reference (id, optional)
    pub category: Option<i64>,
    /// Unit sale price, non-negative
    pub price: Decimal,
    pub cost: Option<Decimal>,
    /// Current available quantity (informational)
    pub stock: i32,
    pub reorder_level: i32,
    pub image_url: Option<String>,
    pub created_at: Option<String>,
}

impl Product {
    /// Whether the product is at or below its reorder level
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.reorder_level
    }
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub category: Option<i64>,
    pub price: Decimal,
    pub cost: Option<Decimal>,
    pub stock: Option<i32>,
    pub reorder_level: Option<i32>,
    pub image_url: Option<String>,
}

/// Update product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub category: Option<i64>,
    pub price: Option<Decimal>,
    pub cost: Option<Decimal>,
    pub stock: Option<i32>,
    pub reorder_level: Option<i32>,
    pub image_url: Option<String>,
}

/// Normalize a SKU the way the backend stores it: trimmed, uppercased,
/// restricted to `A-Z 0-9 _ -`.
///
/// Returns `None` when the normalized value is empty or contains a
/// character outside the allowed charset.
pub fn normalize_sku(raw: &str) -> Option<String> {
    let sku = raw.trim().to_uppercase();
    if sku.is_empty() {
        return None;
    }
    if sku
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' || c == '-')
    {
        Some(sku)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: i32, reorder_level: i32) -> Product {
        Product {
            id: 1,
            name: "Espresso Beans".to_string(),
            sku: "ESP-250".to_string(),
            description: None,
            category: None,
            price: Decimal::new(1250, 2),
            cost: None,
            stock,
            reorder_level,
            image_url: None,
            created_at: None,
        }
    }

    #[test]
    fn test_normalize_sku() {
        assert_eq!(normalize_sku("  esp-250 "), Some("ESP-250".to_string()));
        assert_eq!(normalize_sku("A_B-9"), Some("A_B-9".to_string()));
        assert_eq!(normalize_sku(""), None);
        assert_eq!(normalize_sku("   "), None);
        assert_eq!(normalize_sku("bad sku"), None);
        assert_eq!(normalize_sku("sku#1"), None);
    }

    #[test]
    fn test_is_low_stock() {
        assert!(product(5, 10).is_low_stock());
        assert!(product(10, 10).is_low_stock());
        assert!(!product(11, 10).is_low_stock());
    }
}
