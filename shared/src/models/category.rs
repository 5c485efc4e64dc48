//! Category Model

use serde::{Deserialize, Serialize};

/// Product category entity
///
/// Referenced by `Product::category`; owned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Option<String>,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_format() {
        let category: Category = serde_json::from_str(
            r#"{"id":3,"name":"Beverages","description":null,"created_at":"2026-01-05T09:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(category.id, 3);
        assert_eq!(category.name, "Beverages");
        assert!(category.description.is_none());

        let payload = serde_json::to_value(CategoryCreate {
            name: "Snacks".to_string(),
            description: Some("Shelf goods".to_string()),
        })
        .unwrap();
        assert_eq!(payload["name"], "Snacks");
        assert_eq!(payload["description"], "Shelf goods");
    }
}
