use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryInput};

/// Payload for creating a product, and the full replacement for updates.
///
/// `stock` is signed so that negative quantities reach the validator and get
/// rejected with a proper error instead of failing to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub categories: Vec<CategoryInput>,
    pub stock: i64,
}

impl ProductInput {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        stock: i64,
        categories: Vec<CategoryInput>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            categories,
            stock,
        }
    }
}

/// Validated product fields, everything except identity and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub stock: u32,
    pub categories: Vec<Category>,
}

/// Represents a product in the catalog.
///
/// # Actor Framework
/// This struct implements the [`Entity`](crate::actor_framework::Entity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::actor_framework::ResourceActor).
/// Creation and update both take a [`ProductInput`] and run it through
/// [`normalize_product`](crate::validation::normalize_product).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: u32,
    pub categories: Vec<Category>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(id: impl Into<String>, fields: ProductFields, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            price: fields.price,
            stock: fields.stock,
            categories: fields.categories,
            created_at,
        }
    }

    /// Replaces every field except `id` and `created_at`.
    pub fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.price = fields.price;
        self.stock = fields.stock;
        self.categories = fields.categories;
    }

    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            price: self.price,
            stock: self.stock,
            categories: self.categories.clone(),
        }
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|category| category.is_named(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        let fields = ProductFields {
            name: "Manzana Roja".to_string(),
            price: 25.5,
            stock: 100,
            categories: vec![Category {
                name: "Frutas".to_string(),
                description: None,
            }],
        };
        Product::new("p-1", fields, Utc::now())
    }

    #[test]
    fn has_category_is_exact_and_ignores_case() {
        let product = sample();
        assert!(product.has_category("frutas"));
        assert!(product.has_category("FRUTAS"));
        assert!(!product.has_category("Frut"));
        assert!(!product.has_category("Frutas Secas"));
    }

    #[test]
    fn serializes_without_absent_description() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["name"], "Manzana Roja");
        assert_eq!(json["price"], 25.5);
        assert_eq!(json["categories"][0], serde_json::json!({ "name": "Frutas" }));
        assert!(json["created_at"].is_string());
    }

    #[test]
    fn input_deserializes_without_description() {
        let input: ProductInput = serde_json::from_str(
            r#"{"name":"Manzana Roja","price":25.5,"categories":[{"name":"Frutas"}],"stock":100}"#,
        )
        .unwrap();
        assert_eq!(input.categories[0], CategoryInput::new("Frutas"));
        assert_eq!(input.stock, 100);
    }
}
