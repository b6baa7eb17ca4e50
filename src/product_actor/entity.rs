use chrono::Utc;

use super::query::ProductQuery;
use crate::actor_framework::Entity;
use crate::domain::{Product, ProductInput};
use crate::error::ValidationError;
use crate::validation::normalize_product;

impl Entity for Product {
    type Id = String;
    type CreatePayload = ProductInput;
    type Patch = ProductInput;
    type Query = ProductQuery;
    type Error = ValidationError;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Product from a raw payload.
    ///
    /// # Arguments
    /// * `id` - Unique identifier for the product
    /// * `payload` - Name, price, stock and categories, validated and normalized here
    ///
    /// # Notes
    /// The creation timestamp is stamped now and never changes afterwards.
    fn from_create(id: String, payload: ProductInput) -> Result<Self, ValidationError> {
        let fields = normalize_product(&payload)?;
        Ok(Product::new(id, fields, Utc::now()))
    }

    /// Replaces every field except `id` and `created_at`.
    ///
    /// The payload is validated exactly like on creation; nothing is changed
    /// when it is rejected.
    fn on_update(&mut self, patch: ProductInput) -> Result<(), ValidationError> {
        let fields = normalize_product(&patch)?;
        self.apply(fields);
        Ok(())
    }

    fn matches(&self, query: &ProductQuery) -> bool {
        match query {
            ProductQuery::Category(name) => self.has_category(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryInput;

    fn manzana() -> ProductInput {
        ProductInput::new("Manzana Roja", 25.50, 100, vec![CategoryInput::new("Frutas")])
    }

    #[test]
    fn from_create_normalizes_and_stamps() {
        let before = Utc::now();
        let product = Product::from_create("p-1".to_string(), manzana()).unwrap();
        assert_eq!(product.id(), "p-1");
        assert_eq!(product.name, "Manzana Roja");
        assert_eq!(product.price, 25.5);
        assert!(product.created_at >= before);
    }

    #[test]
    fn from_create_rejects_invalid_payload() {
        let mut raw = manzana();
        raw.categories.clear();
        assert!(matches!(
            Product::from_create("p-1".to_string(), raw),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn on_update_keeps_identity() {
        let mut product = Product::from_create("p-1".to_string(), manzana()).unwrap();
        let created_at = product.created_at;

        let patch = ProductInput::new("  pera  ", 12.345, 7, vec![CategoryInput::new("frutas")]);
        product.on_update(patch).unwrap();

        assert_eq!(product.id, "p-1");
        assert_eq!(product.created_at, created_at);
        assert_eq!(product.name, "Pera");
        assert_eq!(product.stock, 7);
    }

    #[test]
    fn rejected_update_changes_nothing() {
        let mut product = Product::from_create("p-1".to_string(), manzana()).unwrap();
        let before = product.clone();
        let mut patch = manzana();
        patch.stock = -1;
        assert!(product.on_update(patch).is_err());
        assert_eq!(product, before);
    }

    #[test]
    fn matches_category_query() {
        let product = Product::from_create("p-1".to_string(), manzana()).unwrap();
        assert!(product.matches(&ProductQuery::category(" frutas ")));
        assert!(!product.matches(&ProductQuery::category("verduras")));
    }
}
