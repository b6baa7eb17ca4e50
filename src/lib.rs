//! # Agro Catalog
//!
//! In-memory catalog of agricultural products with field-level validation.
//!
//! - **Domain types** - raw payloads and normalized records → [`domain`]
//! - **Validation** - pure normalization rules → [`validation`]
//! - **Record store** - insertion-ordered keyed collection → [`store::RecordStore`]
//! - **Actor framework** - a generic actor owning the store, reached through
//!   a cloneable client → [`actor_framework`]
//! - **System** - configuration, tracing setup, startup and shutdown → [`app_system`]
//!
//! ```no_run
//! use agro_catalog::app_system::CatalogSystem;
//! use agro_catalog::domain::{CategoryInput, ProductInput};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = CatalogSystem::default();
//! let input = ProductInput::new("manzana roja", 25.5, 100, vec![CategoryInput::new("frutas")]);
//! let product = system.product_client.create_product(input).await?;
//! assert_eq!(product.name, "Manzana Roja");
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod error;
pub mod product_actor;
pub mod store;
pub mod validation;

#[cfg(test)]
mod mock_framework;
