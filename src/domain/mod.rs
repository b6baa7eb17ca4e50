//! Catalog entities and the payloads used to create or replace them.

pub mod category;
pub mod product;

pub use category::*;
pub use product::*;
