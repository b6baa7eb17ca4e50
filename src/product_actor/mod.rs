//! Product-specific actor logic: the `Entity` hooks and listing filters.

pub mod entity;
pub mod error;
mod query;

pub use error::*;
pub use query::*;
