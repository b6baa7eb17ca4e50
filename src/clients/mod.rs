//! Typed handles over the resource actors.

#[macro_use]
mod macros;
pub mod product_client;

pub use product_client::ProductClient;
