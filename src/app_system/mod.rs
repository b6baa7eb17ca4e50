//! System orchestration, configuration, startup, and shutdown logic.

pub mod catalog_system;
pub mod config;
pub mod error;
pub mod logging;

pub use self::catalog_system::*;
pub use self::config::*;
pub use self::error::*;
pub use self::logging::*;
