use thiserror::Error;

use super::config::ConfigError;

/// Failures while starting or stopping the catalog system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Actor task failed: {0}")]
    ActorTask(String),
}
