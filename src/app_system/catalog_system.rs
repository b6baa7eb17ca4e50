use tracing::{error, info, instrument};
use uuid::Uuid;

use super::config::CatalogConfig;
use super::error::SystemError;
use crate::actor_framework::ResourceActor;
use crate::clients::ProductClient;
use crate::domain::Product;

/// The application system that owns the product actor.
///
/// Responsible for starting the actor, handing out its client, and shutting
/// it down. Must be created inside a tokio runtime.
pub struct CatalogSystem {
    pub product_client: ProductClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    #[instrument(name = "catalog_system", skip(config), fields(mailbox_capacity = config.mailbox_capacity))]
    pub fn new(config: &CatalogConfig) -> Self {
        info!("Starting catalog system");

        let next_product_id = || Uuid::new_v4().to_string();
        let (product_actor, product_resource_client) =
            ResourceActor::<Product>::new(config.mailbox_capacity, next_product_id);
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.run());

        info!("Catalog system started");

        Self {
            product_client,
            handles: vec![product_handle],
        }
    }

    /// Stops the actor after the requests already queued and waits for it.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down catalog system");

        if let Err(e) = self.product_client.shutdown().await {
            error!(error = %e, "Product actor already stopped");
        }
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(SystemError::ActorTask(e.to_string()));
            }
        }

        info!("Catalog system shutdown complete");
        Ok(())
    }
}

impl Default for CatalogSystem {
    fn default() -> Self {
        Self::new(&CatalogConfig::default())
    }
}
