use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Product, ProductInput};
use crate::product_actor::{ProductError, ProductQuery};

/// Client for interacting with the Product actor.
///
/// Cheap to clone; every clone talks to the same actor, which serializes
/// the requests.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: ProductInput) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(input).await.map_err(ProductError::from)
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner.list(None).await.map_err(ProductError::from)
    }

    #[instrument(skip(self))]
    pub async fn list_products_by_category(
        &self,
        category: String,
    ) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner
            .list(Some(ProductQuery::category(category)))
            .await
            .map_err(ProductError::from)
    }

    /// Replaces every field except id and creation timestamp.
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn update_product(
        &self,
        id: String,
        input: ProductInput,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, input).await.map_err(ProductError::from)
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), ProductError> {
        debug!("Sending shutdown request");
        self.inner.shutdown().await.map_err(ProductError::from)
    }
}
