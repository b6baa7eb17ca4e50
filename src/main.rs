use agro_catalog::app_system::{setup_tracing, CatalogConfig, CatalogSystem};
use agro_catalog::domain::{CategoryInput, Product, ProductInput};
use tracing::{error, info, warn, Instrument};

fn log_product(product: &Product) {
    match serde_json::to_string(product) {
        Ok(json) => info!(product_id = %product.id, %json, "Product"),
        Err(e) => warn!(error = %e, "Could not serialize product"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CatalogConfig::from_env()?;
    setup_tracing(&config.log_filter);

    info!("Starting agricultural product catalog");
    let system = CatalogSystem::new(&config);
    let products = system.product_client.clone();

    // Valid creates, including one that relies on automatic formatting
    let creations = vec![
        ProductInput::new(
            "Manzana Roja",
            25.50,
            100,
            vec![CategoryInput::new("Frutas").with_description("Productos frutales frescos")],
        ),
        ProductInput::new(
            "Tomate Cherry Orgánico",
            45.75,
            50,
            vec![
                CategoryInput::new("Verduras").with_description("Hortalizas frescas"),
                CategoryInput::new("Orgánico").with_description("Productos orgánicos certificados"),
                CategoryInput::new("Premium").with_description("Productos de alta calidad"),
            ],
        ),
        ProductInput::new(
            "   zanahoria naranja   ",
            15.99,
            75,
            vec![CategoryInput::new("   verduras frescas   ")
                .with_description("   productos de la huerta   ")],
        ),
    ];

    let span = tracing::info_span!("product_creation");
    let created = async {
        let mut created = Vec::new();
        for input in creations {
            let product = products.create_product(input).await?;
            log_product(&product);
            created.push(product);
        }
        Ok::<_, agro_catalog::product_actor::ProductError>(created)
    }
    .instrument(span)
    .await?;

    // Invalid creates: each one is rejected with a typed validation error
    let invalid = vec![
        ProductInput::new("Producto Caro", -10.0, 10, vec![CategoryInput::new("Frutas")]),
        ProductInput::new("Sin Categorias", 10.0, 10, Vec::new()),
        ProductInput::new("Stock Negativo", 10.0, -5, vec![CategoryInput::new("Frutas")]),
        ProductInput::new(
            "Duplicado",
            10.0,
            10,
            vec![CategoryInput::new("Frutas"), CategoryInput::new("FRUTAS")],
        ),
    ];

    let span = tracing::info_span!("validation_examples");
    async {
        for input in invalid {
            match products.create_product(input).await {
                Ok(product) => warn!(product_id = %product.id, "Unexpectedly accepted"),
                Err(e) => info!(error = %e, "Rejected as expected"),
            }
        }
    }
    .instrument(span)
    .await;

    let all = products.list_products().await?;
    info!(product_count = all.len(), "Listed products");

    for category in ["frutas", "VERDURAS", "premium"] {
        let found = products.list_products_by_category(category.to_string()).await?;
        info!(category, product_count = found.len(), "Filtered by category");
    }

    if let Some(first) = created.first() {
        let replacement = ProductInput::new(
            "manzana roja premium",
            30.0,
            80,
            vec![CategoryInput::new("Frutas"), CategoryInput::new("Premium")],
        );
        let updated = products.update_product(first.id.clone(), replacement).await?;
        log_product(&updated);

        products.delete_product(first.id.clone()).await?;
        match products.get_product(first.id.clone()).await {
            Ok(_) => error!(product_id = %first.id, "Deleted product still resolvable"),
            Err(e) => info!(error = %e, "Deleted product no longer resolvable"),
        }
    }

    drop(products);
    system.shutdown().await?;

    info!("Catalog demo completed successfully");
    Ok(())
}
