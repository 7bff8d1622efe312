use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{CreateProductRequest, Product, ProductResponse, UpdateProductRequest};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "product-catalog-api",
        version = "1.0.0",
        description = "A small product inventory service backed by an in-memory collection"
    ),
    paths(
        handlers::root::root_handler,
        handlers::health::health_handler,
        handlers::create::create_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Product,
            CreateProductRequest,
            UpdateProductRequest,
            ProductResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Liveness operations"),
        (name = "products", description = "Product inventory operations")
    )
)]
pub struct ApiDoc;
