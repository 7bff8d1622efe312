use crate::error::{ApiError, ErrorResponse};
use crate::models::{CreateProductRequest, ProductResponse};
use crate::routes;
use crate::state::AppState;
use crate::validation::{parse_json_body, validate_new_product};
use axum::{body::Bytes, extract::State, http::HeaderMap, http::StatusCode, Json};

/// POST /products handler - Add a product to the end of the catalog
#[utoipa::path(
    post,
    path = routes::PRODUCTS,
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product added", body = ProductResponse),
        (status = 400, description = "Missing field, wrong field type or duplicate id", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let body = parse_json_body(&headers, &body)?;
    let request: CreateProductRequest = serde_json::from_value(body)?;
    let product = validate_new_product(request)?;

    let product = state.store.insert(product).await?;

    tracing::info!("Added product with id: {}", product.id);
    Ok((
        StatusCode::CREATED,
        Json(ProductResponse::new("Product added", product)),
    ))
}
