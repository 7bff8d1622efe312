use crate::error::{ApiError, ErrorResponse};
use crate::models::{ProductResponse, UpdateProductRequest};
use crate::routes;
use crate::state::AppState;
use crate::validation::{parse_json_body, parse_product_id, validate_changes, PathId};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};

/// PUT /products/{id} handler - Partially update a product
///
/// Checks run in this order: the id must be numeric (400), a product must
/// exist for it (404), then every supplied field must be valid (400). No
/// field is written unless all of them pass. A missing body changes nothing.
#[utoipa::path(
    put,
    path = routes::PRODUCT_ITEM,
    params(
        ("id" = String, Path, description = "Product id")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Invalid id or field value", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let id = match parse_product_id(&id_str) {
        PathId::Number(id) => id,
        PathId::OutOfRange => return Err(ApiError::NotFound(id_str)),
        PathId::NotANumber => return Err(ApiError::InvalidId(id_str)),
    };

    if !state.store.contains(id).await {
        return Err(ApiError::NotFound(id.to_string()));
    }

    let body = parse_json_body(&headers, &body)?;
    let changes = validate_changes(&body).inspect_err(|err| {
        tracing::info!("Rejected update for product {}: {}", id, err.message());
    })?;
    let product = state.store.update(id, changes).await?;

    tracing::info!("Successfully updated product with id: {}", id);
    Ok((
        StatusCode::OK,
        Json(ProductResponse::new("Product updated successfully", product)),
    ))
}
