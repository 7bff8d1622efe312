use crate::error::{ApiError, ErrorResponse};
use crate::models::Product;
use crate::routes;
use crate::state::AppState;
use crate::validation::parse_product_id;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /products/{id} handler - Retrieve a single product
///
/// A path id that is not a number can never match a record, so it is
/// reported as not found rather than as a bad request.
#[utoipa::path(
    get,
    path = routes::PRODUCT_ITEM,
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Some(id) = parse_product_id(&id_str).number() else {
        return Err(ApiError::NotFound(id_str));
    };

    let product = state.store.get(id).await?;

    tracing::info!("Successfully retrieved product with id: {}", id);
    Ok((StatusCode::OK, Json(product)))
}
