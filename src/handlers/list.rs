use crate::models::Product;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /products handler - List every product in insertion order
#[utoipa::path(
    get,
    path = routes::PRODUCTS,
    responses(
        (status = 200, description = "All products", body = [Product])
    ),
    tag = "products"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<Product>>) {
    let products = state.store.list().await;
    tracing::info!("Listed {} products", products.len());
    (StatusCode::OK, Json(products))
}
