use crate::error::{ApiError, ErrorResponse};
use crate::models::ProductResponse;
use crate::routes;
use crate::state::AppState;
use crate::validation::parse_product_id;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// DELETE /products/{id} handler - Remove a product and return it
#[utoipa::path(
    delete,
    path = routes::PRODUCT_ITEM,
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deleted", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    // Non-numeric ids cannot match anything
    let id = parse_product_id(&id_str).number().ok_or(ApiError::NotFound(id_str))?;

    let product = state.store.remove(id).await?;

    tracing::info!("Deleted product with id: {}", id);
    Ok((
        StatusCode::OK,
        Json(ProductResponse::new("Product deleted", product)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use crate::routes::test_support::*;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_delete_endpoint_success() {
        let (app, _) = seeded_app();

        let response = app
            .clone()
            .oneshot(empty_request("DELETE", "/products/2"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let response_json: ProductResponse = read_json(response).await;
        assert_eq!(response_json.message, "Product deleted");
        assert_eq!(response_json.product, Product::new(2, "Mouse", 500.0, 50));

        let response = app
            .oneshot(empty_request("GET", "/products"))
            .await
            .unwrap();
        let products: Vec<Product> = read_json(response).await;
        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let (app, _) = seeded_app();

        let first = app
            .clone()
            .oneshot(empty_request("DELETE", "/products/1"))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = app
            .oneshot(empty_request("DELETE", "/products/1"))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::NOT_FOUND);

        let error_response: ErrorResponse = read_json(second).await;
        assert_eq!(error_response.message, "Product not found");
    }

    #[tokio::test]
    async fn test_create_delete_then_get_is_not_found() {
        let (app, _) = seeded_app();

        let created = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/products",
                json!({"id": 30, "name": "Headset", "price": 4200, "quantity": 6}),
            ))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);

        let deleted = app
            .clone()
            .oneshot(empty_request("DELETE", "/products/30"))
            .await
            .unwrap();
        assert_eq!(deleted.status(), StatusCode::OK);

        let fetched = app
            .oneshot(empty_request("GET", "/products/30"))
            .await
            .unwrap();
        assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_non_numeric_id() {
        let (app, store) = seeded_app();

        let response = app
            .oneshot(empty_request("DELETE", "/products/mouse"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(store.len().await, 3);
    }
}
