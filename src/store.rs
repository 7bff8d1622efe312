use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ApiError;
use crate::models::{Product, ProductChanges};

/// Shareable in-memory product collection for use across async handlers
///
/// Records are kept in insertion order. Lookups are a linear scan by `id`,
/// which is fine for a catalog of this size. Each operation takes the lock
/// once and finishes its read-modify-write before releasing it.
#[derive(Clone, Default)]
pub struct ProductStore {
    inner: Arc<RwLock<Vec<Product>>>,
}

impl ProductStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the three startup records
    pub fn seeded() -> Self {
        Self::with_products(vec![
            Product::new(1, "Laptop", 50000.0, 5),
            Product::new(2, "Mouse", 500.0, 50),
            Product::new(3, "Keyboard", 1200.0, 20),
        ])
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(products)),
        }
    }

    /// All products in insertion order
    pub async fn list(&self) -> Vec<Product> {
        self.inner.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Fetch a single product by id
    ///
    /// # Errors
    /// Returns `ApiError::NotFound` if no product has this id
    pub async fn get(&self, id: i64) -> Result<Product, ApiError> {
        self.inner
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    /// Append a product to the end of the collection
    ///
    /// # Errors
    /// Returns `ApiError::Conflict` if the id is already taken; the existing
    /// record is left untouched
    pub async fn insert(&self, product: Product) -> Result<Product, ApiError> {
        let mut products = self.inner.write().await;
        if products.iter().any(|p| p.id == product.id) {
            return Err(ApiError::Conflict(product.id));
        }
        products.push(product.clone());
        Ok(product)
    }

    /// Apply already-validated changes to the product with this id
    ///
    /// # Errors
    /// Returns `ApiError::NotFound` if no product has this id
    pub async fn update(&self, id: i64, changes: ProductChanges) -> Result<Product, ApiError> {
        let mut products = self.inner.write().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
        changes.apply_to(product);
        Ok(product.clone())
    }

    /// Check that a product exists without cloning it
    pub async fn contains(&self, id: i64) -> bool {
        self.inner.read().await.iter().any(|p| p.id == id)
    }

    /// Remove the product with this id and return it
    ///
    /// Survivors keep their relative order.
    ///
    /// # Errors
    /// Returns `ApiError::NotFound` if no product has this id
    pub async fn remove(&self, id: i64) -> Result<Product, ApiError> {
        let mut products = self.inner.write().await;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
        Ok(products.remove(index))
    }
}
