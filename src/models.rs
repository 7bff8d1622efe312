use serde::{Deserialize, Serialize, Serializer};

/// A single product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(serialize_with = "serialize_price")]
    #[schema(example = 500)]
    pub price: f64,
    pub quantity: i64,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }
}

/// Whole-number prices go out as JSON integers (`500`, not `500.0`)
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

/// Request body for POST /products
///
/// Every field is optional at the wire level so that a missing field is
/// reported as a validation failure rather than a deserialization error.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateProductRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

/// Request body for PUT /products/{id} (documentation only; the handler
/// inspects the raw JSON so it can tell `null` apart from an absent field)
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

/// Validated partial update
#[derive(Debug, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl ProductChanges {
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
    }
}

/// Response type for create, update and delete operations
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProductResponse {
    pub message: String,
    pub product: Product,
}

impl ProductResponse {
    pub fn new(message: &str, product: Product) -> Self {
        Self {
            message: message.to_string(),
            product,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_whole_price_serializes_as_integer() {
        let product = Product::new(2, "Mouse", 500.0, 50);
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            json!({"id": 2, "name": "Mouse", "price": 500, "quantity": 50})
        );
    }

    #[test]
    fn test_fractional_price_keeps_fraction() {
        let product = Product::new(9, "Cable", 19.99, 3);
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["price"], json!(19.99));
    }

    #[test]
    fn test_changes_only_touch_supplied_fields() {
        let mut product = Product::new(2, "Mouse", 500.0, 50);
        ProductChanges {
            quantity: Some(45),
            ..Default::default()
        }
        .apply_to(&mut product);

        assert_eq!(product, Product::new(2, "Mouse", 500.0, 45));
    }
}
