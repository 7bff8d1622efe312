//! Input validation for product requests.
//!
//! Creation and update use different rules on purpose: creation only rejects
//! missing or zero-valued fields, while updates demand a positive price and a
//! positive integer quantity. Negative values therefore pass on create.

use axum::http::{header::CONTENT_TYPE, HeaderMap};
use serde_json::Value as JsonValue;

use crate::error::ApiError;
use crate::models::{CreateProductRequest, Product, ProductChanges};

/// Outcome of parsing a path id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathId {
    Number(i64),
    /// Numeric, but too large for any stored id to match
    OutOfRange,
    NotANumber,
}

impl PathId {
    pub fn number(self) -> Option<i64> {
        match self {
            PathId::Number(id) => Some(id),
            PathId::OutOfRange | PathId::NotANumber => None,
        }
    }
}

/// Parses a path id the way integer-prefix parsing does: leading whitespace,
/// an optional sign, an optional `0x` prefix for hex, then at least one
/// digit. Anything after the digits is ignored, so `"12abc"` is 12, `"1.5"`
/// is 1 and `"0x1A"` is 26.
pub fn parse_product_id(raw: &str) -> PathId {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits_end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return PathId::NotANumber;
    }

    let digits = &rest[..digits_end];
    let signed = if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    };
    match i64::from_str_radix(&signed, radix) {
        Ok(id) => PathId::Number(id),
        Err(_) => PathId::OutOfRange,
    }
}

/// Reads an optional JSON request body. A body sent without a JSON content
/// type, or an empty one, reads as `{}`. Malformed JSON is a 400.
pub fn parse_json_body(headers: &HeaderMap, body: &[u8]) -> Result<JsonValue, ApiError> {
    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false);

    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(JsonValue::Object(Default::default()));
    }

    Ok(serde_json::from_slice(body)?)
}

/// Checks a create request. A field that is absent, `null`, zero or an empty
/// string counts as missing.
pub fn validate_new_product(request: CreateProductRequest) -> Result<Product, ApiError> {
    let CreateProductRequest {
        id,
        name,
        price,
        quantity,
    } = request;

    match (
        id.filter(|id| *id != 0),
        name.filter(|name| !name.is_empty()),
        price.filter(|price| *price != 0.0),
        quantity.filter(|quantity| *quantity != 0),
    ) {
        (Some(id), Some(name), Some(price), Some(quantity)) => Ok(Product {
            id,
            name,
            price,
            quantity,
        }),
        _ => Err(ApiError::validation("All fields are required")),
    }
}

/// Checks a partial update body. Only keys that are present are validated;
/// `null` counts as present. Nothing is returned unless every supplied field
/// is valid.
pub fn validate_changes(body: &JsonValue) -> Result<ProductChanges, ApiError> {
    let mut changes = ProductChanges::default();
    let Some(fields) = body.as_object() else {
        return Ok(changes);
    };

    if let Some(name) = fields.get("name") {
        let name = name
            .as_str()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ApiError::validation("Name must be a non-empty string"))?;
        changes.name = Some(name.to_string());
    }

    if let Some(price) = fields.get("price") {
        let price = price
            .as_f64()
            .filter(|price| *price > 0.0)
            .ok_or_else(|| ApiError::validation("Price must be a positive number"))?;
        changes.price = Some(price);
    }

    if let Some(quantity) = fields.get("quantity") {
        let quantity = positive_integer(quantity)
            .ok_or_else(|| ApiError::validation("Quantity must be a positive integer"))?;
        changes.quantity = Some(quantity);
    }

    Ok(changes)
}

// Integral floats such as 45.0 are accepted as integers.
fn positive_integer(value: &JsonValue) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return (n > 0).then_some(n);
    }
    let f = value.as_f64()?;
    (f > 0.0 && f.fract() == 0.0 && f < i64::MAX as f64).then_some(f as i64)
}
