//! Wire DTOs for the storefront REST API.
//!
//! DESIGN
//! ======
//! Response types default every field so a body that omits `success` decodes
//! as an explicit failure instead of a decode error. Numeric fields accept
//! either JSON numbers or numeric strings because the backend serializes
//! database decimals inconsistently.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Product identifier as used by the catalog and the cart.
pub type ProductId = u64;

/// A product as listed by `GET /api/products`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "deserialize_u64_from_scalar")]
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Image URL; the backend names this column `image_url`.
    #[serde(default, alias = "image_url", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A price as the server sent it.
///
/// The backend serializes `DECIMAL(10,2)` columns as strings (`"10.00"`), so
/// the original text is kept for display next to the parsed value.
#[derive(Clone, Debug, PartialEq)]
pub struct Price {
    value: f64,
    text: String,
}

impl Price {
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The amount exactly as received, e.g. `10.00` or `249.5`.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Serialize for Price {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match &value {
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(|value| Self { value, text: n.to_string() })
                .ok_or_else(|| D::Error::custom(format!("expected number, got {n}"))),
            serde_json::Value::String(s) => {
                let text = s.trim();
                text.parse()
                    .map(|value| Self { value, text: text.to_owned() })
                    .map_err(|_| D::Error::custom(format!("expected numeric string, got {s:?}")))
            }
            other => Err(D::Error::custom(format!("expected number, got {other}"))),
        }
    }
}

/// The signed-in user's profile as returned by login and persisted locally.
///
/// Only the display-relevant fields are typed; anything else the server sends
/// is preserved in `extra` so the stored record round-trips unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "deserialize_opt_string_from_scalar", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Profile {
    /// Name shown in the page header: full name, else the email local part.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.full_name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            return name.to_owned();
        }
        self.email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .map(str::trim)
            .filter(|local| !local.is_empty())
            .map_or_else(|| "Guest".to_owned(), str::to_owned)
    }
}

/// Body of `GET /api/products`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response to `POST /api/auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<Profile>,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
}

/// Response to `POST /api/auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

fn deserialize_u64_from_scalar<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match &value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| D::Error::custom(format!("expected unsigned integer, got {n}"))),
        serde_json::Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected integer string, got {s:?}"))),
        other => Err(D::Error::custom(format!("expected integer, got {other}"))),
    }
}

fn deserialize_opt_string_from_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected string or number, got {other}"))),
    }
}
