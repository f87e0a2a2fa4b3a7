use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::topping::domain::Topping;

// Required fields are still optional here, so a missing key or an explicit
// null is reported per field by validation instead of failing the whole body.

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateToppingRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateToppingRequest {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListToppingsQuery {
    #[serde(default)]
    pub active_only: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToppingResponse {
    pub id: i32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub active: bool,
}

impl From<Topping> for ToppingResponse {
    fn from(topping: Topping) -> Self {
        Self {
            id: topping.id,
            name: topping.name,
            price: topping.price,
            active: topping.active,
        }
    }
}
