use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::burger::domain::Burger;
use crate::modules::topping::application::ToppingResponse;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBurgerRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub base_price: Option<Decimal>,
    #[serde(default)]
    pub topping_ids: Option<Vec<i32>>,
}

/// Name and base price only; relations are managed through the attach and
/// detach routes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBurgerRequest {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub base_price: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurgerResponse {
    pub id: i32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub calculated_price: Decimal,
    pub toppings: Vec<ToppingResponse>,
}

impl From<Burger> for BurgerResponse {
    fn from(burger: Burger) -> Self {
        let calculated_price = burger.calculated_price();
        Self {
            id: burger.id,
            name: burger.name,
            base_price: burger.base_price,
            calculated_price,
            toppings: burger
                .toppings
                .into_iter()
                .map(ToppingResponse::from)
                .collect(),
        }
    }
}
