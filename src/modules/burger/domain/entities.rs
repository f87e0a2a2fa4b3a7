use rust_decimal::Decimal;

use super::pricing::PriceCalculator;
use crate::modules::topping::Topping;

/// A burger with its attached toppings resolved, in attachment order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Burger {
    pub id: i32,
    pub name: String,
    pub base_price: Decimal,
    pub toppings: Vec<Topping>,
}

impl Burger {
    pub fn calculated_price(&self) -> Decimal {
        PriceCalculator::calculate(self.base_price, &self.toppings)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBurger {
    pub name: String,
    pub base_price: Decimal,
    /// Distinct, in request order. Ids that do not resolve are skipped.
    pub topping_ids: Vec<i32>,
}

impl NewBurger {
    pub fn new(name: impl Into<String>, base_price: Decimal) -> Self {
        Self {
            name: name.into(),
            base_price,
            topping_ids: Vec::new(),
        }
    }

    pub fn with_toppings(mut self, topping_ids: impl IntoIterator<Item = i32>) -> Self {
        for id in topping_ids {
            if !self.topping_ids.contains(&id) {
                self.topping_ids.push(id);
            }
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurgerChanges {
    pub name: String,
    pub base_price: Decimal,
}
