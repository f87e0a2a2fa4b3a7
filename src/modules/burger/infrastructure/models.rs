use crate::modules::burger::domain::{BurgerChanges, NewBurger};
use crate::schema::{burger_toppings, burgers};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;

// ============= BURGER MODELS =============

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = burgers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BurgerModel {
    pub id: i32,
    pub name: String,
    pub base_price: Decimal,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = burgers)]
pub struct NewBurgerModel {
    pub name: String,
    pub base_price: Decimal,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = burgers)]
pub struct BurgerChangeset {
    pub name: String,
    pub base_price: Decimal,
}

// ============= BURGER-TOPPING ASSOCIATION =============

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(BurgerModel, foreign_key = burger_id))]
#[diesel(table_name = burger_toppings)]
#[diesel(primary_key(burger_id, topping_id))]
pub struct BurgerToppingModel {
    pub burger_id: i32,
    pub topping_id: i32,
    pub added_at: DateTime<Utc>,
}

// added_at comes from the column default
#[derive(Insertable, Debug, Clone, Copy)]
#[diesel(table_name = burger_toppings)]
pub struct NewBurgerToppingModel {
    pub burger_id: i32,
    pub topping_id: i32,
}

impl From<&NewBurger> for NewBurgerModel {
    fn from(burger: &NewBurger) -> Self {
        Self {
            name: burger.name.clone(),
            base_price: burger.base_price,
        }
    }
}

impl From<&BurgerChanges> for BurgerChangeset {
    fn from(changes: &BurgerChanges) -> Self {
        Self {
            name: changes.name.clone(),
            base_price: changes.base_price,
        }
    }
}
