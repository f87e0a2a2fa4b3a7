use crate::modules::topping::domain::{NewTopping, Topping, ToppingChanges};
use crate::schema::toppings;
use diesel::prelude::*;
use rust_decimal::Decimal;

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = toppings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ToppingModel {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub active: bool,
}

// For inserting new toppings
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = toppings)]
pub struct NewToppingModel {
    pub name: String,
    pub price: Decimal,
    pub active: bool,
}

// For updating existing toppings; a `None` flag leaves the column alone
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = toppings)]
pub struct ToppingChangeset {
    pub name: String,
    pub price: Decimal,
    pub active: Option<bool>,
}

impl From<ToppingModel> for Topping {
    fn from(model: ToppingModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            active: model.active,
        }
    }
}

impl From<&NewTopping> for NewToppingModel {
    fn from(topping: &NewTopping) -> Self {
        Self {
            name: topping.name.clone(),
            price: topping.price,
            active: topping.active,
        }
    }
}

impl From<&ToppingChanges> for ToppingChangeset {
    fn from(changes: &ToppingChanges) -> Self {
        Self {
            name: changes.name.clone(),
            price: changes.price,
            active: changes.active,
        }
    }
}
