//! Process-local table set used when no database is configured.
//!
//! All three tables sit behind one lock, so every repository call that takes
//! the write guard is a single atomic unit of work, and a parent delete clears
//! its relation rows under the same guard. Ids are handed out like a SERIAL
//! column: monotonically, never reused.
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Clone, PartialEq)]
pub struct ToppingRow {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BurgerRow {
    pub id: i32,
    pub name: String,
    pub base_price: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BurgerToppingRow {
    pub burger_id: i32,
    pub topping_id: i32,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct Tables {
    toppings: BTreeMap<i32, ToppingRow>,
    burgers: BTreeMap<i32, BurgerRow>,
    // Kept in insertion order
    burger_toppings: Vec<BurgerToppingRow>,
    last_topping_id: i32,
    last_burger_id: i32,
}

impl Tables {
    pub fn toppings(&self) -> impl Iterator<Item = &ToppingRow> {
        self.toppings.values()
    }

    pub fn topping(&self, id: i32) -> Option<&ToppingRow> {
        self.toppings.get(&id)
    }

    pub fn topping_mut(&mut self, id: i32) -> Option<&mut ToppingRow> {
        self.toppings.get_mut(&id)
    }

    pub fn insert_topping(&mut self, name: String, price: Decimal, active: bool) -> ToppingRow {
        self.last_topping_id += 1;
        let row = ToppingRow {
            id: self.last_topping_id,
            name,
            price,
            active,
        };
        self.toppings.insert(row.id, row.clone());
        row
    }

    /// Removes the topping and every relation row pointing at it.
    pub fn delete_topping(&mut self, id: i32) -> bool {
        if self.toppings.remove(&id).is_none() {
            return false;
        }
        self.burger_toppings.retain(|row| row.topping_id != id);
        true
    }

    pub fn burgers(&self) -> impl Iterator<Item = &BurgerRow> {
        self.burgers.values()
    }

    pub fn burger(&self, id: i32) -> Option<&BurgerRow> {
        self.burgers.get(&id)
    }

    pub fn burger_mut(&mut self, id: i32) -> Option<&mut BurgerRow> {
        self.burgers.get_mut(&id)
    }

    pub fn insert_burger(&mut self, name: String, base_price: Decimal) -> BurgerRow {
        self.last_burger_id += 1;
        let row = BurgerRow {
            id: self.last_burger_id,
            name,
            base_price,
        };
        self.burgers.insert(row.id, row.clone());
        row
    }

    /// Removes the burger and every relation row pointing at it.
    pub fn delete_burger(&mut self, id: i32) -> bool {
        if self.burgers.remove(&id).is_none() {
            return false;
        }
        self.burger_toppings.retain(|row| row.burger_id != id);
        true
    }

    pub fn relations_for(&self, burger_id: i32) -> impl Iterator<Item = &BurgerToppingRow> {
        self.burger_toppings
            .iter()
            .filter(move |row| row.burger_id == burger_id)
    }

    /// Inserts the relation unless it already exists. Both parents must exist;
    /// returns `None` when either is missing, otherwise whether a row was added.
    pub fn attach(&mut self, burger_id: i32, topping_id: i32) -> Option<bool> {
        if !self.burgers.contains_key(&burger_id) || !self.toppings.contains_key(&topping_id) {
            return None;
        }

        let exists = self
            .burger_toppings
            .iter()
            .any(|row| row.burger_id == burger_id && row.topping_id == topping_id);
        if exists {
            return Some(false);
        }

        self.burger_toppings.push(BurgerToppingRow {
            burger_id,
            topping_id,
            added_at: Utc::now(),
        });
        Some(true)
    }

    pub fn detach(&mut self, burger_id: i32, topping_id: i32) -> bool {
        let before = self.burger_toppings.len();
        self.burger_toppings
            .retain(|row| !(row.burger_id == burger_id && row.topping_id == topping_id));
        self.burger_toppings.len() < before
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}
