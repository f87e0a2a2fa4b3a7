use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::topping::domain::{NewTopping, Topping, ToppingChanges, ToppingRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::memory_store::ToppingRow;
use crate::shared::infrastructure::MemoryStore;

pub struct InMemoryToppingRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryToppingRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

impl From<&ToppingRow> for Topping {
    fn from(row: &ToppingRow) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
            price: row.price,
            active: row.active,
        }
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Topping with ID {} not found", id))
}

#[async_trait]
impl ToppingRepository for InMemoryToppingRepository {
    async fn find_all(&self, active_only: bool) -> AppResult<Vec<Topping>> {
        let tables = self.store.read().await;
        Ok(tables
            .toppings()
            .filter(|row| !active_only || row.active)
            .map(Topping::from)
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Topping>> {
        let tables = self.store.read().await;
        Ok(tables.topping(id).map(Topping::from))
    }

    async fn create(&self, topping: &NewTopping) -> AppResult<Topping> {
        let mut tables = self.store.write().await;
        let row = tables.insert_topping(topping.name.clone(), topping.price, topping.active);
        Ok(Topping::from(&row))
    }

    async fn update(&self, id: i32, changes: &ToppingChanges) -> AppResult<Topping> {
        let mut tables = self.store.write().await;
        let row = tables.topping_mut(id).ok_or_else(|| not_found(id))?;

        let mut topping = Topping::from(&*row);
        topping.apply(changes);
        row.name = topping.name.clone();
        row.price = topping.price;
        row.active = topping.active;

        Ok(topping)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tables = self.store.write().await;
        if !tables.delete_topping(id) {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        let tables = self.store.read().await;
        Ok(tables.toppings().count() as i64)
    }
}
