use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::burger::domain::{Burger, BurgerChanges, BurgerRepository, NewBurger};
use crate::modules::topping::Topping;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::memory_store::{BurgerRow, Tables};
use crate::shared::infrastructure::MemoryStore;

pub struct InMemoryBurgerRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryBurgerRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

fn view(tables: &Tables, row: &BurgerRow) -> Burger {
    let toppings = tables
        .relations_for(row.id)
        .filter_map(|relation| tables.topping(relation.topping_id))
        .map(Topping::from)
        .collect();

    Burger {
        id: row.id,
        name: row.name.clone(),
        base_price: row.base_price,
        toppings,
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Burger with ID {} not found", id))
}

#[async_trait]
impl BurgerRepository for InMemoryBurgerRepository {
    async fn find_all(&self) -> AppResult<Vec<Burger>> {
        let tables = self.store.read().await;
        Ok(tables.burgers().map(|row| view(&tables, row)).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Burger>> {
        let tables = self.store.read().await;
        Ok(tables.burger(id).map(|row| view(&tables, row)))
    }

    async fn create(&self, burger: &NewBurger) -> AppResult<Burger> {
        let mut tables = self.store.write().await;
        let row = tables.insert_burger(burger.name.clone(), burger.base_price);

        for topping_id in &burger.topping_ids {
            // Unknown ids come back as None and are skipped
            tables.attach(row.id, *topping_id);
        }

        Ok(view(&tables, &row))
    }

    async fn update(&self, id: i32, changes: &BurgerChanges) -> AppResult<Burger> {
        let mut tables = self.store.write().await;
        let row = tables.burger_mut(id).ok_or_else(|| not_found(id))?;
        row.name = changes.name.clone();
        row.base_price = changes.base_price;

        let row = row.clone();
        Ok(view(&tables, &row))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tables = self.store.write().await;
        if !tables.delete_burger(id) {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn add_topping(&self, burger_id: i32, topping_id: i32) -> AppResult<bool> {
        let mut tables = self.store.write().await;
        tables.attach(burger_id, topping_id).ok_or_else(|| {
            AppError::NotFound(format!(
                "Burger {} or topping {} not found",
                burger_id, topping_id
            ))
        })
    }

    async fn remove_topping(&self, burger_id: i32, topping_id: i32) -> AppResult<()> {
        let mut tables = self.store.write().await;
        if !tables.detach(burger_id, topping_id) {
            return Err(AppError::NotFound(format!(
                "Topping {} is not attached to burger {}",
                topping_id, burger_id
            )));
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        let tables = self.store.read().await;
        Ok(tables.burgers().count() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::topping::{InMemoryToppingRepository, NewTopping, ToppingRepository};
    use futures::future::join_all;
    use rust_decimal::Decimal;
    use tokio_test::{assert_err, assert_ok};

    async fn fixture() -> (Arc<MemoryStore>, InMemoryBurgerRepository) {
        let store = Arc::new(MemoryStore::new());
        let toppings = InMemoryToppingRepository::new(Arc::clone(&store));
        toppings
            .create(&NewTopping::new("Bacon", Decimal::new(400, 2)))
            .await
            .unwrap();
        toppings
            .create(&NewTopping::new("Queijo", Decimal::new(300, 2)))
            .await
            .unwrap();

        let burgers = InMemoryBurgerRepository::new(Arc::clone(&store));
        (store, burgers)
    }

    #[tokio::test]
    async fn create_skips_unknown_toppings_and_keeps_order() {
        let (_, repo) = fixture().await;
        let burger = repo
            .create(&NewBurger::new("Duplo", Decimal::new(1500, 2)).with_toppings([2, 99, 1]))
            .await
            .unwrap();

        let ids: Vec<i32> = burger.toppings.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(burger.calculated_price(), Decimal::new(2200, 2));
    }

    #[tokio::test]
    async fn deleting_topping_lowers_calculated_price() {
        let (store, repo) = fixture().await;
        repo.create(&NewBurger::new("Duplo", Decimal::new(1500, 2)).with_toppings([1]))
            .await
            .unwrap();

        InMemoryToppingRepository::new(store).delete(1).await.unwrap();

        let burger = repo.find_by_id(1).await.unwrap().unwrap();
        assert!(burger.toppings.is_empty());
        assert_eq!(burger.calculated_price(), Decimal::new(1500, 2));
    }

    #[tokio::test]
    async fn concurrent_attach_creates_one_relation() {
        let (store, repo) = fixture().await;
        repo.create(&NewBurger::new("Duplo", Decimal::new(1500, 2)))
            .await
            .unwrap();
        let repo = Arc::new(repo);

        let results = join_all((0..16).map(|_| {
            let repo = Arc::clone(&repo);
            async move { repo.add_topping(1, 1).await }
        }))
        .await;

        let inserted = results
            .into_iter()
            .map(|r| r.unwrap())
            .filter(|inserted| *inserted)
            .count();
        assert_eq!(inserted, 1);
        assert_eq!(store.read().await.relations_for(1).count(), 1);
    }

    #[tokio::test]
    async fn attach_to_missing_side_is_not_found() {
        let (_, repo) = fixture().await;
        repo.create(&NewBurger::new("Duplo", Decimal::new(1500, 2)))
            .await
            .unwrap();

        assert!(matches!(repo.add_topping(1, 999).await, Err(AppError::NotFound(_))));
        assert!(matches!(repo.add_topping(7, 1).await, Err(AppError::NotFound(_))));
        assert!(repo.find_by_id(1).await.unwrap().unwrap().toppings.is_empty());
    }

    #[tokio::test]
    async fn detach_twice_is_not_found() {
        let (_, repo) = fixture().await;
        repo.create(&NewBurger::new("Duplo", Decimal::new(1500, 2)).with_toppings([1]))
            .await
            .unwrap();

        assert_ok!(repo.remove_topping(1, 1).await);
        for _ in 0..2 {
            let err = assert_err!(repo.remove_topping(1, 1).await);
            assert!(matches!(err, AppError::NotFound(_)));
        }
    }
}
