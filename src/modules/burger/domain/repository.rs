use crate::modules::burger::domain::entities::{Burger, BurgerChanges, NewBurger};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Persistence for burgers and their topping relations. Reads return burgers
/// with toppings resolved; every write is a single atomic unit of work.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BurgerRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Burger>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Burger>>;

    /// Insert the burger plus a relation for each topping id that exists.
    async fn create(&self, burger: &NewBurger) -> AppResult<Burger>;

    async fn update(&self, id: i32, changes: &BurgerChanges) -> AppResult<Burger>;

    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Attach a topping. `NotFound` when either side is missing; returns
    /// `false` when the relation already existed.
    async fn add_topping(&self, burger_id: i32, topping_id: i32) -> AppResult<bool>;

    /// Detach a topping. `NotFound` when no such relation exists.
    async fn remove_topping(&self, burger_id: i32, topping_id: i32) -> AppResult<()>;

    async fn count(&self) -> AppResult<i64>;
}
