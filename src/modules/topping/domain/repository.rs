/// Repository trait for topping persistence
///
/// Every mutating call is one atomic unit of work. Missing ids surface as
/// `AppError::NotFound`.
use crate::modules::topping::domain::entities::{NewTopping, Topping, ToppingChanges};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ToppingRepository: Send + Sync {
    /// All toppings ordered by id; `active_only` drops inactive ones
    async fn find_all(&self, active_only: bool) -> AppResult<Vec<Topping>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Topping>>;

    async fn create(&self, topping: &NewTopping) -> AppResult<Topping>;

    async fn update(&self, id: i32, changes: &ToppingChanges) -> AppResult<Topping>;

    /// Delete the topping and, by cascade, every relation row referencing it
    async fn delete(&self, id: i32) -> AppResult<()>;

    async fn count(&self) -> AppResult<i64>;
}
