use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use super::models::{NewToppingModel, ToppingChangeset, ToppingModel};
use crate::modules::topping::domain::{NewTopping, Topping, ToppingChanges, ToppingRepository};
use crate::schema::toppings;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::Database;
use crate::shared::utils::logger::TimedOperation;

pub struct ToppingRepositoryImpl {
    db: Arc<Database>,
}

impl ToppingRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ToppingRepository for ToppingRepositoryImpl {
    async fn find_all(&self, active_only: bool) -> AppResult<Vec<Topping>> {
        let timer = TimedOperation::new("find_all", "toppings");

        let rows = self
            .db
            .transaction(move |conn| {
                let mut query = toppings::table
                    .select(ToppingModel::as_select())
                    .order(toppings::id.asc())
                    .into_boxed();
                if active_only {
                    query = query.filter(toppings::active.eq(true));
                }
                Ok(query.load::<ToppingModel>(conn)?)
            })
            .await?;

        timer.finish();
        Ok(rows.into_iter().map(Topping::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Topping>> {
        let row = self
            .db
            .transaction(move |conn| {
                Ok(toppings::table
                    .find(id)
                    .select(ToppingModel::as_select())
                    .first::<ToppingModel>(conn)
                    .optional()?)
            })
            .await?;

        Ok(row.map(Topping::from))
    }

    async fn create(&self, topping: &NewTopping) -> AppResult<Topping> {
        let new_row = NewToppingModel::from(topping);
        let timer = TimedOperation::new("insert", "toppings");

        let row = self
            .db
            .transaction(move |conn| {
                Ok(diesel::insert_into(toppings::table)
                    .values(&new_row)
                    .returning(ToppingModel::as_returning())
                    .get_result::<ToppingModel>(conn)?)
            })
            .await?;

        timer.finish();
        Ok(row.into())
    }

    async fn update(&self, id: i32, changes: &ToppingChanges) -> AppResult<Topping> {
        let changeset = ToppingChangeset::from(changes);

        let row = self
            .db
            .transaction(move |conn| {
                diesel::update(toppings::table.find(id))
                    .set(&changeset)
                    .returning(ToppingModel::as_returning())
                    .get_result::<ToppingModel>(conn)
                    .optional()?
                    .ok_or_else(|| AppError::NotFound(format!("Topping with ID {} not found", id)))
            })
            .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        // burger_toppings rows go with it through ON DELETE CASCADE
        let deleted = self
            .db
            .transaction(move |conn| {
                Ok(diesel::delete(toppings::table.find(id)).execute(conn)?)
            })
            .await?;

        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "Topping with ID {} not found",
                id
            )));
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        self.db
            .transaction(|conn| Ok(toppings::table.count().get_result(conn)?))
            .await
    }
}
