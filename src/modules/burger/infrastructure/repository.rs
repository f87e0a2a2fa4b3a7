use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::dsl::{exists, select};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use super::models::{
    BurgerChangeset, BurgerModel, BurgerToppingModel, NewBurgerModel, NewBurgerToppingModel,
};
use crate::modules::burger::domain::{Burger, BurgerChanges, BurgerRepository, NewBurger};
use crate::modules::topping::infrastructure::models::ToppingModel;
use crate::modules::topping::Topping;
use crate::schema::{burger_toppings, burgers, toppings};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::Database;
use crate::shared::utils::logger::TimedOperation;

pub struct BurgerRepositoryImpl {
    db: Arc<Database>,
}

impl BurgerRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    // Resolve toppings for a batch of burgers with one join, keeping the
    // burgers' order and each burger's attachment order.
    fn load_views(conn: &mut PgConnection, rows: Vec<BurgerModel>) -> AppResult<Vec<Burger>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let relations: Vec<(BurgerToppingModel, ToppingModel)> =
            BurgerToppingModel::belonging_to(&rows)
                .inner_join(toppings::table)
                .order((
                    burger_toppings::added_at.asc(),
                    burger_toppings::topping_id.asc(),
                ))
                .select((BurgerToppingModel::as_select(), ToppingModel::as_select()))
                .load(conn)?;

        let mut by_burger: HashMap<i32, Vec<Topping>> = HashMap::new();
        for (relation, topping) in relations {
            by_burger
                .entry(relation.burger_id)
                .or_default()
                .push(topping.into());
        }

        Ok(rows
            .into_iter()
            .map(|row| Burger {
                toppings: by_burger.remove(&row.id).unwrap_or_default(),
                id: row.id,
                name: row.name,
                base_price: row.base_price,
            })
            .collect())
    }

    // Insert inside a savepoint so a foreign-key failure leaves the enclosing
    // transaction usable. `None` means the burger or topping row is missing,
    // otherwise whether a new row was written.
    fn insert_relation(
        conn: &mut PgConnection,
        burger_id: i32,
        topping_id: i32,
    ) -> AppResult<Option<bool>> {
        let inserted = conn.transaction::<usize, DieselError, _>(|conn| {
            diesel::insert_into(burger_toppings::table)
                .values(NewBurgerToppingModel {
                    burger_id,
                    topping_id,
                })
                .on_conflict((burger_toppings::burger_id, burger_toppings::topping_id))
                .do_nothing()
                .execute(conn)
        });

        match inserted {
            Ok(rows) => Ok(Some(rows > 0)),
            Err(DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn load_view(conn: &mut PgConnection, row: BurgerModel) -> AppResult<Burger> {
        Self::load_views(conn, vec![row])?
            .pop()
            .ok_or_else(|| AppError::InternalError("Failed to resolve burger view".into()))
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Burger with ID {} not found", id))
}

#[async_trait]
impl BurgerRepository for BurgerRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Burger>> {
        let timer = TimedOperation::new("find_all", "burgers");

        let burgers = self
            .db
            .transaction(|conn| {
                let rows = burgers::table
                    .select(BurgerModel::as_select())
                    .order(burgers::id.asc())
                    .load::<BurgerModel>(conn)?;
                Self::load_views(conn, rows)
            })
            .await?;

        timer.finish();
        Ok(burgers)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Burger>> {
        self.db
            .transaction(move |conn| {
                let row = burgers::table
                    .find(id)
                    .select(BurgerModel::as_select())
                    .first::<BurgerModel>(conn)
                    .optional()?;
                row.map(|row| Self::load_view(conn, row)).transpose()
            })
            .await
    }

    async fn create(&self, burger: &NewBurger) -> AppResult<Burger> {
        let new_row = NewBurgerModel::from(burger);
        let topping_ids = burger.topping_ids.clone();
        let timer = TimedOperation::new("insert", "burgers");

        let created = self
            .db
            .transaction(move |conn| {
                let row = diesel::insert_into(burgers::table)
                    .values(&new_row)
                    .returning(BurgerModel::as_returning())
                    .get_result::<BurgerModel>(conn)?;

                // One statement per relation so added_at follows request order.
                // Ids without a topping row are skipped.
                for topping_id in &topping_ids {
                    Self::insert_relation(conn, row.id, *topping_id)?;
                }

                Self::load_view(conn, row)
            })
            .await?;

        timer.finish();
        Ok(created)
    }

    async fn update(&self, id: i32, changes: &BurgerChanges) -> AppResult<Burger> {
        let changeset = BurgerChangeset::from(changes);

        self.db
            .transaction(move |conn| {
                let row = diesel::update(burgers::table.find(id))
                    .set(&changeset)
                    .returning(BurgerModel::as_returning())
                    .get_result::<BurgerModel>(conn)
                    .optional()?
                    .ok_or_else(|| not_found(id))?;
                Self::load_view(conn, row)
            })
            .await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        // Relation rows are removed by ON DELETE CASCADE
        let deleted = self
            .db
            .transaction(move |conn| Ok(diesel::delete(burgers::table.find(id)).execute(conn)?))
            .await?;

        if deleted == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn add_topping(&self, burger_id: i32, topping_id: i32) -> AppResult<bool> {
        self.db
            .transaction(move |conn| {
                let burger_exists: bool =
                    select(exists(burgers::table.find(burger_id))).get_result(conn)?;
                if !burger_exists {
                    return Err(not_found(burger_id));
                }

                let topping_exists: bool =
                    select(exists(toppings::table.find(topping_id))).get_result(conn)?;
                if !topping_exists {
                    return Err(AppError::NotFound(format!(
                        "Topping with ID {} not found",
                        topping_id
                    )));
                }

                // None when a parent vanished between the existence check and the insert
                Self::insert_relation(conn, burger_id, topping_id)?.ok_or_else(|| {
                    AppError::NotFound(format!(
                        "Burger {} or topping {} no longer exists",
                        burger_id, topping_id
                    ))
                })
            })
            .await
    }

    async fn remove_topping(&self, burger_id: i32, topping_id: i32) -> AppResult<()> {
        let deleted = self
            .db
            .transaction(move |conn| {
                Ok(diesel::delete(
                    burger_toppings::table
                        .filter(burger_toppings::burger_id.eq(burger_id))
                        .filter(burger_toppings::topping_id.eq(topping_id)),
                )
                .execute(conn)?)
            })
            .await?;

        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "Topping {} is not attached to burger {}",
                topping_id, burger_id
            )));
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        self.db
            .transaction(|conn| Ok(burgers::table.count().get_result(conn)?))
            .await
    }
}
