use std::sync::Arc;

use rust_decimal::Decimal;

use super::dto::{CreateBurgerRequest, UpdateBurgerRequest};
use crate::modules::burger::domain::{Burger, BurgerChanges, BurgerRepository, NewBurger};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::validation::FIELD_REQUIRED;
use crate::shared::utils::Validator;
use crate::shared::validation::ValidationErrors;
use crate::{log_debug, log_info};

pub struct BurgerService {
    burger_repo: Arc<dyn BurgerRepository>,
}

impl BurgerService {
    pub fn new(burger_repo: Arc<dyn BurgerRepository>) -> Self {
        Self { burger_repo }
    }

    pub async fn list(&self) -> AppResult<Vec<Burger>> {
        self.burger_repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> AppResult<Burger> {
        self.burger_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Burger with ID {} not found", id)))
    }

    pub async fn create(&self, request: CreateBurgerRequest) -> AppResult<Burger> {
        let (name, base_price) =
            validate_fields(ValidationErrors::new(), request.name, request.base_price)?;

        let burger = NewBurger::new(name, base_price)
            .with_toppings(request.topping_ids.unwrap_or_default());
        let created = self.burger_repo.create(&burger).await?;

        if created.toppings.len() < burger.topping_ids.len() {
            log_debug!(
                "Burger {} created with {} of {} requested toppings",
                created.id,
                created.toppings.len(),
                burger.topping_ids.len()
            );
        }
        log_info!("Created burger {} ('{}')", created.id, created.name);
        Ok(created)
    }

    pub async fn update(&self, id: i32, request: UpdateBurgerRequest) -> AppResult<Burger> {
        let mut errors = ValidationErrors::new();
        errors.check("id", Validator::validate_id_match(id, request.id));
        let (name, base_price) = validate_fields(errors, request.name, request.base_price)?;

        let changes = BurgerChanges {
            name,
            base_price,
        };
        let updated = self.burger_repo.update(id, &changes).await?;
        log_info!("Updated burger {}", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.burger_repo.delete(id).await?;
        log_info!("Deleted burger {}", id);
        Ok(())
    }

    pub async fn add_topping(&self, burger_id: i32, topping_id: i32) -> AppResult<()> {
        let attached = self.burger_repo.add_topping(burger_id, topping_id).await?;
        if attached {
            log_info!("Attached topping {} to burger {}", topping_id, burger_id);
        } else {
            log_debug!(
                "Topping {} already attached to burger {}",
                topping_id,
                burger_id
            );
        }
        Ok(())
    }

    pub async fn remove_topping(&self, burger_id: i32, topping_id: i32) -> AppResult<()> {
        self.burger_repo
            .remove_topping(burger_id, topping_id)
            .await?;
        log_info!("Detached topping {} from burger {}", topping_id, burger_id);
        Ok(())
    }

    pub async fn count(&self) -> AppResult<i64> {
        self.burger_repo.count().await
    }
}

fn validate_fields(
    mut errors: ValidationErrors,
    name: Option<String>,
    base_price: Option<Decimal>,
) -> Result<(String, Decimal), ValidationErrors> {
    let name = name.map(|name| name.trim().to_string());
    match &name {
        Some(name) => errors.check("name", Validator::validate_burger_name(name)),
        None => errors.add("name", FIELD_REQUIRED),
    }
    match base_price {
        Some(price) => errors.check("basePrice", Validator::validate_base_price(price)),
        None => errors.add("basePrice", FIELD_REQUIRED),
    }

    match (name, base_price) {
        (Some(name), Some(price)) if errors.is_empty() => Ok((name, price)),
        _ => Err(errors),
    }
}
