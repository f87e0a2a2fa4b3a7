use std::sync::Arc;

use rust_decimal::Decimal;

use super::dto::{CreateToppingRequest, UpdateToppingRequest};
use crate::modules::topping::domain::{NewTopping, Topping, ToppingChanges, ToppingRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::validation::FIELD_REQUIRED;
use crate::shared::utils::Validator;
use crate::shared::validation::ValidationErrors;
use crate::{log_debug, log_info};

pub struct ToppingService {
    topping_repo: Arc<dyn ToppingRepository>,
}

impl ToppingService {
    pub fn new(topping_repo: Arc<dyn ToppingRepository>) -> Self {
        Self { topping_repo }
    }

    pub async fn list(&self, active_only: bool) -> AppResult<Vec<Topping>> {
        let toppings = self.topping_repo.find_all(active_only).await?;
        log_debug!(
            "Listed {} toppings (active_only: {})",
            toppings.len(),
            active_only
        );
        Ok(toppings)
    }

    pub async fn get(&self, id: i32) -> AppResult<Topping> {
        self.topping_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Topping with ID {} not found", id)))
    }

    pub async fn create(&self, request: CreateToppingRequest) -> AppResult<Topping> {
        let (name, price) = validate_fields(ValidationErrors::new(), request.name, request.price)?;

        let mut topping = NewTopping::new(name, price);
        if let Some(active) = request.active {
            topping = topping.with_active(active);
        }

        let created = self.topping_repo.create(&topping).await?;
        log_info!("Created topping {} ('{}')", created.id, created.name);
        Ok(created)
    }

    pub async fn update(&self, id: i32, request: UpdateToppingRequest) -> AppResult<Topping> {
        let mut errors = ValidationErrors::new();
        errors.check("id", Validator::validate_id_match(id, request.id));
        let (name, price) = validate_fields(errors, request.name, request.price)?;

        let changes = ToppingChanges {
            name,
            price,
            active: request.active,
        };

        let updated = self.topping_repo.update(id, &changes).await?;
        log_info!("Updated topping {}", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.topping_repo.delete(id).await?;
        log_info!("Deleted topping {}", id);
        Ok(())
    }

    pub async fn count(&self) -> AppResult<i64> {
        self.topping_repo.count().await
    }
}

/// Collects name/price failures on top of `errors`; yields the trimmed name and
/// price only when nothing failed.
fn validate_fields(
    mut errors: ValidationErrors,
    name: Option<String>,
    price: Option<Decimal>,
) -> Result<(String, Decimal), ValidationErrors> {
    let name = name.map(|name| name.trim().to_string());
    match &name {
        Some(name) => errors.check("name", Validator::validate_topping_name(name)),
        None => errors.add("name", FIELD_REQUIRED),
    }
    match price {
        Some(price) => errors.check("price", Validator::validate_topping_price(price)),
        None => errors.add("price", FIELD_REQUIRED),
    }

    match (name, price) {
        (Some(name), Some(price)) if errors.is_empty() => Ok((name, price)),
        _ => Err(errors),
    }
}
