//! Demo catalog loaded at startup when `SEED_DEMO_DATA` is enabled.
use rust_decimal::Decimal;

use crate::modules::burger::application::CreateBurgerRequest;
use crate::modules::topping::application::CreateToppingRequest;
use crate::shared::errors::AppResult;
use crate::state::AppState;
use crate::log_info;

const DEMO_TOPPINGS: [(&str, i64); 3] = [("Queijo", 300), ("Bacon", 450), ("Alface", 150)];

/// Insert the demo toppings and one burger. Skipped when any topping exists,
/// so restarts never duplicate the catalog. Returns whether data was added.
pub async fn seed_demo_data(state: &AppState) -> AppResult<bool> {
    if state.toppings.count().await? > 0 {
        log_info!("Skipping demo seed, toppings already present");
        return Ok(false);
    }

    let mut topping_ids = Vec::with_capacity(DEMO_TOPPINGS.len());
    for (name, cents) in DEMO_TOPPINGS {
        let topping = state
            .toppings
            .create(CreateToppingRequest {
                name: Some(name.to_string()),
                price: Some(Decimal::new(cents, 2)),
                active: None,
            })
            .await?;
        topping_ids.push(topping.id);
    }

    state
        .burgers
        .create(CreateBurgerRequest {
            name: Some("Clássico".to_string()),
            base_price: Some(Decimal::new(1200, 2)),
            topping_ids: Some(topping_ids.into_iter().take(1).collect()),
        })
        .await?;

    log_info!("Seeded {} demo toppings and 1 burger", DEMO_TOPPINGS.len());
    Ok(true)
}
