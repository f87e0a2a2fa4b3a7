/// Burgers and their attached toppings
///
/// A burger owns a base price and a set of topping relations. Its total price
/// is derived on every read from the currently attached toppings.
pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::BurgerService;
pub use domain::{Burger, BurgerChanges, BurgerRepository, NewBurger, PriceCalculator};
pub use infrastructure::{BurgerRepositoryImpl, InMemoryBurgerRepository};
