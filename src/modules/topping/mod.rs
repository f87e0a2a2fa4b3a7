/// Topping catalog
///
/// Standalone add-on ingredients with a price. Toppings have no dependencies;
/// burgers reference them through the `burger_toppings` relation.
pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::ToppingService;
pub use domain::{NewTopping, Topping, ToppingChanges, ToppingRepository};
pub use infrastructure::{InMemoryToppingRepository, ToppingRepositoryImpl};
