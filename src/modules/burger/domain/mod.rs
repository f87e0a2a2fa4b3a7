pub mod entities;
pub mod pricing;
pub mod repository;

pub use entities::{Burger, BurgerChanges, NewBurger};
pub use pricing::PriceCalculator;
pub use repository::BurgerRepository;
