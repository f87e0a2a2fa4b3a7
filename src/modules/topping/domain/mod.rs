pub mod entities;
pub mod repository;

pub use entities::{NewTopping, Topping, ToppingChanges};
pub use repository::ToppingRepository;
