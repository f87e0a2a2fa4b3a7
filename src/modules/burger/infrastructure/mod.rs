pub mod memory;
pub mod models;
pub mod repository;

pub use memory::InMemoryBurgerRepository;
pub use repository::BurgerRepositoryImpl;
