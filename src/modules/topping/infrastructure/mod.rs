pub mod memory;
pub mod models;
pub mod repository;

pub use memory::InMemoryToppingRepository;
pub use repository::ToppingRepositoryImpl;
