// Shared kernel used by the topping and burger modules

pub mod config;
pub mod errors;
pub mod infrastructure;
pub mod utils;
pub mod validation;

// Re-exports for convenience
pub use config::{AppConfig, StorageBackend};
pub use infrastructure::{Database, MemoryStore};
