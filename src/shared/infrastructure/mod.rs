/// Shared infrastructure concerns
///
/// Storage plumbing used by more than one module: the Postgres pool and the
/// in-memory table set.
pub mod database;
pub mod memory_store;

// Re-exports for convenience
pub use database::Database;
pub use memory_store::MemoryStore;
