pub mod extract;
pub mod registry;

pub use registry::build_router;
