pub mod dto;
pub mod service;

pub use dto::{BurgerResponse, CreateBurgerRequest, UpdateBurgerRequest};
pub use service::BurgerService;
