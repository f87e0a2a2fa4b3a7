pub mod dto;
pub mod service;

pub use dto::{CreateToppingRequest, ListToppingsQuery, ToppingResponse, UpdateToppingRequest};
pub use service::ToppingService;
