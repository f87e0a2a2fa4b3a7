pub mod burger;
pub mod topping;
