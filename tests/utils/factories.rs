/// Request body factories with sensible defaults
use serde_json::{json, Value};

pub struct ToppingFactory {
    name: String,
    price: Value,
    active: Option<bool>,
}

impl ToppingFactory {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            price: json!(1.0),
            active: None,
        }
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = json!(price);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = Some(false);
        self
    }

    pub fn build(self) -> Value {
        let mut body = json!({ "name": self.name, "price": self.price });
        if let Some(active) = self.active {
            body["active"] = json!(active);
        }
        body
    }
}

pub struct BurgerFactory {
    name: String,
    base_price: Value,
    topping_ids: Vec<i32>,
}

impl BurgerFactory {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            base_price: json!(10.0),
            topping_ids: Vec::new(),
        }
    }

    pub fn base_price(mut self, price: f64) -> Self {
        self.base_price = json!(price);
        self
    }

    pub fn toppings(mut self, ids: &[i32]) -> Self {
        self.topping_ids = ids.to_vec();
        self
    }

    pub fn build(self) -> Value {
        json!({
            "name": self.name,
            "basePrice": self.base_price,
            "toppingIds": self.topping_ids,
        })
    }
}
