use rust_decimal::Decimal;

/// An add-on ingredient with its own price, attachable to any burger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topping {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    /// Availability flag; only consulted by the filtered listing.
    pub active: bool,
}

/// Validated input for a new topping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTopping {
    pub name: String,
    pub price: Decimal,
    pub active: bool,
}

impl NewTopping {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
            active: true,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Replacement values for an existing topping. `active: None` keeps the
/// stored flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToppingChanges {
    pub name: String,
    pub price: Decimal,
    pub active: Option<bool>,
}

impl Topping {
    pub fn apply(&mut self, changes: &ToppingChanges) {
        self.name = changes.name.clone();
        self.price = changes.price;
        if let Some(active) = changes.active {
            self.active = active;
        }
    }
}
