use rust_decimal::Decimal;

/// Field rules shared by the topping and burger services. Each check returns
/// the user-facing message on failure so callers can collect them per field.
pub struct Validator;

pub const TOPPING_NAME_MIN_CHARS: usize = 2;
pub const TOPPING_NAME_MAX_CHARS: usize = 60;
pub const TOPPING_PRICE_MAX: Decimal = Decimal::from_parts(100, 0, 0, false, 0);
pub const BASE_PRICE_MAX: Decimal = Decimal::from_parts(9999, 0, 0, false, 0);
pub const MONEY_SCALE: u32 = 2;
pub const FIELD_REQUIRED: &str = "This field is required";

impl Validator {
    pub fn validate_required(value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            return Err(FIELD_REQUIRED.to_string());
        }
        Ok(())
    }

    pub fn validate_topping_name(name: &str) -> Result<(), String> {
        Self::validate_required(name)?;

        let length = name.chars().count();
        if !(TOPPING_NAME_MIN_CHARS..=TOPPING_NAME_MAX_CHARS).contains(&length) {
            return Err(format!(
                "Name must be between {} and {} characters",
                TOPPING_NAME_MIN_CHARS, TOPPING_NAME_MAX_CHARS
            ));
        }
        Ok(())
    }

    pub fn validate_burger_name(name: &str) -> Result<(), String> {
        Self::validate_required(name)
    }

    pub fn validate_topping_price(price: Decimal) -> Result<(), String> {
        Self::validate_money(price, TOPPING_PRICE_MAX)
    }

    pub fn validate_base_price(price: Decimal) -> Result<(), String> {
        Self::validate_money(price, BASE_PRICE_MAX)
    }

    fn validate_money(value: Decimal, max: Decimal) -> Result<(), String> {
        if value < Decimal::ZERO || value > max {
            return Err(format!("Price must be between 0 and {}", max));
        }
        if value.normalize().scale() > MONEY_SCALE {
            return Err(format!(
                "Price cannot have more than {} decimal places",
                MONEY_SCALE
            ));
        }
        Ok(())
    }

    /// A body id is optional, but when present it must name the same record as
    /// the path.
    pub fn validate_id_match(path_id: i32, body_id: Option<i32>) -> Result<(), String> {
        match body_id {
            Some(body_id) if body_id != path_id => Err(format!(
                "Id in the body ({}) does not match the id in the path ({})",
                body_id, path_id
            )),
            _ => Ok(()),
        }
    }
}
