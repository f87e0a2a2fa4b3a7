use rust_decimal::Decimal;

use crate::modules::topping::Topping;

/// Derives a burger's total from its base price and attached toppings.
pub struct PriceCalculator;

impl PriceCalculator {
    /// `base + sum(toppings)`, exact to the cent. An empty topping list yields
    /// the base price unchanged.
    pub fn calculate<'a, I>(base_price: Decimal, toppings: I) -> Decimal
    where
        I: IntoIterator<Item = &'a Topping>,
    {
        toppings
            .into_iter()
            .fold(base_price, |total, topping| total + topping.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn topping(id: i32, price: &str) -> Topping {
        Topping {
            id,
            name: format!("Topping {id}"),
            price: Decimal::from_str(price).unwrap(),
            active: true,
        }
    }

    #[test]
    fn no_toppings_yields_base_price() {
        let base = Decimal::from_str("15.00").unwrap();
        assert_eq!(PriceCalculator::calculate(base, &Vec::<Topping>::new()), base);
    }

    #[test]
    fn sums_toppings_onto_base() {
        let toppings = vec![topping(1, "4.00"), topping(2, "3.50")];
        let total = PriceCalculator::calculate(Decimal::from_str("15.00").unwrap(), &toppings);
        assert_eq!(total, Decimal::from_str("22.50").unwrap());
    }

    #[test]
    fn cents_do_not_drift() {
        let toppings: Vec<Topping> = (1..=10).map(|id| topping(id, "0.10")).collect();
        let total = PriceCalculator::calculate(Decimal::from_str("0.20").unwrap(), &toppings);
        assert_eq!(total, Decimal::from_str("1.20").unwrap());
    }
}
