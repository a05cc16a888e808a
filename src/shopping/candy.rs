//! Candy catalog item

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{DomainResult, Money};

use super::Stocked;

/// A candy the store sells, with its current stock level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candy {
    id: Uuid,
    name: String,
    price: Money,
    quantity: u32,
}

impl Candy {
    pub fn new(name: impl Into<String>, price: Money, quantity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Create a candy from a price string such as `"2.50"`
    pub fn priced(name: impl Into<String>, price: &str, quantity: u32) -> DomainResult<Self> {
        Ok(Self::new(name, price.parse()?, quantity))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

impl Stocked for Candy {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_candy_priced() {
        let candy = Candy::priced("Sour Worms", "1.25", 40).unwrap();

        assert_eq!(candy.name(), "Sour Worms");
        assert_eq!(candy.price(), Money::from_cents(125));
        assert_eq!(candy.quantity(), 40);
        assert!(candy.in_stock());
    }

    #[test]
    fn test_candy_bad_price() {
        let result = Candy::priced("Fudge", "-2", 1);
        assert!(matches!(result, Err(DomainError::InvalidMoney(_))));
    }

    #[test]
    fn test_candy_ids_distinct() {
        let a = Candy::new("Toffee", Money::from_cents(100), 1);
        let b = Candy::new("Toffee", Money::from_cents(100), 1);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_candy_set_quantity() {
        let mut candy = Candy::new("Gumdrops", Money::from_cents(50), 3);
        candy.set_quantity(0);
        assert!(!candy.in_stock());
    }
}
