//! Shopping cart
//!
//! Accumulates candy lines for one customer until checkout.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregate::PersonId;
use crate::domain::{DomainError, DomainResult, Money, PaymentMethod};

use super::{Candy, Cart, Order};

/// One candy in a cart, priced at the moment it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    candy_id: Uuid,
    name: String,
    unit_price: Money,
    quantity: u32,
}

impl CartLine {
    pub fn for_candy(candy: &Candy, quantity: u32) -> Self {
        Self {
            candy_id: candy.id(),
            name: candy.name().to_string(),
            unit_price: candy.price(),
            quantity,
        }
    }

    pub fn candy_id(&self) -> Uuid {
        self.candy_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn line_total(&self) -> DomainResult<Money> {
        Ok(self.unit_price.times(self.quantity)?)
    }
}

/// The store's cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingCart {
    owner: PersonId,
    lines: Vec<CartLine>,
}

impl ShoppingCart {
    pub fn owner(&self) -> PersonId {
        self.owner
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of units across all lines
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn subtotal(&self) -> DomainResult<Money> {
        let totals = self
            .lines
            .iter()
            .map(CartLine::line_total)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Money::total(totals)?)
    }
}

impl Cart for ShoppingCart {
    type Item = Candy;
    type Order = Order;

    fn open(owner: PersonId) -> Self {
        Self {
            owner,
            lines: Vec::new(),
        }
    }

    fn add_item(&mut self, item: &Candy, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::invalid_argument("Quantity must be positive"));
        }

        let position = self.lines.iter().position(|line| line.candy_id == item.id());
        let candidate = match position {
            Some(index) => {
                let mut line = self.lines[index].clone();
                line.quantity = line.quantity.checked_add(quantity).ok_or_else(|| {
                    DomainError::invalid_argument("Quantity exceeds cart line limit")
                })?;
                line
            }
            None => CartLine::for_candy(item, quantity),
        };

        // The cart must stay priceable: check line and subtotal before mutating
        let others = self
            .lines
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != position)
            .map(|(_, line)| line.line_total())
            .collect::<DomainResult<Vec<_>>>()?;
        Money::total(others)?.try_add(&candidate.line_total()?)?;

        match position {
            Some(index) => self.lines[index] = candidate,
            None => self.lines.push(candidate),
        }

        Ok(())
    }

    fn create_order(&self, payment_method: PaymentMethod) -> DomainResult<Order> {
        if self.lines.is_empty() {
            return Err(DomainError::EmptyCart);
        }

        Order::place(self.owner, self.lines.clone(), payment_method)
    }

    fn clear(&mut self) {
        self.lines.clear();
    }

    fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
