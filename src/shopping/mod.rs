//! Shopping module
//!
//! Contracts the account relies on for carts, orders and stocked items, plus
//! the store's own implementations of them.

pub mod candy;
pub mod cart;
pub mod order;

pub use candy::Candy;
pub use cart::{CartLine, ShoppingCart};
pub use order::Order;

use std::fmt::Debug;

use crate::aggregate::PersonId;
use crate::domain::{DomainResult, Money, PaymentMethod};

/// A cart that accumulates items and turns them into an order.
pub trait Cart: Debug {
    /// What gets added to the cart
    type Item;

    /// What the cart produces at checkout
    type Order: Clone + Debug;

    /// Open an empty cart for the given owner
    fn open(owner: PersonId) -> Self;

    /// Add `quantity` units of `item`
    fn add_item(&mut self, item: &Self::Item, quantity: u32) -> DomainResult<()>;

    /// Materialize an order paid with `payment_method`.
    /// Fails with `DomainError::EmptyCart` when there is nothing to order.
    fn create_order(&self, payment_method: PaymentMethod) -> DomainResult<Self::Order>;

    /// Drop every line
    fn clear(&mut self);

    fn is_empty(&self) -> bool;
}

/// Anything that contributes to sales totals.
pub trait Sale {
    fn total_amount(&self) -> Money;
}

/// An inventory record with a writable stock level.
pub trait Stocked {
    fn quantity(&self) -> u32;

    fn set_quantity(&mut self, quantity: u32);
}
