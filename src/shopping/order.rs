//! Order
//!
//! Immutable record of a completed checkout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregate::PersonId;
use crate::domain::{DomainResult, Money, PaymentMethod};

use super::{CartLine, Sale};

/// An order placed by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: Uuid,
    customer_id: PersonId,
    lines: Vec<CartLine>,
    payment_method: PaymentMethod,
    total_amount: Money,
    placed_at: DateTime<Utc>,
}

impl Order {
    /// Place an order for a snapshot of cart lines. The total is computed
    /// from the lines and cannot be supplied by the caller.
    ///
    /// # Errors
    /// `DomainError::InvalidMoney` if the total exceeds the money maximum.
    pub fn place(
        customer_id: PersonId,
        lines: Vec<CartLine>,
        payment_method: PaymentMethod,
    ) -> DomainResult<Self> {
        let totals = lines
            .iter()
            .map(CartLine::line_total)
            .collect::<DomainResult<Vec<_>>>()?;
        let total_amount = Money::total(totals)?;

        Ok(Self {
            id: Uuid::new_v4(),
            customer_id,
            lines,
            payment_method,
            total_amount,
            placed_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn customer_id(&self) -> PersonId {
        self.customer_id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn payment_method(&self) -> &PaymentMethod {
        &self.payment_method
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// Total number of units across all lines
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity())).sum()
    }
}

impl Sale for Order {
    fn total_amount(&self) -> Money {
        self.total_amount
    }
}
