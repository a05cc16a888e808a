//! Staff Account
//!
//! Store employees: a full account plus inventory and reporting duties.

use tracing::info;

use crate::config::Config;
use crate::domain::{DomainError, DomainResult, Money};
use crate::shopping::{Cart, Sale, ShoppingCart, Stocked};

use super::{Account, Credential, IdentityRecord, Person};

/// Currency symbol used when none is configured
pub const DEFAULT_CURRENCY: &str = "$";

/// A store employee.
#[derive(Debug)]
pub struct StaffAccount<C: Cart = ShoppingCart> {
    account: Account<C>,

    /// Job title
    position: String,
}

impl<C: Cart> StaffAccount<C> {
    pub fn register(
        id: u64,
        name: impl Into<String>,
        email: impl Into<String>,
        credential: impl Into<Credential>,
        position: impl Into<String>,
    ) -> Self {
        Self::from_account(Account::register(id, name, email, credential), position)
    }

    /// Promote an existing account
    pub fn from_account(account: Account<C>, position: impl Into<String>) -> Self {
        Self {
            account,
            position: position.into(),
        }
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    /// Everything a regular account can do
    pub fn account(&self) -> &Account<C> {
        &self.account
    }

    pub fn account_mut(&mut self) -> &mut Account<C> {
        &mut self.account
    }

    /// Set the stock level of `item`.
    ///
    /// # Errors
    /// `DomainError::InvalidArgument` if `new_quantity` is negative or too
    /// large for the item to hold.
    pub fn update_inventory<I: Stocked>(&self, item: &mut I, new_quantity: i64) -> DomainResult<()> {
        if new_quantity < 0 {
            return Err(DomainError::invalid_argument("Quantity cannot be negative"));
        }

        let quantity = u32::try_from(new_quantity)
            .map_err(|_| DomainError::invalid_argument(format!("Quantity {new_quantity} is too large")))?;

        let previous = item.quantity();
        item.set_quantity(quantity);

        info!(staff_id = %self.id(), previous, quantity, "inventory updated");
        Ok(())
    }

    /// Sales summary in the given currency
    pub fn summarize_sales<S: Sale>(&self, orders: &[S], currency_symbol: &str) -> DomainResult<String> {
        summarize_sales(orders, currency_symbol)
    }

    /// Sales summary in the store's configured currency
    pub fn sales_report<S: Sale>(&self, orders: &[S], config: &Config) -> DomainResult<String> {
        summarize_sales(orders, &config.currency_symbol)
    }
}

impl<C: Cart> Person for StaffAccount<C> {
    fn identity(&self) -> &IdentityRecord {
        self.account.identity()
    }

    fn identity_mut(&mut self) -> &mut IdentityRecord {
        self.account.identity_mut()
    }
}

/// `"Orders: <count>, Total sales: <symbol><total>"`, total to 2 decimal places.
///
/// # Errors
/// `DomainError::InvalidMoney` if the combined total exceeds the money maximum.
pub fn summarize_sales<S: Sale>(orders: &[S], currency_symbol: &str) -> DomainResult<String> {
    let total = Money::total(orders.iter().map(|order| order.total_amount()))?;
    Ok(format!("Orders: {}, Total sales: {currency_symbol}{total}", orders.len()))
}
