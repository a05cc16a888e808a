//! Shared account handle
//!
//! One mutex per account so cart and order-history changes stay atomic when
//! several threads act for the same customer. Accounts never lock each other.
//!
//! The lock is blocking and MUST NOT be held across `.await` points.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::aggregate::{Account, Credential};
use crate::domain::{DomainResult, PaymentMethod};
use crate::shopping::{Cart, ShoppingCart};

/// Cloneable handle to a single account.
#[derive(Debug)]
pub struct SharedAccount<C: Cart = ShoppingCart>(Arc<Mutex<Account<C>>>);

impl<C: Cart> SharedAccount<C> {
    pub fn new(account: Account<C>) -> Self {
        SharedAccount(Arc::new(Mutex::new(account)))
    }

    /// Run `f` with exclusive access to the account
    pub fn with<R>(&self, f: impl FnOnce(&mut Account<C>) -> R) -> R {
        f(&mut *self.0.lock())
    }

    pub fn authenticate(&self, email: &str, credential: &str) -> bool {
        self.0.lock().authenticate(email, credential)
    }

    pub fn change_credential(&self, old_credential: &str, new_credential: impl Into<Credential>) -> bool {
        self.0.lock().change_credential(old_credential, new_credential)
    }

    pub fn deactivate(&self, reason: Option<String>) {
        self.0.lock().deactivate(reason);
    }

    pub fn add_item_to_cart(&self, item: &C::Item, quantity: u32) -> DomainResult<()> {
        self.0.lock().add_item_to_cart(item, quantity)
    }

    pub fn checkout(&self, payment_method: PaymentMethod) -> DomainResult<C::Order> {
        self.0.lock().checkout(payment_method)
    }

    pub fn list_orders(&self) -> Vec<C::Order> {
        self.0.lock().list_orders()
    }

    pub fn order_count(&self) -> usize {
        self.0.lock().order_count()
    }

    pub fn is_active(&self) -> bool {
        self.0.lock().is_active()
    }
}

impl<C: Cart> Clone for SharedAccount<C> {
    fn clone(&self) -> Self {
        SharedAccount(Arc::clone(&self.0))
    }
}

impl<C: Cart> From<Account<C>> for SharedAccount<C> {
    fn from(account: Account<C>) -> Self {
        Self::new(account)
    }
}
