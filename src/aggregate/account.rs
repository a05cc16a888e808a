//! Account Aggregate
//!
//! A registered customer: authenticates, owns at most one cart and keeps the
//! history of orders produced by checkout.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::domain::{DomainError, DomainResult, PaymentMethod};
use crate::shopping::{Cart, ShoppingCart};

use super::{Credential, IdentityRecord, Person};

/// Account status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Deactivated {
        reason: Option<String>,
        deactivated_at: DateTime<Utc>,
    },
}

/// Account Aggregate
///
/// The cart is opened on the first item addition and reused afterwards; it is
/// empty again after every successful checkout. Orders are only ever appended.
#[derive(Debug)]
pub struct Account<C: Cart = ShoppingCart> {
    /// Who the account belongs to
    identity: IdentityRecord,

    /// Login secret
    credential: Credential,

    /// Active or deactivated
    status: AccountStatus,

    /// Placed orders, oldest first
    orders: Vec<C::Order>,

    /// Live cart, opened lazily
    cart: Option<C>,

    /// When the account was registered
    registered_at: DateTime<Utc>,
}

impl<C: Cart> Account<C> {
    /// Register a new, active account
    pub fn register(
        id: u64,
        name: impl Into<String>,
        email: impl Into<String>,
        credential: impl Into<Credential>,
    ) -> Self {
        Self::from_identity(IdentityRecord::new(id, name, email), credential)
    }

    /// Register an account around an existing identity
    pub fn from_identity(identity: IdentityRecord, credential: impl Into<Credential>) -> Self {
        Self {
            identity,
            credential: credential.into(),
            status: AccountStatus::Active,
            orders: Vec::new(),
            cart: None,
            registered_at: Utc::now(),
        }
    }

    /// Start the account already deactivated, with no reason recorded
    pub fn inactive(mut self) -> Self {
        self.status = AccountStatus::Deactivated {
            reason: None,
            deactivated_at: self.registered_at,
        };
        self
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Check login details. Inactive accounts never authenticate.
    pub fn authenticate(&self, email: &str, credential: &str) -> bool {
        // Always run the comparison so rejection timing doesn't depend on which check failed
        let credential_ok = self.credential.matches(credential);
        let authenticated = self.is_active() && self.identity.email() == email && credential_ok;

        if !authenticated {
            debug!(person_id = %self.id(), active = self.is_active(), "authentication rejected");
        }

        authenticated
    }

    /// Replace the credential if `old_credential` matches the current one
    pub fn change_credential(&mut self, old_credential: &str, new_credential: impl Into<Credential>) -> bool {
        if !self.credential.matches(old_credential) {
            debug!(person_id = %self.id(), "credential change rejected");
            return false;
        }

        self.credential = new_credential.into();
        info!(person_id = %self.id(), "credential changed");
        true
    }

    /// Deactivate the account. Calling again replaces the stored reason.
    pub fn deactivate(&mut self, reason: Option<String>) {
        info!(person_id = %self.id(), reason = reason.as_deref(), "account deactivated");
        self.status = AccountStatus::Deactivated {
            reason,
            deactivated_at: Utc::now(),
        };
    }

    // =========================================================================
    // Cart & checkout
    // =========================================================================

    fn ensure_cart(&mut self) -> &mut C {
        let owner = self.identity.id();
        self.cart.get_or_insert_with(|| {
            debug!(person_id = %owner, "cart opened");
            C::open(owner)
        })
    }

    /// Add `quantity` units of `item`, opening the cart if needed.
    /// Quantity rules belong to the cart.
    pub fn add_item_to_cart(&mut self, item: &C::Item, quantity: u32) -> DomainResult<()> {
        self.ensure_cart().add_item(item, quantity)
    }

    /// Turn the cart into an order.
    ///
    /// Fails with `DomainError::EmptyCart` if no cart was ever opened. When the
    /// cart refuses to produce an order nothing changes; otherwise the order
    /// is recorded and the cart cleared together.
    pub fn checkout(&mut self, payment_method: PaymentMethod) -> DomainResult<C::Order> {
        let cart = self.cart.as_mut().ok_or(DomainError::EmptyCart)?;

        let order = cart.create_order(payment_method)?;
        cart.clear();
        self.orders.push(order.clone());

        info!(person_id = %self.identity.id(), order_count = self.orders.len(), "checkout completed");
        Ok(order)
    }

    /// Copy of the order history, oldest first
    pub fn list_orders(&self) -> Vec<C::Order> {
        self.orders.clone()
    }

    pub fn get_cart(&self) -> Option<&C> {
        self.cart.as_ref()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn status(&self) -> &AccountStatus {
        &self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    pub fn deactivation_reason(&self) -> Option<&str> {
        match &self.status {
            AccountStatus::Deactivated { reason, .. } => reason.as_deref(),
            AccountStatus::Active => None,
        }
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

impl<C: Cart> Person for Account<C> {
    fn identity(&self) -> &IdentityRecord {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut IdentityRecord {
        &mut self.identity
    }
}
