//! Aggregate module
//!
//! People the store knows about. Accounts and staff are built by composition:
//! each holds the layer below it by value and shares behavior through
//! [`Person`].

pub mod account;
pub mod credential;
pub mod identity;
pub mod staff;

pub use account::{Account, AccountStatus};
pub use credential::Credential;
pub use identity::{IdentityRecord, PersonId};
pub use staff::{summarize_sales, StaffAccount, DEFAULT_CURRENCY};

/// Capabilities every person-like entity shares
pub trait Person {
    /// The identity this entity is built around
    fn identity(&self) -> &IdentityRecord;

    fn identity_mut(&mut self) -> &mut IdentityRecord;

    fn id(&self) -> PersonId {
        self.identity().id()
    }

    fn display_info(&self) -> String {
        self.identity().display_info()
    }

    fn verify_email(&mut self) {
        self.identity_mut().verify_email();
    }

    fn update_email(&mut self, new_email: impl Into<String>)
    where
        Self: Sized,
    {
        self.identity_mut().update_email(new_email);
    }
}
