//! Identity Record
//!
//! Identity and contact details shared by every person the store knows about.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Person;

/// Numeric person identifier.
///
/// Allocation (and therefore uniqueness) belongs to whoever registers people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(u64);

impl PersonId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PersonId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity Record
///
/// Holds who someone is and how to reach them.
/// The verified flag always belongs to the current email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// Unique person ID, fixed at creation
    id: PersonId,

    /// Display name
    name: String,

    /// Contact email
    email: String,

    /// Whether `email` has been verified
    email_verified: bool,
}

impl IdentityRecord {
    /// Create a new identity with an unverified email
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: PersonId(id),
            name: name.into(),
            email: email.into(),
            email_verified: false,
        }
    }

    /// Mark the email as already verified at creation
    pub fn verified(mut self) -> Self {
        self.email_verified = true;
        self
    }

    /// Mark the current email as verified. Idempotent.
    pub fn verify_email(&mut self) {
        self.email_verified = true;
    }

    /// Replace the email. Verification is reset even when the address is unchanged.
    pub fn update_email(&mut self, new_email: impl Into<String>) {
        self.email = new_email.into();
        self.email_verified = false;
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// `"<name> (<email>)"`
    pub fn display_info(&self) -> String {
        format!("{} ({})", self.name, self.email)
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_email_verified(&self) -> bool {
        self.email_verified
    }
}

impl Person for IdentityRecord {
    fn identity(&self) -> &IdentityRecord {
        self
    }

    fn identity_mut(&mut self) -> &mut IdentityRecord {
        self
    }
}
