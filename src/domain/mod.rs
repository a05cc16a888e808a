//! Domain module
//!
//! Value types and errors shared by accounts and the shopping collaborators.

pub mod error;
pub mod money;
pub mod payment;

pub use error::{DomainError, DomainResult};
pub use money::{Money, MoneyError};
pub use payment::PaymentMethod;
