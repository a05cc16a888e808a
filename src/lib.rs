//! Keanu's Candy
//!
//! People, accounts, carts and orders for the candy store.

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod shared;
pub mod shopping;
pub mod telemetry;

pub use aggregate::{Account, IdentityRecord, Person, PersonId, StaffAccount};
pub use config::{Config, ConfigError};
pub use domain::{DomainError, DomainResult, Money, PaymentMethod};
pub use shared::SharedAccount;
pub use shopping::{Candy, Cart, Order, Sale, ShoppingCart, Stocked};
