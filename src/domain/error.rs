//! Domain Error Types
//!
//! Recoverable failures reported to the immediate caller. A failed login is
//! not one of them: `authenticate` answers `false` instead.

use thiserror::Error;

use super::money::MoneyError;

/// Result alias used throughout the store domain.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-specific errors
///
/// These errors represent business rule violations and are independent of
/// whatever layer ends up presenting them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed input such as a negative stock level or a zero quantity
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Checkout attempted without anything to turn into an order
    #[error("Cart is empty")]
    EmptyCart,

    /// A price or total failed validation
    #[error(transparent)]
    InvalidMoney(#[from] MoneyError),
}

impl DomainError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Check if this is a client error (caller's fault)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::InvalidMoney(_))
    }
}
