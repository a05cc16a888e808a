//! Money type
//!
//! Domain primitive for prices and order totals.
//! Values are validated at construction time, so a negative price, a fraction
//! of a cent or an unbounded total cannot exist in the store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum allowed value (1 trillion)
const MAX_AMOUNT: &str = "1000000000000";

/// Maximum decimal places (cents)
const MAX_SCALE: u32 = 2;

/// Money represents a validated, non-negative monetary value.
///
/// # Invariants
/// - Value is never negative
/// - Maximum 2 decimal places
/// - Maximum value is 1 trillion
///
/// Arithmetic is checked: every operation that could leave these bounds
/// returns `MoneyError` instead.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use keanus_candy::domain::Money;
///
/// let price = Money::new(Decimal::new(250, 2)).unwrap();
/// assert_eq!(price.to_string(), "2.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(Decimal);

/// Errors that can occur when creating or combining Money
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    #[error("Money cannot be negative (got {0})")]
    Negative(Decimal),

    #[error("Money has too many decimal places (max {MAX_SCALE}, got {0})")]
    TooManyDecimals(u32),

    #[error("Money exceeds maximum allowed value ({MAX_AMOUNT})")]
    Overflow,

    #[error("Invalid money format: {0}")]
    ParseError(String),
}

fn max_amount() -> Decimal {
    // MAX_AMOUNT is a literal that always parses
    Decimal::from_str(MAX_AMOUNT).unwrap_or(Decimal::MAX)
}

impl Money {
    /// Zero, the total of an empty collection of sales.
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Create a new Money value with validation.
    ///
    /// # Errors
    /// - `MoneyError::Negative` if value < 0
    /// - `MoneyError::TooManyDecimals` if more than 2 decimal places
    /// - `MoneyError::Overflow` if value > 1 trillion
    pub fn new(value: Decimal) -> Result<Self, MoneyError> {
        if value < Decimal::ZERO {
            return Err(MoneyError::Negative(value));
        }

        // Trailing zeros ("1.500") are not extra precision
        let value = value.normalize();
        if value.scale() > MAX_SCALE {
            return Err(MoneyError::TooManyDecimals(value.scale()));
        }

        if value > max_amount() {
            return Err(MoneyError::Overflow);
        }

        Ok(Self(value))
    }

    /// Create Money from a whole number of cents.
    ///
    /// `u32::MAX` cents is far below the maximum, so this cannot fail.
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), MAX_SCALE).normalize())
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    pub fn times(&self, quantity: u32) -> Result<Money, MoneyError> {
        let product = self
            .0
            .checked_mul(Decimal::from(quantity))
            .ok_or(MoneyError::Overflow)?;
        Money::new(product)
    }

    /// Add another amount, staying within the maximum.
    pub fn try_add(&self, other: &Money) -> Result<Money, MoneyError> {
        let sum = self.0.checked_add(other.0).ok_or(MoneyError::Overflow)?;
        Money::new(sum)
    }

    /// Checked sum of a sequence of amounts.
    pub fn total<I>(amounts: I) -> Result<Money, MoneyError>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |acc, amount| acc.try_add(&amount))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())
            .map_err(|e| MoneyError::ParseError(e.to_string()))?;
        Money::new(decimal)
    }
}

impl TryFrom<String> for Money {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Money::from_str(&value)
    }
}

impl From<Money> for String {
    fn from(money: Money) -> Self {
        money.to_string()
    }
}
