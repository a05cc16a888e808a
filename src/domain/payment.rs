//! Payment methods
//!
//! Opaque to the account: a payment method is handed to the cart unchanged and
//! ends up recorded on the order it paid for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an order was paid for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Card payment, identified only by its last four digits
    Card { last_four: String },

    /// Cash at the counter
    Cash,

    /// Store gift card
    GiftCard { code: String },
}

impl PaymentMethod {
    pub fn card(last_four: impl Into<String>) -> Self {
        Self::Card {
            last_four: last_four.into(),
        }
    }

    pub fn gift_card(code: impl Into<String>) -> Self {
        Self::GiftCard { code: code.into() }
    }

    /// Get the payment kind as a string
    pub fn kind(&self) -> &'static str {
        match self {
            PaymentMethod::Card { .. } => "card",
            PaymentMethod::Cash => "cash",
            PaymentMethod::GiftCard { .. } => "gift_card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Card { last_four } => write!(f, "card ending {last_four}"),
            PaymentMethod::Cash => write!(f, "cash"),
            PaymentMethod::GiftCard { .. } => write!(f, "gift card"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_kind() {
        assert_eq!(PaymentMethod::card("4242").kind(), "card");
        assert_eq!(PaymentMethod::Cash.kind(), "cash");
        assert_eq!(PaymentMethod::gift_card("SWEET-10").kind(), "gift_card");
    }

    #[test]
    fn test_gift_card_code_not_displayed() {
        let display = PaymentMethod::gift_card("SWEET-10").to_string();
        assert_eq!(display, "gift card");
        assert!(!display.contains("SWEET"));
    }

    #[test]
    fn test_payment_serialization_tagged() {
        let json = serde_json::to_value(PaymentMethod::card("4242")).unwrap();
        assert_eq!(json["type"], "card");
        assert_eq!(json["last_four"], "4242");
    }
}
