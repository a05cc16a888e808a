//! Common test utilities

#![allow(dead_code)]

use keanus_candy::{telemetry, Account, Candy, Config, Money, StaffAccount};

/// Install a subscriber once so lifecycle events show up with `--nocapture`
pub fn init() {
    telemetry::init_tracing(&Config::default());
}

pub fn customer(id: u64, email: &str) -> Account {
    Account::register(id, "Customer", email, "secret123")
}

pub fn manager() -> StaffAccount {
    StaffAccount::register(100, "Keanu", "keanu@candy.shop", "manager-pass", "Store Manager")
}

/// Small catalog: chocolate bar, gummy bears, jawbreaker
pub fn catalog() -> Vec<Candy> {
    vec![
        Candy::new("Chocolate Bar", Money::from_cents(350), 20),
        Candy::new("Gummy Bears", Money::from_cents(225), 50),
        Candy::new("Jawbreaker", Money::from_cents(75), 100),
    ]
}
