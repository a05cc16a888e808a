//! End-to-end account lifecycle: register, shop, check out, deactivate.

mod common;

use keanus_candy::domain::MoneyError;
use keanus_candy::{Candy, DomainError, PaymentMethod, Person, SharedAccount};

#[test]
fn test_login_shop_checkout() -> anyhow::Result<()> {
    common::init();
    let catalog = common::catalog();
    let mut account = common::customer(1, "a@x.com");

    assert!(account.authenticate("a@x.com", "secret123"));
    assert!(account.get_cart().is_none());

    account.add_item_to_cart(&catalog[0], 2)?;
    account.add_item_to_cart(&catalog[2], 4)?;

    let payment = PaymentMethod::card("4242");
    let order = account.checkout(payment.clone())?;

    assert_eq!(order.total_amount().to_string(), "10.00");
    assert_eq!(order.payment_method(), &payment);
    assert_eq!(order.customer_id(), account.id());
    assert_eq!(account.order_count(), 1);
    assert!(account.get_cart().map(|cart| cart.lines().is_empty()).unwrap_or(false));

    Ok(())
}

#[test]
fn test_each_checkout_appends_one_order() -> anyhow::Result<()> {
    let catalog = common::catalog();
    let mut account = common::customer(2, "b@x.com");

    for (round, candy) in catalog.iter().enumerate() {
        account.add_item_to_cart(candy, 1)?;
        let before = account.order_count();

        account.checkout(PaymentMethod::Cash)?;

        assert_eq!(account.order_count(), before + 1);
        assert_eq!(account.order_count(), round + 1);
    }

    let names: Vec<String> = account
        .list_orders()
        .iter()
        .map(|order| order.lines()[0].name().to_string())
        .collect();
    assert_eq!(names, vec!["Chocolate Bar", "Gummy Bears", "Jawbreaker"]);

    Ok(())
}

#[test]
fn test_checkout_before_shopping_fails() {
    let mut account = common::customer(3, "c@x.com");

    assert_eq!(
        account.checkout(PaymentMethod::Cash).map(|_| ()),
        Err(DomainError::EmptyCart)
    );
    assert!(account.list_orders().is_empty());
}

#[test]
fn test_deactivation_blocks_login_only() -> anyhow::Result<()> {
    let catalog = common::catalog();
    let mut account = common::customer(4, "a@x.com");
    assert!(account.authenticate("a@x.com", "secret123"));

    account.deactivate(Some("fraud".to_string()));

    assert!(!account.authenticate("a@x.com", "secret123"));
    assert_eq!(account.deactivation_reason(), Some("fraud"));

    account.add_item_to_cart(&catalog[1], 1)?;
    account.checkout(PaymentMethod::gift_card("SWEET-10"))?;
    assert_eq!(account.order_count(), 1);

    Ok(())
}

#[test]
fn test_email_change_requires_reverification() {
    let mut account = common::customer(5, "old@x.com");
    account.verify_email();
    assert!(account.identity().is_email_verified());

    account.update_email("new@x.com");

    assert!(!account.identity().is_email_verified());
    assert_eq!(account.display_info(), "Customer (new@x.com)");
    assert!(account.authenticate("new@x.com", "secret123"));
}

#[test]
fn test_shared_account_across_threads() -> anyhow::Result<()> {
    let catalog = common::catalog();
    let account = SharedAccount::new(common::customer(6, "d@x.com"));

    std::thread::scope(|scope| {
        for candy in &catalog {
            let account = account.clone();
            scope.spawn(move || account.add_item_to_cart(candy, 3).unwrap());
        }
    });

    let order = account.checkout(PaymentMethod::Cash)?;
    assert_eq!(order.item_count(), 9);
    assert_eq!(order.total_amount().to_string(), "19.50");
    assert_eq!(account.order_count(), 1);

    Ok(())
}

#[test]
fn test_checkout_never_exceeds_max_amount() -> anyhow::Result<()> {
    let too_expensive = Candy::priced("Gold Bar", "79228162514264337593543950335", 5);
    assert_eq!(
        too_expensive.map(|_| ()),
        Err(DomainError::InvalidMoney(MoneyError::Overflow))
    );

    let gold = Candy::priced("Gold Bar", "500000000000", 5)?;
    let mut account = common::customer(7, "gold@x.com");

    account.add_item_to_cart(&gold, 2)?;
    let result = account.add_item_to_cart(&gold, 1);
    assert_eq!(result, Err(DomainError::InvalidMoney(MoneyError::Overflow)));

    let order = account.checkout(PaymentMethod::Cash)?;
    assert_eq!(order.item_count(), 2);
    assert_eq!(order.total_amount().to_string(), "1000000000000.00");

    Ok(())
}
