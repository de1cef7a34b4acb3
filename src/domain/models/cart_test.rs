use anyhow::Result;
use test_utils::cart_fixture;
use test_utils::empty_cart_fixture;

use super::Cart;
use super::CartSummary;

#[test]
fn it_decodes_a_null_item_list_as_empty() -> Result<()> {
    let cart: Cart = serde_json::from_str(&empty_cart_fixture(4))?;

    assert_eq!(cart.id, 4);
    assert!(cart.items.is_empty());

    return Ok(());
}

#[test]
fn it_decodes_a_missing_item_list_as_empty() -> Result<()> {
    let cart: Cart = serde_json::from_str(r#"{"id": 9}"#)?;
    assert!(cart.items.is_empty());
    return Ok(());
}

#[test]
fn it_summarizes_cart_lines() -> Result<()> {
    let cart: Cart = serde_json::from_str(&cart_fixture(4, 3))?;
    let summary = CartSummary::from(cart);

    assert_eq!(summary.item_count, 2);
    assert_eq!(summary.quantity, 4);
    assert_eq!(summary.total, 67.5);
    assert!(!summary.is_empty());

    return Ok(());
}

#[test]
fn it_summarizes_an_empty_cart() {
    let summary = CartSummary::default();

    assert_eq!(summary.item_count, 0);
    assert_eq!(summary.quantity, 0);
    assert_eq!(summary.total, 0.0);
    assert!(summary.is_empty());
}

#[test]
fn it_totals_a_fetched_empty_cart_as_positive_zero() -> Result<()> {
    let cart: Cart = serde_json::from_str(&empty_cart_fixture(12))?;
    let summary = CartSummary::from(cart);

    assert!(summary.total.is_sign_positive());
    assert_eq!(format!("{:.2}", summary.total), "0.00");

    return Ok(());
}
