use anyhow::Result;
use test_utils::cart_fixture;
use test_utils::categories_fixture;
use test_utils::products_fixture;
use test_utils::reviews_fixture;

use super::*;
use crate::domain::models::Cart;
use crate::domain::models::CartSummary;
use crate::domain::models::Category;
use crate::domain::models::Product;
use crate::domain::models::Review;
use crate::domain::models::Session;

fn catalog() -> Result<(Vec<Product>, Vec<Category>)> {
    let products = serde_json::from_str::<Vec<Product>>(products_fixture())?;
    let categories = serde_json::from_str::<Vec<Category>>(categories_fixture())?;

    return Ok((products, categories));
}

#[test]
fn it_draws_stars_within_the_rating_range() {
    assert_eq!(stars(4), "★★★★☆");
    assert_eq!(stars(0), "☆☆☆☆☆");
    assert_eq!(stars(9), "★★★★★");
}

#[test]
fn it_lists_products_with_category_names() -> Result<()> {
    let (products, categories) = catalog()?;
    insta::assert_snapshot!(product_list(&products, &categories), @r###"
    #1 Darjeeling Tea - $12.50 (Tea)
    #2 Ceramic Teapot - $30.00 (Teaware)
    "###);

    assert_eq!(
        product_line(&products[0], &[]),
        "#1 Darjeeling Tea - $12.50"
    );
    assert_eq!(product_list(&[], &categories), "No products found.");

    return Ok(());
}

#[test]
fn it_lists_categories() -> Result<()> {
    let (_, categories) = catalog()?;

    assert_eq!(category_list(&categories), "#2 Tea\n#3 Teaware");
    assert_eq!(category_list(&[]), "No categories found.");

    return Ok(());
}

#[test]
fn it_shows_product_details_with_reviews() -> Result<()> {
    let (products, _) = catalog()?;
    let reviews = serde_json::from_str::<Vec<Review>>(reviews_fixture())?;

    assert_eq!(
        product_details(&products[0], &reviews),
        [
            "Darjeeling Tea - $12.50",
            "First flush, loose leaf.",
            "",
            "Reviews:",
            "  ★★★★☆ Bright and floral. (2024-03-06)",
        ]
        .join("\n")
    );
    assert_eq!(
        product_details(&products[1], &[]),
        "Ceramic Teapot - $30.00\nHolds four cups.\n\nNo reviews yet."
    );

    return Ok(());
}

#[test]
fn it_renders_the_cart() -> Result<()> {
    let cart = serde_json::from_str::<Cart>(&cart_fixture(4, 3))?;
    let summary = CartSummary::from(cart);

    insta::assert_snapshot!(super::cart(&summary), @r###"
    3 x Darjeeling Tea - $37.50
    1 x Ceramic Teapot - $30.00
    Items: 2 (4 units) - Total: $67.50
    "###);
    insta::assert_snapshot!(cart_badge(&summary), @"Cart (2) $67.50");

    return Ok(());
}

#[test]
fn it_renders_an_empty_cart() {
    let summary = CartSummary::default();

    assert_eq!(super::cart(&summary), "Your cart is empty.");
    assert_eq!(cart_badge(&summary), "Cart (0) $0.00");
    assert_eq!(cart_badge(&CartSummary::new(vec![])), "Cart (0) $0.00");
}

#[test]
fn it_describes_the_session() {
    assert_eq!(session(&Session::default()), "Not logged in.");
    assert_eq!(
        session(&Session {
            logged_in: true,
            user_id: Some(3),
        }),
        "Logged in as user #3."
    );
}
