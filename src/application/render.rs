#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

use crate::domain::models::CartSummary;
use crate::domain::models::Category;
use crate::domain::models::Product;
use crate::domain::models::Review;
use crate::domain::models::Session;
use crate::domain::models::RATINGS;

pub fn price(amount: f64) -> String {
    return format!("${amount:.2}");
}

pub fn stars(rating: i64) -> String {
    let max = *RATINGS.end();
    let filled = rating.clamp(0, max) as usize;

    return format!("{}{}", "★".repeat(filled), "☆".repeat(max as usize - filled));
}

fn category_name(categories: &[Category], id: i64) -> Option<&str> {
    return categories
        .iter()
        .find(|category| return category.id == id)
        .map(|category| return category.name.as_str());
}

pub fn product_line(product: &Product, categories: &[Category]) -> String {
    let line = format!("#{} {} - {}", product.id, product.name, price(product.price));
    if let Some(name) = category_name(categories, product.category_id) {
        return format!("{line} ({name})");
    }

    return line;
}

pub fn product_list(products: &[Product], categories: &[Category]) -> String {
    if products.is_empty() {
        return "No products found.".to_string();
    }

    return products
        .iter()
        .map(|product| return product_line(product, categories))
        .collect::<Vec<String>>()
        .join("\n");
}

pub fn category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    return categories
        .iter()
        .map(|category| return format!("#{} {}", category.id, category.name))
        .collect::<Vec<String>>()
        .join("\n");
}

pub fn review_line(review: &Review) -> String {
    let date = review.created_at.format("%Y-%m-%d");
    if review.comment.is_empty() {
        return format!("{} ({date})", stars(review.rating));
    }

    return format!("{} {} ({date})", stars(review.rating), review.comment);
}

pub fn product_details(product: &Product, reviews: &[Review]) -> String {
    let mut lines = vec![format!("{} - {}", product.name, price(product.price))];
    if !product.description.is_empty() {
        lines.push(product.description.to_string());
    }

    lines.push("".to_string());
    if reviews.is_empty() {
        lines.push("No reviews yet.".to_string());
    } else {
        lines.push("Reviews:".to_string());
        lines.extend(reviews.iter().map(|review| return format!("  {}", review_line(review))));
    }

    return lines.join("\n");
}

pub fn cart_badge(cart: &CartSummary) -> String {
    return format!("Cart ({}) {}", cart.item_count, price(cart.total));
}

pub fn cart(cart: &CartSummary) -> String {
    if cart.is_empty() {
        return "Your cart is empty.".to_string();
    }

    let mut lines = cart
        .items
        .iter()
        .map(|item| {
            return format!(
                "{} x {} - {}",
                item.quantity,
                item.product.name,
                price(item.line_total())
            );
        })
        .collect::<Vec<String>>();
    lines.push(format!(
        "Items: {} ({} units) - Total: {}",
        cart.item_count,
        cart.quantity,
        price(cart.total)
    ));

    return lines.join("\n");
}

pub fn session(session: &Session) -> String {
    if !session.logged_in {
        return "Not logged in.".to_string();
    }

    if let Some(user_id) = session.user_id {
        return format!("Logged in as user #{user_id}.");
    }

    return "Logged in.".to_string();
}
