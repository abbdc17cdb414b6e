//! Prompt construction for the routine request.

use crate::catalog::entities::Product;
use std::fmt::Write;

/// System instruction sent at the start of every routine conversation.
pub const SYSTEM_PROMPT: &str = "You are a beauty advisor. Build a simple, \
step-by-step routine using only the products the user selected. Explain the \
order of use and when to apply each product (morning, evening, or both). \
Keep answers friendly and concise, and only discuss skincare, haircare, \
makeup, fragrance, and related routines.";

/// Build the opening user message enumerating the selected products.
///
/// Each line carries index, name, brand, category, and description so the
/// model can reason about the full selection.
pub fn routine_request(products: &[&Product]) -> String {
    let mut message = String::from(
        "Please create a personalized routine with these products:\n",
    );
    for (index, product) in products.iter().enumerate() {
        let _ = write!(
            message,
            "\n{}. {} by {} ({}): {}",
            index + 1,
            product.name,
            product.brand,
            product.category,
            product.description,
        );
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entities::Category;

    #[test]
    fn test_routine_request_enumerates_products() {
        let serum = Product::new(
            3,
            "Revitalift Serum",
            "Glow Labs",
            Category::Moisturizer,
            "img/serum.jpg",
            "Hyaluronic acid serum.",
        );
        let spray = Product::new(
            4,
            "Elnett Hairspray",
            "Satin Works",
            Category::Haircare,
            "img/elnett.jpg",
            "Strong hold.",
        );

        let message = routine_request(&[&serum, &spray]);
        assert!(message.contains("1. Revitalift Serum by Glow Labs (moisturizer): Hyaluronic acid serum."));
        assert!(message.contains("2. Elnett Hairspray by Satin Works (haircare): Strong hold."));
    }

    #[test]
    fn test_routine_request_indexes_from_one() {
        let product = Product::new(1, "A", "B", Category::Cleanser, "a.jpg", "d");
        let message = routine_request(&[&product]);
        assert!(message.contains("\n1. "));
        assert!(!message.contains("\n0. "));
    }
}
