//! Topic allow-list screening for follow-up questions.
//!
//! Inputs that mention none of the allowed topics are answered with a fixed
//! refusal instead of a remote call.

/// Topic keywords a follow-up question must mention (case-insensitive
/// substring match) to reach the completion endpoint.
pub const ALLOWED_TOPICS: &[&str] = &[
    "skincare",
    "skin",
    "haircare",
    "hair",
    "makeup",
    "fragrance",
    "routine",
    "product",
    "cleanser",
    "moisturizer",
    "serum",
    "sunscreen",
    "suncare",
    "spf",
    "shampoo",
    "conditioner",
    "toner",
    "lotion",
];

/// Scripted assistant reply for inputs that fail the screen.
pub const REFUSAL_MESSAGE: &str = "I can only help with questions about skincare, \
haircare, makeup, fragrance, or your routine. Try asking about one of your \
selected products!";

/// Check an input against the topic allow-list.
pub fn is_on_topic(input: &str) -> bool {
    let lowered = input.to_lowercase();
    ALLOWED_TOPICS.iter().any(|topic| lowered.contains(topic))
}
