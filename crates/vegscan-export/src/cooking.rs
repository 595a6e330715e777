//! Suggested cooking method, inferred from a product's text fields.

use vegscan_core::Product;

/// Returned when no rule matches.
pub const NO_SUGGESTION: &str = "No specific cooking method suggested";

/// Ordered rules: any keyword hit adds the advice. Rules are independent, so
/// several can fire for one product; output keeps this order.
const RULES: &[(&[&str], &str)] = &[
    (&["frozen", "congelad"], "Defrost before cooking"),
    (&["burger", "hambúrguer", "hamburguer"], "Pan fry or grill"),
    (&["meatball", "almôndega", "almondega"], "Pan fry or bake"),
    (&["oven", "forno"], "Oven bake"),
];

/// Returns the comma-joined advice for every matching rule, or
/// [`NO_SUGGESTION`].
#[must_use]
pub fn suggest_cooking_methods(product: &Product) -> String {
    let haystack = [
        Some(product.name.as_str()),
        product.product_type.as_deref(),
        product.description.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase();

    let advice: Vec<&str> = RULES
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|k| haystack.contains(k)))
        .map(|(_, advice)| *advice)
        .collect();

    if advice.is_empty() {
        NO_SUGGESTION.to_owned()
    } else {
        advice.join(", ")
    }
}
