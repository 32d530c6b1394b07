//! SKU and barcode generation for newly created products.

use rand::Rng;

/// Generate a SKU from a product name: the upper-cased initials of up to the
/// first two words, a dash, and a random 4-digit number.
///
/// "Premium Espresso Beans" -> "PE-4821".
pub fn generate_sku(name: &str, rng: &mut impl Rng) -> String {
    let prefix: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect();
    let prefix = if prefix.is_empty() {
        "XX".to_string()
    } else {
        prefix
    };
    format!("{}-{}", prefix, rng.gen_range(1000..10_000))
}

/// Generate a random 12-digit barcode (first digit nonzero).
pub fn generate_barcode(rng: &mut impl Rng) -> String {
    rng.gen_range(100_000_000_000u64..1_000_000_000_000u64)
        .to_string()
}
