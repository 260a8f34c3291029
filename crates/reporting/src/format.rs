//! Display formatting for quantities and totals.

use scoopstock_catalog::InputMode;
use scoopstock_core::Quantity;

/// Rendered in place of a zero quantity.
pub const EMPTY_MARKER: &str = "Vacío";

/// One product quantity for display: kilos with two decimals and a unit
/// suffix, counts as plain integers, zero as the empty marker.
pub fn format_quantity(quantity: Quantity) -> String {
    if quantity.is_zero() {
        return EMPTY_MARKER.to_string();
    }
    match quantity {
        Quantity::Count(n) => n.to_string(),
        Quantity::Kilos(kg) => format!("{kg:.2} kilos"),
    }
}

/// A category total, in the category's own unit.
pub fn format_category_total(total: f64, mode: InputMode) -> String {
    match mode {
        InputMode::Unit => format!("{}", total as u64),
        InputMode::WeighedPails => format!("{total:.2} kilos"),
    }
}

/// The cross-category grand total. Always two decimals: it mixes kilos
/// and piece counts, so there is no single unit to name.
pub fn format_grand_total(total: f64) -> String {
    format!("{total:.2}")
}
