//! Stock quantity value type.
//!
//! Unit-counted categories hold whole counts; the weight-measured category
//! holds kilos. Both serialize as plain JSON numbers so the persisted
//! snapshot stays a flat category → product → number document.

use serde::{Deserialize, Serialize};

/// Current stock level of one product.
///
/// # Invariants
/// - Never negative: counts are unsigned and accepted kilo totals are
///   validated to be >= 0 before they reach a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    /// Whole units (pieces, cups, spoons, ...).
    Count(u64),
    /// Kilograms, accumulated from pail fill fractions.
    Kilos(f64),
}

impl Quantity {
    /// The zero value matching `self`'s unit.
    pub fn zeroed(self) -> Self {
        match self {
            Quantity::Count(_) => Quantity::Count(0),
            Quantity::Kilos(_) => Quantity::Kilos(0.0),
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Quantity::Count(n) => n == 0,
            Quantity::Kilos(kg) => kg == 0.0,
        }
    }

    /// Numeric value, unit dropped. Used by the reporting rule, which sums
    /// counts and kilos together without conversion.
    pub fn as_f64(self) -> f64 {
        match self {
            Quantity::Count(n) => n as f64,
            Quantity::Kilos(kg) => kg,
        }
    }

    /// Same-unit addition. `None` when the units differ or a count sum
    /// would overflow; callers validate the input mode against the
    /// category before getting here.
    pub fn checked_add(self, rhs: Quantity) -> Option<Quantity> {
        match (self, rhs) {
            (Quantity::Count(a), Quantity::Count(b)) => a.checked_add(b).map(Quantity::Count),
            (Quantity::Kilos(a), Quantity::Kilos(b)) => Some(Quantity::Kilos(a + b)),
            _ => None,
        }
    }
}

impl core::fmt::Display for Quantity {
    /// Plain numeric rendering for persisted rows. Kilos always carry a
    /// decimal point so a reloaded row keeps its unit.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Quantity::Count(n) => write!(f, "{n}"),
            Quantity::Kilos(kg) if kg.fract() == 0.0 => write!(f, "{kg:.1}"),
            Quantity::Kilos(kg) => write!(f, "{kg}"),
        }
    }
}
