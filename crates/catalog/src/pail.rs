//! Pail fill levels for the weight-measured category.

use serde::{Deserialize, Serialize};

/// How full one ice cream pail is, mapped to kilos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PailLevel {
    Empty,
    NearlyFull,
    HalfFull,
    Full,
}

impl PailLevel {
    /// All levels, in the order the operator is offered them.
    pub const ALL: [PailLevel; 4] = [
        PailLevel::Empty,
        PailLevel::NearlyFull,
        PailLevel::HalfFull,
        PailLevel::Full,
    ];

    /// Kilos contributed by a pail at this level.
    pub fn fill(self) -> f64 {
        match self {
            PailLevel::Empty => 0.0,
            PailLevel::NearlyFull => 0.3,
            PailLevel::HalfFull => 0.5,
            PailLevel::Full => 1.0,
        }
    }

    /// Operator-facing label.
    pub fn label(self) -> &'static str {
        match self {
            PailLevel::Empty => "Vacío",
            PailLevel::NearlyFull => "Casi lleno",
            PailLevel::HalfFull => "Medio lleno",
            PailLevel::Full => "Valde lleno",
        }
    }
}
