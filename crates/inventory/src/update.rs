//! The stock update rule.
//!
//! Turns an operator's entry — a direct count or six pail selections —
//! into a validated quantity change. Validation happens before any
//! mutation: a rejected update leaves the snapshot untouched and produces
//! nothing for the store or the history log.

use serde::{Deserialize, Serialize};

use scoopstock_catalog::{Catalog, InputMode, PailLevel};
use scoopstock_core::{DomainError, DomainResult, Quantity};

use crate::Snapshot;

/// Pail selections per update. Fixed by the shop's freezer layout.
pub const PAILS_PER_UPDATE: usize = 6;

/// Whether the entered total is added to or replaces the current quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMode {
    Add,
    Replace,
}

/// Exactly six pail fill selections, summed into kilos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PailBatch([PailLevel; PAILS_PER_UPDATE]);

impl PailBatch {
    pub fn new(levels: [PailLevel; PAILS_PER_UPDATE]) -> Self {
        Self(levels)
    }

    pub fn levels(&self) -> &[PailLevel; PAILS_PER_UPDATE] {
        &self.0
    }

    /// Total kilos: the exact sum of the six mapped fills. Non-negative by
    /// construction.
    pub fn total(&self) -> f64 {
        self.0.iter().map(|level| level.fill()).sum()
    }
}

/// The operator's entered value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StockInput {
    /// Direct quantity mode (unit-counted and misc categories). Signed so
    /// that a negative entry can be rejected here rather than assumed away.
    Count(i64),
    /// Container-fill mode (weight-measured category).
    Pails(PailBatch),
}

/// One requested stock change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockUpdate {
    pub category: String,
    pub product: String,
    pub mode: UpdateMode,
    pub input: StockInput,
}

/// Outcome of an accepted update, ready for persistence and the history
/// log.
///
/// `amount` is the literal input total, not the resulting delta: in add
/// mode the history records what the operator entered, exactly as the
/// reporting side expects.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedUpdate {
    pub category: String,
    pub product: String,
    pub amount: Quantity,
    pub new_level: Quantity,
}

/// Apply one update to the snapshot.
///
/// Checks, in order: the category exists, its input mode matches the
/// entry, the total is non-negative, and the product exists. Only then is
/// the snapshot mutated; the caller is responsible for persisting it.
pub fn apply_update(
    snapshot: &mut Snapshot,
    catalog: &Catalog,
    update: &StockUpdate,
) -> DomainResult<AppliedUpdate> {
    let spec = catalog
        .get(&update.category)
        .ok_or_else(|| DomainError::unknown_category(&update.category))?;

    let amount = match (spec.input_mode(), update.input) {
        (InputMode::Unit, StockInput::Count(n)) => {
            if n < 0 {
                return Err(DomainError::NegativeInput(n));
            }
            Quantity::Count(n as u64)
        }
        (InputMode::WeighedPails, StockInput::Pails(batch)) => Quantity::Kilos(batch.total()),
        (InputMode::Unit, StockInput::Pails(_)) => {
            return Err(DomainError::validation(format!(
                "category {:?} takes a direct count, not pail selections",
                update.category
            )));
        }
        (InputMode::WeighedPails, StockInput::Count(_)) => {
            return Err(DomainError::validation(format!(
                "category {:?} takes pail selections, not a direct count",
                update.category
            )));
        }
    };

    let current = snapshot
        .quantity(&update.category, &update.product)
        .ok_or_else(|| DomainError::unknown_product(&update.category, &update.product))?;

    let new_level = match update.mode {
        UpdateMode::Add => current.checked_add(amount).ok_or_else(|| {
            DomainError::validation(format!(
                "cannot add {amount} to the current stock of {:?}/{:?}",
                update.category, update.product
            ))
        })?,
        UpdateMode::Replace => amount,
    };

    snapshot.set_quantity(&update.category, &update.product, new_level)?;

    Ok(AppliedUpdate {
        category: update.category.clone(),
        product: update.product.clone(),
        amount,
        new_level,
    })
}
