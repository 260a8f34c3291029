//! `scoopstock-inventory` — snapshot state and the stock update rule.
//!
//! Business rules only: deterministic, no IO. Loading and persisting the
//! snapshot is the store crate's job; the session layer wires the two
//! together.

pub mod snapshot;
pub mod update;

pub use snapshot::{CategoryStock, ProductStock, Snapshot};
pub use update::{
    AppliedUpdate, PailBatch, StockInput, StockUpdate, UpdateMode, apply_update, PAILS_PER_UPDATE,
};
