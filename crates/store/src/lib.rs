//! `scoopstock-store` — file-backed persistence.
//!
//! Two artifacts, both process-wide singletons with no locking: the JSON
//! snapshot document and the CSV history log. Concurrent processes writing
//! simultaneously lose updates (last-write-wins); this is a documented
//! limitation of the tool, not something this crate papers over.

pub mod error;
pub mod history;
pub mod snapshot_store;

pub use error::{StoreError, StoreResult};
pub use history::{HistoryLog, HistoryRecord};
pub use snapshot_store::SnapshotStore;
