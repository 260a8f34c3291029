//! The save + log-append commit unit.

use scoopstock_inventory::Snapshot;
use scoopstock_store::{HistoryLog, HistoryRecord, SnapshotStore, StoreResult};

/// Persist an accepted update: snapshot save and history append as one
/// logical unit.
///
/// If the append fails after the snapshot was saved, the previous snapshot
/// is written back so the two artifacts never disagree about whether the
/// update happened. The caller keeps `previous` untouched until this
/// returns `Ok`.
pub fn commit_update(
    snapshots: &SnapshotStore,
    history: &HistoryLog,
    previous: &Snapshot,
    updated: &Snapshot,
    record: &HistoryRecord,
) -> StoreResult<()> {
    snapshots.save(updated)?;

    if let Err(append_err) = history.append(record) {
        match snapshots.save(previous) {
            Ok(()) => {
                tracing::warn!("history append failed, snapshot rolled back");
            }
            Err(rollback_err) => {
                // Both artifacts are now suspect; log loudly and surface
                // the original failure.
                tracing::error!(
                    %rollback_err,
                    "history append failed and the snapshot rollback also failed"
                );
            }
        }
        return Err(append_err);
    }

    tracing::info!(
        user = %record.user,
        category = %record.category,
        product = %record.product,
        amount = %record.amount,
        "stock update committed"
    );
    Ok(())
}
