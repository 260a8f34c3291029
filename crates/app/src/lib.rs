//! `scoopstock-app` — session orchestration.
//!
//! Wires the catalog, directory, stores, and rules together into the two
//! role panels. The actual widget rendering lives behind the [`Frontend`]
//! trait; everything here is plain synchronous control flow, one
//! load-mutate-save cycle per interaction.

pub mod commit;
pub mod session;
pub mod ui;

pub use commit::commit_update;
pub use session::App;
pub use ui::Frontend;

/// Initialize process-wide logging. Idempotent.
pub fn init_telemetry() {
    scoopstock_observability::init();
}
