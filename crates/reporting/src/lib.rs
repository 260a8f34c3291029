//! `scoopstock-reporting` — the administrator's view over a snapshot.
//!
//! Pure derivations: per-category and grand totals, display formatting,
//! and the per-category spreadsheet export rows. Rendering the actual
//! spreadsheet and chart belongs to the UI collaborator.

pub mod export;
pub mod format;
pub mod report;

pub use export::{export_sheet, ExportRow, ExportSheet};
pub use format::{format_category_total, format_grand_total, format_quantity, EMPTY_MARKER};
pub use report::{build_report, CategoryReport, InventoryReport, ReportLine};
