//! The UI collaborator boundary.
//!
//! The session layer never draws anything: it asks the frontend for inputs
//! and hands it finished values to present. A frontend call represents the
//! state of one interaction (one form submit), so "was this action
//! triggered" is a plain question, not a callback registration.

use chrono::NaiveDate;

use scoopstock_reporting::ExportSheet;
use scoopstock_store::HistoryRecord;

/// Everything the session flows need from the UI layer.
pub trait Frontend {
    /// Free-text operator identifier. May be empty ("not yet entered").
    fn request_identifier(&mut self, prompt: &str) -> String;

    /// Choice among a fixed set of labels; returns the chosen index.
    fn choose(&mut self, prompt: &str, options: &[&str]) -> usize;

    /// Numeric input presented with a non-negative-integer constraint.
    /// Returns `i64` anyway: the update rule owns the rejection of
    /// negative values, not the widget.
    fn read_count(&mut self, prompt: &str) -> i64;

    /// Date picker for the load date recorded in the history log.
    fn pick_date(&mut self, prompt: &str) -> NaiveDate;

    /// Whether the named action was triggered this interaction.
    fn triggered(&mut self, label: &str) -> bool;

    fn info(&mut self, message: &str);

    fn warn(&mut self, message: &str);

    /// Offer a per-category spreadsheet export as a downloadable artifact.
    fn offer_download(&mut self, sheet: &ExportSheet);

    /// Render the per-category totals bar chart.
    fn render_chart(&mut self, series: &[(String, f64)]);

    /// Render the filtered history table.
    fn show_history(&mut self, records: &[HistoryRecord]);
}
