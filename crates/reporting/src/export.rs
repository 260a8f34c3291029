//! Per-category spreadsheet export rows.
//!
//! The UI collaborator turns these into an actual downloadable .xlsx; this
//! side only decides the rows and the derived filename.

use scoopstock_core::Quantity;
use scoopstock_inventory::CategoryStock;

/// One {product, quantity} row of the export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub product: String,
    pub quantity: Quantity,
}

/// A ready-to-render export for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSheet {
    /// `inventory_<category-slug>.xlsx`.
    pub filename: String,
    pub rows: Vec<ExportRow>,
}

/// Build the export for one category of the snapshot.
pub fn export_sheet(category: &CategoryStock) -> ExportSheet {
    ExportSheet {
        filename: format!("inventory_{}.xlsx", slug(category.name())),
        rows: category
            .products()
            .iter()
            .map(|p| ExportRow {
                product: p.name().to_string(),
                quantity: p.quantity(),
            })
            .collect(),
    }
}

fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}
