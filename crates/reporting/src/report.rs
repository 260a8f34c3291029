//! Per-category and grand-total aggregation.

use scoopstock_catalog::{Catalog, InputMode};
use scoopstock_core::Quantity;
use scoopstock_inventory::Snapshot;

use crate::format::{format_category_total, format_quantity};

/// One product line, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub product: String,
    pub quantity: Quantity,
    pub rendered: String,
}

/// One category's lines plus its total.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    pub name: String,
    pub input_mode: InputMode,
    pub lines: Vec<ReportLine>,
    pub total: f64,
    pub rendered_total: String,
}

/// The administrator's full view.
///
/// `grand_total` sums every category total without unit conversion, kilos
/// and piece counts together. Inherited behavior, kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryReport {
    pub categories: Vec<CategoryReport>,
    pub grand_total: f64,
}

impl InventoryReport {
    /// Per-category totals for the administrator's bar chart.
    pub fn chart_series(&self) -> Vec<(String, f64)> {
        self.categories
            .iter()
            .map(|c| (c.name.clone(), c.total))
            .collect()
    }
}

/// Aggregate a snapshot into the administrator view.
///
/// Categories follow catalog order. A product missing from the snapshot
/// (an older persisted document) reports its catalog-default zero.
pub fn build_report(catalog: &Catalog, snapshot: &Snapshot) -> InventoryReport {
    let mut grand_total = 0.0;
    let categories = catalog
        .categories()
        .iter()
        .map(|spec| {
            let lines: Vec<ReportLine> = spec
                .products()
                .iter()
                .map(|product| {
                    let quantity = snapshot
                        .quantity(spec.name(), product)
                        .unwrap_or_else(|| spec.initial_quantity());
                    ReportLine {
                        product: product.clone(),
                        rendered: format_quantity(quantity),
                        quantity,
                    }
                })
                .collect();
            let total: f64 = lines.iter().map(|l| l.quantity.as_f64()).sum();
            grand_total += total;
            CategoryReport {
                name: spec.name().to_string(),
                input_mode: spec.input_mode(),
                rendered_total: format_category_total(total, spec.input_mode()),
                lines,
                total,
            }
        })
        .collect();

    InventoryReport {
        categories,
        grand_total,
    }
}
