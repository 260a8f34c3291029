//! Role-gated session flows.
//!
//! One `run_once` call handles one interaction: resolve the operator,
//! load the snapshot, and hand control to the staff or administrator
//! panel. Mirrors the request-per-interaction model of the hosting UI:
//! no background work, no state kept between calls beyond the files.

use anyhow::Context;

use scoopstock_auth::{LoginOutcome, Role, UserDirectory};
use scoopstock_catalog::{Catalog, CategorySpec, InputMode, PailLevel};
use scoopstock_core::Quantity;
use scoopstock_inventory::{
    apply_update, PailBatch, Snapshot, StockInput, StockUpdate, UpdateMode, PAILS_PER_UPDATE,
};
use scoopstock_reporting::{build_report, export_sheet, format_grand_total, format_quantity};
use scoopstock_store::{HistoryLog, HistoryRecord, SnapshotStore};

use crate::ui::Frontend;

/// The assembled application: immutable configuration plus the two
/// persistence handles, injected once at startup.
pub struct App {
    catalog: Catalog,
    directory: UserDirectory,
    snapshots: SnapshotStore,
    history: HistoryLog,
}

impl App {
    pub fn new(
        catalog: Catalog,
        directory: UserDirectory,
        snapshots: SnapshotStore,
        history: HistoryLog,
    ) -> Self {
        Self {
            catalog,
            directory,
            snapshots,
            history,
        }
    }

    /// Handle one interaction end to end.
    ///
    /// A denied login reports to the operator and changes nothing. A
    /// malformed snapshot document surfaces as an error; everything else
    /// that fails mid-panel is reported to the operator and leaves the
    /// persisted state unchanged.
    pub fn run_once(&self, frontend: &mut dyn Frontend) -> anyhow::Result<()> {
        let identifier = frontend.request_identifier("Usuario");
        let (user, role) = match self.directory.resolve(&identifier) {
            LoginOutcome::NotEntered => {
                frontend.info("Por favor, ingresa un usuario válido para continuar.");
                return Ok(());
            }
            LoginOutcome::UnknownUser => {
                tracing::info!(%identifier, "login rejected");
                frontend.warn("Usuario no reconocido");
                return Ok(());
            }
            LoginOutcome::Granted { user, role } => (user, role),
        };

        frontend.info(&format!("Hola {user}, rol: {role}"));
        let snapshot = self
            .snapshots
            .load(&self.catalog)
            .context("loading the inventory snapshot")?;

        match role {
            Role::Staff => self.staff_panel(frontend, snapshot, &user),
            Role::Administrator => self.admin_panel(frontend, snapshot),
        }
    }

    /// Staff view: record stock per category, then show that category's
    /// current levels.
    fn staff_panel(
        &self,
        frontend: &mut dyn Frontend,
        mut snapshot: Snapshot,
        user: &str,
    ) -> anyhow::Result<()> {
        let date = frontend.pick_date("Fecha de carga");

        for spec in self.catalog.categories() {
            let products: Vec<&str> = spec.products().iter().map(String::as_str).collect();
            if products.is_empty() {
                continue;
            }
            let chosen = frontend.choose(
                &format!("Selecciona un producto de {}", spec.name()),
                &products,
            );
            let product = products[chosen.min(products.len() - 1)];

            let mode = match frontend.choose(
                "¿Deseas añadir a la cantidad existente o reemplazarla?",
                &["Añadir", "Reemplazar"],
            ) {
                0 => UpdateMode::Add,
                _ => UpdateMode::Replace,
            };

            let input = self.read_input(frontend, spec);

            if frontend.triggered(&format!(
                "Actualizar stock en {} para {product}",
                spec.name()
            )) {
                let update = StockUpdate {
                    category: spec.name().to_string(),
                    product: product.to_string(),
                    mode,
                    input,
                };
                self.record_update(frontend, &mut snapshot, &update, date, user);
            }

            if let Some(stock) = snapshot.category(spec.name()) {
                frontend.info(&format!("Inventario en categoría {}:", spec.name()));
                for product in stock.products() {
                    frontend.info(&format!(
                        "- {}: {}",
                        product.name(),
                        format_quantity(product.quantity())
                    ));
                }
            }
        }
        Ok(())
    }

    /// Ask for the category's kind of input: a direct count, or six pail
    /// fill selections.
    fn read_input(&self, frontend: &mut dyn Frontend, spec: &CategorySpec) -> StockInput {
        match spec.input_mode() {
            InputMode::Unit => StockInput::Count(frontend.read_count("Cantidad")),
            InputMode::WeighedPails => {
                let labels: Vec<&str> = PailLevel::ALL.iter().map(|l| l.label()).collect();
                let mut levels = [PailLevel::Empty; PAILS_PER_UPDATE];
                for (n, level) in levels.iter_mut().enumerate() {
                    let chosen = frontend.choose(&format!("Valde {}", n + 1), &labels);
                    *level = PailLevel::ALL[chosen.min(PailLevel::ALL.len() - 1)];
                }
                StockInput::Pails(PailBatch::new(levels))
            }
        }
    }

    /// Validate, apply, and commit one update. Rejections and store
    /// failures are reported to the operator; in either case the snapshot
    /// (in memory and on disk) ends up unchanged.
    fn record_update(
        &self,
        frontend: &mut dyn Frontend,
        snapshot: &mut Snapshot,
        update: &StockUpdate,
        date: chrono::NaiveDate,
        user: &str,
    ) {
        let previous = snapshot.clone();
        let applied = match apply_update(snapshot, &self.catalog, update) {
            Ok(applied) => applied,
            Err(err) => {
                frontend.warn(&err.to_string());
                return;
            }
        };

        let record = HistoryRecord {
            date,
            user: user.to_string(),
            category: applied.category.clone(),
            product: applied.product.clone(),
            amount: applied.amount,
        };

        match crate::commit_update(&self.snapshots, &self.history, &previous, snapshot, &record) {
            Ok(()) => {
                frontend.info(&format!(
                    "Stock actualizado para {} en {}. Nuevo stock: {}",
                    applied.product,
                    applied.category,
                    render_level(applied.new_level)
                ));
            }
            Err(err) => {
                *snapshot = previous;
                tracing::warn!(%err, "stock update not committed");
                frontend.warn(&format!("No se pudo guardar la actualización: {err}"));
            }
        }
    }

    /// Administrator view: totals, exports, chart, and the month-filtered
    /// history.
    fn admin_panel(&self, frontend: &mut dyn Frontend, snapshot: Snapshot) -> anyhow::Result<()> {
        let report = build_report(&self.catalog, &snapshot);

        for category in &report.categories {
            frontend.info(&format!("Categoría: {}", category.name));
            for line in &category.lines {
                frontend.info(&format!("- {}: {}", line.product, line.rendered));
            }
            frontend.info(&format!(
                "Total en {}: {}",
                category.name, category.rendered_total
            ));
        }
        frontend.info(&format!(
            "Total general en la heladería: {}",
            format_grand_total(report.grand_total)
        ));
        frontend.render_chart(&report.chart_series());

        for category in snapshot.categories() {
            frontend.offer_download(&export_sheet(category));
        }

        let records = self
            .history
            .load()
            .context("loading the stock history log")?;
        if records.is_empty() {
            frontend.info("Aún no hay registros en el historial.");
            return Ok(());
        }

        let year = frontend.read_count("Año");
        let month = frontend.read_count("Mes");
        let Ok(year) = i32::try_from(year) else {
            frontend.warn("Año o mes fuera de rango.");
            return Ok(());
        };
        if !(1..=12).contains(&month) {
            frontend.warn("Año o mes fuera de rango.");
            return Ok(());
        }
        let filtered = self
            .history
            .filter(year, month as u32)
            .context("filtering the stock history log")?;
        if filtered.is_empty() {
            frontend.warn("No hay registros para ese mes.");
        } else {
            frontend.show_history(&filtered);
        }
        Ok(())
    }
}

/// Success-message rendering: never the empty marker, a restock to zero
/// still shows its number.
fn render_level(level: Quantity) -> String {
    match level {
        Quantity::Count(n) => n.to_string(),
        Quantity::Kilos(kg) => format!("{kg:.2} kilos"),
    }
}
