//! Black-box session tests: a scripted frontend drives the two role
//! panels over real files in a temp directory.

use std::collections::VecDeque;

use chrono::NaiveDate;
use tempfile::TempDir;

use scoopstock_app::{App, Frontend};
use scoopstock_auth::UserDirectory;
use scoopstock_catalog::Catalog;
use scoopstock_core::Quantity;
use scoopstock_reporting::ExportSheet;
use scoopstock_store::{HistoryLog, HistoryRecord, SnapshotStore};

/// Frontend double that replays queued answers and records every output.
#[derive(Default)]
struct ScriptedFrontend {
    identifier: String,
    date: Option<NaiveDate>,
    choices: VecDeque<usize>,
    counts: VecDeque<i64>,
    triggers: VecDeque<bool>,
    infos: Vec<String>,
    warnings: Vec<String>,
    downloads: Vec<ExportSheet>,
    charts: Vec<Vec<(String, f64)>>,
    shown_history: Vec<Vec<HistoryRecord>>,
}

impl ScriptedFrontend {
    fn for_user(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            date: Some("2024-03-05".parse().unwrap()),
            ..Self::default()
        }
    }

    fn saw_info(&self, needle: &str) -> bool {
        self.infos.iter().any(|m| m.contains(needle))
    }
}

impl Frontend for ScriptedFrontend {
    fn request_identifier(&mut self, _prompt: &str) -> String {
        self.identifier.clone()
    }

    fn choose(&mut self, _prompt: &str, _options: &[&str]) -> usize {
        self.choices.pop_front().unwrap_or(0)
    }

    fn read_count(&mut self, _prompt: &str) -> i64 {
        self.counts.pop_front().unwrap_or(0)
    }

    fn pick_date(&mut self, _prompt: &str) -> NaiveDate {
        self.date.expect("scripted frontend needs a date")
    }

    fn triggered(&mut self, _label: &str) -> bool {
        self.triggers.pop_front().unwrap_or(false)
    }

    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn offer_download(&mut self, sheet: &ExportSheet) {
        self.downloads.push(sheet.clone());
    }

    fn render_chart(&mut self, series: &[(String, f64)]) {
        self.charts.push(series.to_vec());
    }

    fn show_history(&mut self, records: &[HistoryRecord]) {
        self.shown_history.push(records.to_vec());
    }
}

fn app_in(dir: &TempDir) -> App {
    App::new(
        Catalog::reference(),
        UserDirectory::reference(),
        SnapshotStore::new(dir.path().join("inventory.json")),
        HistoryLog::new(dir.path().join("history.csv")),
    )
}

/// Staff interaction: add 5 cookies, replace the vanilla stock with two
/// full pails and a half, leave the extras alone.
fn staff_records_stock(dir: &TempDir) {
    let app = app_in(dir);
    let mut frontend = ScriptedFrontend::for_user("empleado1");
    // Impulsivo: Galletas, add. Por Kilos: Vainilla, replace, pails
    // [full, full, half, empty, empty, empty]. Extras: Vasos, add.
    frontend.choices = VecDeque::from([0, 0, 0, 1, 3, 3, 2, 0, 0, 0, 0, 0]);
    frontend.counts = VecDeque::from([5, 0]);
    frontend.triggers = VecDeque::from([true, true, false]);

    app.run_once(&mut frontend).unwrap();

    assert!(frontend.warnings.is_empty(), "{:?}", frontend.warnings);
    assert!(frontend.saw_info("Hola empleado1, rol: staff"));
    assert!(frontend.saw_info("Nuevo stock: 5"));
    assert!(frontend.saw_info("Nuevo stock: 2.50 kilos"));
}

#[test]
fn staff_updates_persist_to_both_artifacts() {
    let dir = TempDir::new().unwrap();
    staff_records_stock(&dir);

    let catalog = Catalog::reference();
    let snapshot = SnapshotStore::new(dir.path().join("inventory.json"))
        .load(&catalog)
        .unwrap();
    assert_eq!(
        snapshot.quantity("Impulsivo", "Galletas"),
        Some(Quantity::Count(5))
    );
    assert_eq!(
        snapshot.quantity("Por Kilos", "Helado Vainilla"),
        Some(Quantity::Kilos(2.5))
    );
    // Untriggered category: untouched.
    assert_eq!(snapshot.quantity("Extras", "Vasos"), Some(Quantity::Count(0)));

    let history = HistoryLog::new(dir.path().join("history.csv"))
        .load()
        .unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].product, "Galletas");
    assert_eq!(history[0].amount, Quantity::Count(5));
    assert_eq!(history[1].product, "Helado Vainilla");
    assert_eq!(history[1].amount, Quantity::Kilos(2.5));
}

#[test]
fn admin_sees_totals_exports_chart_and_history() {
    let dir = TempDir::new().unwrap();
    staff_records_stock(&dir);

    let app = app_in(&dir);
    let mut frontend = ScriptedFrontend::for_user("admin1");
    frontend.counts = VecDeque::from([2024, 3]);

    app.run_once(&mut frontend).unwrap();

    // 5 cookies + 2.5 kilos, summed without unit conversion.
    assert!(frontend.saw_info("Total general en la heladería: 7.50"));
    assert!(frontend.saw_info("Total en Por Kilos: 2.50 kilos"));
    assert!(frontend.saw_info("- Vasos: Vacío"));

    let filenames: Vec<_> = frontend.downloads.iter().map(|s| s.filename.as_str()).collect();
    assert_eq!(
        filenames,
        vec![
            "inventory_impulsivo.xlsx",
            "inventory_por_kilos.xlsx",
            "inventory_extras.xlsx"
        ]
    );

    assert_eq!(frontend.charts.len(), 1);
    assert_eq!(frontend.charts[0].len(), 3);
    assert_eq!(frontend.charts[0][1], ("Por Kilos".to_string(), 2.5));

    assert_eq!(frontend.shown_history.len(), 1);
    assert_eq!(frontend.shown_history[0].len(), 2);
}

#[test]
fn admin_history_filter_can_come_back_empty() {
    let dir = TempDir::new().unwrap();
    staff_records_stock(&dir);

    let app = app_in(&dir);
    let mut frontend = ScriptedFrontend::for_user("admin1");
    frontend.counts = VecDeque::from([2019, 11]);

    app.run_once(&mut frontend).unwrap();

    assert!(frontend
        .warnings
        .iter()
        .any(|w| w.contains("No hay registros para ese mes.")));
    assert!(frontend.shown_history.is_empty());
}

#[test]
fn out_of_range_month_is_reported_not_remapped() {
    let dir = TempDir::new().unwrap();
    staff_records_stock(&dir);

    let app = app_in(&dir);
    let mut frontend = ScriptedFrontend::for_user("admin1");
    frontend.counts = VecDeque::from([2024, 13]);

    app.run_once(&mut frontend).unwrap();

    assert!(frontend
        .warnings
        .iter()
        .any(|w| w.contains("fuera de rango")));
    assert!(frontend.shown_history.is_empty());
}

#[test]
fn admin_with_no_history_is_told_so() {
    let dir = TempDir::new().unwrap();
    let app = app_in(&dir);
    let mut frontend = ScriptedFrontend::for_user("admin1");

    app.run_once(&mut frontend).unwrap();

    assert!(frontend.saw_info("Aún no hay registros en el historial."));
    assert!(frontend.shown_history.is_empty());
}

#[test]
fn unknown_user_is_rejected_without_side_effects() {
    let dir = TempDir::new().unwrap();
    let app = app_in(&dir);
    let mut frontend = ScriptedFrontend::for_user("unknown_x");

    app.run_once(&mut frontend).unwrap();

    assert!(frontend.warnings.iter().any(|w| w.contains("Usuario no reconocido")));
    assert!(!dir.path().join("inventory.json").exists());
    assert!(!dir.path().join("history.csv").exists());
}

#[test]
fn empty_identifier_is_a_prompt_not_a_rejection() {
    let dir = TempDir::new().unwrap();
    let app = app_in(&dir);
    let mut frontend = ScriptedFrontend::for_user("");

    app.run_once(&mut frontend).unwrap();

    assert!(frontend.warnings.is_empty());
    assert!(frontend.saw_info("ingresa un usuario válido"));
}

#[test]
fn negative_count_is_rejected_and_nothing_is_written() {
    let dir = TempDir::new().unwrap();
    let app = app_in(&dir);
    let mut frontend = ScriptedFrontend::for_user("empleado1");
    frontend.counts = VecDeque::from([-1]);
    frontend.triggers = VecDeque::from([true]);

    app.run_once(&mut frontend).unwrap();

    assert!(frontend
        .warnings
        .iter()
        .any(|w| w.contains("cannot be negative")));
    assert!(!dir.path().join("inventory.json").exists());
    assert!(!dir.path().join("history.csv").exists());
}

#[test]
fn malformed_snapshot_surfaces_instead_of_wiping_stock() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("inventory.json"), "{ garbage").unwrap();
    let app = app_in(&dir);
    let mut frontend = ScriptedFrontend::for_user("empleado1");

    let result = app.run_once(&mut frontend);

    assert!(result.is_err());
    // The broken file is left in place for the shop to recover from.
    assert_eq!(
        std::fs::read_to_string(dir.path().join("inventory.json")).unwrap(),
        "{ garbage"
    );
}
