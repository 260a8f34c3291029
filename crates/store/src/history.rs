//! Append-only history of accepted stock updates.
//!
//! A plain CSV file with a fixed column order. Rows are only ever appended;
//! nothing mutates or deletes them.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use scoopstock_core::Quantity;

use crate::error::{StoreError, StoreResult};

/// Fixed header of the history file.
const HEADER: &str = "Date,User,Category,Product,Quantity";

/// One accepted stock update.
///
/// `amount` is the literal value the operator entered (the input total),
/// not the delta the snapshot moved by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub date: NaiveDate,
    pub user: String,
    pub category: String,
    pub product: String,
    pub amount: Quantity,
}

/// The persisted tabular log.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row, creating the file with its header first if needed.
    pub fn append(&self, record: &HistoryRecord) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| StoreError::io(parent, err))?;
            }
        }

        let fresh = !self.path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| StoreError::io(&self.path, err))?;

        let mut row = String::new();
        if fresh {
            row.push_str(HEADER);
            row.push('\n');
        }
        row.push_str(&record_to_row(record));
        row.push('\n');

        file.write_all(row.as_bytes())
            .map_err(|err| StoreError::io(&self.path, err))?;

        tracing::debug!(
            path = %self.path.display(),
            user = %record.user,
            product = %record.product,
            "history row appended"
        );
        Ok(())
    }

    /// All rows, oldest first. A missing file is an empty history.
    pub fn load(&self) -> StoreResult<Vec<HistoryRecord>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };

        let mut records = Vec::new();
        for (idx, line) in raw.lines().enumerate() {
            if idx == 0 {
                continue; // header
            }
            if line.is_empty() {
                continue;
            }
            records.push(self.parse_row(line, idx + 1)?);
        }
        Ok(records)
    }

    /// Rows whose date falls in the given calendar year and month. An
    /// empty result means "no activity that month", not an error.
    pub fn filter(&self, year: i32, month: u32) -> StoreResult<Vec<HistoryRecord>> {
        let mut records = self.load()?;
        records.retain(|r| r.date.year() == year && r.date.month() == month);
        Ok(records)
    }

    fn parse_row(&self, line: &str, line_no: usize) -> StoreResult<HistoryRecord> {
        let malformed = |reason: String| StoreError::MalformedHistory {
            path: self.path.clone(),
            line: line_no,
            reason,
        };

        let fields = split_row(line);
        let [date, user, category, product, amount]: [String; 5] = fields
            .try_into()
            .map_err(|fields: Vec<String>| {
                malformed(format!("expected 5 columns, found {}", fields.len()))
            })?;

        let date = date
            .parse::<NaiveDate>()
            .map_err(|err| malformed(format!("bad date {date:?}: {err}")))?;
        let amount = parse_quantity(&amount)
            .ok_or_else(|| malformed(format!("bad quantity {amount:?}")))?;

        Ok(HistoryRecord {
            date,
            user,
            category,
            product,
            amount,
        })
    }
}

fn record_to_row(record: &HistoryRecord) -> String {
    [
        record.date.to_string(),
        record.user.clone(),
        record.category.clone(),
        record.product.clone(),
        record.amount.to_string(),
    ]
    .iter()
    .map(|field| escape_field(field))
    .collect::<Vec<_>>()
    .join(",")
}

fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if quoted && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

/// A whole number is a count; anything with a decimal point is kilos.
fn parse_quantity(raw: &str) -> Option<Quantity> {
    if let Ok(n) = raw.parse::<u64>() {
        return Some(Quantity::Count(n));
    }
    raw.parse::<f64>()
        .ok()
        .filter(|kg| kg.is_finite() && *kg >= 0.0)
        .map(Quantity::Kilos)
}
