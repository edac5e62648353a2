//! JSON export and import
//!
//! The export file is `{ "expenses": [...], "exportDate": "<timestamp>" }`.
//! Import accepts any JSON object with an `expenses` array and replaces the
//! stored list with it.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::ExpenseRecord;
use crate::storage::ExpenseStore;

/// Export file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseExport {
    /// Every stored expense, in storage order
    pub expenses: Vec<ExpenseRecord>,

    /// When the export was taken
    pub export_date: DateTime<Utc>,
}

impl ExpenseExport {
    /// Snapshot the given records, stamped with the current time
    pub fn new(expenses: &[ExpenseRecord]) -> Self {
        Self {
            expenses: expenses.to_vec(),
            export_date: Utc::now(),
        }
    }
}

/// Default export filename for the given day: `household_budget_YYYY-MM-DD.json`
pub fn export_filename(date: NaiveDate) -> String {
    format!("household_budget_{}.json", date.format("%Y-%m-%d"))
}

/// Write the records as a pretty-printed export document
pub fn export_json<W: Write>(expenses: &[ExpenseRecord], writer: &mut W) -> BudgetResult<()> {
    let export = ExpenseExport::new(expenses);
    serde_json::to_writer_pretty(writer, &export)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

/// Parse an import document into records
///
/// Only the top-level shape is checked: an object whose `expenses` field is
/// an array. `exportDate` and any other fields are ignored.
pub fn parse_import(content: &str) -> BudgetResult<Vec<ExpenseRecord>> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| BudgetError::Import(format!("File is not valid JSON: {}", e)))?;

    let expenses = value
        .get("expenses")
        .and_then(|v| v.as_array())
        .ok_or_else(|| {
            BudgetError::Import("Invalid file format: expected an \"expenses\" array".into())
        })?;

    expenses
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            ExpenseRecord::deserialize(raw).map_err(|e| {
                BudgetError::Import(format!("Invalid expense at index {}: {}", index, e))
            })
        })
        .collect()
}

/// Read an export file and replace the stored list with its contents
///
/// Returns the number of imported records. On any error the store is left
/// as it was.
pub fn import_from_file(store: &mut ExpenseStore, path: &Path) -> BudgetResult<usize> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        BudgetError::Import(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let expenses = parse_import(&content)?;
    let count = expenses.len();

    let unknown = expenses.iter().filter(|e| !e.category.is_known()).count();
    if unknown > 0 {
        tracing::warn!(unknown, "imported expenses with unrecognized category codes");
    }

    store.replace_all(expenses)?;
    Ok(count)
}
