//! CSV export
//!
//! Writes one row per expense for spreadsheets. CSV is export-only; the JSON
//! document is the format that imports back.

use std::io::Write;

use serde::Serialize;

use crate::error::{BudgetError, BudgetResult};
use crate::models::ExpenseRecord;

#[derive(Serialize)]
struct CsvRow<'a> {
    id: i64,
    date: &'a str,
    category: &'a str,
    label: &'a str,
    amount: i64,
    description: &'a str,
}

/// Export all expenses to CSV
pub fn export_csv<W: Write>(expenses: &[ExpenseRecord], writer: W) -> BudgetResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for expense in expenses {
        csv_writer
            .serialize(CsvRow {
                id: expense.id.as_millis(),
                date: expense.date.as_str(),
                category: expense.category.code(),
                label: expense.category.label(),
                amount: expense.amount.units(),
                description: &expense.description,
            })
            .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
