//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use clap::ValueEnum;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_csv, export_filename, export_json};
use crate::storage::ExpenseStore;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON document (importable)
    Json,
    /// CSV rows (spreadsheet, export only)
    Csv,
}

/// Handle `export`
///
/// Without a path the file is written to the current directory under the
/// dated default name. A directory path gets the default name inside it.
pub fn handle_export(
    store: &ExpenseStore,
    output: Option<PathBuf>,
    format: ExportFormat,
) -> BudgetResult<()> {
    let output = resolve_output(output, format, Utc::now().date_naive());

    let file = File::create(&output).map_err(|e| {
        BudgetError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => export_json(store.records(), &mut writer)?,
        ExportFormat::Csv => export_csv(store.records(), &mut writer)?,
    }
    writer.flush().map_err(|e| {
        BudgetError::Export(format!("Failed to write {}: {}", output.display(), e))
    })?;

    println!("Exported {} expenses to: {}", store.len(), output.display());
    Ok(())
}

fn default_filename(format: ExportFormat, today: NaiveDate) -> String {
    let json_name = export_filename(today);
    match format {
        ExportFormat::Json => json_name,
        ExportFormat::Csv => Path::new(&json_name)
            .with_extension("csv")
            .to_string_lossy()
            .into_owned(),
    }
}

fn resolve_output(output: Option<PathBuf>, format: ExportFormat, today: NaiveDate) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(default_filename(format, today)),
        Some(path) => path,
        None => PathBuf::from(default_filename(format, today)),
    }
}
