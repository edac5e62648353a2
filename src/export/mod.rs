//! Export module for the household budget tracker
//!
//! - JSON: the full expense history, importable back
//! - CSV: spreadsheet-friendly rows, export only

pub mod csv;
pub mod json;

pub use self::csv::export_csv;
pub use self::json::{export_filename, export_json, import_from_file, parse_import, ExpenseExport};
