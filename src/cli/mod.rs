//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the store and reports.

pub mod audit;
pub mod expense;
pub mod export;
pub mod import;
pub mod report;

pub use audit::handle_audit;
pub use expense::{handle_add, handle_recent, AddArgs};
pub use export::{handle_export, ExportFormat};
pub use import::handle_import;
pub use report::{handle_categories, handle_summary, handle_trend};
