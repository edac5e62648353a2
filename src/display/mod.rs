//! Display formatting for terminal output
//!
//! Turns expenses and reports into plain text tables and bar charts.

pub mod chart;
pub mod expense;
pub mod summary;

pub use expense::{format_expense_list, format_expense_row};
pub use summary::{format_category_breakdown, format_monthly_trend, format_summary};
