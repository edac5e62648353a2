//! Reports module for the household budget tracker
//!
//! Derived views over the expense list: monthly and category totals, the
//! headline summary and the most recent entries.

pub mod aggregate;
pub mod summary;

pub use aggregate::{
    category_totals, month_window_total, monthly_totals, recent, running_average, total,
};
pub use summary::{category_breakdown, CategoryShare, Summary};
