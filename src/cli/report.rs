//! Report CLI commands
//!
//! Summary figures and the two charts.

use crate::config::Settings;
use crate::display::{format_category_breakdown, format_monthly_trend, format_summary};
use crate::error::BudgetResult;
use crate::models::YearMonth;
use crate::reports::{category_breakdown, monthly_totals, Summary};
use crate::storage::ExpenseStore;

/// Handle `summary`: this month, last month, average and total
///
/// `month` overrides the reference month (defaults to the current one).
pub fn handle_summary(
    store: &ExpenseStore,
    settings: &Settings,
    month: Option<YearMonth>,
) -> BudgetResult<()> {
    let summary = match month {
        Some(month) => Summary::compute(store.records(), month),
        None => Summary::current(store.records()),
    };
    print!("{}", format_summary(&summary, settings));
    Ok(())
}

/// Handle `trend`: spend per month, oldest first
pub fn handle_trend(store: &ExpenseStore, settings: &Settings) -> BudgetResult<()> {
    let totals = monthly_totals(store.records());
    print!("{}", format_monthly_trend(&totals, settings));
    Ok(())
}

/// Handle `categories`: spend per category with shares
pub fn handle_categories(store: &ExpenseStore, settings: &Settings) -> BudgetResult<()> {
    let shares = category_breakdown(store.records());
    print!("{}", format_category_breakdown(&shares, settings));
    Ok(())
}
