//! Expense CLI commands
//!
//! Recording a new expense and listing the most recent ones.

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, Category};
use crate::reports::recent;
use crate::storage::ExpenseStore;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount in whole currency units (e.g. "1200" or "1,200")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Category code: food, utilities, transportation, entertainment, healthcare, other
    #[arg(short, long)]
    pub category: String,

    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// What the money was spent on
    #[arg(short = 'm', long)]
    pub description: Option<String>,
}

/// Handle `add`
pub fn handle_add(store: &mut ExpenseStore, settings: &Settings, args: AddArgs) -> BudgetResult<()> {
    let amount = Amount::parse(&args.amount)
        .map_err(|e| BudgetError::Validation(e.to_string()))?;
    let category = args
        .category
        .parse::<Category>()
        .map_err(|e| BudgetError::Validation(e.to_string()))?;
    let date = match args.date {
        Some(raw) => parse_date(&raw)?,
        None => chrono::Local::now().date_naive(),
    };

    let expense = store.add(date, category, amount, args.description.unwrap_or_default())?;

    println!(
        "Recorded {} {} on {} ({})",
        expense.category.label(),
        expense.amount.format_with_symbol(&settings.currency_symbol),
        expense.date,
        expense.description_or(&settings.description_placeholder)
    );

    Ok(())
}

/// Handle `recent`
pub fn handle_recent(
    store: &ExpenseStore,
    settings: &Settings,
    limit: Option<usize>,
) -> BudgetResult<()> {
    let limit = limit.unwrap_or(settings.recent_limit);
    let expenses = recent(store.records(), limit);
    print!("{}", format_expense_list(&expenses, settings));
    Ok(())
}

fn parse_date(raw: &str) -> BudgetResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        BudgetError::Validation(format!("Invalid date '{}': expected YYYY-MM-DD", raw))
    })
}
