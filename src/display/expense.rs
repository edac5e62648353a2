//! Expense list display formatting

use crate::config::Settings;
use crate::models::ExpenseRecord;

use super::chart::clip;

const DESCRIPTION_WIDTH: usize = 28;

/// Shown when there is nothing to list
pub const EMPTY_MESSAGE: &str = "No expenses recorded yet.";

/// Format a single expense row
pub fn format_expense_row(expense: &ExpenseRecord, settings: &Settings) -> String {
    format!(
        "{:10}  {:14}  {:28}  {:>12}",
        expense.date.as_str(),
        expense.category.label(),
        clip(
            expense.description_or(&settings.description_placeholder),
            DESCRIPTION_WIDTH
        ),
        expense.amount.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format a list of expenses with a header
pub fn format_expense_list(expenses: &[ExpenseRecord], settings: &Settings) -> String {
    if expenses.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10}  {:14}  {:28}  {:>12}\n",
        "Date", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }

    output
}
