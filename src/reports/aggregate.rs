//! Aggregations over the expense list
//!
//! Pure functions: they take a read-only slice and never touch the store.
//! Sums saturate at the `i64` bounds instead of overflowing.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Category, ExpenseRecord};

/// Total spend per `YYYY-MM` key, ordered by key ascending
///
/// Keys come from slicing the date text, so a malformed date still lands in
/// the month its first seven characters name.
pub fn monthly_totals(records: &[ExpenseRecord]) -> BTreeMap<String, i64> {
    let mut totals: BTreeMap<String, i64> = BTreeMap::new();
    for record in records {
        let entry = totals.entry(record.date.month_key().to_string()).or_insert(0);
        *entry = entry.saturating_add(record.amount.units());
    }
    totals
}

/// Total spend per category code, unknown codes included as-is
pub fn category_totals(records: &[ExpenseRecord]) -> BTreeMap<Category, i64> {
    let mut totals: BTreeMap<Category, i64> = BTreeMap::new();
    for record in records {
        let entry = totals.entry(record.category.clone()).or_insert(0);
        *entry = entry.saturating_add(record.amount.units());
    }
    totals
}

/// Sum of amounts whose date starts with `year_month` (e.g. "2024-03")
pub fn month_window_total(records: &[ExpenseRecord], year_month: &str) -> i64 {
    records
        .iter()
        .filter(|r| r.date.starts_with(year_month))
        .fold(0, |acc, r| acc.saturating_add(r.amount.units()))
}

/// Sum of every amount
pub fn total(records: &[ExpenseRecord]) -> i64 {
    records
        .iter()
        .fold(0, |acc, r| acc.saturating_add(r.amount.units()))
}

/// Total spend divided by the number of distinct months present; 0 when empty
pub fn running_average(records: &[ExpenseRecord]) -> f64 {
    let months: BTreeSet<&str> = records.iter().map(|r| r.date.month_key()).collect();
    if months.is_empty() {
        return 0.0;
    }
    total(records) as f64 / months.len() as f64
}

/// The `n` most recent records, newest date first
///
/// Sorts a copy with a stable sort on the date text, so records sharing a
/// date keep their insertion order.
pub fn recent(records: &[ExpenseRecord], n: usize) -> Vec<ExpenseRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(n);
    sorted
}
