//! Summary figures and the category breakdown
//!
//! Builds the display-ready views on top of the aggregation functions.

use crate::models::{Category, ExpenseRecord, YearMonth};

use super::aggregate::{category_totals, month_window_total, running_average, total};

/// The four headline figures
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Month treated as "this month"
    pub this_month: YearMonth,
    /// Spend in `this_month`
    pub this_month_total: i64,
    /// Spend in the month before `this_month`
    pub last_month_total: i64,
    /// Total spend per distinct month present
    pub average: f64,
    /// Spend across every record
    pub total: i64,
}

impl Summary {
    /// Compute the summary with `this_month` as the reference month
    pub fn compute(records: &[ExpenseRecord], this_month: YearMonth) -> Self {
        Self {
            this_month,
            this_month_total: month_window_total(records, &this_month.key()),
            last_month_total: month_window_total(records, &this_month.prev().key()),
            average: running_average(records),
            total: total(records),
        }
    }

    /// Compute the summary for the current calendar month
    pub fn current(records: &[ExpenseRecord]) -> Self {
        Self::compute(records, YearMonth::current())
    }

    /// The month before `this_month`
    pub fn last_month(&self) -> YearMonth {
        self.this_month.prev()
    }

    /// Average rounded to whole units, half away from zero
    pub fn average_rounded(&self) -> i64 {
        self.average.round() as i64
    }
}

/// One slice of the spend-by-category chart
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub total: i64,
    /// Share of overall spend, 0-100
    pub percentage: f64,
}

/// Category totals with their share of overall spend, largest first
pub fn category_breakdown(records: &[ExpenseRecord]) -> Vec<CategoryShare> {
    let overall = total(records);

    let mut shares: Vec<CategoryShare> = category_totals(records)
        .into_iter()
        .map(|(category, amount)| CategoryShare {
            percentage: if overall == 0 {
                0.0
            } else {
                amount as f64 / overall as f64 * 100.0
            },
            category,
            total: amount,
        })
        .collect();

    shares.sort_by(|a, b| b.total.cmp(&a.total));
    shares
}
