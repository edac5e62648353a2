//! Summary and chart formatting
//!
//! Terminal renderings of the headline figures, the spend-by-month trend and
//! the spend-by-category breakdown.

use std::collections::BTreeMap;

use crate::config::Settings;
use crate::models::Amount;
use crate::reports::{CategoryShare, Summary};

use super::expense::EMPTY_MESSAGE;
use super::chart::{bar, rule, share};

fn money(units: i64, settings: &Settings) -> String {
    Amount::new(units).format_with_symbol(&settings.currency_symbol)
}

/// Format the four headline figures
pub fn format_summary(summary: &Summary, settings: &Settings) -> String {
    let rows = [
        (format!("This month ({})", summary.this_month), summary.this_month_total),
        (format!("Last month ({})", summary.last_month()), summary.last_month_total),
        ("Monthly average".to_string(), summary.average_rounded()),
        ("Total".to_string(), summary.total),
    ];

    let mut output = String::new();
    for (label, value) in rows {
        output.push_str(&format!("{:<24}{:>14}\n", label, money(value, settings)));
    }
    output
}

/// Format monthly totals as a bar chart, oldest month first
pub fn format_monthly_trend(totals: &BTreeMap<String, i64>, settings: &Settings) -> String {
    if totals.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let max = totals.values().copied().max().unwrap_or(0);

    let mut output = String::from("Spending by month\n");
    output.push_str(&rule(settings.chart_width + 24));
    output.push('\n');

    for (month, total) in totals {
        output.push_str(&format!(
            "{:<8} {} {:>12}\n",
            month,
            bar(*total, max, settings.chart_width),
            money(*total, settings)
        ));
    }

    output
}

/// Format category shares as a bar chart, largest first
pub fn format_category_breakdown(shares: &[CategoryShare], settings: &Settings) -> String {
    if shares.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let max = shares.iter().map(|s| s.total).max().unwrap_or(0);

    let mut output = String::from("Spending by category\n");
    output.push_str(&rule(settings.chart_width + 38));
    output.push('\n');

    for entry in shares {
        output.push_str(&format!(
            "{:<15} {} {:>6} {:>12}\n",
            entry.category.label(),
            bar(entry.total, max, settings.chart_width),
            share(entry.percentage),
            money(entry.total, settings)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, YearMonth};

    #[test]
    fn test_format_summary() {
        let summary = Summary {
            this_month: YearMonth::new(2024, 4).unwrap(),
            this_month_total: 350,
            last_month_total: 100,
            average: 225.4,
            total: 450,
        };
        let output = format_summary(&summary, &Settings::default());
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("This month (2024-04)"));
        assert!(lines[0].ends_with("¥350"));
        assert!(lines[1].starts_with("Last month (2024-03)"));
        assert!(lines[2].ends_with("¥225"));
        assert!(lines[3].ends_with("¥450"));
    }

    #[test]
    fn test_monthly_trend_is_ascending() {
        let mut totals = BTreeMap::new();
        totals.insert("2024-04".to_string(), 300);
        totals.insert("2024-03".to_string(), 1200);

        let output = format_monthly_trend(&totals, &Settings::default());
        let march = output.find("2024-03").unwrap();
        let april = output.find("2024-04").unwrap();

        assert!(march < april);
        assert!(output.contains("¥1,200"));
    }

    #[test]
    fn test_empty_charts() {
        let settings = Settings::default();
        assert_eq!(format_monthly_trend(&BTreeMap::new(), &settings), "No expenses recorded yet.\n");
        assert_eq!(format_category_breakdown(&[], &settings), "No expenses recorded yet.\n");
    }

    #[test]
    fn test_category_breakdown_uses_labels() {
        let shares = vec![
            CategoryShare {
                category: Category::Utilities,
                total: 750,
                percentage: 75.0,
            },
            CategoryShare {
                category: Category::from_code("pets"),
                total: 250,
                percentage: 25.0,
            },
        ];
        let output = format_category_breakdown(&shares, &Settings::default());

        assert!(output.contains("Utilities"));
        assert!(output.contains("Unknown"));
        assert!(output.contains("75%"));
        assert!(!output.contains("pets"));
    }
}
