//! Expense record model
//!
//! An expense is the only entity the tracker stores: a date, a category, a
//! whole-unit amount and an optional description.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::category::Category;

/// Identifier taken from the wall clock (milliseconds since the Unix epoch)
///
/// Records imported without an id carry the default, 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Create an ID from the current time
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// Create an ID from a raw millisecond value
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Get the raw millisecond value
    pub const fn as_millis(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Length of the `YYYY-MM` prefix used for month grouping
const MONTH_KEY_LEN: usize = 7;

/// An expense date as stored: `YYYY-MM-DD`
///
/// Kept as text so imported dates are preserved byte-for-byte, even when they
/// don't parse as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseDate(String);

impl ExpenseDate {
    /// Wrap a stored date string without checking it
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The stored text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `YYYY-MM` month key: the first seven characters, or the whole
    /// string when it is shorter
    pub fn month_key(&self) -> &str {
        match self.0.char_indices().nth(MONTH_KEY_LEN) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }

    /// Check whether the date starts with the given prefix (e.g. "2024-03")
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Parse as a calendar date, if well-formed
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").ok()
    }
}

impl From<NaiveDate> for ExpenseDate {
    fn from(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }
}

impl fmt::Display for ExpenseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Creation-time identifier
    #[serde(default)]
    pub id: ExpenseId,

    /// When the money was spent
    pub date: ExpenseDate,

    /// What it was spent on
    pub category: Category,

    /// How much, in whole currency units
    #[serde(default)]
    pub amount: Amount,

    /// Free text, may be empty
    #[serde(default)]
    pub description: String,
}

impl ExpenseRecord {
    /// Create a new record with an ID taken from the current time
    pub fn new(
        date: NaiveDate,
        category: Category,
        amount: Amount,
        description: impl Into<String>,
    ) -> Self {
        Self::with_id(ExpenseId::now(), date, category, amount, description)
    }

    /// Create a record with an explicit ID
    pub fn with_id(
        id: ExpenseId,
        date: NaiveDate,
        category: Category,
        amount: Amount,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date: date.into(),
            category,
            amount,
            description: description.into(),
        }
    }

    /// The description, or `placeholder` when it is blank
    pub fn description_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.description.trim().is_empty() {
            placeholder
        } else {
            &self.description
        }
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.category, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_record() {
        let before = Utc::now().timestamp_millis();
        let record = ExpenseRecord::new(date(2024, 3, 5), Category::Food, Amount::new(1200), "lunch");
        let after = Utc::now().timestamp_millis();

        assert!(record.id.as_millis() >= before && record.id.as_millis() <= after);
        assert_eq!(record.date.as_str(), "2024-03-05");
        assert_eq!(record.category, Category::Food);
        assert_eq!(record.amount.units(), 1200);
        assert_eq!(record.description, "lunch");
    }

    #[test]
    fn test_month_key_slices_text() {
        assert_eq!(ExpenseDate::from_raw("2024-03-05").month_key(), "2024-03");
        assert_eq!(ExpenseDate::from_raw("2024-13-99").month_key(), "2024-13");
        assert_eq!(ExpenseDate::from_raw("2024").month_key(), "2024");
        assert_eq!(ExpenseDate::from_raw("").month_key(), "");
    }

    #[test]
    fn test_to_naive() {
        assert_eq!(ExpenseDate::from_raw("2024-03-05").to_naive(), Some(date(2024, 3, 5)));
        assert_eq!(ExpenseDate::from_raw("2024-13-99").to_naive(), None);
    }

    #[test]
    fn test_description_placeholder() {
        let mut record = ExpenseRecord::new(date(2024, 1, 1), Category::Other, Amount::new(1), "");
        assert_eq!(record.description_or("(none)"), "(none)");

        record.description = "bus".into();
        assert_eq!(record.description_or("(none)"), "bus");
    }

    #[test]
    fn test_serialized_field_names() {
        let record = ExpenseRecord::with_id(
            ExpenseId::from_millis(1709600000000),
            date(2024, 3, 5),
            Category::Food,
            Amount::new(1200),
            "lunch",
        );
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1709600000000i64,
                "date": "2024-03-05",
                "category": "food",
                "amount": 1200,
                "description": "lunch"
            })
        );
    }

    #[test]
    fn test_deserialize_without_description() {
        let record: ExpenseRecord = serde_json::from_str(
            r#"{"id": 1, "date": "2024-03-05", "category": "pets", "amount": null}"#,
        )
        .unwrap();
        assert_eq!(record.description, "");
        assert_eq!(record.amount, Amount::zero());
        assert_eq!(record.category, Category::Unrecognized("pets".into()));
    }
}
