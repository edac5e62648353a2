//! Core data models for the household budget tracker
//!
//! This module contains the data structures that represent the expense
//! domain: records, categories, amounts and month keys.

pub mod amount;
pub mod category;
pub mod expense;
pub mod period;

pub use amount::Amount;
pub use category::Category;
pub use expense::{ExpenseDate, ExpenseId, ExpenseRecord};
pub use period::YearMonth;
