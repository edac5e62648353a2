//! Household Budget - terminal household expense tracker
//!
//! This library provides the core functionality for recording household
//! expenses and summarizing them by month and by category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense records, categories, amounts and month keys
//! - `storage`: The expense store and its JSON slot file
//! - `reports`: Aggregations and summaries over the expense list
//! - `export`: JSON export/import and CSV export
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use household_budget::config::BudgetPaths;
//! use household_budget::reports::Summary;
//! use household_budget::storage::ExpenseStore;
//!
//! let paths = BudgetPaths::new()?;
//! let store = ExpenseStore::open(&paths)?;
//! let summary = Summary::current(store.records());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
