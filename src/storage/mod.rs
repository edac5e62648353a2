//! Storage layer for the household budget tracker
//!
//! Provides the expense store and JSON file storage with atomic writes.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseStore;
pub use file_io::{read_json, write_json_atomic};
