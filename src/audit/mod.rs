//! Audit logging for the household budget tracker
//!
//! Records every recorded expense and every import in an append-only audit
//! log, one JSON object per line.
//!
//! # Example
//!
//! ```rust,ignore
//! use household_budget::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::replace(EntityType::ExpenseList, "householdExpenses", 3, 12))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
