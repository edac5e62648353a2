//! CLI command for reading the audit log

use crate::audit::AuditLogger;
use crate::config::BudgetPaths;
use crate::error::BudgetResult;

/// Handle `audit`: print the most recent entries, oldest first
pub fn handle_audit(paths: &BudgetPaths, count: usize) -> BudgetResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(count)?;

    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
