//! CLI command handler for JSON import
//!
//! Replaces the whole expense history with the contents of an export file.

use std::path::Path;

use crate::error::BudgetResult;
use crate::export::import_from_file;
use crate::storage::ExpenseStore;

/// Handle `import`
pub fn handle_import(store: &mut ExpenseStore, file: &Path) -> BudgetResult<()> {
    let previous = store.len();
    let imported = import_from_file(store, file)?;

    println!("Import complete!");
    println!("  Imported: {}", imported);
    println!("  Replaced: {}", previous);

    Ok(())
}
