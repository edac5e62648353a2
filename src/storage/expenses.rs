//! Expense store backed by the `householdExpenses` slot file
//!
//! Owns the in-memory expense list and writes the whole list back to disk
//! after every change. Callers only ever see it as a slice.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::{BudgetPaths, EXPENSES_SLOT};
use crate::error::BudgetResult;
use crate::models::{Amount, Category, ExpenseId, ExpenseRecord};

use super::file_io::{read_json, write_json_atomic};

/// Single source of truth for the expense list
#[derive(Debug)]
pub struct ExpenseStore {
    path: PathBuf,
    expenses: Vec<ExpenseRecord>,
    audit: Option<AuditLogger>,
}

impl ExpenseStore {
    /// Create an empty store over the given slot file without reading it
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: Vec::new(),
            audit: None,
        }
    }

    /// Record every change in the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Open the store at the configured location and load its contents
    pub fn open(paths: &BudgetPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;

        let mut store =
            Self::new(paths.expenses_file()).with_audit(AuditLogger::new(paths.audit_log()));
        store.expenses = store.load()?;
        Ok(store)
    }

    /// Read the persisted list
    ///
    /// A missing slot is an empty list. A slot that isn't a valid expense
    /// array is a storage error; nothing is silently discarded.
    pub fn load(&self) -> BudgetResult<Vec<ExpenseRecord>> {
        let expenses: Vec<ExpenseRecord> = read_json(&self.path)?.unwrap_or_default();
        tracing::debug!(
            path = %self.path.display(),
            count = expenses.len(),
            "loaded expenses"
        );
        Ok(expenses)
    }

    /// Record a new expense and persist the list
    pub fn add(
        &mut self,
        date: NaiveDate,
        category: Category,
        amount: Amount,
        description: impl Into<String>,
    ) -> BudgetResult<ExpenseRecord> {
        let record = ExpenseRecord::with_id(self.next_id(), date, category, amount, description);

        self.expenses.push(record.clone());
        if let Err(e) = self.persist() {
            self.expenses.pop();
            return Err(e);
        }

        tracing::info!(id = %record.id, date = %record.date, amount = record.amount.units(), "expense recorded");

        self.record_audit(|| {
            AuditEntry::create(
                EntityType::Expense,
                record.id.to_string(),
                Some(format!("{} {}", record.date, record.category)),
                &record,
            )
        });

        Ok(record)
    }

    /// Replace the whole list (used by import) and persist it
    ///
    /// If the write fails the previous list is kept.
    pub fn replace_all(&mut self, records: Vec<ExpenseRecord>) -> BudgetResult<()> {
        let previous = std::mem::replace(&mut self.expenses, records);
        if let Err(e) = self.persist() {
            self.expenses = previous;
            return Err(e);
        }

        tracing::info!(
            before = previous.len(),
            after = self.expenses.len(),
            "expense list replaced"
        );

        self.record_audit(|| {
            AuditEntry::replace(
                EntityType::ExpenseList,
                EXPENSES_SLOT,
                previous.len(),
                self.expenses.len(),
            )
        });

        Ok(())
    }

    /// Write the full current list to the slot, overwriting it
    pub fn persist(&self) -> BudgetResult<()> {
        write_json_atomic(&self.path, &self.expenses)
    }

    /// All records, in insertion order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Path of the slot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    // Runs after the slot is committed, so a failed audit write must not fail the change.
    fn record_audit(&self, entry: impl FnOnce() -> AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry()) {
                tracing::warn!(path = %logger.path().display(), error = %e, "failed to write audit entry");
            }
        }
    }

    // Clock ids can collide within a millisecond; keep them strictly increasing.
    fn next_id(&self) -> ExpenseId {
        let now = ExpenseId::now();
        match self.expenses.iter().map(|e| e.id).max() {
            Some(last) if now <= last => ExpenseId::from_millis(last.as_millis() + 1),
            _ => now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::ExpenseDate;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = ExpenseStore::open(&paths).unwrap();
        (temp_dir, store)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_missing_slot_loads_empty() {
        let (_temp, store) = create_test_store();
        assert!(store.is_empty());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_add_appends_and_persists() {
        let (temp, mut store) = create_test_store();

        let record = store
            .add(date(2024, 3, 5), Category::Food, Amount::new(1200), "lunch")
            .unwrap();

        assert_eq!(store.records(), &[record.clone()]);

        let paths = BudgetPaths::with_base_dir(temp.path().to_path_buf());
        let reopened = ExpenseStore::open(&paths).unwrap();
        assert_eq!(reopened.records(), &[record]);
    }

    #[test]
    fn test_add_ids_are_unique_and_increasing() {
        let (_temp, mut store) = create_test_store();

        for _ in 0..20 {
            store
                .add(date(2024, 3, 5), Category::Other, Amount::new(1), "")
                .unwrap();
        }

        let ids: Vec<_> = store.records().iter().map(|r| r.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_add_does_not_reject_negative_amount() {
        let (_temp, mut store) = create_test_store();
        let record = store
            .add(date(2024, 3, 5), Category::Other, Amount::new(-300), "refund")
            .unwrap();
        assert_eq!(record.amount.units(), -300);
    }

    #[test]
    fn test_persist_then_load_round_trip() {
        let (_temp, mut store) = create_test_store();
        store
            .add(date(2024, 3, 5), Category::Food, Amount::new(1200), "lunch")
            .unwrap();
        store
            .add(date(2024, 4, 1), Category::Utilities, Amount::new(8000), "")
            .unwrap();
        store.persist().unwrap();

        let before = store.records().to_vec();
        let loaded = store.load().unwrap();
        store.replace_all(loaded).unwrap();

        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn test_replace_all_keeps_unknown_categories_and_raw_dates() {
        let (temp, mut store) = create_test_store();
        let imported = vec![ExpenseRecord {
            id: ExpenseId::from_millis(1),
            date: ExpenseDate::from_raw("2024-02-30"),
            category: Category::Unrecognized("pets".into()),
            amount: Amount::new(500),
            description: String::new(),
        }];

        store.replace_all(imported.clone()).unwrap();

        let paths = BudgetPaths::with_base_dir(temp.path().to_path_buf());
        let reopened = ExpenseStore::open(&paths).unwrap();
        assert_eq!(reopened.records(), imported.as_slice());
    }

    #[test]
    fn test_corrupt_slot_fails_fast() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.expenses_file(), "{ definitely not an array").unwrap();

        let err = ExpenseStore::open(&paths).unwrap_err();
        assert!(matches!(err, crate::error::BudgetError::Storage(_)));
    }

    #[test]
    fn test_slot_file_is_a_plain_json_array() {
        let (_temp, mut store) = create_test_store();
        store
            .add(date(2024, 3, 5), Category::Food, Amount::new(1200), "lunch")
            .unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["category"], "food");
        assert_eq!(array[0]["date"], "2024-03-05");
    }

    #[test]
    fn test_changes_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut store = ExpenseStore::open(&paths).unwrap();

        store
            .add(date(2024, 3, 5), Category::Food, Amount::new(1200), "lunch")
            .unwrap();
        store.replace_all(Vec::new()).unwrap();

        let entries = AuditLogger::new(paths.audit_log()).read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[1].operation, Operation::Replace);
        assert_eq!(entries[1].diff_summary.as_deref(), Some("records: 1 -> 0"));
    }

    #[test]
    fn test_store_without_audit_writes_no_log() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ExpenseStore::new(temp_dir.path().join("expenses.json"));

        store
            .add(date(2024, 3, 5), Category::Food, Amount::new(1), "")
            .unwrap();

        assert!(!temp_dir.path().join("audit.log").exists());
    }

    #[test]
    fn test_unwritable_audit_log_does_not_fail_committed_changes() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut store = ExpenseStore::open(&paths).unwrap();
        std::fs::create_dir_all(paths.audit_log()).unwrap();

        let record = store
            .add(date(2024, 3, 5), Category::Food, Amount::new(1200), "lunch")
            .unwrap();
        let reopened = ExpenseStore::open(&paths).unwrap();
        assert_eq!(reopened.records(), &[record]);

        store.replace_all(Vec::new()).unwrap();
        let reopened = ExpenseStore::open(&paths).unwrap();
        assert!(reopened.is_empty());
    }
}
