//! JSON slot files
//!
//! Reads treat a missing file as "nothing stored yet". Writes go through a
//! sibling `.tmp` file that is synced and renamed over the target, so a slot
//! is either the old list or the new one.

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BudgetError;

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> BudgetError {
    BudgetError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Read a slot, `None` when the file doesn't exist
///
/// A file that exists but doesn't decode is an error, never `None`.
pub fn read_json<T, P>(path: P) -> Result<Option<T>, BudgetError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(storage_error("open", path, e)),
    };

    serde_json::from_reader(BufReader::new(file))
        .map(Some)
        .map_err(|e| storage_error("parse", path, e))
}

/// Overwrite a slot atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BudgetError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("create directory", parent, e))?;
    }

    let bytes = serde_json::to_vec_pretty(data).map_err(|e| storage_error("serialize", path, e))?;

    let temp_path = temp_path_for(path);
    let written = File::create(&temp_path).and_then(|mut file| {
        file.write_all(&bytes)?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(storage_error("write", &temp_path, e));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        storage_error("replace", path, e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Category, ExpenseDate, ExpenseId, ExpenseRecord};
    use tempfile::TempDir;

    fn slot() -> Vec<ExpenseRecord> {
        vec![ExpenseRecord {
            id: ExpenseId::from_millis(1_709_600_000_000),
            date: ExpenseDate::from_raw("2024-03-05"),
            category: Category::Food,
            amount: Amount::new(1200),
            description: "lunch".into(),
        }]
    }

    #[test]
    fn test_missing_slot_reads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("householdExpenses.json");

        let data: Option<Vec<ExpenseRecord>> = read_json(&path).unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn test_write_then_read_slot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("householdExpenses.json");

        write_json_atomic(&path, &slot()).unwrap();

        let loaded: Option<Vec<ExpenseRecord>> = read_json(&path).unwrap();
        assert_eq!(loaded, Some(slot()));
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_overwrite_replaces_previous_list() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("householdExpenses.json");

        write_json_atomic(&path, &slot()).unwrap();
        write_json_atomic(&path, &Vec::<ExpenseRecord>::new()).unwrap();

        let loaded: Option<Vec<ExpenseRecord>> = read_json(&path).unwrap();
        assert_eq!(loaded, Some(Vec::new()));
    }

    #[test]
    fn test_temp_name_keeps_original_extension() {
        let path = Path::new("/tmp/config.json");
        assert_eq!(temp_path_for(path), Path::new("/tmp/config.json.tmp"));
    }

    #[test]
    fn test_corrupt_slot_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("householdExpenses.json");
        fs::write(&path, "[{\"id\": ").unwrap();

        let err = read_json::<Vec<ExpenseRecord>, _>(&path).unwrap_err();
        assert!(matches!(err, BudgetError::Storage(_)));
        assert!(err.to_string().contains("householdExpenses.json"));
    }
}
