//! Expense categories
//!
//! Categories form a fixed, closed set of codes, each with a display label.
//! Data imported from elsewhere may carry a code outside that set; it is kept
//! verbatim as [`Category::Unrecognized`] and shown under a fallback label.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Label shown for a category code outside the known set
pub const FALLBACK_LABEL: &str = "Unknown";

/// An expense category
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Food,
    Utilities,
    Transportation,
    Entertainment,
    Healthcare,
    Other,
    /// A code not in the known set, preserved as-is
    Unrecognized(String),
}

impl Category {
    /// Every known category, in display order
    pub const KNOWN: [Category; 6] = [
        Category::Food,
        Category::Utilities,
        Category::Transportation,
        Category::Entertainment,
        Category::Healthcare,
        Category::Other,
    ];

    /// Resolve a stored code, keeping unknown codes instead of failing
    pub fn from_code(code: &str) -> Self {
        match code {
            "food" => Self::Food,
            "utilities" => Self::Utilities,
            "transportation" => Self::Transportation,
            "entertainment" => Self::Entertainment,
            "healthcare" => Self::Healthcare,
            "other" => Self::Other,
            unknown => Self::Unrecognized(unknown.to_string()),
        }
    }

    /// The code written to storage and export files
    pub fn code(&self) -> &str {
        match self {
            Self::Food => "food",
            Self::Utilities => "utilities",
            Self::Transportation => "transportation",
            Self::Entertainment => "entertainment",
            Self::Healthcare => "healthcare",
            Self::Other => "other",
            Self::Unrecognized(code) => code,
        }
    }

    /// Display label; unknown codes get [`FALLBACK_LABEL`]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Utilities => "Utilities",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Other => "Other",
            Self::Unrecognized(_) => FALLBACK_LABEL,
        }
    }

    /// Check if this is one of the known codes
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Strict parsing for user input: only known codes (or their labels) pass
impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::KNOWN
            .iter()
            .find(|c| c.code() == needle || c.label().to_lowercase() == needle)
            .cloned()
            .ok_or_else(|| CategoryParseError::Unknown(s.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Self::from_code(&code))
    }
}

/// Error for category codes typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryParseError::Unknown(s) => {
                let codes: Vec<&str> = Category::KNOWN.iter().map(|c| c.code()).collect();
                write!(f, "Unknown category '{}' (expected one of: {})", s, codes.join(", "))
            }
        }
    }
}

impl std::error::Error for CategoryParseError {}
