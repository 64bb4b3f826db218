use serde::{Deserialize, Serialize};

use super::category::Category;

/// Identifier of an investment entry.
///
/// Assigned in creation order by the store and never reused, even after
/// the entry is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single recorded investment position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentEntry {
    /// Unique identifier
    pub id: EntryId,

    /// Investment category
    pub category: Category,

    /// Asset label (ticker, fund name, or the category label when none was given)
    pub name: String,

    /// Monetary amount (always positive at creation)
    pub value: f64,
}

/// Unvalidated input for a new entry, as collected by the entry form.
///
/// `category` is `None` when nothing was selected.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub category: Option<Category>,
    pub name: String,
    pub value: f64,
}

impl NewEntry {
    pub fn new(category: Category, name: impl Into<String>, value: f64) -> Self {
        Self {
            category: Some(category),
            name: name.into(),
            value,
        }
    }
}
