use serde::{Deserialize, Serialize};

use super::category::Category;
use super::entry::EntryId;

/// Total value held in one category. Feeds the distribution chart.
///
/// Derived on every read, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    /// The category
    pub category: Category,

    /// Sum of entry values in this category
    pub value: f64,

    /// Palette colour for the category
    pub color: String,
}

/// Entries sharing the same `(category, name)` key, merged into one row
/// of the editable asset list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetAggregate {
    pub category: Category,

    /// Asset name, matched exactly (case-sensitive)
    pub name: String,

    /// Sum of member entry values
    pub value: f64,

    /// Share of the grand total × 100, rounded to 2 decimals (0 when the total is 0)
    pub percentage: f64,

    /// Palette colour of the category
    pub color: String,

    /// Ids of every entry grouped under this key, in store order
    pub member_ids: Vec<EntryId>,
}
