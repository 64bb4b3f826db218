use serde::{Deserialize, Serialize};

use super::category::Category;

/// Planned share of the monthly contribution for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionLine {
    pub category: Category,

    /// Palette colour of the category
    pub color: String,

    /// User-assigned share, 0..=100
    pub percentage: f64,

    /// `percentage / 100 × monthly total`, rounded to 2 decimals
    pub amount: f64,
}

/// Distribution of a monthly contribution across the categories currently held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionDistribution {
    /// One line per category present in the portfolio, in aggregate order
    pub lines: Vec<ContributionLine>,

    /// The monthly contribution being distributed
    pub monthly_total: f64,

    /// Sum of line amounts
    pub total_allocated: f64,

    /// Sum of raw percentages over the listed categories
    pub total_percentage: f64,

    /// `total_percentage > 100`. A warning for the view, never enforced.
    pub over_allocated: bool,
}

impl ContributionDistribution {
    /// Contribution left unassigned (negative when over-allocated).
    pub fn unallocated(&self) -> f64 {
        self.monthly_total - self.total_allocated
    }
}
