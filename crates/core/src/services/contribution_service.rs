use log::warn;
use std::collections::HashMap;

use crate::models::aggregate::CategoryAggregate;
use crate::models::category::Category;
use crate::models::contribution::{ContributionDistribution, ContributionLine};
use crate::models::portfolio::Portfolio;
use crate::numeric::{clamp_amount, round2};

/// Upper bound for a single category's share.
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Splits a monthly contribution across the categories currently held,
/// by user-assigned percentage.
pub struct ContributionService;

impl ContributionService {
    pub fn new() -> Self {
        Self
    }

    /// Store a category's share, clamped to 0..=100. Non-finite input becomes 0.
    /// The category does not need to be present in the store.
    pub fn set_percentage(&self, portfolio: &mut Portfolio, category: Category, percentage: f64) {
        let pct = clamp_amount(percentage).min(MAX_PERCENTAGE);
        portfolio.contribution_percentages.insert(category, pct);
    }

    /// Store the monthly amount to distribute. Negative or non-finite input becomes 0.
    pub fn set_monthly_total(&self, portfolio: &mut Portfolio, total: f64) {
        portfolio.monthly_contribution = clamp_amount(total);
    }

    /// Distribute `monthly_total` across `categories`.
    ///
    /// Only categories in `categories` get a line; percentages stored for
    /// absent categories are ignored here but left in the map. Every amount
    /// is 0 when the total or the summed percentage is 0.
    pub fn distribute(
        &self,
        categories: &[CategoryAggregate],
        percentages: &HashMap<Category, f64>,
        monthly_total: f64,
    ) -> ContributionDistribution {
        let monthly_total = clamp_amount(monthly_total);
        let pct_of = |c: Category| percentages.get(&c).copied().unwrap_or(0.0);

        let total_percentage: f64 = categories.iter().map(|c| pct_of(c.category)).sum();
        let short_circuit = monthly_total == 0.0 || total_percentage == 0.0;

        let lines: Vec<ContributionLine> = categories
            .iter()
            .map(|c| {
                let percentage = pct_of(c.category);
                let amount = if short_circuit {
                    0.0
                } else {
                    round2(percentage / 100.0 * monthly_total)
                };
                ContributionLine {
                    category: c.category,
                    color: c.color.clone(),
                    percentage,
                    amount,
                }
            })
            .collect();

        let total_allocated = round2(lines.iter().map(|l| l.amount).sum());
        let over_allocated = total_percentage > MAX_PERCENTAGE;
        if over_allocated {
            warn!("Contribution percentages sum to {total_percentage}%, above {MAX_PERCENTAGE}%");
        }

        ContributionDistribution {
            lines,
            monthly_total,
            total_allocated,
            total_percentage,
            over_allocated,
        }
    }
}

impl Default for ContributionService {
    fn default() -> Self {
        Self::new()
    }
}
