use log::{debug, info};

use crate::models::month::Month;
use crate::models::portfolio::Portfolio;
use crate::models::snapshot::{MonthSnapshot, RegistrationOutcome, TrendPoint};

/// The monthly ledger: one snapshot slot per month label, last write wins.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Copy the live entries into `month`'s slot, replacing whatever was there.
    pub fn register(&self, portfolio: &mut Portfolio, month: Month) {
        let snapshot = MonthSnapshot {
            month,
            total: portfolio.total_value(),
            entries: portfolio.entries.clone(),
        };
        let replaced = portfolio.snapshots.insert(month, snapshot).is_some();
        info!(
            "{} snapshot for {month} ({} entries)",
            if replaced { "Overwrote" } else { "Recorded" },
            portfolio.entries.len()
        );
    }

    /// Register the selected month, unless the store is empty or the
    /// recorded total for that month already equals the current total.
    pub fn register_manually(&self, portfolio: &mut Portfolio) -> RegistrationOutcome {
        if let Some(reason) = self.manual_block(portfolio) {
            debug!(
                "Manual registration for {} skipped: {:?}",
                portfolio.selected_month, reason
            );
            return reason;
        }
        let month = portfolio.selected_month;
        self.register(portfolio, month);
        RegistrationOutcome::Recorded(month)
    }

    /// Whether a manual registration would write anything.
    pub fn can_register_manually(&self, portfolio: &Portfolio) -> bool {
        self.manual_block(portfolio).is_none()
    }

    pub fn get<'a>(&self, portfolio: &'a Portfolio, month: Month) -> Option<&'a MonthSnapshot> {
        portfolio.snapshots.get(&month)
    }

    /// Every recorded snapshot, January first, regardless of registration order.
    pub fn all_ordered<'a>(&self, portfolio: &'a Portfolio) -> Vec<&'a MonthSnapshot> {
        // BTreeMap iteration follows Month's calendar ordering.
        portfolio.snapshots.values().collect()
    }

    /// `(month, total)` series for the trend chart, in calendar order.
    pub fn trend(&self, portfolio: &Portfolio) -> Vec<TrendPoint> {
        self.all_ordered(portfolio)
            .into_iter()
            .map(|s| TrendPoint {
                month: s.month,
                total: s.total,
            })
            .collect()
    }

    fn manual_block(&self, portfolio: &Portfolio) -> Option<RegistrationOutcome> {
        if portfolio.entries.is_empty() {
            return Some(RegistrationOutcome::SkippedEmpty);
        }
        let total = portfolio.total_value();
        match portfolio.snapshots.get(&portfolio.selected_month) {
            Some(existing) if existing.total == total => {
                Some(RegistrationOutcome::SkippedUnchanged)
            }
            _ => None,
        }
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
