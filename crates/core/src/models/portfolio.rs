use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::category::Category;
use super::entry::{EntryId, InvestmentEntry};
use super::month::Month;
use super::settings::Settings;
use super::snapshot::MonthSnapshot;

/// The single in-memory state object. Services receive it explicitly;
/// the tracker owns it and hands it back on request.
///
/// Contains: the entry store, the monthly ledger, contribution planning
/// inputs, the selected month and user settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Live entries, in insertion order
    pub entries: Vec<InvestmentEntry>,

    /// Next id to hand out. Only ever increases.
    pub next_id: u64,

    /// One snapshot per month label. `BTreeMap` keeps calendar order.
    pub snapshots: BTreeMap<Month, MonthSnapshot>,

    /// Sparse map of user-set contribution shares. Survives the category
    /// disappearing from the store.
    pub contribution_percentages: HashMap<Category, f64>,

    /// Amount to distribute each month
    pub monthly_contribution: f64,

    /// Month label that registrations are written to
    pub selected_month: Month,

    pub settings: Settings,
}

impl Portfolio {
    /// Empty portfolio with the selected month set to `month`.
    pub fn for_month(month: Month) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            snapshots: BTreeMap::new(),
            contribution_percentages: HashMap::new(),
            monthly_contribution: 0.0,
            selected_month: month,
            settings: Settings::default(),
        }
    }

    /// Grand total of all live entries.
    pub fn total_value(&self) -> f64 {
        self.entries.iter().map(|e| e.value).sum()
    }

    /// Highest id held by a live entry or any recorded snapshot.
    pub fn highest_id(&self) -> Option<EntryId> {
        let live = self.entries.iter();
        let recorded = self.snapshots.values().flat_map(|s| s.entries.iter());
        live.chain(recorded).map(|e| e.id).max()
    }

    /// Move `next_id` past every id already in use. Returns whether the
    /// counter had to be raised.
    pub fn reserve_existing_ids(&mut self) -> bool {
        match self.highest_id() {
            Some(EntryId(highest)) if self.next_id <= highest => {
                self.next_id = highest.saturating_add(1);
                true
            }
            _ => false,
        }
    }

    /// Hand out a fresh id, or `None` once the id space is used up.
    pub(crate) fn allocate_id(&mut self) -> Option<EntryId> {
        let next = self.next_id.checked_add(1)?;
        let id = EntryId(self.next_id);
        self.next_id = next;
        Some(id)
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::for_month(Month::current())
    }
}
