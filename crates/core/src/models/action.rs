use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::category::Category;
use super::entry::{EntryId, NewEntry};
use super::month::Month;
use super::snapshot::RegistrationOutcome;

/// A user action, for driving the tracker as a command stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddEntry(NewEntry),
    RemoveEntryGroup(HashSet<EntryId>),
    RescaleEntryGroup {
        ids: HashSet<EntryId>,
        new_total: f64,
    },
    SetContributionPercentage {
        category: Category,
        percentage: f64,
    },
    SetMonthlyContribution(f64),
    SelectMonth(Month),
    RegisterSnapshotNow,
}

/// What an applied [`Action`] did to the state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// A new entry was stored
    EntryAdded(EntryId),
    /// Number of entries removed (0 when every id was already absent)
    EntriesRemoved(usize),
    /// Whether the group was rescaled (false for an empty or zero-total group)
    GroupRescaled(bool),
    /// Planning input changed; entries and ledger untouched
    PlanUpdated,
    MonthSelected(Month),
    Registration(RegistrationOutcome),
}
