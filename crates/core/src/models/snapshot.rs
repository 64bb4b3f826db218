use serde::{Deserialize, Serialize};

use super::entry::InvestmentEntry;
use super::month::Month;

/// The portfolio as it stood when it was registered under a month label.
///
/// `entries` is an owned copy: later changes to the live store never reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSnapshot {
    /// Month slot this snapshot occupies
    pub month: Month,

    /// Grand total at registration time
    pub total: f64,

    /// Copy of every entry at registration time
    pub entries: Vec<InvestmentEntry>,
}

/// One point of the month-over-month trend line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: Month,
    pub total: f64,
}

/// Result of a manual "register now" request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationOutcome {
    /// A snapshot was written (created or overwritten) for the month
    Recorded(Month),
    /// Nothing to record: the store holds no entries
    SkippedEmpty,
    /// The month already holds a snapshot with exactly the current total
    SkippedUnchanged,
}

impl RegistrationOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, RegistrationOutcome::Recorded(_))
    }
}
