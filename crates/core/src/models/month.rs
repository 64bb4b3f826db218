use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// A calendar month label with no year component.
///
/// The ledger keeps one slot per label, so January of two different years
/// share the same slot. Variant order is calendar order, which `Ord` relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

const ENGLISH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl Month {
    /// All twelve months, January first.
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Label shown in the month picker and history table.
    pub fn label(&self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Fev",
            Month::Mar => "Mar",
            Month::Apr => "Abr",
            Month::May => "Mai",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Ago",
            Month::Sep => "Set",
            Month::Oct => "Out",
            Month::Nov => "Nov",
            Month::Dec => "Dez",
        }
    }

    /// 1-based calendar number (January = 1).
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    /// Inverse of [`Month::number`]. Returns `None` outside 1..=12.
    pub fn from_number(n: u32) -> Option<Month> {
        n.checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx as usize))
            .copied()
    }

    /// The current month according to the local clock.
    pub fn current() -> Month {
        use chrono::Datelike;
        let n = chrono::Local::now().month();
        Self::from_number(n).unwrap_or(Month::Jan)
    }
}

impl From<chrono::Month> for Month {
    fn from(m: chrono::Month) -> Self {
        Self::from_number(m.number_from_month()).unwrap_or(Month::Jan)
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Month {
    type Err = CoreError;

    /// Accepts the display labels and the English abbreviations, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .zip(ENGLISH_LABELS)
            .find(|(m, en)| m.label().to_lowercase() == needle || en.to_lowercase() == needle)
            .map(|(m, _)| m)
            .ok_or_else(|| CoreError::UnknownMonth(s.trim().to_string()))
    }
}
