use serde::{Deserialize, Serialize};

/// User-configurable settings, carried inside the portfolio state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency code the view formats amounts in (e.g., "EUR").
    /// The core never converts between currencies.
    pub default_currency: String,

    /// When true, every effective entry mutation re-registers the selected
    /// month's snapshot. When false, only the manual action writes to the ledger.
    #[serde(default = "default_auto_register")]
    pub auto_register_snapshots: bool,
}

fn default_auto_register() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_currency: "EUR".to_string(),
            auto_register_snapshots: default_auto_register(),
        }
    }
}
