use thiserror::Error;

/// Reasons an entry can be rejected before it reaches the store.
/// No state is mutated when one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("A category must be selected")]
    MissingCategory,

    #[error("Unknown category: '{0}'")]
    UnknownCategory(String),

    #[error("Value must be a positive amount, got {0}")]
    NonPositiveValue(f64),

    #[error("Category '{0}' requires an asset name")]
    MissingName(String),

    #[error("No entry ids left to assign")]
    IdsExhausted,
}

/// Unified error type for the entire investment-ledger-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Entry validation ────────────────────────────────────────────
    #[error("Entry validation failed: {0}")]
    Validation(#[from] ValidationError),

    // ── Settings / Input ────────────────────────────────────────────
    #[error("Invalid currency code '{0}': must be exactly 3 ASCII letters (e.g., EUR, USD)")]
    InvalidCurrency(String),

    #[error("Unknown month label: '{0}'")]
    UnknownMonth(String),

    // ── Export ──────────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        CoreError::Serialization(format!("CSV error: {e}"))
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
