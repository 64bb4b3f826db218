use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ValidationError;

/// Chart palette. Categories take colours by their position in [`Category::ALL`].
pub const PALETTE: [&str; 8] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#14b8a6", "#f97316",
];

/// The fixed set of investment categories a position can be filed under.
///
/// Ordering follows the display order of the category selector, which is
/// also the order used to assign palette colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Individual stocks
    #[serde(rename = "Ações")]
    Stocks,
    /// Savings certificates
    #[serde(rename = "Certificados")]
    Certificates,
    /// Term deposits
    #[serde(rename = "Depósitos a prazo")]
    TermDeposits,
    #[serde(rename = "ETFs")]
    Etfs,
    /// Mutual funds
    #[serde(rename = "Fundo de investimentos")]
    InvestmentFunds,
    /// Bonds
    #[serde(rename = "Obrigações")]
    Bonds,
    /// Retirement savings plans
    #[serde(rename = "PPR")]
    RetirementPlan,
    /// Savings accounts
    #[serde(rename = "Poupança")]
    Savings,
}

impl Category {
    /// Every category, in selector order.
    pub const ALL: [Category; 8] = [
        Category::Stocks,
        Category::Certificates,
        Category::TermDeposits,
        Category::Etfs,
        Category::InvestmentFunds,
        Category::Bonds,
        Category::RetirementPlan,
        Category::Savings,
    ];

    /// The user-facing label, also used as the default asset name.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Stocks => "Ações",
            Category::Certificates => "Certificados",
            Category::TermDeposits => "Depósitos a prazo",
            Category::Etfs => "ETFs",
            Category::InvestmentFunds => "Fundo de investimentos",
            Category::Bonds => "Obrigações",
            Category::RetirementPlan => "PPR",
            Category::Savings => "Poupança",
        }
    }

    /// Whether entries in this category must carry an explicit asset name
    /// (a ticker or fund name) instead of falling back to the category label.
    pub fn requires_name(&self) -> bool {
        matches!(
            self,
            Category::Stocks | Category::Etfs | Category::InvestmentFunds | Category::Bonds
        )
    }

    /// Categories that require an explicit asset name.
    pub fn requiring_name() -> Vec<Category> {
        Self::ALL.into_iter().filter(Category::requires_name).collect()
    }

    /// Hex colour used for this category in charts and lists.
    pub fn color(&self) -> &'static str {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        PALETTE[idx % PALETTE.len()]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Parses a selector value. Empty input means nothing was selected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        Self::ALL
            .into_iter()
            .find(|c| c.label() == trimmed)
            .ok_or_else(|| ValidationError::UnknownCategory(trimmed.to_string()))
    }
}
