use log::debug;
use std::collections::HashSet;

use crate::errors::ValidationError;
use crate::models::category::Category;
use crate::models::entry::{EntryId, InvestmentEntry, NewEntry};
use crate::models::portfolio::Portfolio;
use crate::numeric::clamp_amount;

/// Owns every change to the entry list: validation, id assignment,
/// removal and proportional rescaling.
///
/// Pure business logic with no I/O. Ledger registration is the caller's job.
pub struct EntryService;

impl EntryService {
    pub fn new() -> Self {
        Self
    }

    /// Validate and append a new entry. Returns the assigned id.
    ///
    /// Blank names fall back to the category label unless the category
    /// requires an explicit name.
    pub fn add(
        &self,
        portfolio: &mut Portfolio,
        new_entry: NewEntry,
    ) -> Result<EntryId, ValidationError> {
        let (category, name, value) = self.validate(new_entry)?;
        let id = portfolio
            .allocate_id()
            .ok_or(ValidationError::IdsExhausted)?;
        portfolio.entries.push(InvestmentEntry {
            id,
            category,
            name,
            value,
        });
        debug!("Added entry {id} ({category}) worth {value}");
        Ok(id)
    }

    /// Remove every entry whose id is in `ids`. Missing ids are ignored.
    /// Returns how many entries were removed.
    pub fn remove(&self, portfolio: &mut Portfolio, ids: &HashSet<EntryId>) -> usize {
        let before = portfolio.entries.len();
        portfolio.entries.retain(|e| !ids.contains(&e.id));
        before - portfolio.entries.len()
    }

    /// Scale the group `ids` so its values sum to `new_total`, keeping each
    /// entry's share of the group.
    ///
    /// `new_total` is clamped to >= 0. A group whose current total is 0
    /// (including a group with no live members) is left as is, and so is a
    /// group whose scaled values would not be finite. Returns whether
    /// anything was rescaled.
    pub fn rescale_group(
        &self,
        portfolio: &mut Portfolio,
        ids: &HashSet<EntryId>,
        new_total: f64,
    ) -> bool {
        let new_total = clamp_amount(new_total);
        let current = self.group_total(portfolio, ids);
        if current == 0.0 {
            debug!("Skipping rescale of {} ids: group total is zero", ids.len());
            return false;
        }

        let factor = new_total / current;
        let scaled_ok = portfolio
            .entries
            .iter()
            .filter(|e| ids.contains(&e.id))
            .all(|e| (e.value * factor).is_finite());
        if !current.is_finite() || !factor.is_finite() || !scaled_ok {
            debug!(
                "Skipping rescale of {} ids: {} -> {} overflows",
                ids.len(),
                current,
                new_total
            );
            return false;
        }

        for entry in portfolio.entries.iter_mut().filter(|e| ids.contains(&e.id)) {
            entry.value *= factor;
        }
        true
    }

    /// Sum of values of the live entries in `ids`.
    pub fn group_total(&self, portfolio: &Portfolio, ids: &HashSet<EntryId>) -> f64 {
        portfolio
            .entries
            .iter()
            .filter(|e| ids.contains(&e.id))
            .map(|e| e.value)
            .sum()
    }

    /// All entries in insertion order.
    pub fn all<'a>(&self, portfolio: &'a Portfolio) -> &'a [InvestmentEntry] {
        &portfolio.entries
    }

    /// Look up a single entry.
    pub fn get<'a>(&self, portfolio: &'a Portfolio, id: EntryId) -> Option<&'a InvestmentEntry> {
        portfolio.entries.iter().find(|e| e.id == id)
    }

    /// Validate a new entry and resolve its final name.
    ///
    /// Rules:
    /// - A category must be selected
    /// - Value must be positive and finite
    /// - Name-required categories need a non-blank name
    fn validate(&self, new_entry: NewEntry) -> Result<(Category, String, f64), ValidationError> {
        let category = new_entry.category.ok_or(ValidationError::MissingCategory)?;

        if !new_entry.value.is_finite() || new_entry.value <= 0.0 {
            return Err(ValidationError::NonPositiveValue(new_entry.value));
        }

        let trimmed = new_entry.name.trim();
        let name = if trimmed.is_empty() {
            if category.requires_name() {
                return Err(ValidationError::MissingName(category.label().to_string()));
            }
            category.label().to_string()
        } else {
            trimmed.to_string()
        };

        Ok((category, name, new_entry.value))
    }
}

impl Default for EntryService {
    fn default() -> Self {
        Self::new()
    }
}
