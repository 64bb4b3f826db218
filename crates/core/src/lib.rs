pub mod errors;
pub mod models;
pub mod numeric;
pub mod services;

use log::{debug, warn};
use std::collections::HashSet;

use models::{
    action::{Action, ActionOutcome},
    aggregate::{AssetAggregate, CategoryAggregate},
    category::Category,
    contribution::ContributionDistribution,
    entry::{EntryId, InvestmentEntry, NewEntry},
    month::Month,
    portfolio::Portfolio,
    settings::Settings,
    snapshot::{MonthSnapshot, RegistrationOutcome, TrendPoint},
};
use services::{
    aggregation_service::AggregationService, contribution_service::ContributionService,
    entry_service::EntryService, ledger_service::LedgerService,
};

use errors::{CoreError, ValidationError};

/// Main entry point for the investment ledger core.
/// Holds the portfolio state and the services that operate on it.
///
/// Aggregates are never cached: every read recomputes from the entry list.
#[must_use]
pub struct InvestmentTracker {
    portfolio: Portfolio,
    entry_service: EntryService,
    aggregation_service: AggregationService,
    ledger_service: LedgerService,
    contribution_service: ContributionService,
}

impl std::fmt::Debug for InvestmentTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvestmentTracker")
            .field("entries", &self.portfolio.entries.len())
            .field("snapshots", &self.portfolio.snapshots.len())
            .field("selected_month", &self.portfolio.selected_month)
            .field("settings", &self.portfolio.settings)
            .finish()
    }
}

impl InvestmentTracker {
    /// Create an empty tracker with default settings, selecting the current month.
    pub fn create_new() -> Self {
        Self::build(Portfolio::default())
    }

    /// Create an empty tracker with the given settings.
    pub fn with_settings(settings: Settings) -> Result<Self, CoreError> {
        let mut tracker = Self::create_new();
        tracker.set_default_currency(&settings.default_currency)?;
        tracker.portfolio.settings.auto_register_snapshots = settings.auto_register_snapshots;
        Ok(tracker)
    }

    /// Resume from a state object previously returned by [`Self::into_portfolio`].
    ///
    /// The id counter is moved past every id already held by an entry or a
    /// snapshot, so new entries never reuse one.
    pub fn from_portfolio(mut portfolio: Portfolio) -> Self {
        let stale = portfolio.next_id;
        if portfolio.reserve_existing_ids() {
            warn!(
                "Id counter {stale} was behind existing ids; resuming at {}",
                portfolio.next_id
            );
        }
        Self::build(portfolio)
    }

    /// Borrow the underlying state.
    #[must_use]
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Give the state back to the caller.
    #[must_use]
    pub fn into_portfolio(self) -> Portfolio {
        self.portfolio
    }

    // ── Entry Management ────────────────────────────────────────────

    /// Add an investment entry and register the selected month.
    pub fn add_entry(
        &mut self,
        category: Option<Category>,
        name: impl Into<String>,
        value: f64,
    ) -> Result<EntryId, CoreError> {
        let new_entry = NewEntry {
            category,
            name: name.into(),
            value,
        };
        let id = self
            .entry_service
            .add(&mut self.portfolio, new_entry)
            .inspect_err(|e| warn!("Rejected entry: {e}"))?;
        self.after_entries_changed();
        Ok(id)
    }

    /// Add an entry from raw form fields. An empty category means none was
    /// selected; an unparsable value is treated as 0 and rejected.
    pub fn add_entry_from_input(
        &mut self,
        category: &str,
        name: &str,
        value: &str,
    ) -> Result<EntryId, CoreError> {
        let category = match category.parse::<Category>() {
            Ok(c) => Some(c),
            Err(ValidationError::MissingCategory) => None,
            Err(e) => {
                warn!("Rejected entry: {e}");
                return Err(e.into());
            }
        };
        self.add_entry(category, name, numeric::parse_amount(value))
    }

    /// Remove every entry in `ids` (typically one asset row's members).
    /// Absent ids are ignored. Returns how many entries were removed.
    pub fn remove_entry_group(&mut self, ids: &HashSet<EntryId>) -> usize {
        let removed = self.entry_service.remove(&mut self.portfolio, ids);
        if removed > 0 {
            self.after_entries_changed();
        } else {
            debug!("Nothing to remove for {} ids", ids.len());
        }
        removed
    }

    /// Set a group's combined value, spreading it over the members in
    /// proportion to their current values. Returns false (state unchanged)
    /// when the group's current total is 0.
    pub fn rescale_entry_group(&mut self, ids: &HashSet<EntryId>, new_total: f64) -> bool {
        let rescaled = self
            .entry_service
            .rescale_group(&mut self.portfolio, ids, new_total);
        if rescaled {
            self.after_entries_changed();
        }
        rescaled
    }

    /// Like [`Self::rescale_entry_group`], from a raw form field.
    pub fn rescale_entry_group_from_input(&mut self, ids: &HashSet<EntryId>, raw: &str) -> bool {
        self.rescale_entry_group(ids, numeric::parse_amount(raw))
    }

    /// Get a single entry by its ID.
    #[must_use]
    pub fn get_entry(&self, id: EntryId) -> Option<&InvestmentEntry> {
        self.entry_service.get(&self.portfolio, id)
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[InvestmentEntry] {
        self.entry_service.all(&self.portfolio)
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.portfolio.entries.len()
    }

    /// Grand total of all entries.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.portfolio.total_value()
    }

    // ── Aggregates ──────────────────────────────────────────────────

    /// Per-category totals for the distribution chart.
    #[must_use]
    pub fn category_aggregates(&self) -> Vec<CategoryAggregate> {
        self.aggregation_service
            .category_aggregates(&self.portfolio.entries)
    }

    /// Per-asset rows for the editable list.
    #[must_use]
    pub fn asset_aggregates(&self) -> Vec<AssetAggregate> {
        self.aggregation_service
            .asset_aggregates(&self.portfolio.entries, self.total_value())
    }

    // ── Monthly Ledger ──────────────────────────────────────────────

    /// Change the month that registrations are written to. Does not register.
    pub fn select_month(&mut self, month: Month) {
        self.portfolio.selected_month = month;
    }

    /// Select a month by label ("Fev", "feb", ...).
    pub fn select_month_by_label(&mut self, label: &str) -> Result<Month, CoreError> {
        let month = label.parse::<Month>()?;
        self.select_month(month);
        Ok(month)
    }

    #[must_use]
    pub fn selected_month(&self) -> Month {
        self.portfolio.selected_month
    }

    /// Manually register the current state under the selected month.
    /// Skipped when there are no entries or the month already holds the
    /// current total.
    pub fn register_snapshot_now(&mut self) -> RegistrationOutcome {
        self.ledger_service.register_manually(&mut self.portfolio)
    }

    /// Whether [`Self::register_snapshot_now`] would record anything.
    #[must_use]
    pub fn can_register_snapshot(&self) -> bool {
        self.ledger_service.can_register_manually(&self.portfolio)
    }

    #[must_use]
    pub fn ledger_snapshot(&self, month: Month) -> Option<&MonthSnapshot> {
        self.ledger_service.get(&self.portfolio, month)
    }

    /// Recorded snapshots, January to December.
    #[must_use]
    pub fn ledger_all_ordered(&self) -> Vec<&MonthSnapshot> {
        self.ledger_service.all_ordered(&self.portfolio)
    }

    /// `(month, total)` points for the trend chart.
    #[must_use]
    pub fn ledger_trend(&self) -> Vec<TrendPoint> {
        self.ledger_service.trend(&self.portfolio)
    }

    /// Asset rows of a recorded month, computed against that month's total.
    #[must_use]
    pub fn snapshot_asset_aggregates(&self, month: Month) -> Option<Vec<AssetAggregate>> {
        self.ledger_snapshot(month)
            .map(|s| self.aggregation_service.asset_aggregates(&s.entries, s.total))
    }

    // ── Contribution Planning ───────────────────────────────────────

    /// Set a category's share of the monthly contribution (clamped to 0..=100).
    pub fn set_contribution_percentage(&mut self, category: Category, percentage: f64) {
        self.contribution_service
            .set_percentage(&mut self.portfolio, category, percentage);
    }

    /// Like [`Self::set_contribution_percentage`], from a raw form field.
    pub fn set_contribution_percentage_from_input(&mut self, category: Category, raw: &str) {
        self.set_contribution_percentage(category, numeric::parse_amount(raw));
    }

    /// Stored share for a category, whether or not it is currently held.
    #[must_use]
    pub fn contribution_percentage(&self, category: Category) -> Option<f64> {
        self.portfolio.contribution_percentages.get(&category).copied()
    }

    /// Set the monthly amount to distribute (negative or non-finite → 0).
    pub fn set_monthly_contribution(&mut self, total: f64) {
        self.contribution_service
            .set_monthly_total(&mut self.portfolio, total);
    }

    /// Like [`Self::set_monthly_contribution`], from a raw form field.
    pub fn set_monthly_contribution_from_input(&mut self, raw: &str) {
        self.set_monthly_contribution(numeric::parse_amount(raw));
    }

    #[must_use]
    pub fn monthly_contribution(&self) -> f64 {
        self.portfolio.monthly_contribution
    }

    /// Split the monthly contribution over the categories currently held.
    #[must_use]
    pub fn contribution_distribution(&self) -> ContributionDistribution {
        self.contribution_service.distribute(
            &self.category_aggregates(),
            &self.portfolio.contribution_percentages,
            self.portfolio.monthly_contribution,
        )
    }

    // ── Commands ────────────────────────────────────────────────────

    /// Apply a user action. Only entry validation can fail; every other
    /// action either changes state or reports a no-op in its outcome.
    pub fn dispatch(&mut self, action: Action) -> Result<ActionOutcome, CoreError> {
        let outcome = match action {
            Action::AddEntry(new_entry) => ActionOutcome::EntryAdded(self.add_entry(
                new_entry.category,
                new_entry.name,
                new_entry.value,
            )?),
            Action::RemoveEntryGroup(ids) => {
                ActionOutcome::EntriesRemoved(self.remove_entry_group(&ids))
            }
            Action::RescaleEntryGroup { ids, new_total } => {
                ActionOutcome::GroupRescaled(self.rescale_entry_group(&ids, new_total))
            }
            Action::SetContributionPercentage {
                category,
                percentage,
            } => {
                self.set_contribution_percentage(category, percentage);
                ActionOutcome::PlanUpdated
            }
            Action::SetMonthlyContribution(total) => {
                self.set_monthly_contribution(total);
                ActionOutcome::PlanUpdated
            }
            Action::SelectMonth(month) => {
                self.select_month(month);
                ActionOutcome::MonthSelected(month)
            }
            Action::RegisterSnapshotNow => {
                ActionOutcome::Registration(self.register_snapshot_now())
            }
        };
        Ok(outcome)
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Set the display currency code (e.g., "EUR", "USD").
    /// Must be a 3-letter alphabetic string; stored uppercased.
    pub fn set_default_currency(&mut self, currency: &str) -> Result<(), CoreError> {
        let trimmed = currency.trim().to_uppercase();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::InvalidCurrency(currency.to_string()));
        }
        self.portfolio.settings.default_currency = trimmed;
        Ok(())
    }

    /// Turn automatic snapshot registration on entry changes on or off.
    pub fn set_auto_register_snapshots(&mut self, enabled: bool) {
        self.portfolio.settings.auto_register_snapshots = enabled;
    }

    #[must_use]
    pub fn get_settings(&self) -> &Settings {
        &self.portfolio.settings
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export all entries as a JSON string.
    pub fn export_entries_to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(&self.portfolio.entries)?)
    }

    /// Export all entries as a CSV string.
    /// Columns: id, category, name, value
    pub fn export_entries_to_csv(&self) -> Result<String, CoreError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["id", "category", "name", "value"])?;
        for entry in &self.portfolio.entries {
            writer.write_record([
                entry.id.to_string(),
                entry.category.label().to_string(),
                entry.name.clone(),
                entry.value.to_string(),
            ])?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| CoreError::Serialization(format!("Failed to flush CSV: {e}")))?;
        String::from_utf8(bytes)
            .map_err(|e| CoreError::Serialization(format!("CSV is not UTF-8: {e}")))
    }

    /// The whole state as JSON, for a view that renders from a plain document.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.portfolio)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize portfolio: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn after_entries_changed(&mut self) {
        if self.portfolio.settings.auto_register_snapshots {
            let month = self.portfolio.selected_month;
            self.ledger_service.register(&mut self.portfolio, month);
        } else {
            debug!("Entries changed; automatic registration is off");
        }
    }

    fn build(portfolio: Portfolio) -> Self {
        Self {
            portfolio,
            entry_service: EntryService::new(),
            aggregation_service: AggregationService::new(),
            ledger_service: LedgerService::new(),
            contribution_service: ContributionService::new(),
        }
    }
}
