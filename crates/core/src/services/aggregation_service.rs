use std::collections::HashMap;

use crate::models::aggregate::{AssetAggregate, CategoryAggregate};
use crate::models::category::Category;
use crate::models::entry::InvestmentEntry;
use crate::numeric::round2;

/// Groups entries into category and asset rows for the charts and the
/// editable list.
///
/// Stateless: every call recomputes from the slice it is given. Rows come
/// out in the order their key is first seen in the input.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// One row per category present in `entries`. Empty categories are omitted.
    pub fn category_aggregates(&self, entries: &[InvestmentEntry]) -> Vec<CategoryAggregate> {
        let mut rows: Vec<CategoryAggregate> = Vec::new();
        let mut index: HashMap<Category, usize> = HashMap::new();

        for entry in entries {
            match index.get(&entry.category) {
                Some(&i) => rows[i].value += entry.value,
                None => {
                    index.insert(entry.category, rows.len());
                    rows.push(CategoryAggregate {
                        category: entry.category,
                        value: entry.value,
                        color: entry.category.color().to_string(),
                    });
                }
            }
        }

        rows
    }

    /// One row per `(category, name)` pair, with each row's share of
    /// `grand_total`.
    ///
    /// Callers pass the total explicitly so a month snapshot can be
    /// aggregated against its own recorded total.
    pub fn asset_aggregates(
        &self,
        entries: &[InvestmentEntry],
        grand_total: f64,
    ) -> Vec<AssetAggregate> {
        let mut rows: Vec<AssetAggregate> = Vec::new();
        let mut index: HashMap<(Category, &str), usize> = HashMap::new();

        for entry in entries {
            let key = (entry.category, entry.name.as_str());
            match index.get(&key) {
                Some(&i) => {
                    let row = &mut rows[i];
                    row.value += entry.value;
                    row.member_ids.push(entry.id);
                }
                None => {
                    index.insert(key, rows.len());
                    rows.push(AssetAggregate {
                        category: entry.category,
                        name: entry.name.clone(),
                        value: entry.value,
                        percentage: 0.0, // filled below
                        color: entry.category.color().to_string(),
                        member_ids: vec![entry.id],
                    });
                }
            }
        }

        for row in &mut rows {
            row.percentage = Self::share_pct(row.value, grand_total);
        }

        rows
    }

    /// `value / total × 100` rounded to 2 decimals; 0 when `total` is 0.
    fn share_pct(value: f64, total: f64) -> f64 {
        if total == 0.0 {
            0.0
        } else {
            round2(value / total * 100.0)
        }
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}
