//! Exchange rate records and the per-request maps built from them

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Currency code to rate, in insertion order.
pub type RateMap = IndexMap<String, f64>;

/// Currency code to signed delta (today - yesterday).
pub type ChangeMap = IndexMap<String, f64>;

/// One persisted rate for a currency on a calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateRecord {
    pub currency: String,
    pub rate: f64,
    pub date: NaiveDate,
}

impl ExchangeRateRecord {
    pub fn new(currency: &str, rate: f64, date: NaiveDate) -> Self {
        Self {
            currency: currency.to_string(),
            rate,
            date,
        }
    }
}

/// Builds records for every entry of `rates`, all stamped with `date`.
pub fn records_for_date(rates: &RateMap, date: NaiveDate) -> Vec<ExchangeRateRecord> {
    rates
        .iter()
        .map(|(currency, rate)| ExchangeRateRecord::new(currency, *rate, date))
        .collect()
}

/// Collapses records into a rate map. Later records win on duplicate codes.
pub fn rate_map<'a>(records: impl IntoIterator<Item = &'a ExchangeRateRecord>) -> RateMap {
    records
        .into_iter()
        .map(|record| (record.currency.clone(), record.rate))
        .collect()
}

/// Per-currency delta for every currency quoted on both days.
///
/// Currencies missing from `previous` are omitted rather than treated as a
/// zero baseline.
pub fn calculate_changes(current: &RateMap, previous: &RateMap) -> ChangeMap {
    current
        .iter()
        .filter_map(|(currency, rate)| {
            previous
                .get(currency)
                .map(|previous_rate| (currency.clone(), rate - previous_rate))
        })
        .collect()
}
