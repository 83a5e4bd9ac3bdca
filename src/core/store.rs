//! Storage abstraction for exchange rate records

use super::error::RateError;
use super::rates::ExchangeRateRecord;
use async_trait::async_trait;
use chrono::NaiveDate;

/// A keyed store holding at most one record per (currency, date), with a
/// date-indexed view.
#[async_trait]
pub trait RateStore: Send + Sync {
    /// Upserts every record. Records are independent of each other and the
    /// write order is unspecified.
    async fn put_batch(&self, records: &[ExchangeRateRecord]) -> Result<(), RateError>;

    /// Returns all records for exactly `date`, regardless of currency.
    async fn query_by_date(&self, date: NaiveDate) -> Result<Vec<ExchangeRateRecord>, RateError>;
}
