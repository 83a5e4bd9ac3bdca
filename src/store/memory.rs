use crate::core::{ExchangeRateRecord, RateError, RateStore};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// In-memory rate store keyed by (currency, date)
#[derive(Clone, Default)]
pub struct MemoryRateStore {
    inner: Arc<Mutex<HashMap<(String, NaiveDate), f64>>>,
}

impl MemoryRateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct (currency, date) records held.
    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }
}

#[async_trait]
impl RateStore for MemoryRateStore {
    async fn put_batch(&self, records: &[ExchangeRateRecord]) -> Result<(), RateError> {
        let mut store = self.inner.lock().await;
        for record in records {
            store.insert((record.currency.clone(), record.date), record.rate);
        }
        debug!(count = records.len(), "Store PUT batch");
        Ok(())
    }

    async fn query_by_date(&self, date: NaiveDate) -> Result<Vec<ExchangeRateRecord>, RateError> {
        let store = self.inner.lock().await;
        let mut records: Vec<ExchangeRateRecord> = store
            .iter()
            .filter(|((_, record_date), _)| *record_date == date)
            .map(|((currency, _), rate)| ExchangeRateRecord::new(currency, *rate, date))
            .collect();
        records.sort_by(|a, b| a.currency.cmp(&b.currency));
        debug!(%date, count = records.len(), "Store QUERY by date");
        Ok(records)
    }
}
