use crate::core::{ExchangeRateRecord, RateError, RateStore};
use async_trait::async_trait;
use chrono::NaiveDate;
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::debug;

/// Persistent rate store backed by a fjall keyspace.
///
/// The table partition is keyed `CURRENCY#DATE`. The index partition is keyed
/// `DATE#CURRENCY` so all records of a date share a key prefix. Both hold the
/// JSON-encoded record and are always written in the same batch.
pub struct FjallRateStore {
    keyspace: Keyspace,
    table: PartitionHandle,
    index: PartitionHandle,
}

impl FjallRateStore {
    pub fn open(path: &Path, table: &str, index: &str) -> Result<Self, RateError> {
        std::fs::create_dir_all(path).map_err(|e| {
            RateError::Store(format!(
                "Failed to create store directory {}: {}",
                path.display(),
                e
            ))
        })?;

        let keyspace = fjall::Config::new(path).open()?;
        let table = keyspace.open_partition(table, PartitionCreateOptions::default())?;
        let index = keyspace.open_partition(index, PartitionCreateOptions::default())?;
        debug!("Opened rate store at {}", path.display());

        Ok(Self {
            keyspace,
            table,
            index,
        })
    }

    fn table_key(record: &ExchangeRateRecord) -> String {
        format!("{}#{}", record.currency, record.date)
    }

    fn index_key(record: &ExchangeRateRecord) -> String {
        format!("{}{}", Self::index_prefix(record.date), record.currency)
    }

    fn index_prefix(date: NaiveDate) -> String {
        format!("{date}#")
    }
}

/// JSON has no encoding for NaN or infinities, so those rates are rejected
/// before anything reaches the batch.
fn encode(record: &ExchangeRateRecord) -> Result<Vec<u8>, RateError> {
    if !record.rate.is_finite() {
        return Err(RateError::Store(format!(
            "Rate {} for {} on {} cannot be stored",
            record.rate, record.currency, record.date
        )));
    }
    serde_json::to_vec(record)
        .map_err(|e| RateError::Store(format!("Failed to encode record: {e}")))
}

fn decode(bytes: &[u8]) -> Result<ExchangeRateRecord, RateError> {
    serde_json::from_slice(bytes)
        .map_err(|e| RateError::Store(format!("Failed to decode record: {e}")))
}

#[async_trait]
impl RateStore for FjallRateStore {
    async fn put_batch(&self, records: &[ExchangeRateRecord]) -> Result<(), RateError> {
        let mut batch = self.keyspace.batch();
        for record in records {
            let value = encode(record)?;
            batch.insert(&self.table, Self::table_key(record).as_bytes(), value.clone());
            batch.insert(&self.index, Self::index_key(record).as_bytes(), value);
        }
        batch.commit()?;
        self.keyspace.persist(PersistMode::SyncAll)?;
        debug!(count = records.len(), "Store PUT batch");
        Ok(())
    }

    async fn query_by_date(&self, date: NaiveDate) -> Result<Vec<ExchangeRateRecord>, RateError> {
        let mut records = Vec::new();
        for item in self.index.prefix(Self::index_prefix(date)) {
            let (_, value) = item?;
            records.push(decode(&value)?);
        }
        debug!(%date, count = records.len(), "Store QUERY by date");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[tokio::test]
    async fn test_fjall_store_put_query() {
        let dir = tempdir().unwrap();
        let store = FjallRateStore::open(dir.path(), "ExchangeRates", "TimestampIndex").unwrap();

        // Initially, nothing is stored for the date
        assert!(store.query_by_date(day(16)).await.unwrap().is_empty());

        store
            .put_batch(&[
                ExchangeRateRecord::new("USD", 1.2, day(16)),
                ExchangeRateRecord::new("GBP", 0.85, day(16)),
                ExchangeRateRecord::new("USD", 1.1, day(15)),
            ])
            .await
            .unwrap();

        let records = store.query_by_date(day(16)).await.unwrap();
        assert_eq!(
            records,
            vec![
                ExchangeRateRecord::new("GBP", 0.85, day(16)),
                ExchangeRateRecord::new("USD", 1.2, day(16)),
            ]
        );
        assert_eq!(
            store.query_by_date(day(15)).await.unwrap(),
            vec![ExchangeRateRecord::new("USD", 1.1, day(15))]
        );
    }

    #[tokio::test]
    async fn test_fjall_store_rejects_non_finite_rate() {
        let dir = tempdir().unwrap();
        let store = FjallRateStore::open(dir.path(), "ExchangeRates", "TimestampIndex").unwrap();

        for rate in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = store
                .put_batch(&[
                    ExchangeRateRecord::new("GBP", 0.85, day(16)),
                    ExchangeRateRecord::new("USD", rate, day(16)),
                ])
                .await;
            assert!(matches!(result, Err(RateError::Store(_))));
        }

        // Nothing from the rejected batches was committed
        assert!(store.query_by_date(day(16)).await.unwrap().is_empty());
        assert_eq!(store.table.len().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_fjall_store_overwrites_same_day() {
        let dir = tempdir().unwrap();
        let store = FjallRateStore::open(dir.path(), "ExchangeRates", "TimestampIndex").unwrap();

        store
            .put_batch(&[ExchangeRateRecord::new("USD", 1.1, day(16))])
            .await
            .unwrap();
        store
            .put_batch(&[ExchangeRateRecord::new("USD", 1.2, day(16))])
            .await
            .unwrap();

        assert_eq!(
            store.query_by_date(day(16)).await.unwrap(),
            vec![ExchangeRateRecord::new("USD", 1.2, day(16))]
        );
        assert_eq!(store.table.len().unwrap(), 1);
    }
}
