//! Fetches the daily feed and stores one record per currency

use super::error::RateError;
use super::feed::RateFeed;
use super::rates::{RateMap, records_for_date};
use super::response::HandlerResponse;
use super::store::RateStore;
use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

pub const INGEST_SUCCESS_MESSAGE: &str = "Exchange rates fetched and stored successfully.";

/// Ingests the feed, stamping every record with the UTC date at write time.
pub async fn ingest(
    feed: &dyn RateFeed,
    store: &dyn RateStore,
) -> Result<HandlerResponse<String>, RateError> {
    let rates = feed.fetch_rates().await?;
    debug!(count = rates.len(), "Fetched exchange rates");

    store_rates(store, &rates, Utc::now().date_naive()).await
}

/// Upserts one record per currency in `rates`, all dated `date`.
pub async fn store_rates(
    store: &dyn RateStore,
    rates: &RateMap,
    date: NaiveDate,
) -> Result<HandlerResponse<String>, RateError> {
    if rates.is_empty() {
        warn!(%date, "Feed carried no exchange rates");
    }

    let records = records_for_date(rates, date);
    store.put_batch(&records).await?;

    info!(count = records.len(), %date, "Stored exchange rates");
    Ok(HandlerResponse::ok(INGEST_SUCCESS_MESSAGE.to_string()))
}
