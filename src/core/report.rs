//! Same-day vs. prior-day comparison of stored rates

use super::error::RateError;
use super::rates::{ChangeMap, RateMap, calculate_changes, rate_map};
use super::response::HandlerResponse;
use super::store::RateStore;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize)]
pub struct RateReport {
    pub current_rates: RateMap,
    pub previous_rates: RateMap,
    pub changes: ChangeMap,
}

/// Reports today's rates against yesterday's, both as UTC calendar dates.
pub async fn report(store: &dyn RateStore) -> Result<HandlerResponse<RateReport>, RateError> {
    report_for_date(store, Utc::now().date_naive()).await
}

pub async fn report_for_date(
    store: &dyn RateStore,
    today: NaiveDate,
) -> Result<HandlerResponse<RateReport>, RateError> {
    let current_rates = rates_for_date(store, today).await?;
    let previous_rates = match today.pred_opt() {
        Some(yesterday) => rates_for_date(store, yesterday).await?,
        None => RateMap::new(),
    };
    let changes = calculate_changes(&current_rates, &previous_rates);

    info!(
        %today,
        current = current_rates.len(),
        previous = previous_rates.len(),
        changes = changes.len(),
        "Built exchange rate report"
    );

    Ok(HandlerResponse::ok(RateReport {
        current_rates,
        previous_rates,
        changes,
    }))
}

/// Rates stored for exactly `date`. No records is an empty map, not an error.
pub async fn rates_for_date(store: &dyn RateStore, date: NaiveDate) -> Result<RateMap, RateError> {
    let records = store.query_by_date(date).await?;
    debug!(%date, count = records.len(), "Queried exchange rates");
    Ok(rate_map(&records))
}
