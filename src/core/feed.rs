//! Source of daily exchange rates

use super::error::RateError;
use super::rates::RateMap;
use async_trait::async_trait;

#[async_trait]
pub trait RateFeed: Send + Sync {
    async fn fetch_rates(&self) -> Result<RateMap, RateError>;
}
