use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::core::{RateError, RateFeed, RateMap};

/// Daily reference rates in the ECB `eurofxref` layout:
/// `Envelope > Cube > Cube[time] > Cube[currency, rate]*`.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "Cube")]
    wrapper: WrapperCube,
}

#[derive(Debug, Deserialize)]
struct WrapperCube {
    #[serde(rename = "Cube")]
    daily: DailyCube,
}

#[derive(Debug, Deserialize)]
struct DailyCube {
    #[serde(rename = "@time")]
    time: Option<String>,
    #[serde(rename = "Cube", default)]
    rates: Vec<RateCube>,
}

#[derive(Debug, Deserialize)]
struct RateCube {
    #[serde(rename = "@currency")]
    currency: String,
    #[serde(rename = "@rate")]
    rate: String,
}

/// Rates decoded from one feed document.
#[derive(Debug, Clone)]
pub struct FeedDocument {
    pub time: Option<NaiveDate>,
    pub rates: RateMap,
}

/// Decodes a feed document into a currency to rate map in document order.
///
/// Duplicate currency codes keep the last value.
pub fn parse_feed(xml: &str) -> Result<FeedDocument, RateError> {
    let envelope: Envelope = quick_xml::de::from_str(xml)?;
    let daily = envelope.wrapper.daily;

    let mut rates = RateMap::with_capacity(daily.rates.len());
    for cube in daily.rates {
        let rate = cube.rate.trim().parse::<f64>().map_err(|e| {
            RateError::Parse(format!(
                "Invalid rate '{}' for currency {}: {}",
                cube.rate, cube.currency, e
            ))
        })?;
        rates.insert(cube.currency, rate);
    }

    let time = daily
        .time
        .as_deref()
        .and_then(|t| NaiveDate::parse_from_str(t.trim(), "%Y-%m-%d").ok());

    Ok(FeedDocument { time, rates })
}

pub struct EcbFeedProvider {
    url: String,
    client: reqwest::Client,
}

impl EcbFeedProvider {
    pub fn new(url: &str) -> Result<Self, RateError> {
        let client = reqwest::Client::builder()
            .user_agent("ratewatch/1.0")
            .build()
            .map_err(|e| RateError::fetch(url, e))?;
        Ok(EcbFeedProvider {
            url: url.to_string(),
            client,
        })
    }

    async fn fetch_document(&self) -> Result<String, RateError> {
        debug!("Requesting exchange rate feed from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| RateError::fetch(&self.url, e))?;

        if !response.status().is_success() {
            return Err(RateError::fetch(
                &self.url,
                format!("HTTP error: {}", response.status()),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| RateError::fetch(&self.url, e))
    }
}

#[async_trait]
impl RateFeed for EcbFeedProvider {
    #[instrument(name = "EcbFeedFetch", skip(self), fields(url = %self.url))]
    async fn fetch_rates(&self) -> Result<RateMap, RateError> {
        let body = self.fetch_document().await?;
        let document = parse_feed(&body)?;

        let today = chrono::Utc::now().date_naive();
        match document.time {
            Some(time) if time != today => {
                debug!(%time, %today, "Feed publication date differs from ingestion date")
            }
            None => warn!("Feed document carries no publication date"),
            _ => {}
        }

        debug!(count = document.rates.len(), "Decoded exchange rate feed");
        Ok(document.rates)
    }
}
