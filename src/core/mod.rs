//! Core types and the ingest/report handlers

pub mod config;
pub mod error;
pub mod feed;
pub mod ingest;
pub mod log;
pub mod rates;
pub mod report;
pub mod response;
pub mod store;

// Re-export main types for cleaner imports
pub use error::RateError;
pub use feed::RateFeed;
pub use rates::{ChangeMap, ExchangeRateRecord, RateMap};
pub use report::RateReport;
pub use response::HandlerResponse;
pub use store::RateStore;
