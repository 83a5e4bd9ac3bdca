use super::ui;
use crate::core::{RateFeed, RateStore, ingest};
use anyhow::Result;

pub async fn run(feed: &dyn RateFeed, store: &dyn RateStore) -> Result<()> {
    let pb = ui::new_spinner("Fetching exchange rates...");
    let result = ingest::ingest(feed, store).await;
    pb.finish_and_clear();

    let response = result?;
    println!("{}", ui::style_text(&response.body, ui::StyleType::Success));
    Ok(())
}
