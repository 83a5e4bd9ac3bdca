use super::{OutputFormat, ui};
use crate::core::{HandlerResponse, RateReport, RateStore, report};
use anyhow::{Context, Result};
use comfy_table::Cell;

impl RateReport {
    /// Renders one row per currency quoted on either day, today's currencies
    /// first.
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Currency"),
            ui::header_cell("Today"),
            ui::header_cell("Yesterday"),
            ui::header_cell("Change"),
        ]);

        let previous_only = self
            .previous_rates
            .keys()
            .filter(|c| !self.current_rates.contains_key(*c));
        for currency in self.current_rates.keys().chain(previous_only) {
            table.add_row(vec![
                Cell::new(currency),
                ui::rate_cell(self.current_rates.get(currency).copied()),
                ui::rate_cell(self.previous_rates.get(currency).copied()),
                ui::change_cell(self.changes.get(currency).copied()),
            ]);
        }

        table.to_string()
    }
}

fn render(response: &HandlerResponse<RateReport>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(response).context("Failed to serialize report")
        }
        OutputFormat::Table if response.body.current_rates.is_empty() => Ok(ui::style_text(
            "No exchange rates stored for today. Run `ratewatch ingest` first.",
            ui::StyleType::Subtle,
        )),
        OutputFormat::Table => Ok(format!(
            "{}\n{}",
            ui::style_text("Exchange rates: today vs. yesterday", ui::StyleType::Title),
            response.body.display_as_table()
        )),
    }
}

pub async fn run(store: &dyn RateStore, format: OutputFormat) -> Result<()> {
    let response = report::report(store).await?;
    println!("{}", render(&response, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ChangeMap, RateMap};

    fn sample_report() -> RateReport {
        RateReport {
            current_rates: RateMap::from([("USD".to_string(), 1.2), ("GBP".to_string(), 0.85)]),
            previous_rates: RateMap::from([("USD".to_string(), 1.1), ("CHF".to_string(), 0.96)]),
            changes: ChangeMap::from([("USD".to_string(), 0.1)]),
        }
    }

    #[test]
    fn test_display_as_table_lists_every_currency() {
        let table = sample_report().display_as_table();

        assert!(table.contains("USD"));
        assert!(table.contains("GBP"));
        assert!(table.contains("CHF"));
        assert!(table.contains("1.2000"));
        assert!(table.contains("0.9600"));
        assert!(table.contains("N/A"));
    }

    #[test]
    fn test_render_json_matches_handler_shape() {
        let output = render(&HandlerResponse::ok(sample_report()), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["body"]["current_rates"]["GBP"], 0.85);
        assert_eq!(value["body"]["previous_rates"]["CHF"], 0.96);
        assert!(value["body"]["changes"].get("GBP").is_none());
    }

    #[test]
    fn test_render_table_without_data() {
        let empty = RateReport {
            current_rates: RateMap::new(),
            previous_rates: RateMap::new(),
            changes: ChangeMap::new(),
        };

        let output = render(&HandlerResponse::ok(empty), OutputFormat::Table).unwrap();

        assert!(output.contains("No exchange rates stored for today"));
    }
}
