use anyhow::{anyhow, bail, Result};
use gloo::net::http::{Request, Response};
use shared::{EventRecord, HolidayRecord};

use super::config::CalendarConfig;

/// API client for the events and holidays feeds
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    config: CalendarConfig,
}

impl ApiClient {
    pub fn new(config: CalendarConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Holidays URL for the configured country and source year
    pub fn holidays_url(&self) -> String {
        format!(
            "{}?countryCode={}&year={}",
            self.config.holidays_url, self.config.country_code, self.config.holiday_source_year
        )
    }

    /// Get every event known to the events service
    pub async fn get_events(&self) -> Result<Vec<EventRecord>> {
        let response = Request::get(&self.config.events_url)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to fetch events: {}", e))?;
        let response = ensure_ok(response, "events").await?;

        response
            .json::<Vec<EventRecord>>()
            .await
            .map_err(|e| anyhow!("Failed to parse events: {}", e))
    }

    /// Get the public holidays for the configured source year
    pub async fn get_holidays(&self) -> Result<Vec<HolidayRecord>> {
        let response = Request::get(&self.holidays_url())
            .send()
            .await
            .map_err(|e| anyhow!("Failed to fetch holidays: {}", e))?;
        let response = ensure_ok(response, "holidays").await?;

        response
            .json::<Vec<HolidayRecord>>()
            .await
            .map_err(|e| anyhow!("Failed to parse holidays: {}", e))
    }
}

async fn ensure_ok(response: Response, feed: &str) -> Result<Response> {
    if response.ok() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
    bail!("{} request failed with status {}: {}", feed, response.status(), body)
}
