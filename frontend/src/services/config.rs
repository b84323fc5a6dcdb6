use chrono::Weekday;

const DEFAULT_EVENTS_URL: &str = "http://localhost:8010/api/events";
const DEFAULT_HOLIDAYS_URL: &str = "http://localhost:8011/api/holidays";
const DEFAULT_COUNTRY_CODE: &str = "KH";

/// Endpoints and calendar conventions for the picker.
///
/// The URLs and country code can be overridden at build time with
/// `CALENDAR_EVENTS_URL`, `CALENDAR_HOLIDAYS_URL` and `CALENDAR_COUNTRY_CODE`.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarConfig {
    pub events_url: String,
    pub holidays_url: String,
    pub country_code: String,
    /// Year requested from the holidays feed
    pub holiday_source_year: i32,
    /// Year the fetched holidays are relabeled onto
    pub holiday_target_year: i32,
    pub first_day_of_week: Weekday,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            events_url: option_env!("CALENDAR_EVENTS_URL").unwrap_or(DEFAULT_EVENTS_URL).to_string(),
            holidays_url: option_env!("CALENDAR_HOLIDAYS_URL").unwrap_or(DEFAULT_HOLIDAYS_URL).to_string(),
            country_code: option_env!("CALENDAR_COUNTRY_CODE").unwrap_or(DEFAULT_COUNTRY_CODE).to_string(),
            holiday_source_year: 2023,
            holiday_target_year: 2024,
            first_day_of_week: Weekday::Sun,
        }
    }
}
