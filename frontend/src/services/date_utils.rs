use chrono::NaiveDate;
use shared::parse_iso_date;

/// Today's calendar day in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// Format YYYY-MM-DD date string for display, e.g. "November 15, 2024"
pub fn format_date_for_display(date_str: &str) -> String {
    match parse_iso_date(date_str) {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}
