//! Calendar arithmetic and the day-grid builder.
//!
//! The grid is a pure function of the view state, today's date and the two
//! annotation lookups. Nothing here touches the clock or the network.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc, Weekday};

use crate::annotations::CalendarAnnotations;
use crate::error::CalendarError;
use crate::view_state::ViewState;
use crate::{CalendarCell, DateWindow, ViewMode};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Get the number of days in a given month and year
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => if is_leap_year(year) { 29 } else { 28 },
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// First day of the week containing `date`, for weeks beginning on `first_day`.
///
/// Clamps to `NaiveDate::MIN` when that week starts before the supported range.
pub fn week_start_of(date: NaiveDate, first_day: Weekday) -> NaiveDate {
    let offset = (date.weekday().num_days_from_monday() + 7 - first_day.num_days_from_monday()) % 7;
    date.checked_sub_signed(Duration::days(offset as i64))
        .unwrap_or(NaiveDate::MIN)
}

fn week_end_from(start: NaiveDate) -> NaiveDate {
    start.checked_add_signed(Duration::days(6)).unwrap_or(NaiveDate::MAX)
}

/// Days covered by the grid for the given anchor and mode.
///
/// Windows touching the ends of the chrono date range are cut off there
/// instead of overflowing.
pub fn grid_window(anchor: NaiveDate, mode: ViewMode, first_day: Weekday) -> DateWindow {
    match mode {
        ViewMode::Week => {
            let start = week_start_of(anchor, first_day);
            DateWindow { start, end: week_end_from(start) }
        }
        ViewMode::Month => {
            let month_start = anchor.with_day(1).unwrap_or(anchor);
            let month_end = anchor
                .with_day(days_in_month(anchor.year(), anchor.month()))
                .unwrap_or(anchor);
            let start = week_start_of(month_start, first_day);
            let end = week_end_from(week_start_of(month_end, first_day));
            DateWindow { start, end }
        }
    }
}

/// Build the ordered cells for the current view
pub fn build_grid(
    state: &ViewState,
    today: NaiveDate,
    annotations: &CalendarAnnotations,
) -> Vec<CalendarCell> {
    let window = state.window();
    let anchor = state.anchor;

    log::debug!(
        "Building {:?} grid for anchor {} ({} .. {})",
        state.mode, anchor, window.start, window.end
    );

    window
        .days()
        .map(|date| {
            let is_today = date == today;
            let is_selected = state.selected == Some(date);
            CalendarCell {
                date,
                is_in_current_month: date.year() == anchor.year() && date.month() == anchor.month(),
                is_today,
                is_selected,
                is_highlighted: match state.selected {
                    Some(_) => is_selected,
                    None => is_today,
                },
                event_count: annotations.events.count_for(date),
                holiday_name: annotations.holidays.name_for(date).map(str::to_string),
            }
        })
        .collect()
}

/// Short weekday names for the header row, aligned with the grid columns
pub fn weekday_labels(first_day: Weekday) -> [String; 7] {
    let mut day = first_day;
    std::array::from_fn(|_| {
        let label = day.to_string();
        day = day.succ();
        label
    })
}

/// Format a date as the `YYYY-MM-DD` join key
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parse a strict `YYYY-MM-DD` string
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(input.trim(), ISO_DATE_FORMAT).map_err(|_| CalendarError::InvalidDate {
        input: input.to_string(),
    })
}

/// Parse a date as it appears in the event and holiday feeds.
///
/// Timestamps with an offset are moved to UTC before taking the calendar day.
/// Bare dates and timestamps without an offset are read as UTC.
pub fn parse_feed_date(input: &str) -> Result<NaiveDate, CalendarError> {
    let trimmed = input.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.with_timezone(&Utc).date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(timestamp.date());
    }

    Err(CalendarError::InvalidDate { input: input.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EventRecord, HolidayRecord, MAX_EVENT_DOTS};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn state(anchor: NaiveDate, mode: ViewMode) -> ViewState {
        let mut state = ViewState::new(anchor, Weekday::Sun);
        state.mode = mode;
        state
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
    }

    #[test]
    fn test_is_leap_year() {
        assert!(!is_leap_year(2025));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_week_start_of() {
        // 2024-03-06 is a Wednesday
        assert_eq!(week_start_of(date(2024, 3, 6), Weekday::Sun), date(2024, 3, 3));
        assert_eq!(week_start_of(date(2024, 3, 6), Weekday::Mon), date(2024, 3, 4));
        // A Sunday is its own week start
        assert_eq!(week_start_of(date(2024, 3, 3), Weekday::Sun), date(2024, 3, 3));
        assert_eq!(week_start_of(date(2024, 3, 3), Weekday::Mon), date(2024, 2, 26));
    }

    #[test]
    fn test_week_grid_has_seven_days_starting_on_first_day() {
        let mut anchor = date(2023, 12, 20);
        for _ in 0..60 {
            for first_day in [Weekday::Sun, Weekday::Mon, Weekday::Sat] {
                let window = grid_window(anchor, ViewMode::Week, first_day);
                assert_eq!(window.len(), 7);
                assert_eq!(window.start.weekday(), first_day);
                assert!(window.contains(anchor));
            }
            anchor = anchor + Duration::days(3);
        }
    }

    #[test]
    fn test_month_grid_covers_month_in_whole_weeks() {
        for year in [2023, 2024, 2026] {
            for month in 1..=12 {
                let anchor = date(year, month, 15);
                let grid = build_grid(&state(anchor, ViewMode::Month), date(2000, 1, 1), &CalendarAnnotations::default());

                assert_eq!(grid.len() % 7, 0, "{}-{} grid is not whole weeks", year, month);
                assert!((28..=42).contains(&grid.len()));
                assert_eq!(grid[0].date.weekday(), Weekday::Sun);

                let in_month: Vec<_> = grid.iter().filter(|c| c.is_in_current_month).collect();
                assert_eq!(in_month.len() as u32, days_in_month(year, month));
                assert_eq!(in_month[0].date, date(year, month, 1));

                for cell in &grid {
                    assert_eq!(cell.is_in_current_month, cell.date.month() == month);
                }
            }
        }
    }

    #[test]
    fn test_month_grid_for_march_2024() {
        let grid = build_grid(&state(date(2024, 3, 5), ViewMode::Month), date(2024, 3, 5), &CalendarAnnotations::default());

        // March 2024 starts on a Friday and ends on a Sunday
        assert_eq!(grid.len(), 42);
        assert_eq!(grid.first().unwrap().date, date(2024, 2, 25));
        assert_eq!(grid.last().unwrap().date, date(2024, 4, 6));
        assert!(!grid[0].is_in_current_month);
        assert!(grid[5].is_in_current_month);
    }

    #[test]
    fn test_february_2026_fits_four_rows() {
        // Feb 2026 starts on a Sunday and has 28 days
        let window = grid_window(date(2026, 2, 10), ViewMode::Month, Weekday::Sun);
        assert_eq!(window.len(), 28);
        assert_eq!(window.start, date(2026, 2, 1));
        assert_eq!(window.end, date(2026, 2, 28));
    }

    #[test]
    fn test_grid_at_ends_of_date_range() {
        let anchors = [
            NaiveDate::MIN,
            NaiveDate::MIN.succ_opt().unwrap(),
            NaiveDate::MAX.pred_opt().unwrap(),
            NaiveDate::MAX,
        ];
        for anchor in anchors {
            for mode in [ViewMode::Week, ViewMode::Month] {
                for first_day in [Weekday::Sun, Weekday::Mon] {
                    let mut view = ViewState::new(anchor, first_day);
                    view.mode = mode;
                    let grid = build_grid(&view, anchor, &CalendarAnnotations::default());

                    assert!(!grid.is_empty(), "{} {:?}", anchor, mode);
                    assert!(grid.len() <= 42);
                    assert!(grid.iter().any(|c| c.date == anchor && c.is_today));
                    for pair in grid.windows(2) {
                        assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
                    }
                    assert!(view.is_today_visible(anchor));
                }
            }
        }
    }

    #[test]
    fn test_week_start_clamps_at_minimum_date() {
        // NaiveDate::MIN is a Thursday, so its Sunday-start week begins out of range
        assert_eq!(week_start_of(NaiveDate::MIN, Weekday::Sun), NaiveDate::MIN);
        let window = grid_window(NaiveDate::MIN, ViewMode::Week, Weekday::Sun);
        assert_eq!(window.start, NaiveDate::MIN);
        assert_eq!(window.len(), 7);
    }

    #[test]
    fn test_today_and_selection_flags() {
        let today = date(2024, 3, 6);
        let mut view = state(today, ViewMode::Week);

        let grid = build_grid(&view, today, &CalendarAnnotations::default());
        let today_cell = grid.iter().find(|c| c.date == today).unwrap();
        assert!(today_cell.is_today);
        assert!(today_cell.is_highlighted);
        assert!(!today_cell.is_selected);

        view.selected = Some(date(2024, 3, 8));
        let grid = build_grid(&view, today, &CalendarAnnotations::default());
        let today_cell = grid.iter().find(|c| c.date == today).unwrap();
        let selected_cell = grid.iter().find(|c| c.date == date(2024, 3, 8)).unwrap();
        assert!(today_cell.is_today);
        assert!(!today_cell.is_highlighted);
        assert!(selected_cell.is_selected);
        assert!(selected_cell.is_highlighted);
        assert_eq!(grid.iter().filter(|c| c.is_highlighted).count(), 1);
    }

    #[test]
    fn test_grid_annotations() {
        let events = vec![
            EventRecord { date: "2024-03-05".to_string(), title: None },
            EventRecord { date: "2024-03-05".to_string(), title: None },
            EventRecord { date: "2024-03-06".to_string(), title: None },
            EventRecord { date: "2024-03-07".to_string(), title: None },
            EventRecord { date: "2024-03-07".to_string(), title: None },
            EventRecord { date: "2024-03-07".to_string(), title: None },
            EventRecord { date: "2024-03-07".to_string(), title: None },
        ];
        let holidays = vec![HolidayRecord { name: "Women's Day".to_string(), iso_date: "2024-03-08".to_string() }];
        let annotations = CalendarAnnotations::new(&events, &holidays);

        let grid = build_grid(&state(date(2024, 3, 5), ViewMode::Week), date(2024, 3, 1), &annotations);
        let cell = |d: u32| grid.iter().find(|c| c.date == date(2024, 3, d)).unwrap();

        assert_eq!(cell(5).event_count, 2);
        assert_eq!(cell(5).dot_count(), 2);
        assert_eq!(cell(6).dot_count(), 1);
        assert_eq!(cell(7).event_count, 4);
        assert_eq!(cell(7).dot_count(), MAX_EVENT_DOTS);
        assert_eq!(cell(4).event_count, 0);
        assert_eq!(cell(8).holiday_name.as_deref(), Some("Women's Day"));
        assert!(!cell(9).is_holiday());
    }

    #[test]
    fn test_weekday_labels() {
        assert_eq!(weekday_labels(Weekday::Sun), ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
        assert_eq!(weekday_labels(Weekday::Mon)[0], "Mon");
        assert_eq!(weekday_labels(Weekday::Mon)[6], "Sun");
    }

    #[test]
    fn test_iso_dates() {
        assert_eq!(to_iso_date(date(2024, 3, 5)), "2024-03-05");
        assert_eq!(parse_iso_date("2024-11-15"), Ok(date(2024, 11, 15)));
        assert!(matches!(parse_iso_date("15/11/2024"), Err(CalendarError::InvalidDate { .. })));
    }

    #[test]
    fn test_parse_feed_date() {
        assert_eq!(parse_feed_date("2024-03-05"), Ok(date(2024, 3, 5)));
        assert_eq!(parse_feed_date("2024-03-05T09:00:00Z"), Ok(date(2024, 3, 5)));
        // Offset timestamps count on their UTC day
        assert_eq!(parse_feed_date("2024-03-05T22:00:00-04:00"), Ok(date(2024, 3, 6)));
        assert_eq!(parse_feed_date("2024-03-05T01:30:00+07:00"), Ok(date(2024, 3, 4)));
        assert_eq!(parse_feed_date("2024-03-05T10:15:00.250"), Ok(date(2024, 3, 5)));
        assert!(parse_feed_date("next tuesday").is_err());
        assert!(parse_feed_date("").is_err());
    }
}
