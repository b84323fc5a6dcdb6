//! Shared calendar model for the week/month calendar picker.
//!
//! Everything the UI needs to decide *what* to draw lives here: the day-grid
//! builder, the navigation/selection state machine and the event/holiday
//! lookups. The frontend only handles presentation and fetching.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod annotations;
pub mod calendar;
pub mod error;
pub mod view_state;

pub use annotations::{shift_holidays_to_year, CalendarAnnotations, EventCountIndex, HolidayIndex};
pub use calendar::{
    build_grid, days_in_month, grid_window, is_leap_year, parse_feed_date, parse_iso_date,
    to_iso_date, week_start_of, weekday_labels,
};
pub use error::CalendarError;
pub use view_state::ViewState;

/// Maximum number of event dots rendered under a single day
pub const MAX_EVENT_DOTS: u32 = 3;

/// One record from the events feed. Only the date is used for annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Date or timestamp of the event (`YYYY-MM-DD` or RFC 3339)
    pub date: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// A public holiday as returned by the holidays feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidayRecord {
    pub name: String,
    /// Calendar day in `YYYY-MM-DD` form
    #[serde(rename = "date")]
    pub iso_date: String,
}

/// Which window the calendar is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ViewMode {
    /// Compact strip with the 7 days of the anchor's week
    #[default]
    Week,
    /// Whole weeks spanning the anchor's month
    Month,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Week => ViewMode::Month,
            ViewMode::Month => ViewMode::Week,
        }
    }
}

/// Inclusive range of days covered by the rendered grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days in the window
    pub fn len(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Iterate the days of the window in order, `end` included
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        let first = (self.start <= end).then_some(self.start);
        std::iter::successors(first, move |day| day.succ_opt().filter(|next| *next <= end))
    }
}

/// Where today falls relative to the visible window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodayPosition {
    Visible,
    /// Today is earlier than the first rendered day
    Before,
    /// Today is later than the last rendered day
    After,
}

/// A single rendered day box
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// False for the padding days borrowed from adjacent months
    pub is_in_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    /// Selected day, or today while nothing has been selected yet
    pub is_highlighted: bool,
    pub event_count: u32,
    pub holiday_name: Option<String>,
}

impl CalendarCell {
    /// Dots to draw under the day number, capped at [`MAX_EVENT_DOTS`]
    pub fn dot_count(&self) -> u32 {
        self.event_count.min(MAX_EVENT_DOTS)
    }

    pub fn is_holiday(&self) -> bool {
        self.holiday_name.is_some()
    }
}
