//! Navigation and selection state for the calendar picker.
//!
//! Every operation consumes the current [`ViewState`] and returns the next
//! one, so the owning component only ever swaps whole values.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::annotations::HolidayIndex;
use crate::calendar::{days_in_month, grid_window};
use crate::{DateWindow, TodayPosition, ViewMode};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Reference date the visible week or month is computed around
    pub anchor: NaiveDate,
    /// Most recent date clicked or set by "jump to today"
    pub selected: Option<NaiveDate>,
    pub mode: ViewMode,
    /// Holiday name shown in the banner for the selected day
    pub selected_holiday: Option<String>,
    /// Fixed for the lifetime of the view
    pub week_start: Weekday,
    /// Day-of-month month steps aim for; survives clamping in short months
    preferred_day: u32,
}

impl ViewState {
    /// Week view anchored on `anchor`, nothing selected
    pub fn new(anchor: NaiveDate, week_start: Weekday) -> Self {
        Self {
            anchor,
            selected: None,
            mode: ViewMode::Week,
            selected_holiday: None,
            week_start,
            preferred_day: anchor.day(),
        }
    }

    /// Days rendered for the current mode
    pub fn window(&self) -> DateWindow {
        grid_window(self.anchor, self.mode, self.week_start)
    }

    /// Header text for the visible period, e.g. "March 2024"
    pub fn period_label(&self) -> String {
        self.anchor.format("%B %Y").to_string()
    }

    /// Move the anchor by whole weeks (week mode) or whole months (month mode)
    pub fn advance(self, periods: i32) -> Self {
        let moved = match self.mode {
            ViewMode::Week => self
                .anchor
                .checked_add_signed(Duration::weeks(periods as i64))
                .map(|anchor| (anchor, anchor.day())),
            ViewMode::Month => {
                shift_months(self.anchor, periods, self.preferred_day).map(|anchor| (anchor, self.preferred_day))
            }
        };

        match moved {
            Some((anchor, preferred_day)) => Self { anchor, preferred_day, ..self },
            None => {
                log::warn!("Cannot move {} by {} periods; staying put", self.anchor, periods);
                self
            }
        }
    }

    pub fn toggle_mode(self) -> Self {
        Self { mode: self.mode.toggled(), ..self }
    }

    /// Select `date` and return it for emission to the host
    pub fn select_date(self, date: NaiveDate, holidays: &HolidayIndex) -> (Self, NaiveDate) {
        let selected_holiday = holidays.name_for(date).map(str::to_string);
        let next = Self {
            selected: Some(date),
            selected_holiday,
            ..self
        };
        (next, date)
    }

    /// Re-anchor on today and select it, exactly like clicking today's cell
    pub fn jump_to_today(self, today: NaiveDate, holidays: &HolidayIndex) -> (Self, NaiveDate) {
        let anchored = Self {
            anchor: today,
            preferred_day: today.day(),
            ..self
        };
        anchored.select_date(today, holidays)
    }

    /// Recompute the banner after the holiday feed changes.
    ///
    /// With no selection yet the banner follows today.
    pub fn refresh_holiday_banner(self, today: NaiveDate, holidays: &HolidayIndex) -> Self {
        let day = self.selected.unwrap_or(today);
        Self {
            selected_holiday: holidays.name_for(day).map(str::to_string),
            ..self
        }
    }

    pub fn is_today_visible(&self, today: NaiveDate) -> bool {
        self.window().contains(today)
    }

    pub fn today_position(&self, today: NaiveDate) -> TodayPosition {
        let window = self.window();
        if today < window.start {
            TodayPosition::Before
        } else if today > window.end {
            TodayPosition::After
        } else {
            TodayPosition::Visible
        }
    }
}

fn shift_months(anchor: NaiveDate, periods: i32, preferred_day: u32) -> Option<NaiveDate> {
    let total = anchor.year() as i64 * 12 + anchor.month0() as i64 + periods as i64;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = total.rem_euclid(12) as u32 + 1;
    let day = preferred_day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
}
