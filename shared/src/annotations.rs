//! Lookups joining fetched events and holidays onto calendar days.
//!
//! Both indexes are keyed by the `YYYY-MM-DD` string of the day and are
//! rebuilt wholesale from a full feed response, never patched in place.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::calendar::{parse_feed_date, to_iso_date};
use crate::error::CalendarError;
use crate::{EventRecord, HolidayRecord};

/// Number of events per day
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventCountIndex {
    counts: HashMap<String, u32>,
}

impl EventCountIndex {
    /// Count events per UTC calendar day. Records with unreadable dates are skipped.
    pub fn from_events(events: &[EventRecord]) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::new();

        for event in events {
            match parse_feed_date(&event.date) {
                Ok(day) => *counts.entry(to_iso_date(day)).or_insert(0) += 1,
                Err(e) => log::warn!("Skipping event with unreadable date: {}", e),
            }
        }

        log::debug!("Indexed {} events across {} days", events.len(), counts.len());
        Self { counts }
    }

    /// Count for an ISO date key, if any events fall on it
    pub fn get(&self, iso_date: &str) -> Option<u32> {
        self.counts.get(iso_date).copied()
    }

    pub fn count_for(&self, date: NaiveDate) -> u32 {
        self.get(&to_iso_date(date)).unwrap_or(0)
    }

    /// Number of distinct days carrying events
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Holidays keyed by day. The first record listed for a day wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolidayIndex {
    by_date: HashMap<String, HolidayRecord>,
}

impl HolidayIndex {
    pub fn from_records(records: &[HolidayRecord]) -> Self {
        let mut by_date: HashMap<String, HolidayRecord> = HashMap::new();

        for record in records {
            match parse_feed_date(&record.iso_date) {
                Ok(day) => {
                    by_date.entry(to_iso_date(day)).or_insert_with(|| record.clone());
                }
                Err(e) => log::warn!("Skipping holiday {:?}: {}", record.name, e),
            }
        }

        Self { by_date }
    }

    pub fn holiday_on(&self, date: NaiveDate) -> Option<&HolidayRecord> {
        self.by_date.get(&to_iso_date(date))
    }

    pub fn name_for(&self, date: NaiveDate) -> Option<&str> {
        self.holiday_on(date).map(|holiday| holiday.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

/// The two lookups consulted for every rendered cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarAnnotations {
    pub events: EventCountIndex,
    pub holidays: HolidayIndex,
}

impl CalendarAnnotations {
    pub fn new(events: &[EventRecord], holidays: &[HolidayRecord]) -> Self {
        Self {
            events: EventCountIndex::from_events(events),
            holidays: HolidayIndex::from_records(holidays),
        }
    }
}

/// Relabel holidays onto `target_year`, keeping month and day.
///
/// This does not recompute movable holidays for the target year; it only
/// moves each date. February 29 lands on March 1 when the target year is not
/// a leap year. Records whose date cannot be read are dropped.
pub fn shift_holidays_to_year(records: Vec<HolidayRecord>, target_year: i32) -> Vec<HolidayRecord> {
    records
        .into_iter()
        .filter_map(|record| match shift_date_to_year(&record.iso_date, target_year) {
            Ok(day) => Some(HolidayRecord {
                iso_date: to_iso_date(day),
                ..record
            }),
            Err(e) => {
                log::warn!("Dropping holiday {:?} during year shift: {}", record.name, e);
                None
            }
        })
        .collect()
}

fn shift_date_to_year(iso_date: &str, target_year: i32) -> Result<NaiveDate, CalendarError> {
    let day = parse_feed_date(iso_date)?;
    day.with_year(target_year)
        .or_else(|| NaiveDate::from_ymd_opt(target_year, day.month() + 1, 1))
        .ok_or(CalendarError::InvalidYear { year: target_year })
}
