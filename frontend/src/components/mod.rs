pub mod holiday_banner;
pub mod week_calendar;
