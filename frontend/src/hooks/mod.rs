pub mod use_annotations;
pub mod use_calendar;
