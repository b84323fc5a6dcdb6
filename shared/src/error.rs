use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalendarError {
    #[error("Invalid date: {input:?}")]
    InvalidDate { input: String },

    #[error("Year {year} is out of the supported calendar range")]
    InvalidYear { year: i32 },
}
