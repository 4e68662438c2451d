use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleLineError {
    #[error("Line format incorrect: expected at least 5 fields, found {found} in '{line}'")]
    TooFewTokens { line: String, found: usize },

    #[error("Unknown month '{0}'")]
    UnknownMonth(String),

    #[error("Invalid {field} '{value}' in schedule line")]
    InvalidNumber { field: &'static str, value: String },

    // Reported instead of clamping, e.g. 31Feb or 2460
    #[error("Invalid UTC date/time: {year}-{month:02}-{day:02} {hour:02}:{minute:02}")]
    InvalidDateTime {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },
}
