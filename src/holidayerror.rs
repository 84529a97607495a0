use thiserror::Error;

/// Errors raised by the holiday engine.
///
/// A date that simply is not a holiday is never an error; queries report
/// that as `Ok(false)` or `Ok(None)`.
#[derive(Debug, Error)]
pub enum HolidayError {
    #[error("year {0} is outside the supported range 1583..=9999")]
    YearOutOfRange(i32),

    #[error("unknown region '{0}'")]
    UnknownRegion(String),

    #[error("unknown holiday type '{0}'")]
    UnknownHolidayType(String),

    #[error("no translation registered for language '{0}'")]
    UnknownLanguage(String),

    #[error("'{0}' is not a year")]
    InvalidYear(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error)
}

pub type Result<T, E = HolidayError> = std::result::Result<T, E>;
