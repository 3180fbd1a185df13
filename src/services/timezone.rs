use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::AvailabilityError;
use crate::models::DayOfWeek;

/// Capability for turning an absolute instant into the doctor's local
/// weekday and minute-of-day. Injected so the slot computation itself stays
/// timezone-agnostic.
pub trait TimeZoneConverter {
    fn to_local_weekday_and_minute(
        &self,
        instant: DateTime<Utc>,
        timezone: &str,
    ) -> Result<(DayOfWeek, i32), AvailabilityError>;
}

/// Production converter backed by the IANA tz database via `chrono-tz`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoTzConverter;

impl ChronoTzConverter {
    pub fn new() -> Self {
        Self
    }
}

impl TimeZoneConverter for ChronoTzConverter {
    fn to_local_weekday_and_minute(
        &self,
        instant: DateTime<Utc>,
        timezone: &str,
    ) -> Result<(DayOfWeek, i32), AvailabilityError> {
        let zone: Tz = timezone
            .parse()
            .map_err(|_| AvailabilityError::UnknownTimezone(timezone.to_string()))?;

        let local = instant.with_timezone(&zone);
        let minute_of_day = (local.hour() * 60 + local.minute()) as i32;

        Ok((DayOfWeek::from(local.weekday()), minute_of_day))
    }
}
