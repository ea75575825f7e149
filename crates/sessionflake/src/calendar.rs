use crate::error::{Error, Result};
use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp};

/// Turns an instant into a civil (wall-clock) date and time.
///
/// Bucketing goes through this trait so that the time zone used for the
/// decomposition is always chosen by the caller.
pub trait Calendar: Send + Sync {
    fn to_civil(&self, instant: Timestamp) -> Result<DateTime>;
}

/// A [`Calendar`] that reads wall-clock fields in a fixed time zone.
#[derive(Debug, Clone)]
pub struct ZonedCalendar {
    time_zone: TimeZone,
}

impl ZonedCalendar {
    pub fn new(time_zone: TimeZone) -> Self {
        Self { time_zone }
    }

    pub fn utc() -> Self {
        Self::new(TimeZone::UTC)
    }

    /// Uses the host's configured local time zone.
    ///
    /// Ids produced this way depend on the environment: the same instant may
    /// bucket differently on hosts with different zones.
    pub fn system() -> Self {
        Self::new(TimeZone::system())
    }

    /// Looks up an IANA time zone such as `Asia/Shanghai`.
    pub fn named(name: &str) -> Result<Self> {
        TimeZone::get(name)
            .map(Self::new)
            .map_err(|e| Error::UnknownTimeZone(format!("{name}: {e}")))
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }
}

impl Calendar for ZonedCalendar {
    fn to_civil(&self, instant: Timestamp) -> Result<DateTime> {
        Ok(self.time_zone.to_datetime(instant))
    }
}

/// Converts seconds since the Unix epoch, with an optional fractional part,
/// into an instant.
pub fn instant_from_secs_f64(secs: f64) -> Result<Timestamp> {
    let duration = SignedDuration::try_from_secs_f64(secs)
        .map_err(|e| Error::InvalidInstant(format!("{secs}: {e}")))?;
    Timestamp::from_duration(duration).map_err(|e| Error::InvalidInstant(format!("{secs}: {e}")))
}
