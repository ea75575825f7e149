use crate::calendar::{instant_from_secs_f64, Calendar};
use crate::error::Result;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a session bucket in minutes.
pub const BUCKET_MINUTES: i8 = 3;

/// Wall-clock fields of an instant, with the minute replaced by the start of
/// its 3-minute bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarFields {
    pub year: i16,
    pub month: i8,
    pub day: i8,
    pub hour: i8,
    pub bucket_minute: i8,
}

impl CalendarFields {
    /// Fields in encoder order: `[year, month, day, hour, bucket_minute]`.
    pub fn to_array(self) -> [i64; 5] {
        [
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
            i64::from(self.hour),
            i64::from(self.bucket_minute),
        ]
    }
}

impl fmt::Display for CalendarFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.bucket_minute
        )
    }
}

/// Returns the first minute of the 3-minute bucket containing `minute`.
pub fn session_start_minute(minute: i8) -> i8 {
    if minute % BUCKET_MINUTES == 0 {
        minute
    } else if (minute - 1) % BUCKET_MINUTES == 0 {
        minute - 1
    } else {
        minute - 2
    }
}

/// Quantizes instants into [`CalendarFields`] using an injected [`Calendar`].
#[derive(Debug, Clone)]
pub struct Bucketizer<K: Calendar> {
    calendar: K,
}

impl<K: Calendar> Bucketizer<K> {
    pub fn new(calendar: K) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &K {
        &self.calendar
    }

    pub fn bucketize(&self, instant: Timestamp) -> Result<CalendarFields> {
        let civil = self.calendar.to_civil(instant)?;
        Ok(CalendarFields {
            year: civil.year(),
            month: civil.month(),
            day: civil.day(),
            hour: civil.hour(),
            bucket_minute: session_start_minute(civil.minute()),
        })
    }

    /// Like [`Bucketizer::bucketize`], for seconds since the Unix epoch.
    pub fn bucketize_secs(&self, secs: f64) -> Result<CalendarFields> {
        self.bucketize(instant_from_secs_f64(secs)?)
    }
}
