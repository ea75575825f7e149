use crate::bucket::CalendarFields;
use crate::encoder::{self, Field};
use crate::error::Error;
use modular_bitfield::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A 32-bit session identifier.
///
/// The integer view is
/// `year(31..20) | month(19..16) | day(15..11) | hour(10..6) | bucket_minute(5..0)`.
#[bitfield]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId {
    /// 6 bits for the start minute of the 3-minute bucket.
    pub bucket_minute: B6,
    /// 5 bits for the hour of day.
    pub hour: B5,
    /// 5 bits for the day of month.
    pub day: B5,
    /// 4 bits for the month.
    pub month: B4,
    /// 12 bits for the year.
    pub year: B12,
}

impl SessionId {
    /// Returns the packed identifier as an unsigned 32-bit integer.
    pub fn as_u32(&self) -> u32 {
        (u32::from(self.year()) << Field::Year.shift())
            | (u32::from(self.month()) << Field::Month.shift())
            | (u32::from(self.day()) << Field::Day.shift())
            | (u32::from(self.hour()) << Field::Hour.shift())
            | (u32::from(self.bucket_minute()) << Field::BucketMinute.shift())
    }

    /// Extracts the five packed fields.
    pub fn fields(&self) -> CalendarFields {
        CalendarFields {
            year: self.year() as i16,
            month: self.month() as i8,
            day: self.day() as i8,
            hour: self.hour() as i8,
            bucket_minute: self.bucket_minute() as i8,
        }
    }
}

impl From<SessionId> for u32 {
    fn from(id: SessionId) -> Self {
        id.as_u32()
    }
}

/// All 32 bits are assigned to a field, so any integer is a layout-valid id.
impl From<u32> for SessionId {
    fn from(raw: u32) -> Self {
        let field = |field: Field| (raw >> field.shift()) & field.mask();
        SessionId::new()
            .with_year(field(Field::Year) as u16)
            .with_month(field(Field::Month) as u8)
            .with_day(field(Field::Day) as u8)
            .with_hour(field(Field::Hour) as u8)
            .with_bucket_minute(field(Field::BucketMinute) as u8)
    }
}

impl TryFrom<CalendarFields> for SessionId {
    type Error = Error;

    fn try_from(fields: CalendarFields) -> Result<Self, Self::Error> {
        encoder::encode_fields(fields)
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionId")
            .field("year", &self.year())
            .field("month", &self.month())
            .field("day", &self.day())
            .field("hour", &self.hour())
            .field("bucket_minute", &self.bucket_minute())
            .finish()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

impl Serialize for SessionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_u32().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SessionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = u32::deserialize(deserializer)?;
        Ok(SessionId::from(raw))
    }
}
