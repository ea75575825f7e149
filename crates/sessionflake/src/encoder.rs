use crate::bucket::CalendarFields;
use crate::error::{Error, Result};
use crate::session_id::SessionId;
use std::fmt;

/// Number of fields packed into a [`SessionId`].
pub const FIELD_COUNT: usize = 5;

/// A positional field of the session id layout, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    BucketMinute,
}

impl Field {
    /// Fields in validation (and positional) order.
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Year,
        Field::Month,
        Field::Day,
        Field::Hour,
        Field::BucketMinute,
    ];

    /// Zero-based position of the field in the encoder input.
    pub const fn index(self) -> usize {
        match self {
            Field::Year => 0,
            Field::Month => 1,
            Field::Day => 2,
            Field::Hour => 3,
            Field::BucketMinute => 4,
        }
    }

    /// Width of the field in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Field::Year => 12,
            Field::Month => 4,
            Field::Day => 5,
            Field::Hour => 5,
            Field::BucketMinute => 6,
        }
    }

    /// Position of the field's lowest bit in the packed integer.
    pub const fn shift(self) -> u32 {
        match self {
            Field::Year => 20,
            Field::Month => 16,
            Field::Day => 11,
            Field::Hour => 6,
            Field::BucketMinute => 0,
        }
    }

    /// Exclusive upper bound, `2^bits`.
    pub const fn limit(self) -> i64 {
        1 << self.bits()
    }

    pub const fn mask(self) -> u32 {
        (1 << self.bits()) - 1
    }

    fn check(self, value: i64) -> Result<u32> {
        if (0..self.limit()).contains(&value) {
            Ok(value as u32)
        } else {
            Err(Error::OutOfRange { field: self, value })
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::Hour => "hour",
            Field::BucketMinute => "bucket minute",
        };
        f.write_str(name)
    }
}

/// Validates and packs `(year, month, day, hour, bucket_minute)` into a [`SessionId`].
///
/// Arity is checked first, then every field in positional order. The first
/// violation is returned and nothing is packed; values are never truncated
/// to fit.
pub fn encode(fields: &[i64]) -> Result<SessionId> {
    let [year, month, day, hour, bucket_minute] = <[i64; FIELD_COUNT]>::try_from(fields)
        .map_err(|_| Error::Arity { got: fields.len() })?;

    let year = Field::Year.check(year)?;
    let month = Field::Month.check(month)?;
    let day = Field::Day.check(day)?;
    let hour = Field::Hour.check(hour)?;
    let bucket_minute = Field::BucketMinute.check(bucket_minute)?;

    Ok(SessionId::new()
        .with_year(year as u16)
        .with_month(month as u8)
        .with_day(day as u8)
        .with_hour(hour as u8)
        .with_bucket_minute(bucket_minute as u8))
}

/// Packs bucketed calendar fields into a [`SessionId`].
pub fn encode_fields(fields: CalendarFields) -> Result<SessionId> {
    encode(&fields.to_array())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packed(year: u32, month: u32, day: u32, hour: u32, minute: u32) -> u32 {
        (year << 20) | (month << 16) | (day << 11) | (hour << 6) | minute
    }

    #[test]
    fn known_value_packs_to_constant() {
        let id = encode(&[2023, 11, 11, 14, 30]).unwrap();
        assert_eq!(id.as_u32(), 2_122_013_598);
        assert_eq!(id.as_u32(), packed(2023, 11, 11, 14, 30));
        assert!(u64::from(id.as_u32()) < 1 << 32);
    }

    #[test]
    fn field_layout_covers_all_32_bits() {
        let total: u32 = Field::ALL.iter().map(|f| f.bits()).sum();
        assert_eq!(total, 32);
        for pair in Field::ALL.windows(2) {
            assert_eq!(pair[0].shift(), pair[1].shift() + pair[1].bits());
        }
    }

    #[test]
    fn maximum_values_fill_every_bit() {
        let id = encode(&[4095, 15, 31, 31, 63]).unwrap();
        assert_eq!(id.as_u32(), u32::MAX);
    }

    #[test]
    fn zero_values_pack_to_zero() {
        assert_eq!(encode(&[0, 0, 0, 0, 0]).unwrap().as_u32(), 0);
    }

    #[test]
    fn round_trip_recovers_fields() {
        let years = [0, 1, 1970, 2023, 4095];
        let months = [0, 1, 12, 15];
        let days = [0, 1, 28, 31];
        let hours = [0, 12, 23, 31];
        let minutes = [0, 3, 30, 57, 63];

        for &year in &years {
            for &month in &months {
                for &day in &days {
                    for &hour in &hours {
                        for &minute in &minutes {
                            let raw = encode(&[year, month, day, hour, minute])
                                .unwrap()
                                .as_u32();
                            let decoded = [
                                (raw >> 20) & 0xFFF,
                                (raw >> 16) & 0xF,
                                (raw >> 11) & 0x1F,
                                (raw >> 6) & 0x1F,
                                raw & 0x3F,
                            ];
                            assert_eq!(
                                decoded.map(i64::from),
                                [year, month, day, hour, minute]
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn rejects_each_field_just_past_its_width() {
        let cases = [
            ([4096, 1, 1, 0, 0], Field::Year),
            ([2023, 16, 1, 0, 0], Field::Month),
            ([2023, 1, 32, 0, 0], Field::Day),
            ([2023, 1, 1, 32, 0], Field::Hour),
            ([2023, 1, 1, 0, 64], Field::BucketMinute),
        ];

        for (fields, field) in cases {
            let value = fields[field.index()];
            assert_eq!(encode(&fields), Err(Error::OutOfRange { field, value }));
        }
    }

    #[test]
    fn rejects_negative_values() {
        assert_eq!(
            encode(&[-1, 1, 1, 0, 0]),
            Err(Error::OutOfRange {
                field: Field::Year,
                value: -1
            })
        );
        assert_eq!(
            encode(&[2023, 1, 1, -3, 0]),
            Err(Error::OutOfRange {
                field: Field::Hour,
                value: -3
            })
        );
    }

    #[test]
    fn first_failing_field_wins() {
        assert_eq!(
            encode(&[2023, 16, 32, 32, 64]),
            Err(Error::OutOfRange {
                field: Field::Month,
                value: 16
            })
        );
        assert_eq!(
            encode(&[9999, 99, 99, 99, 99]),
            Err(Error::OutOfRange {
                field: Field::Year,
                value: 9999
            })
        );
    }

    #[test]
    fn rejects_wrong_arity() {
        assert_eq!(encode(&[2023, 11, 11, 14]), Err(Error::Arity { got: 4 }));
        assert_eq!(
            encode(&[2023, 11, 11, 14, 30, 0]),
            Err(Error::Arity { got: 6 })
        );
        assert_eq!(encode(&[]), Err(Error::Arity { got: 0 }));
    }

    #[test]
    fn arity_is_checked_before_ranges() {
        assert_eq!(encode(&[-1, -1, -1, -1]), Err(Error::Arity { got: 4 }));
    }

    #[test]
    fn encode_fields_matches_positional_encode() {
        let fields = CalendarFields {
            year: 2023,
            month: 11,
            day: 11,
            hour: 14,
            bucket_minute: 30,
        };
        assert_eq!(encode_fields(fields), encode(&[2023, 11, 11, 14, 30]));
        assert_eq!(SessionId::try_from(fields), encode_fields(fields));
    }

    #[test]
    fn error_message_names_the_field() {
        let err = encode(&[2023, 16, 1, 0, 0]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "month (field 2) out of range: 16; expected 0..16"
        );
    }
}
