//! 32-bit session identifiers for 3-minute wall-clock buckets.
//!
//! An instant is read in a caller-chosen time zone, its minute is floored to
//! a multiple of three, and the resulting
//! `(year, month, day, hour, bucket_minute)` tuple is packed into a
//! [`SessionId`]. Every instant in the same bucket maps to the same id.

pub mod bucket;
pub mod calendar;
mod clock;
pub mod encoder;
pub mod error;
mod generator;
mod session_id;

pub use bucket::{session_start_minute, Bucketizer, CalendarFields};
pub use calendar::{instant_from_secs_f64, Calendar, ZonedCalendar};
pub use clock::{Clock, SystemClock};
pub use encoder::{encode, encode_fields, Field};
pub use error::{Error, Result};
pub use generator::{generate_session_id, SessionIdGenerator, SessionIdSettings};
pub use session_id::SessionId;
