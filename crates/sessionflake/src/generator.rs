use crate::{
    bucket::Bucketizer,
    calendar::{instant_from_secs_f64, Calendar, ZonedCalendar},
    clock::{Clock, SystemClock},
    encoder,
    error::Result,
    SessionId,
};
use jiff::tz::TimeZone;
use jiff::Timestamp;
use typed_builder::TypedBuilder;

/// Configures a [`SessionIdGenerator`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct SessionIdSettings {
    /// Time zone whose wall clock defines the year, month, day, hour and
    /// minute of an instant. Defaults to the host's local zone.
    #[builder(default = TimeZone::system())]
    pub time_zone: TimeZone,
}

impl Default for SessionIdSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Maps instants to 3-minute [`SessionId`]s.
///
/// Holds no mutable state; a shared reference can be used from any thread.
#[derive(Debug, Clone)]
pub struct SessionIdGenerator<C: Clock = SystemClock, K: Calendar = ZonedCalendar> {
    clock: C,
    bucketizer: Bucketizer<K>,
}

impl SessionIdGenerator {
    /// Creates a generator backed by the real system clock.
    pub fn new(settings: SessionIdSettings) -> Self {
        Self::with_clock(settings, SystemClock)
    }
}

impl<C: Clock> SessionIdGenerator<C> {
    pub(crate) fn with_clock(settings: SessionIdSettings, clock: C) -> Self {
        Self::from_parts(clock, ZonedCalendar::new(settings.time_zone))
    }
}

impl<C: Clock, K: Calendar> SessionIdGenerator<C, K> {
    /// Creates a generator from an explicit clock and calendar.
    pub fn from_parts(clock: C, calendar: K) -> Self {
        Self {
            clock,
            bucketizer: Bucketizer::new(calendar),
        }
    }

    pub fn bucketizer(&self) -> &Bucketizer<K> {
        &self.bucketizer
    }

    /// Session id of the bucket containing `instant`.
    pub fn for_timestamp(&self, instant: Timestamp) -> Result<SessionId> {
        let fields = self.bucketizer.bucketize(instant)?;
        let id = encoder::encode_fields(fields)?;
        tracing::trace!(%instant, %fields, session_id = id.as_u32(), "generated session id");
        Ok(id)
    }

    /// Session id for seconds since the Unix epoch.
    pub fn for_secs(&self, secs: f64) -> Result<SessionId> {
        self.for_timestamp(instant_from_secs_f64(secs)?)
    }

    /// Session id of the bucket the clock is currently in.
    pub fn now(&self) -> Result<SessionId> {
        self.for_timestamp(self.clock.now())
    }
}

/// Session id of the bucket containing `instant`, read in the host's local
/// time zone.
pub fn generate_session_id(instant: Timestamp) -> Result<SessionId> {
    SessionIdGenerator::new(SessionIdSettings::default()).for_timestamp(instant)
}
