use crate::error::{FixtureError, Result};
use jiff::civil::{self, Date};
use jiff::tz::TimeZone;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use typed_builder::TypedBuilder;
use uuid::Uuid;

/// A synthetic purchase event used to feed session id consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureRecord {
    pub customer_id: Uuid,
    pub product_id: u32,
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
}

/// Configures a [`FixtureGenerator`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct FixtureSettings {
    /// Calendar day every generated timestamp falls on.
    #[builder(default = civil::date(2022, 11, 11))]
    pub day: Date,
    /// Zone in which `day` and the random hour/minute are interpreted.
    #[builder(default = TimeZone::system())]
    pub time_zone: TimeZone,
    #[builder(default = 1..=1000)]
    pub product_ids: RangeInclusive<u32>,
}

impl Default for FixtureSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Produces random [`FixtureRecord`]s on a single configured day.
#[derive(Debug, Clone)]
pub struct FixtureGenerator {
    settings: FixtureSettings,
}

impl FixtureGenerator {
    pub fn new(settings: FixtureSettings) -> Result<Self> {
        if settings.product_ids.is_empty() {
            return Err(FixtureError::EmptyProductRange {
                start: *settings.product_ids.start(),
                end: *settings.product_ids.end(),
            });
        }
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &FixtureSettings {
        &self.settings
    }

    /// Generates one record with a random customer, product and minute of the day.
    pub fn fake_record<R: Rng>(&self, rng: &mut R) -> Result<FixtureRecord> {
        let customer_id = uuid::Builder::from_random_bytes(rng.random()).into_uuid();
        let product_id = rng.random_range(self.settings.product_ids.clone());
        let hour = rng.random_range(0..=23);
        let minute = rng.random_range(0..=59);

        let timestamp = self
            .settings
            .day
            .at(hour, minute, 0, 0)
            .to_zoned(self.settings.time_zone.clone())?
            .timestamp();

        Ok(FixtureRecord {
            customer_id,
            product_id,
            timestamp: timestamp.as_second() as f64,
        })
    }

    /// Generates `count` records.
    pub fn records<R: Rng>(&self, rng: &mut R, count: usize) -> Result<Vec<FixtureRecord>> {
        (0..count).map(|_| self.fake_record(rng)).collect()
    }
}
