//! Synthetic purchase records for exercising session id consumers.
//!
//! Records carry a random customer, a random product and a timestamp on a
//! fixed day, and can be streamed to CSV in bulk.

pub mod error;
mod record;
mod writer;

pub use error::{FixtureError, Result};
pub use record::{FixtureGenerator, FixtureRecord, FixtureSettings};
pub use writer::{write_csv, write_csv_file, DEFAULT_FILE_NAME, DEFAULT_ROWS, PROGRESS_EVERY};
