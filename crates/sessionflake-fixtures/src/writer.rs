use crate::error::Result;
use crate::record::FixtureGenerator;
use rand::Rng;
use std::io;
use std::path::Path;
use tracing::info;

/// Default number of rows for a fixture file.
pub const DEFAULT_ROWS: u64 = 100_000;
/// Default fixture file name.
pub const DEFAULT_FILE_NAME: &str = "fake_data.csv";
/// A progress line is logged every this many rows.
pub const PROGRESS_EVERY: u64 = 1_000_000;

/// Writes a header followed by `rows` random records as CSV.
///
/// Returns the number of records written.
pub fn write_csv<W, R>(
    writer: W,
    generator: &FixtureGenerator,
    rng: &mut R,
    rows: u64,
) -> Result<u64>
where
    W: io::Write,
    R: Rng,
{
    let mut csv = csv::Writer::from_writer(writer);
    info!(
        fields = "customer_id,product_id,timestamp",
        rows, "writing fixture records"
    );

    let mut written = 0;
    for _ in 0..rows {
        csv.serialize(generator.fake_record(rng)?)?;
        written += 1;
        if written % PROGRESS_EVERY == 0 {
            info!(written, "fixture rows written");
        }
    }
    // An empty run still gets a header.
    if rows == 0 {
        csv.write_record(["customer_id", "product_id", "timestamp"])?;
    }

    csv.flush()?;
    Ok(written)
}

/// Creates (or truncates) `path` and fills it via [`write_csv`].
pub fn write_csv_file<R: Rng>(
    path: impl AsRef<Path>,
    generator: &FixtureGenerator,
    rng: &mut R,
    rows: u64,
) -> Result<u64> {
    let path = path.as_ref();
    let file = io::BufWriter::new(std::fs::File::create(path)?);
    let written = write_csv(file, generator, rng, rows)?;
    info!(path = %path.display(), written, "fixture file complete");
    Ok(written)
}
