use thiserror::Error;

/// Type alias for fixture results.
pub type Result<T> = std::result::Result<T, FixtureError>;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("product id range is empty: {start}..={end}")]
    EmptyProductRange { start: u32, end: u32 },
    #[error("fixture timestamp is not representable: {0}")]
    Time(#[from] jiff::Error),
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
