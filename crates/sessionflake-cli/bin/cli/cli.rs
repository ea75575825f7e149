use clap::{Parser, Subcommand};
use jiff::civil::Date;
use jiff::Timestamp;
use sessionflake::instant_from_secs_f64;
use sessionflake_fixtures::{DEFAULT_FILE_NAME, DEFAULT_ROWS};
use std::path::PathBuf;

pub const TIME_ZONE_ENV: &str = "SESSIONFLAKE_TZ";
pub const FIXTURE_ROWS_ENV: &str = "SESSIONFLAKE_FIXTURE_ROWS";
pub const FIXTURE_OUTPUT_ENV: &str = "SESSIONFLAKE_FIXTURE_OUTPUT";
pub const FIXTURE_SEED_ENV: &str = "SESSIONFLAKE_FIXTURE_SEED";
pub const FIXTURE_DAY_ENV: &str = "SESSIONFLAKE_FIXTURE_DAY";

pub const DEFAULT_FIXTURE_DAY: &str = "2022-11-11";

#[derive(Debug, Parser)]
#[command(name = "sessionflake", about = "3-minute session ids for wall-clock instants")]
pub struct CLI {
    /// IANA time zone used to read wall-clock fields; the host zone if unset.
    #[arg(long, env = TIME_ZONE_ENV, global = true)]
    pub tz: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the session id of an instant.
    Encode {
        /// RFC 3339 timestamp or seconds since the Unix epoch.
        #[arg(long, value_parser = parse_instant)]
        at: Timestamp,
    },
    /// Print the session id of the current time.
    Now,
    /// Print the fields packed into a session id.
    Decode { id: u32 },
    /// Write synthetic purchase records to a CSV file.
    Fixtures {
        #[arg(long, env = FIXTURE_ROWS_ENV, default_value_t = DEFAULT_ROWS)]
        rows: u64,

        #[arg(long, env = FIXTURE_OUTPUT_ENV, default_value = DEFAULT_FILE_NAME)]
        output: PathBuf,

        /// Seed for reproducible output.
        #[arg(long, env = FIXTURE_SEED_ENV)]
        seed: Option<u64>,

        /// Day every record's timestamp falls on.
        #[arg(long, env = FIXTURE_DAY_ENV, default_value = DEFAULT_FIXTURE_DAY)]
        day: Date,
    },
}

pub fn parse_instant(raw: &str) -> Result<Timestamp, String> {
    if let Ok(secs) = raw.parse::<f64>() {
        return instant_from_secs_f64(secs).map_err(|e| e.to_string());
    }
    raw.parse::<Timestamp>()
        .map_err(|e| format!("expected RFC 3339 timestamp or epoch seconds: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        CLI::command().debug_assert();
    }

    #[test]
    fn parses_epoch_seconds() {
        let instant = parse_instant("1699713065.5").unwrap();
        assert_eq!(instant.as_second(), 1_699_713_065);
    }

    #[test]
    fn parses_rfc3339() {
        let instant = parse_instant("2023-11-11T22:31:05+08:00").unwrap();
        assert_eq!(instant.as_second(), 1_699_713_065);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_instant("yesterday").is_err());
    }

    #[test]
    fn fixtures_defaults() {
        let cli = CLI::try_parse_from(["sessionflake", "fixtures"]).unwrap();
        match cli.command {
            Command::Fixtures {
                rows, output, day, ..
            } => {
                assert_eq!(rows, DEFAULT_ROWS);
                assert_eq!(output, PathBuf::from(DEFAULT_FILE_NAME));
                assert_eq!(day, jiff::civil::date(2022, 11, 11));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn time_zone_flag_is_global() {
        let cli = CLI::try_parse_from(["sessionflake", "now", "--tz", "UTC"]).unwrap();
        assert_eq!(cli.tz.as_deref(), Some("UTC"));
    }
}
