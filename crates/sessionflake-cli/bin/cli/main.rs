mod cli;

use crate::cli::{Command, CLI};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sessionflake::{SessionId, SessionIdGenerator, SystemClock, ZonedCalendar};
use sessionflake_fixtures::{write_csv_file, FixtureGenerator, FixtureSettings};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = CLI::parse();

    let calendar = match config.tz.as_deref() {
        Some(name) => ZonedCalendar::named(name)?,
        None => ZonedCalendar::system(),
    };
    info!(
        time_zone = calendar.time_zone().iana_name().unwrap_or("local"),
        "using time zone"
    );

    match config.command {
        Command::Encode { at } => {
            let generator = SessionIdGenerator::from_parts(SystemClock, calendar);
            let id = generator.for_timestamp(at)?;
            info!(instant = %at, fields = %id.fields(), "encoded session id");
            println!("{id}");
        }
        Command::Now => {
            let generator = SessionIdGenerator::from_parts(SystemClock, calendar);
            let id = generator.now()?;
            info!(fields = %id.fields(), "encoded session id");
            println!("{id}");
        }
        Command::Decode { id } => {
            let fields = SessionId::from(id).fields();
            println!(
                "year={} month={} day={} hour={} bucket_minute={}",
                fields.year, fields.month, fields.day, fields.hour, fields.bucket_minute
            );
        }
        Command::Fixtures {
            rows,
            output,
            seed,
            day,
        } => {
            let generator = FixtureGenerator::new(
                FixtureSettings::builder()
                    .day(day)
                    .time_zone(calendar.time_zone().clone())
                    .build(),
            )?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            info!(rows, output = %output.display(), %day, "generating fixtures");
            let written = write_csv_file(&output, &generator, &mut rng, rows)?;
            println!("{written}");
        }
    }

    Ok(())
}
