use std::path::PathBuf;

use anyhow::Context;
use chrono::{Datelike, Local, NaiveDate, Weekday};
use clap::Parser;
use log::{error, info};

use crate::data::{Period, RunContext};
use crate::read::FsRecordSource;

mod config;
mod data;
mod evaluate;
mod mail;
mod read;
mod report;
mod verify;

/// Check that every account's pivot files were produced (evening) or
/// consumed (morning) today, and mail one consolidated report.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Which of the two daily runs this is
    #[arg(value_enum)]
    period: Period,

    /// Path to the TOML configuration
    #[arg(long, default_value = "pivot.toml")]
    config: PathBuf,
}

/// Pivots are neither computed nor consumed on Saturday and Sunday.
fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    let args = Args::parse();

    let now = Local::now();
    if is_weekend(now.date_naive()) {
        info!("weekend, nothing to verify");
        return Ok(());
    }
    info!("period: {:?}", args.period);

    let config = config::load(&args.config)?;
    let header = std::fs::read_to_string(&config.header)
        .with_context(|| format!("cannot read report header {}", config.header.display()))?;
    let ctx = RunContext {
        today: now.format("%Y/%m/%d").to_string(),
        period: args.period,
    };

    let (subject, body) = verify::run(&ctx, &config.accounts, &header, &FsRecordSource);

    // The report already says everything it ever will; a delivery failure
    // only loses this one notification, so it's logged rather than fatal.
    if let Err(e) = mail::send(&subject, &body, &config.mail) {
        error!("{e:#}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::is_weekend;

    #[test]
    fn saturday_and_sunday_are_weekend() {
        // 2024/01/13 is a Saturday
        assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()));
        assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 1, 14).unwrap()));
    }

    #[test]
    fn weekdays_are_not() {
        for day in 8..=12 {
            // 2024/01/08 through 12 is Monday through Friday
            assert!(!is_weekend(NaiveDate::from_ymd_opt(2024, 1, day).unwrap()));
        }
    }
}
