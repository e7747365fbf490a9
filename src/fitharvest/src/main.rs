#[macro_use]
extern crate log;

use std::time::Duration;

use anyhow::anyhow;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use fitharvest::{FitbitClient, Harvester, RetryPolicy, RetryingFetcher, Target, TokioWait};
use fitharvest_db::DatabaseHandler;
use fitharvest_types::{DetailLevel, MetricKind};

#[derive(Parser)]
pub struct FitHarvestCli {
    #[arg(env, long)]
    pub database_url: String,
    #[arg(env = "FITBIT_ACCESS_TOKEN", long)]
    pub access_token: Option<String>,
    /// First day to fetch
    #[arg(env = "FITHARVEST_START", long, default_value = "2016-03-08")]
    pub start: NaiveDate,
    /// Day the range stops before, today when omitted
    #[arg(env = "FITHARVEST_END", long)]
    pub end: Option<NaiveDate>,
    #[arg(env, long, default_value_t = DetailLevel::OneMinute)]
    pub detail_level: DetailLevel,
    #[arg(env, long, default_value_t = 5)]
    pub max_attempts: u32,
    /// Seconds to wait after a failed request
    #[arg(env, long, default_value_t = 3600)]
    pub backoff_secs: u64,
    /// Show a progress bar over the days of each table
    #[arg(long)]
    pub progress: bool,
    #[clap(subcommand)]
    pub subcommand: FitHarvestCommand,
}

#[derive(Subcommand)]
pub enum FitHarvestCommand {
    ///
    /// Fetch resting heart rate, sleep, heart rate and steps series
    ///
    Harvest,
    ///
    /// Fetch daily resting heart rate
    ///
    RestingHr,
    ///
    /// Fetch the main sleep session of every night
    ///
    Sleep,
    ///
    /// Fetch an intraday series
    ///
    Intraday {
        #[arg(long)]
        metric: MetricKind,
    },
    ///
    /// Print how many rows each table holds
    ///
    Summary,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("sqlx::query", log::LevelFilter::Off)
        .filter_module("sea_orm_migration::migrator", log::LevelFilter::Off)
        .init();

    let cli = FitHarvestCli::parse();
    let database = DatabaseHandler::new(cli.database_url).await?;

    let targets = match cli.subcommand {
        FitHarvestCommand::Summary => {
            for (table, rows) in database.row_counts().await? {
                println!("{table:<17} {rows}");
            }
            return Ok(());
        }
        FitHarvestCommand::Harvest => Target::ALL.to_vec(),
        FitHarvestCommand::RestingHr => vec![Target::RestingHeartRate],
        FitHarvestCommand::Sleep => vec![Target::Sleep],
        FitHarvestCommand::Intraday { metric } => vec![Target::Intraday(metric)],
    };

    let token = cli
        .access_token
        .ok_or(anyhow!("FITBIT_ACCESS_TOKEN is required to fetch data"))?;

    let policy = RetryPolicy {
        max_attempts: cli.max_attempts,
        backoff: Duration::from_secs(cli.backoff_secs),
    };
    let harvester = Harvester::new(
        FitbitClient::new(token),
        RetryingFetcher::new(policy, TokioWait),
        database,
    )
    .with_detail(cli.detail_level)
    .with_progress(cli.progress);

    debug!("retry policy: {:?}", harvester.fetcher().policy());

    let report = harvester.run(cli.start, cli.end, &targets).await?;
    println!("{report}");

    Ok(())
}
