use std::fmt;

use anyhow::Context;
use chrono::NaiveDate;
use fitharvest_db::DatabaseHandler;
use fitharvest_types::{DateRange, DetailLevel, MetricKind};

use crate::{
    FitbitApi, RestingHeartRateQuery, RetryingFetcher, SeriesAssembler, SleepAssembler,
    WaitStrategy,
};

/// One output table of a harvest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    RestingHeartRate,
    Sleep,
    Intraday(MetricKind),
}

impl Target {
    /// Every table, in the order a full harvest writes them.
    pub const ALL: [Target; 4] = [
        Target::RestingHeartRate,
        Target::Sleep,
        Target::Intraday(MetricKind::HeartRate),
        Target::Intraday(MetricKind::Steps),
    ];

    pub fn table_name(self) -> &'static str {
        match self {
            Target::RestingHeartRate => "resting_hr",
            Target::Sleep => "sleep",
            Target::Intraday(metric) => metric.table_name(),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct HarvestReport {
    pub tables: Vec<(&'static str, usize)>,
}

impl fmt::Display for HarvestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Harvest complete:")?;
        for (name, rows) in &self.tables {
            write!(f, "\n  {name:<17} {rows}")?;
        }
        Ok(())
    }
}

/// Fetches tables from the API and hands each one to the database.
pub struct Harvester<A, W> {
    api: A,
    fetcher: RetryingFetcher<W>,
    pub database: DatabaseHandler,
    detail: DetailLevel,
    progress: bool,
}

impl<A, W> Harvester<A, W>
where
    A: FitbitApi,
    W: WaitStrategy,
{
    pub fn new(api: A, fetcher: RetryingFetcher<W>, database: DatabaseHandler) -> Self {
        Self {
            api,
            fetcher,
            database,
            detail: DetailLevel::default(),
            progress: false,
        }
    }

    pub fn with_detail(mut self, detail: DetailLevel) -> Self {
        self.detail = detail;
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn fetcher(&self) -> &RetryingFetcher<W> {
        &self.fetcher
    }

    /// Harvests `targets` in order over `start..end`, `end` defaulting to today.
    ///
    /// Each table is written as soon as it is complete. The first failure,
    /// retry exhaustion included, stops the run; tables already written stay.
    pub async fn run(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
        targets: &[Target],
    ) -> anyhow::Result<HarvestReport> {
        let range = DateRange::new(start, end);
        info!(
            "harvesting {} days from {} to {}",
            range.len(),
            range.start,
            range.end
        );

        let mut report = HarvestReport::default();
        for &target in targets {
            let rows = self
                .harvest(target, range)
                .await
                .with_context(|| format!("failed to harvest {}", target.table_name()))?;
            info!("{}: {rows} rows", target.table_name());
            report.tables.push((target.table_name(), rows));
        }

        Ok(report)
    }

    async fn harvest(&self, target: Target, range: DateRange) -> anyhow::Result<usize> {
        match target {
            Target::RestingHeartRate => {
                let table = RestingHeartRateQuery::new(&self.api, &self.fetcher)
                    .fetch(range.start, Some(range.end))
                    .await?;
                self.database.store_resting_heart_rate(&table).await
            }
            Target::Sleep => {
                let table = SleepAssembler::new(&self.api, &self.fetcher)
                    .with_progress(self.progress)
                    .assemble(range)
                    .await?;
                self.database.store_sleep(&table).await
            }
            Target::Intraday(metric) => {
                let table = SeriesAssembler::new(&self.api, &self.fetcher)
                    .with_detail(self.detail)
                    .with_progress(self.progress)
                    .assemble(metric, range)
                    .await?;
                self.database.store_intraday(metric, &table).await
            }
        }
    }
}
