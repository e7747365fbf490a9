use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use fitharvest_types::{SleepRecord, Table};
use futures::{StreamExt as _, TryStreamExt as _, stream};
use serde::Deserialize;
use serde_json::Value;

use super::day_progress;
use crate::{FitbitApi, FitbitError, RetryingFetcher, WaitStrategy};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SleepSession {
    date_of_sleep: NaiveDate,
    efficiency: i64,
    minutes_asleep: i64,
    minutes_awake: i64,
    start_time: NaiveDateTime,
}

impl SleepSession {
    fn into_record(self) -> Result<SleepRecord, FitbitError> {
        let end = self
            .minutes_asleep
            .checked_add(self.minutes_awake)
            .and_then(TimeDelta::try_minutes)
            .and_then(|in_bed| self.start_time.checked_add_signed(in_bed))
            .ok_or(FitbitError::OutOfRange("minutesAsleep"))?;

        Ok(SleepRecord {
            date: self.date_of_sleep,
            efficiency: self.efficiency,
            hours_asleep: self.minutes_asleep as f64 / 60.0,
            asleep_time: self.start_time.time(),
            awake_time: end.time(),
        })
    }
}

/// Builds the nightly sleep table, one row per date that has a session.
pub struct SleepAssembler<'a, A, W> {
    api: &'a A,
    fetcher: &'a RetryingFetcher<W>,
    progress: bool,
}

impl<'a, A, W> SleepAssembler<'a, A, W>
where
    A: FitbitApi,
    W: WaitStrategy,
{
    pub fn new(api: &'a A, fetcher: &'a RetryingFetcher<W>) -> Self {
        Self {
            api,
            fetcher,
            progress: false,
        }
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub async fn assemble<I>(&self, dates: I) -> Result<Table<SleepRecord>, FitbitError>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let dates = dates.into_iter();
        let progress = day_progress(self.progress, "sleep", dates.size_hint().0);
        let bar = &progress;

        let table = stream::iter(dates)
            .map(Ok::<_, FitbitError>)
            .try_fold(Table::new(), move |table, date| async move {
                let response = self.fetcher.call(|| self.api.sleep(date)).await?;
                let record = parse_sleep(response)?;
                if record.is_none() {
                    debug!("no sleep recorded for {date}");
                }
                bar.inc(1);
                Ok::<_, FitbitError>(table.concat(record))
            })
            .await;

        progress.finish();
        table
    }
}

/// First session of the day, `None` when the day has no sessions.
pub(crate) fn parse_sleep(mut response: Value) -> Result<Option<SleepRecord>, FitbitError> {
    let sessions = response
        .get_mut("sleep")
        .map(Value::take)
        .ok_or(FitbitError::MissingField("sleep"))?;
    let sessions: Vec<Value> = serde_json::from_value(sessions)?;

    let Some(first) = sessions.into_iter().next() else {
        return Ok(None);
    };

    let session: SleepSession = serde_json::from_value(first)?;
    session.into_record().map(Some)
}
