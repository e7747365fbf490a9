use chrono::{NaiveDate, NaiveTime};
use fitharvest_types::{DetailLevel, IntradaySample, MetricKind, Table};
use futures::{StreamExt as _, TryStreamExt as _, stream};
use serde::Deserialize;
use serde_json::Value;

use super::day_progress;
use crate::{FitbitApi, FitbitError, RetryingFetcher, WaitStrategy};

#[derive(Deserialize)]
struct DatasetPoint {
    time: NaiveTime,
    value: f64,
}

/// Builds one intraday table per metric from day-by-day requests.
pub struct SeriesAssembler<'a, A, W> {
    api: &'a A,
    fetcher: &'a RetryingFetcher<W>,
    detail: DetailLevel,
    progress: bool,
}

impl<'a, A, W> SeriesAssembler<'a, A, W>
where
    A: FitbitApi,
    W: WaitStrategy,
{
    pub fn new(api: &'a A, fetcher: &'a RetryingFetcher<W>) -> Self {
        Self {
            api,
            fetcher,
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

    pub async fn assemble<I>(
        &self,
        metric: MetricKind,
        dates: I,
    ) -> Result<Table<IntradaySample>, FitbitError>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let dates = dates.into_iter();
        let progress = day_progress(self.progress, metric.table_name(), dates.size_hint().0);
        let bar = &progress;

        let table = stream::iter(dates)
            .map(Ok::<_, FitbitError>)
            .try_fold(Table::new(), move |table, date| async move {
                let response = self
                    .fetcher
                    .call(|| self.api.intraday_series(metric, date, self.detail))
                    .await?;
                let samples = parse_intraday(metric, date, response)?;
                debug!("{metric} {date}: {} samples", samples.len());
                bar.inc(1);
                Ok::<_, FitbitError>(table.concat(samples))
            })
            .await;

        progress.finish();
        table
    }
}

/// Samples of one day, time of day joined onto `date`, in response order.
pub(crate) fn parse_intraday(
    metric: MetricKind,
    date: NaiveDate,
    mut response: Value,
) -> Result<Vec<IntradaySample>, FitbitError> {
    let key = metric.intraday_key();
    let dataset = response
        .get_mut(key)
        .ok_or(FitbitError::MissingField(key))?
        .get_mut("dataset")
        .map(Value::take)
        .ok_or(FitbitError::MissingField("dataset"))?;

    let points: Vec<DatasetPoint> = serde_json::from_value(dataset)?;

    Ok(points
        .into_iter()
        .map(|point| IntradaySample {
            time: date.and_time(point.time),
            value: point.value,
        })
        .collect())
}
