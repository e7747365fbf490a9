use chrono::NaiveDate;
use fitharvest_types::{MetricKind, RestingHeartRate, Table, today};
use serde::Deserialize;
use serde_json::Value;

use crate::{FitbitApi, FitbitError, RetryingFetcher, WaitStrategy};

#[derive(Deserialize)]
struct DaySummary {
    #[serde(rename = "dateTime")]
    date: NaiveDate,
    #[serde(default)]
    value: SummaryValue,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct SummaryValue {
    resting_heart_rate: Option<i64>,
}

/// Resting heart rate of every day in a range, fetched in a single call.
pub struct RestingHeartRateQuery<'a, A, W> {
    api: &'a A,
    fetcher: &'a RetryingFetcher<W>,
}

impl<'a, A, W> RestingHeartRateQuery<'a, A, W>
where
    A: FitbitApi,
    W: WaitStrategy,
{
    pub fn new(api: &'a A, fetcher: &'a RetryingFetcher<W>) -> Self {
        Self { api, fetcher }
    }

    /// `end` is inclusive and defaults to today.
    pub async fn fetch(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<Table<RestingHeartRate>, FitbitError> {
        let end = end.unwrap_or_else(today);
        let response = self
            .fetcher
            .call(|| self.api.range_series(MetricKind::HeartRate, start, end))
            .await?;

        let table = parse_resting_hr(response)?;
        debug!("resting heart rate {start}..={end}: {} days", table.len());
        Ok(table)
    }
}

/// One row per daily summary, in response order.
pub(crate) fn parse_resting_hr(mut response: Value) -> Result<Table<RestingHeartRate>, FitbitError> {
    let key = MetricKind::HeartRate.range_key();
    let days = response
        .get_mut(key)
        .map(Value::take)
        .ok_or(FitbitError::MissingField(key))?;
    let days: Vec<DaySummary> = serde_json::from_value(days)?;

    Ok(days
        .into_iter()
        .map(|day| RestingHeartRate {
            date: day.date,
            resting_hr: day.value.resting_heart_rate,
        })
        .collect())
}
