use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use chrono::NaiveDate;
use fitharvest_types::{DetailLevel, MetricKind};
use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::{FitbitApi, FitbitError};

/// In-memory API answering from canned per-day responses.
///
/// The next `fail_next` calls, whatever the endpoint, fail with 429. A day
/// without a canned response answers 404.
#[derive(Default)]
pub(crate) struct ScriptedApi {
    intraday: HashMap<(MetricKind, NaiveDate), Value>,
    sleep: HashMap<NaiveDate, Value>,
    range: Option<Value>,
    fail_next: AtomicUsize,
    calls: Mutex<Vec<String>>,
}

impl ScriptedApi {
    pub(crate) fn with_intraday(mut self, metric: MetricKind, date: NaiveDate, body: Value) -> Self {
        self.intraday.insert((metric, date), body);
        self
    }

    pub(crate) fn with_sleep(mut self, date: NaiveDate, body: Value) -> Self {
        self.sleep.insert(date, body);
        self
    }

    pub(crate) fn with_range(mut self, body: Value) -> Self {
        self.range = Some(body);
        self
    }

    pub(crate) fn failing(self, calls: usize) -> Self {
        self.fail_next.store(calls, Ordering::Relaxed);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: String, body: Option<&Value>) -> Result<Value, FitbitError> {
        self.calls.lock().unwrap().push(call);

        let failing = self
            .fail_next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(FitbitError::Status {
                status: StatusCode::TOO_MANY_REQUESTS,
                body: "Too Many Requests".into(),
            });
        }

        body.cloned().ok_or(FitbitError::Status {
            status: StatusCode::NOT_FOUND,
            body: String::new(),
        })
    }
}

impl FitbitApi for ScriptedApi {
    async fn intraday_series(
        &self,
        metric: MetricKind,
        date: NaiveDate,
        detail: DetailLevel,
    ) -> Result<Value, FitbitError> {
        self.answer(
            format!("intraday {metric} {date} {detail}"),
            self.intraday.get(&(metric, date)),
        )
    }

    async fn sleep(&self, date: NaiveDate) -> Result<Value, FitbitError> {
        self.answer(format!("sleep {date}"), self.sleep.get(&date))
    }

    async fn range_series(
        &self,
        metric: MetricKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Value, FitbitError> {
        self.answer(format!("range {metric} {start} {end}"), self.range.as_ref())
    }
}

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Per-day intraday body with `(time, value)` samples.
pub(crate) fn intraday_body(metric: MetricKind, samples: &[(&str, f64)]) -> Value {
    let dataset = samples
        .iter()
        .map(|(time, value)| json!({ "time": time, "value": value }))
        .collect::<Vec<_>>();

    json!({
        metric.range_key(): [],
        metric.intraday_key(): {
            "dataset": dataset,
            "datasetInterval": 1,
            "datasetType": "minute",
        },
    })
}

pub(crate) fn sleep_session(
    date_of_sleep: &str,
    start_time: &str,
    minutes_asleep: i64,
    minutes_awake: i64,
) -> Value {
    json!({
        "dateOfSleep": date_of_sleep,
        "duration": (minutes_asleep + minutes_awake) * 60_000,
        "efficiency": 93,
        "isMainSleep": true,
        "minutesAsleep": minutes_asleep,
        "minutesAwake": minutes_awake,
        "startTime": start_time,
        "timeInBed": minutes_asleep + minutes_awake,
    })
}

pub(crate) fn sleep_body(sessions: Vec<Value>) -> Value {
    let total = sessions.len();
    json!({ "sleep": sessions, "summary": { "totalSleepRecords": total } })
}
