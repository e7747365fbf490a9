use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One reading of an intraday series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntradaySample {
    pub time: NaiveDateTime,
    pub value: f64,
}

/// Main sleep session of one night.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SleepRecord {
    pub date: NaiveDate,
    pub efficiency: i64,
    pub hours_asleep: f64,
    pub asleep_time: NaiveTime,
    /// Time of day only, a session ending after midnight keeps no date.
    pub awake_time: NaiveTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestingHeartRate {
    pub date: NaiveDate,
    pub resting_hr: Option<i64>,
}
