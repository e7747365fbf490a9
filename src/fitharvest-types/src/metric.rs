use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Metrics with an intraday time series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum MetricKind {
    #[serde(rename = "heart")]
    HeartRate,
    #[serde(rename = "steps")]
    Steps,
}

impl MetricKind {
    pub const ALL: [MetricKind; 2] = [MetricKind::HeartRate, MetricKind::Steps];

    /// Resource path segment used by the web API.
    pub fn resource(self) -> &'static str {
        match self {
            MetricKind::HeartRate => "activities/heart",
            MetricKind::Steps => "activities/steps",
        }
    }

    /// Key holding the intraday dataset in a per-day response.
    pub fn intraday_key(self) -> &'static str {
        match self {
            MetricKind::HeartRate => "activities-heart-intraday",
            MetricKind::Steps => "activities-steps-intraday",
        }
    }

    /// Key holding the daily summaries in a range response.
    pub fn range_key(self) -> &'static str {
        match self {
            MetricKind::HeartRate => "activities-heart",
            MetricKind::Steps => "activities-steps",
        }
    }

    pub fn table_name(self) -> &'static str {
        match self {
            MetricKind::HeartRate => "heart_timeseries",
            MetricKind::Steps => "steps_timeseries",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricKind::HeartRate => f.write_str("heart"),
            MetricKind::Steps => f.write_str("steps"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMetricError(pub String);

impl fmt::Display for ParseMetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value `{}`", self.0)
    }
}

impl std::error::Error for ParseMetricError {}

impl FromStr for MetricKind {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heart" | "heart-rate" | "hr" => Ok(Self::HeartRate),
            "steps" => Ok(Self::Steps),
            _ => Err(ParseMetricError(s.to_owned())),
        }
    }
}

/// Sampling granularity of an intraday series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailLevel {
    OneSecond,
    #[default]
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
}

impl DetailLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            DetailLevel::OneSecond => "1sec",
            DetailLevel::OneMinute => "1min",
            DetailLevel::FiveMinutes => "5min",
            DetailLevel::FifteenMinutes => "15min",
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetailLevel {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1sec" | "sec" => Ok(Self::OneSecond),
            "1min" | "min" => Ok(Self::OneMinute),
            "5min" => Ok(Self::FiveMinutes),
            "15min" => Ok(Self::FifteenMinutes),
            _ => Err(ParseMetricError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_keys() {
        assert_eq!(MetricKind::HeartRate.intraday_key(), "activities-heart-intraday");
        assert_eq!(MetricKind::Steps.intraday_key(), "activities-steps-intraday");
        assert_eq!(MetricKind::Steps.resource(), "activities/steps");
    }

    #[test]
    fn metric_parses_from_display() {
        for metric in MetricKind::ALL {
            assert_eq!(metric.to_string().parse::<MetricKind>(), Ok(metric));
        }
        assert!("calories".parse::<MetricKind>().is_err());
    }

    #[test]
    fn detail_level_defaults_to_one_minute() {
        assert_eq!(DetailLevel::default().as_str(), "1min");
        assert_eq!("15min".parse(), Ok(DetailLevel::FifteenMinutes));
    }

    #[test]
    fn metric_serde_names() {
        let json = serde_json::to_string(&MetricKind::HeartRate).unwrap();
        assert_eq!(json, "\"heart\"");
    }
}
