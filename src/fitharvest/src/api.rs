//! HTTP access to the Fitbit web API.
//!
//! Only the three read calls needed to build the output tables are exposed.
//! Responses are returned as raw JSON, turning them into rows is the job of
//! [`crate::assemble`].

use std::future::Future;

use chrono::NaiveDate;
use fitharvest_types::{DATE_FORMAT, DetailLevel, MetricKind};
use serde_json::Value;

use crate::FitbitError;

const API_BASE: &str = "https://api.fitbit.com";

/// Authenticated session against the web API.
pub trait FitbitApi {
    /// One day of an intraday series at the given granularity.
    fn intraday_series(
        &self,
        metric: MetricKind,
        date: NaiveDate,
        detail: DetailLevel,
    ) -> impl Future<Output = Result<Value, FitbitError>>;

    /// Sleep log of one day.
    fn sleep(&self, date: NaiveDate) -> impl Future<Output = Result<Value, FitbitError>>;

    /// Daily summaries of `metric` from `start` to `end`, both inclusive.
    fn range_series(
        &self,
        metric: MetricKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Future<Output = Result<Value, FitbitError>>;
}

pub struct FitbitClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl FitbitClient {
    /// Client for the current user of `access_token`.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: API_BASE.to_owned(),
            token: access_token.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get(&self, path: &str) -> Result<Value, FitbitError> {
        let url = format!("{}{path}", self.base_url);
        debug!("GET {url}");

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(FitbitError::Status { status, body });
        }

        Ok(resp.json().await?)
    }
}

impl FitbitApi for FitbitClient {
    async fn intraday_series(
        &self,
        metric: MetricKind,
        date: NaiveDate,
        detail: DetailLevel,
    ) -> Result<Value, FitbitError> {
        self.get(&format!(
            "/1/user/-/{}/date/{}/1d/{detail}.json",
            metric.resource(),
            date.format(DATE_FORMAT),
        ))
        .await
    }

    async fn sleep(&self, date: NaiveDate) -> Result<Value, FitbitError> {
        self.get(&format!("/1/user/-/sleep/date/{}.json", date.format(DATE_FORMAT)))
            .await
    }

    async fn range_series(
        &self,
        metric: MetricKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Value, FitbitError> {
        self.get(&format!(
            "/1/user/-/{}/date/{}/{}.json",
            metric.resource(),
            start.format(DATE_FORMAT),
            end.format(DATE_FORMAT),
        ))
        .await
    }
}
