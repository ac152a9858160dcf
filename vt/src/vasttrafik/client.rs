//! Västtrafik REST API client.
//!
//! Provides async methods for the journey planner's `trip` and
//! `location.name` endpoints. Every request carries the auth key and asks
//! for JSON.

use chrono::{NaiveDate, NaiveTime};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::Trip;

use super::convert::convert_trip_list;
use super::error::PlannerError;
use super::types::{LocationResponse, StopLocation, TripResponse};

/// Default base URL for the v1 API.
const DEFAULT_BASE_URL: &str = "http://api.vasttrafik.se/bin/rest.exe/v1";

/// Longest response excerpt kept in a JSON error.
const BODY_EXCERPT_LEN: usize = 500;

/// Configuration for the planner client.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Key sent as `authKey` with every request
    pub auth_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl PlannerConfig {
    /// Create a new config with the given auth key.
    pub fn new(auth_key: impl Into<String>) -> Self {
        Self {
            auth_key: auth_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// A trip search between two stop ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripQuery {
    pub origin_id: String,
    pub dest_id: String,
    /// Travel date; the planner assumes today when absent
    pub date: Option<NaiveDate>,
    /// Departure time; the planner assumes now when absent
    pub time: Option<NaiveTime>,
}

impl TripQuery {
    pub fn new(origin_id: impl Into<String>, dest_id: impl Into<String>) -> Self {
        Self {
            origin_id: origin_id.into(),
            dest_id: dest_id.into(),
            date: None,
            time: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Query parameters for the `trip` endpoint.
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("originId", self.origin_id.clone()),
            ("destId", self.dest_id.clone()),
        ];
        if let Some(date) = self.date {
            params.push(("date", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(time) = self.time {
            params.push(("time", time.format("%H:%M").to_string()));
        }
        params
    }
}

/// Västtrafik journey planner client.
#[derive(Debug, Clone)]
pub struct PlannerClient {
    http: reqwest::Client,
    base_url: String,
    auth_key: String,
}

impl PlannerClient {
    /// Create a new client with the given configuration.
    pub fn new(config: PlannerConfig) -> Result<Self, PlannerError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_key: config.auth_key,
        })
    }

    /// Search for trips and convert them to domain trips.
    ///
    /// Trips are returned in the planner's order. An error message inside
    /// an otherwise successful response becomes [`PlannerError::Server`].
    pub async fn trip(&self, query: &TripQuery) -> Result<Vec<Trip>, PlannerError> {
        let response: TripResponse = self.get_json("trip", &query.params()).await?;
        let list = response.trip_list;

        if let Some(err) = reported_error(list.error.as_deref(), list.error_text.as_deref()) {
            return Err(err);
        }

        let trips = convert_trip_list(list);
        debug!(count = trips.len(), "received trips");
        Ok(trips)
    }

    /// Search for trips and return the response untouched.
    pub async fn trip_raw(&self, query: &TripQuery) -> Result<serde_json::Value, PlannerError> {
        self.get_json("trip", &query.params()).await
    }

    /// Look up stops whose name matches `input`, best match first.
    pub async fn location_name(&self, input: &str) -> Result<Vec<StopLocation>, PlannerError> {
        let response: LocationResponse = self
            .get_json("location.name", &[("input", input.to_string())])
            .await?;
        let list = response.location_list;

        if let Some(err) = reported_error(list.error.as_deref(), list.error_text.as_deref()) {
            return Err(err);
        }

        Ok(list
            .stop_locations
            .map(|stops| stops.into_vec())
            .unwrap_or_default())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, PlannerError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, ?params, "planner request");

        let response = self
            .http
            .get(&url)
            .query(&[("authKey", self.auth_key.as_str()), ("format", "json")])
            .query(params)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, body));
        }

        let body = response.text().await?;
        decode(&body)
    }
}

/// Map a failing HTTP status to an error.
fn status_error(status: StatusCode, body: String) -> PlannerError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return PlannerError::Unauthorized;
    }
    PlannerError::ApiError {
        status: status.as_u16(),
        message: body,
    }
}

/// Deserialize a response body, keeping an excerpt of it on failure.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, PlannerError> {
    serde_json::from_str(body).map_err(|e| PlannerError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(BODY_EXCERPT_LEN).collect()),
    })
}

/// The error the planner reported inside a successful response, if any.
///
/// The API sends a machine-readable `error` code and a human-readable
/// `errorText`; either one alone is enough to fail the request.
fn reported_error(code: Option<&str>, text: Option<&str>) -> Option<PlannerError> {
    let message = text.or(code)?;
    Some(PlannerError::Server {
        code: code.map(str::to_string),
        message: message.to_string(),
    })
}
