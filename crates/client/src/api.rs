use std::time::Duration;

use reqwest::{StatusCode, header};
use serde_json::Value;

use courier_common::config::AppConfig;
use courier_common::error::CourierError;

/// Client for the homework review API.
///
/// Issues one authenticated GET per poll cycle with the `from_date` cursor
/// and classifies every outcome into the error taxonomy.
pub struct StatusClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl StatusClient {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            token: config.practicum_token.clone(),
        })
    }

    /// Fetch review statuses issued since `from_date`.
    ///
    /// Exactly one of four outcomes:
    /// - HTTP 200 with a JSON body: the parsed body
    /// - any other HTTP code: [`CourierError::WrongStatusCode`]
    /// - HTTP 200 with an undecodable body: [`CourierError::Decode`]
    /// - transport failure: [`CourierError::Connection`]
    pub async fn fetch(&self, from_date: i64) -> Result<Value, CourierError> {
        tracing::debug!(from_date, url = %self.endpoint, "Requesting review statuses");

        let response = self
            .http
            .get(&self.endpoint)
            .header(header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| CourierError::Connection {
                url: self.endpoint.clone(),
                from_date,
                source: e,
            })?;

        let actual = response.status();
        if actual != StatusCode::OK {
            return Err(CourierError::WrongStatusCode {
                expected: StatusCode::OK.as_u16(),
                actual: actual.as_u16(),
                url: self.endpoint.clone(),
                from_date,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CourierError::Connection {
                url: self.endpoint.clone(),
                from_date,
                source: e,
            })?;

        serde_json::from_str(&body).map_err(|e| CourierError::Decode {
            url: self.endpoint.clone(),
            from_date,
            source: e,
        })
    }
}
