//! Request execution and outcome classification
//!
//! One call to [`ApiClient::execute`] issues one HTTP request and records
//! exactly one test result, whatever happens on the wire: connection
//! refused, timeout, unexpected status, or a clean match.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::common::{Config, Error, Result};
use crate::report::Recorder;

use super::{Payload, RequestSpec};

pub struct ApiClient {
    client: reqwest::Client,
    api_url: String,
    timeout_secs: u64,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        reqwest::Url::parse(&config.base_url)
            .map_err(|_| Error::InvalidBaseUrl(config.base_url.clone()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(Error::ClientBuild)?;

        Ok(Self {
            client,
            api_url: config.api_url(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Execute one request and classify the outcome
    ///
    /// Returns whether the response matched the expected status, plus the
    /// decoded body. Transport failures and status mismatches come back as
    /// `(false, Payload::Empty)` after being recorded; they are never
    /// raised to the caller.
    pub async fn execute(
        &self,
        name: &str,
        spec: &RequestSpec,
        recorder: &mut Recorder,
    ) -> (bool, Payload) {
        let url = if spec.path.is_empty() {
            self.api_url.clone()
        } else {
            format!("{}/{}", self.api_url, spec.path)
        };

        debug!(%url, method = %spec.method, "sending request");

        let mut request = self.client.request(spec.method.into(), &url);
        for (key, value) in &spec.headers {
            request = request.header(key, value);
        }
        if let Some(body) = &spec.body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                recorder.record(name, false, &self.classify_transport_error(&e));
                return (false, Payload::Empty);
            }
        };

        let status = response.status().as_u16();
        if status != spec.expected_status {
            let body = response.text().await.unwrap_or_default();
            recorder.record(
                name,
                false,
                &format!(
                    "Expected {}, got {}. Response: {}",
                    spec.expected_status, status, body
                ),
            );
            return (false, Payload::Empty);
        }

        recorder.record(name, true, "");

        if status == 204 {
            return (true, Payload::Empty);
        }

        // The contract is not explicit about success bodies everywhere;
        // anything that does not decode as JSON counts as empty.
        match response.json::<Value>().await {
            Ok(value) => (true, Payload::from(value)),
            Err(_) => (true, Payload::Empty),
        }
    }

    fn classify_transport_error(&self, error: &reqwest::Error) -> String {
        if error.is_timeout() {
            format!("Request timeout ({}s)", self.timeout_secs)
        } else if error.is_connect() {
            "Connection error - backend may be down".to_string()
        } else {
            format!("Exception: {error}")
        }
    }
}
