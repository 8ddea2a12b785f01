// src/trends/fetch.rs
use std::time::Duration;

use reqwest::StatusCode;

/// Per-fetch timeout; each source is bounded independently.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// What one upstream GET resolved to. Transport-level problems are a value,
/// not an error type, so one slow or broken source cannot abort the
/// aggregate request.
#[derive(Debug)]
pub enum FetchOutcome {
    Body { status: StatusCode, body: Vec<u8> },
    Failed { reason: String },
}

#[derive(Clone)]
pub struct FetchExecutor {
    client: reqwest::Client,
}

impl FetchExecutor {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Single GET with the platform's headers and a per-request timeout.
    /// No retries. DNS failure, refused connection, timeout, and body-read
    /// failure all collapse into `FetchOutcome::Failed`.
    pub async fn get(&self, url: &str, headers: &[(&str, &str)]) -> FetchOutcome {
        let mut req = self.client.get(url).timeout(FETCH_TIMEOUT);
        for (name, value) in headers {
            req = req.header(*name, *value);
        }
        match req.send().await {
            Ok(resp) => {
                let status = resp.status();
                match resp.bytes().await {
                    Ok(body) => FetchOutcome::Body {
                        status,
                        body: body.to_vec(),
                    },
                    Err(e) => FetchOutcome::Failed {
                        reason: format!("reading body: {e}"),
                    },
                }
            }
            Err(e) => FetchOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }
}

impl Default for FetchExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn refused_connection_is_a_failure_value_not_a_panic() {
        let fetcher = FetchExecutor::new();
        match fetcher.get("http://127.0.0.1:1/", &[]).await {
            FetchOutcome::Failed { reason } => assert!(!reason.is_empty()),
            FetchOutcome::Body { .. } => panic!("nothing should be listening on port 1"),
        }
    }
}
