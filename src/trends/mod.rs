// src/trends/mod.rs
pub mod fetch;
pub mod sources;
pub mod types;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use once_cell::sync::OnceCell;
use tokio::task::JoinSet;

use crate::trends::fetch::{FetchExecutor, FetchOutcome};
use crate::trends::sources::{SourceSpec, SOURCES};
use crate::trends::types::{SourceId, TrendBoard, TrendingRecord};

/// One-time metrics registration (so series show up once a recorder is
/// installed).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "trends_fetch_failures_total",
            "Transport-level fetch failures per source."
        );
        describe_counter!(
            "trends_extract_failures_total",
            "Payload shape/parse failures per source."
        );
        describe_counter!(
            "trends_records_total",
            "Normalized records kept across all sources."
        );
        describe_histogram!("trends_fetch_ms", "Upstream fetch time in milliseconds.");
    });
}

/// One resolvable upstream endpoint. Defaults come from the static
/// `SOURCES` table; tests inject their own URLs.
#[derive(Debug, Clone)]
pub struct SourceEndpoint {
    pub id: SourceId,
    pub url: String,
    pub headers: &'static [(&'static str, &'static str)],
    pub require_ok: bool,
}

impl From<&SourceSpec> for SourceEndpoint {
    fn from(spec: &SourceSpec) -> Self {
        Self {
            id: spec.id,
            url: spec.url.to_string(),
            headers: spec.headers,
            require_ok: spec.require_ok,
        }
    }
}

/// Fans the per-source fetches out and assembles the board. Holds no state
/// across requests beyond the shared HTTP client.
pub struct TrendAggregator {
    fetcher: FetchExecutor,
    endpoints: Vec<SourceEndpoint>,
}

impl TrendAggregator {
    pub fn new(fetcher: FetchExecutor) -> Self {
        Self {
            fetcher,
            endpoints: SOURCES.iter().map(SourceEndpoint::from).collect(),
        }
    }

    pub fn with_endpoints(fetcher: FetchExecutor, endpoints: Vec<SourceEndpoint>) -> Self {
        Self { fetcher, endpoints }
    }

    /// Fetch every source concurrently and assemble the board once all
    /// outcomes are resolved. Never fails: a broken source contributes an
    /// empty list under its key.
    pub async fn fetch_board(&self) -> TrendBoard {
        ensure_metrics_described();

        let mut set = JoinSet::new();
        for endpoint in &self.endpoints {
            let fetcher = self.fetcher.clone();
            let endpoint = endpoint.clone();
            set.spawn(async move {
                let records = collect_source(&fetcher, &endpoint).await;
                (endpoint.id, records)
            });
        }

        let mut board = TrendBoard::default();
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((id, records)) => board.set(id, records),
                Err(e) => tracing::warn!(error = ?e, "source task failed to join"),
            }
        }
        board
    }
}

/// Fetch one endpoint and normalize its payload. Every failure class —
/// transport, non-2xx where the source requires it, shape mismatch — is
/// collapsed to an empty list here, at the source boundary.
async fn collect_source(fetcher: &FetchExecutor, endpoint: &SourceEndpoint) -> Vec<TrendingRecord> {
    let t0 = std::time::Instant::now();
    let outcome = fetcher.get(&endpoint.url, endpoint.headers).await;
    histogram!("trends_fetch_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);

    let (status, body) = match outcome {
        FetchOutcome::Body { status, body } => (status, body),
        FetchOutcome::Failed { reason } => {
            tracing::warn!(source = endpoint.id.as_str(), %reason, "source fetch failed");
            counter!("trends_fetch_failures_total").increment(1);
            return Vec::new();
        }
    };

    if endpoint.require_ok && !status.is_success() {
        tracing::warn!(
            source = endpoint.id.as_str(),
            status = status.as_u16(),
            "source returned non-success status"
        );
        counter!("trends_fetch_failures_total").increment(1);
        return Vec::new();
    }

    let fetched_at = local_clock();
    match sources::extract(endpoint.id, &body, &fetched_at) {
        Ok(records) => {
            counter!("trends_records_total").increment(records.len() as u64);
            records
        }
        Err(e) => {
            tracing::warn!(source = endpoint.id.as_str(), error = ?e, "source payload rejected");
            counter!("trends_extract_failures_total").increment(1);
            Vec::new()
        }
    }
}

/// Local wall-clock "HH:MM" stamp for sources without their own timestamp.
fn local_clock() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}
