use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod fetch_tests;

/// Shown for the online counter when the live figure is unavailable.
pub const ONLINE_FALLBACK: u64 = 1000;

#[derive(Debug, Error)]
pub enum StatFetchError {
    #[error("stats request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("stats body was not the expected shape: {0}")]
    Body(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct OnlineStats {
    count: u64,
}

/// Extract the `count` field from a stats response body.
pub fn parse_count(body: &str) -> Result<u64, StatFetchError> {
    let stats: OnlineStats = serde_json::from_str(body)?;
    Ok(stats.count)
}

/// Single-attempt GET for the live online count. No retry; the host's
/// default network timeout applies.
pub async fn fetch_online_count(endpoint: &str) -> Result<u64, StatFetchError> {
    let response = Request::get(endpoint).send().await?;
    let body = response.text().await?;
    parse_count(&body)
}

/// Resolve the target the online counter animates to. A failed fetch and a
/// zero count both fall back to the placeholder figure; the endpoint reports
/// zero before any miner has connected.
pub fn online_target(fetched: Result<u64, StatFetchError>) -> u64 {
    match fetched {
        Ok(count) if count > 0 => count,
        Ok(_) => {
            log::warn!("stats endpoint reported zero online users, using placeholder");
            ONLINE_FALLBACK
        }
        Err(err) => {
            log::warn!("failed to fetch online count: {err}, using placeholder");
            ONLINE_FALLBACK
        }
    }
}
