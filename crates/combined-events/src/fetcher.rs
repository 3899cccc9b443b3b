//! Remote event feed fetcher.

use serde_json::Value;
use site_support::ChannelLog;
use thiserror::Error;

use crate::transport::{HttpTransport, TransportError};

/// The feed this fetcher reads. The endpoint takes no parameters and needs
/// no authentication.
const EVENTS_ENDPOINT: &str = "https://digitalakdemin.se/events.json";

const ACCEPT_JSON: (&str, &str) = ("Accept", "application/json");

/// Why a fetch produced no document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection error, timeout or non-2xx response from the feed.
    #[error("Failed to fetch events: {0}")]
    Transport(#[from] TransportError),

    /// The feed answered with a body that is not valid JSON.
    #[error("Failed to decode events data: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetches event data from the remote feed.
///
/// Every call issues exactly one outbound request; results are never cached
/// and concurrent callers fetch independently.
pub struct EventsFetcher<T, L> {
    transport: T,
    log: L,
}

impl<T: HttpTransport, L: ChannelLog> EventsFetcher<T, L> {
    pub fn new(transport: T, log: L) -> Self {
        Self { transport, log }
    }

    /// Fetch and decode the feed, reporting the failure kind to the caller.
    pub async fn try_fetch(&self) -> Result<Value, FetchError> {
        let body = self.transport.get(EVENTS_ENDPOINT, &[ACCEPT_JSON]).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the feed, logging any failure and returning an empty list in
    /// its place.
    ///
    /// Consumers render an empty feed the same way as a feed with no
    /// entries, so both failure kinds collapse to `[]` here.
    pub async fn fetch_events(&self) -> Value {
        match self.try_fetch().await {
            Ok(document) => document,
            Err(err) => {
                self.log.error(&err.to_string());
                Value::Array(Vec::new())
            }
        }
    }
}
