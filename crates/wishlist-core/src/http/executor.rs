//! Request Executor
//!
//! Runs one request through a `Transport`, decodes the JSON payload, and
//! keeps the shared `loading`/`error` flags current. Every flag change is
//! announced to the listeners.

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;

use super::transport::{HttpRequest, Transport};
use crate::error::{ApiError, ApiResult};
use crate::observe::Listeners;
use crate::sync::lock;

/// Snapshot of the executor's flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestStatus {
    /// True while at least one request is in flight
    pub loading: bool,
    /// Message of the most recent failure, cleared when the next request starts
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct Tracker {
    in_flight: usize,
    error: Option<String>,
}

pub struct HttpExecutor<T> {
    transport: T,
    tracker: Arc<Mutex<Tracker>>,
    listeners: Listeners,
}

impl<T: Transport> HttpExecutor<T> {
    pub fn new(transport: T) -> Self {
        Self::with_listeners(transport, Listeners::new())
    }

    pub fn with_listeners(transport: T, listeners: Listeners) -> Self {
        Self {
            transport,
            tracker: Arc::new(Mutex::new(Tracker::default())),
            listeners,
        }
    }

    /// Send `request` and decode the body as `R`. An empty body decodes as JSON `null`.
    pub async fn execute<R: DeserializeOwned>(&self, request: HttpRequest) -> ApiResult<R> {
        let method = request.method.clone();
        let url = request.url.clone();
        self.begin();

        let result = self.perform(request).await;
        if let Err(err) = &result {
            log::warn!("{} {} failed: {}", method, url, err);
        }
        self.finish(result.as_ref().err());
        result
    }

    async fn perform<R: DeserializeOwned>(&self, request: HttpRequest) -> ApiResult<R> {
        log::debug!("{} {}", request.method, request.url);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::Backend { status: response.status });
        }
        let body = if response.body.trim().is_empty() {
            "null"
        } else {
            response.body.as_str()
        };
        Ok(serde_json::from_str(body)?)
    }

    fn begin(&self) {
        {
            let mut tracker = lock(&self.tracker);
            tracker.in_flight += 1;
            tracker.error = None;
        }
        self.listeners.notify();
    }

    fn finish(&self, error: Option<&ApiError>) {
        {
            let mut tracker = lock(&self.tracker);
            tracker.in_flight = tracker.in_flight.saturating_sub(1);
            if let Some(err) = error {
                tracker.error = Some(err.to_string());
            }
        }
        self.listeners.notify();
    }
}

impl<T> HttpExecutor<T> {
    pub fn status(&self) -> RequestStatus {
        let tracker = lock(&self.tracker);
        RequestStatus {
            loading: tracker.in_flight > 0,
            error: tracker.error.clone(),
        }
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T> std::fmt::Debug for HttpExecutor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpExecutor").field("tracker", &self.tracker).finish()
    }
}
