//! Test doubles for the application ports.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use netprov_domain::{RequestSpec, ResponseSpec};

use crate::ports::{Clock, HttpTransport, Sleeper, TransportError, TransportResult};

/// Transport that replays scripted results and records every request.
///
/// Once the script runs out every call fails with `ConnectionRefused`.
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<TransportResult<ResponseSpec>>>,
    requests: Mutex<Vec<RequestSpec>>,
}

impl ScriptedTransport {
    pub fn new(script: impl IntoIterator<Item = TransportResult<ResponseSpec>>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RequestSpec> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

impl HttpTransport for ScriptedTransport {
    fn send(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = TransportResult<ResponseSpec>> + Send {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        let next = self
            .script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or_else(|| Err(refused()));
        async move { next }
    }
}

/// Sleeper that records requested durations and returns immediately.
#[derive(Default)]
pub struct RecordingSleeper {
    sleeps: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        if let Ok(mut sleeps) = self.sleeps.lock() {
            sleeps.push(duration);
        }
        async {}
    }
}

/// Clock pinned to a fixed instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
                .single()
                .unwrap_or_default(),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn ok(status: u16, body: &str) -> TransportResult<ResponseSpec> {
    Ok(ResponseSpec::new(status, body))
}

pub fn ok_json(status: u16, body: &serde_json::Value) -> TransportResult<ResponseSpec> {
    Ok(ResponseSpec::json(status, body))
}

pub fn refused() -> TransportError {
    TransportError::ConnectionRefused {
        host: "host".to_string(),
    }
}
