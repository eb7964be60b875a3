//! HTTP client for the station API and the background poll loop.
//!
//! The poller is fire-and-forget: a detached thread fetches the current
//! reading and the full history once at startup, then re-fetches only
//! the current reading on a fixed period, reporting everything over an
//! mpsc channel. Dropping the receiver ends the thread after its next
//! send.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::DashboardConfig;
use crate::data::history::{normalize_history, HistoryEntry, LogPayload};
use crate::data::reading::Reading;

/// Path of the current-reading endpoint.
pub const SENSOR_ENDPOINT: &str = "/api/sensor";
/// Path of the history endpoint.
pub const LOG_ENDPOINT: &str = "/api/log";

/// Why a fetch produced no data. The `Display` text is what the header
/// banner shows.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request failed outright: connection error or non-2xx status.
    #[error("Failed to fetch {0}")]
    Request(&'static str),
    /// The response arrived but its body was not the expected JSON.
    #[error("{0}")]
    Payload(String),
}

/// Fetch the current reading from `GET /api/sensor`.
pub fn fetch_current(base_url: &str, timeout: Duration) -> Result<Reading, FetchError> {
    get_json(base_url, SENSOR_ENDPOINT, timeout)
}

/// Fetch and normalize the history log from `GET /api/log`.
pub fn fetch_history(base_url: &str, timeout: Duration) -> Result<Vec<HistoryEntry>, FetchError> {
    let payload: LogPayload = get_json(base_url, LOG_ENDPOINT, timeout)?;
    Ok(normalize_history(payload))
}

fn get_json<T: DeserializeOwned>(
    base_url: &str,
    endpoint: &'static str,
    timeout: Duration,
) -> Result<T, FetchError> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), endpoint);
    let response = ureq::get(&url).timeout(timeout).call().map_err(|e| {
        log::warn!("GET {} failed: {}", url, e);
        FetchError::Request(endpoint)
    })?;
    response.into_json::<T>().map_err(|e| {
        log::warn!("GET {} returned an unreadable body: {}", url, e);
        FetchError::Payload(e.to_string())
    })
}

/// Messages the poll thread sends to the UI.
#[derive(Debug)]
pub enum PollEvent {
    /// A fresh current reading; clears any previous fetch error.
    Current(Reading),
    /// The one-time normalized history log.
    History(Vec<HistoryEntry>),
    /// A fetch failed; the string is the banner text.
    Error(String),
}

/// Spawn the background poll thread for the configured station.
pub fn spawn_poller(cfg: &DashboardConfig) -> Receiver<PollEvent> {
    let (tx, rx) = mpsc::channel();
    let base_url = cfg.base_url.clone();
    let poll_interval = cfg.poll_interval;
    let timeout = cfg.request_timeout;
    thread::spawn(move || poll_loop(&tx, &base_url, poll_interval, timeout));
    rx
}

fn poll_loop(tx: &Sender<PollEvent>, base_url: &str, poll_interval: Duration, timeout: Duration) {
    log::debug!("Polling {} every {:?}", base_url, poll_interval);

    let current = match fetch_current(base_url, timeout) {
        Ok(reading) => PollEvent::Current(reading),
        Err(e) => PollEvent::Error(e.to_string()),
    };
    if tx.send(current).is_err() {
        return;
    }

    let history = match fetch_history(base_url, timeout) {
        Ok(entries) => PollEvent::History(entries),
        Err(e) => PollEvent::Error(e.to_string()),
    };
    if tx.send(history).is_err() {
        return;
    }

    loop {
        thread::sleep(poll_interval);
        let current = match fetch_current(base_url, timeout) {
            Ok(reading) => PollEvent::Current(reading),
            Err(e) => PollEvent::Error(e.to_string()),
        };
        if tx.send(current).is_err() {
            return;
        }
    }
}
