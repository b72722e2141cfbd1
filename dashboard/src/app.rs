use crate::client::{FetchMode, TelemetryClient};
use crate::demo;
use crate::errors::{Error, Result};
use crate::model::{DateRange, TelemetryRecord};
use crate::present::{self, Row};
use crate::range;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

const DEMO_NOTICE: &str = "Using demonstration data";

/// Banner message shown alongside or instead of the table
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Recoverable, e.g. the demo-data fallback
    Warning(String),
    /// Fatal for this cycle
    Error(String),
}

/// The three mutually exclusive display states
#[derive(Debug, Clone, PartialEq)]
pub enum UiState {
    Loading,
    Failed(Notice),
    Loaded {
        rows: Vec<Row>,
        notice: Option<Notice>,
    },
}

/// Drives one fetch cycle per trigger and publishes display states.
///
/// Each trigger takes a generation token; a publish whose token has been
/// superseded is dropped, so overlapping triggers cannot land stale results.
pub struct Dashboard {
    client: TelemetryClient,
    updates: mpsc::Sender<UiState>,
    generation: AtomicU64,
}

impl Dashboard {
    pub fn new(client: TelemetryClient, updates: mpsc::Sender<UiState>) -> Self {
        Self {
            client,
            updates,
            generation: AtomicU64::new(0),
        }
    }

    /// Runs one fetch cycle for optional user-supplied start/end dates.
    pub async fn trigger(&self, start: Option<&str>, end: Option<&str>) {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let range = match validate(start, end) {
            Ok(range) => range,
            Err(e) => {
                warn!("rejecting fetch cycle before any request: {}", e);
                self.publish(token, UiState::Failed(Notice::Error(e.to_string())))
                    .await;
                return;
            }
        };

        self.publish(token, UiState::Loading).await;

        info!(
            "fetching telemetry for {} from {} to {}",
            self.client.object_id(),
            range.from,
            range.to
        );
        let result = self.client.fetch(&range).await;
        let state = self.conclude(&range, result);
        self.publish(token, state).await;
    }

    /// Maps a fetch outcome to a terminal display state. Every path ends in
    /// Loaded or Failed, so the loading indicator is always cleared.
    fn conclude(&self, range: &DateRange, result: Result<Vec<TelemetryRecord>>) -> UiState {
        match result {
            Ok(records) => {
                let notice = (self.client.mode() == FetchMode::Demo)
                    .then(|| Notice::Warning(DEMO_NOTICE.to_string()));
                UiState::Loaded {
                    rows: present::present(records),
                    notice,
                }
            }
            Err(e) if e.is_transport() && self.client.mode() == FetchMode::Demo => {
                // Degraded but usable: synthetic rows with a non-fatal notice
                warn!("transport failure in demo configuration, using synthetic data: {}", e);
                let records = demo::synthetic_history(self.client.object_id(), range.to);
                UiState::Loaded {
                    rows: present::present(records),
                    notice: Some(Notice::Warning(format!("{DEMO_NOTICE} ({e})"))),
                }
            }
            Err(e) => {
                error!("fetch cycle failed: {}", e);
                UiState::Failed(Notice::Error(e.to_string()))
            }
        }
    }

    async fn publish(&self, token: u64, state: UiState) {
        if self.generation.load(Ordering::SeqCst) != token {
            debug!("discarding update from superseded cycle {}", token);
            return;
        }
        let _ = self.updates.send(state).await;
    }
}

/// Parses user input and enforces ordering before any request is issued.
/// Defaults are never checked; they cannot be inverted.
fn validate(start: Option<&str>, end: Option<&str>) -> Result<DateRange> {
    let range = range::resolve(start, end)?;
    if (start.is_some() || end.is_some()) && range.from > range.to {
        return Err(Error::Validation(
            "start date must be before end date".to_string(),
        ));
    }
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration as ChronoDuration, Utc};
    use reqwest::StatusCode;
    use std::time::Duration;

    fn client(mode: FetchMode) -> TelemetryClient {
        TelemetryClient::new(
            "http://unused.invalid".to_string(),
            "test-key".to_string(),
            "veh-1".to_string(),
            mode,
            Duration::from_secs(5),
        )
        .unwrap()
    }

    fn dashboard(mode: FetchMode) -> (Dashboard, mpsc::Receiver<UiState>) {
        let (tx, rx) = mpsc::channel(16);
        (Dashboard::new(client(mode), tx), rx)
    }

    fn test_range() -> DateRange {
        let to = Utc::now();
        DateRange {
            from: to - ChronoDuration::hours(24),
            to,
        }
    }

    #[tokio::test]
    async fn inverted_dates_abort_before_loading() {
        let (dash, mut rx) = dashboard(FetchMode::Live);

        dash.trigger(Some("2025-01-02T00:00:00Z"), Some("2025-01-01T00:00:00Z"))
            .await;
        drop(dash);

        let state = rx.recv().await.unwrap();
        match state {
            UiState::Failed(Notice::Error(msg)) => {
                assert!(msg.contains("start date must be before end date"))
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        // Nothing else was published: no Loading, no request
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn unparseable_date_is_reported_as_validation() {
        let (dash, mut rx) = dashboard(FetchMode::Live);

        dash.trigger(Some("not-a-date"), None).await;
        drop(dash);

        assert!(matches!(
            rx.recv().await.unwrap(),
            UiState::Failed(Notice::Error(_))
        ));
        assert!(rx.recv().await.is_none());
    }

    #[test]
    fn non_demo_server_error_is_fatal_with_no_rows() {
        let (dash, _rx) = dashboard(FetchMode::Live);

        let state = dash.conclude(
            &test_range(),
            Err(Error::Status(StatusCode::INTERNAL_SERVER_ERROR)),
        );

        match state {
            UiState::Failed(Notice::Error(msg)) => assert!(msg.contains("500")),
            other => panic!("expected fatal failure, got {other:?}"),
        }
    }

    #[test]
    fn demo_transport_failure_falls_back_to_synthetic_rows() {
        let (dash, _rx) = dashboard(FetchMode::Demo);

        let state = dash.conclude(
            &test_range(),
            Err(Error::Status(StatusCode::INTERNAL_SERVER_ERROR)),
        );

        match state {
            UiState::Loaded { rows, notice } => {
                assert_eq!(rows.len(), 12);
                assert!(matches!(notice, Some(Notice::Warning(_))));
            }
            other => panic!("expected degraded load, got {other:?}"),
        }
    }

    #[test]
    fn demo_decode_failure_is_not_recovered() {
        let (dash, _rx) = dashboard(FetchMode::Demo);

        let bad_json = serde_json::from_str::<Vec<TelemetryRecord>>("{").unwrap_err();
        let state = dash.conclude(&test_range(), Err(Error::Decode(bad_json)));

        assert!(matches!(state, UiState::Failed(Notice::Error(_))));
    }

    #[tokio::test]
    async fn superseded_cycle_updates_are_discarded() {
        let (dash, mut rx) = dashboard(FetchMode::Demo);

        dash.generation.store(2, Ordering::SeqCst);
        dash.publish(1, UiState::Loading).await;
        dash.publish(2, UiState::Loading).await;
        drop(dash);

        assert_eq!(rx.recv().await.unwrap(), UiState::Loading);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn demo_cycle_publishes_loading_then_twelve_rows() {
        let (dash, mut rx) = dashboard(FetchMode::Demo);

        dash.trigger(None, None).await;
        drop(dash);

        assert_eq!(rx.recv().await.unwrap(), UiState::Loading);
        match rx.recv().await.unwrap() {
            UiState::Loaded { rows, notice } => {
                assert_eq!(rows.len(), 12);
                assert_eq!(notice, Some(Notice::Warning(DEMO_NOTICE.to_string())));
            }
            other => panic!("expected loaded state, got {other:?}"),
        }
        assert!(rx.recv().await.is_none());
    }

    #[test]
    fn validate_allows_defaults_without_checks() {
        let range = validate(None, None).unwrap();
        assert!(range.from < range.to);
    }
}
