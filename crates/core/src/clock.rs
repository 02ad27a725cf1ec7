//! Live wall-clock strings for the timezone picker.
//!
//! The picker shows the current time in each candidate zone. A background
//! task recomputes the strings on a fixed interval and publishes them on
//! a watch channel until cancelled on modal close.

use std::time::Duration;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::reference::CLOCK_ZONES;

/// How often the displayed times are recomputed.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Current wall time in one candidate zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneTime {
    pub zone: Tz,
    /// `HH:MM` in the zone's local time.
    pub time: String,
}

/// Compute the display strings for `zones` at `now`.
pub fn zone_times(now: DateTime<Utc>, zones: &[Tz]) -> Vec<ZoneTime> {
    zones
        .iter()
        .map(|&zone| ZoneTime {
            zone,
            time: now.with_timezone(&zone).format("%H:%M").to_string(),
        })
        .collect()
}

/// Spawn the refresher for the default candidate zones.
pub fn spawn_refresher(cancel: CancellationToken) -> watch::Receiver<Vec<ZoneTime>> {
    spawn_refresher_for(CLOCK_ZONES.to_vec(), cancel)
}

/// Spawn a refresher task for `zones`.
///
/// The receiver always holds the latest strings. The task runs until
/// `cancel` is triggered, then drops the sender.
pub fn spawn_refresher_for(
    zones: Vec<Tz>,
    cancel: CancellationToken,
) -> watch::Receiver<Vec<ZoneTime>> {
    let (tx, rx) = watch::channel(zone_times(Utc::now(), &zones));
    tokio::spawn(async move {
        tracing::debug!(zones = zones.len(), "Timezone clock started");
        let mut interval = tokio::time::interval(REFRESH_INTERVAL);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("Timezone clock stopped");
                    break;
                }
                _ = interval.tick() => {
                    let _ = tx.send(zone_times(Utc::now(), &zones));
                }
            }
        }
    });
    rx
}
