use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Running high/low aggregate for one station since the last reset.
///
/// Both bounds start at the first observed temperature and only ever widen
/// outward: `high` increases, `low` decreases, so `low <= high` always.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationMetrics {
    pub high: f64,
    pub low: f64,
}

impl StationMetrics {
    fn first(temperature: f64) -> Self {
        Self {
            high: temperature,
            low: temperature,
        }
    }

    fn widen(&mut self, temperature: f64) {
        self.high = self.high.max(temperature);
        self.low = self.low.min(temperature);
    }
}

/// Per-station aggregates for one event stream.
///
/// Stations are kept in first-seen order so snapshot rendering is
/// deterministic. The latest timestamp survives a reset: it reflects the
/// most recent sample time ever observed, not the time since the last
/// reset.
#[derive(Debug, Default)]
pub struct AggregateStore {
    stations: IndexMap<String, StationMetrics>,
    latest_timestamp: i64,
}

impl AggregateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one temperature reading, inserting the station on first
    /// sight or widening its high/low range.
    pub fn record_sample(&mut self, station_name: &str, temperature: f64) {
        match self.stations.get_mut(station_name) {
            Some(metrics) => metrics.widen(temperature),
            None => {
                self.stations
                    .insert(station_name.to_string(), StationMetrics::first(temperature));
            }
        }
    }

    /// Overwrite the latest observed sample timestamp.
    ///
    /// Input streams are trusted to carry non-decreasing timestamps; no
    /// comparison against the current value is made.
    pub fn observe_timestamp(&mut self, timestamp: i64) {
        self.latest_timestamp = timestamp;
    }

    pub fn latest_timestamp(&self) -> i64 {
        self.latest_timestamp
    }

    pub fn has_stations(&self) -> bool {
        !self.stations.is_empty()
    }

    /// Read-only copy of the current per-station aggregates.
    pub fn snapshot_view(&self) -> IndexMap<String, StationMetrics> {
        self.stations.clone()
    }

    /// Drop all station entries. The latest timestamp is kept.
    pub fn clear_stations(&mut self) {
        self.stations.clear();
    }
}
