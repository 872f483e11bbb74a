use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::store::StationMetrics;

/// An output record produced in response to a control event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Report {
    /// Current high/low per station as of the latest sample timestamp.
    #[serde(rename_all = "camelCase")]
    Snapshot {
        as_of: i64,
        stations: IndexMap<String, StationMetrics>,
    },
    /// Acknowledgement that per-station aggregates were cleared.
    #[serde(rename_all = "camelCase")]
    Reset { as_of: i64 },
}
