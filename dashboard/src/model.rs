use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped fuel/mileage sample for a tracked object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryRecord {
    pub object_id: String,
    pub fuel_level: f64,
    pub mileage: f64,
    #[serde(rename = "datetime")]
    pub timestamp: DateTime<Utc>,
}

/// Effective query window, derived per fetch cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}
