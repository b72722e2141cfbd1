use crate::model::TelemetryRecord;
use chrono::{DateTime, Duration, Utc};

const SAMPLE_SPACING_HOURS: i64 = 2;
const WINDOW_HOURS: i64 = 24;
const FUEL_START_PERCENT: f64 = 85.0;
const FUEL_DROP_PER_HOUR: f64 = 0.5;
const MILEAGE_BASELINE: f64 = 12500.0;
const MILEAGE_GAIN_PER_HOUR: f64 = 50.0;

/// Deterministic synthetic history for demo/offline mode: 12 samples at
/// 2-hour spacing over the 24 hours trailing `until`, fuel descending from
/// 85% and mileage climbing from a fixed baseline.
pub fn synthetic_history(object_id: &str, until: DateTime<Utc>) -> Vec<TelemetryRecord> {
    (0..WINDOW_HOURS)
        .step_by(SAMPLE_SPACING_HOURS as usize)
        .map(|hours_back| TelemetryRecord {
            object_id: object_id.to_string(),
            fuel_level: (FUEL_START_PERCENT - hours_back as f64 * FUEL_DROP_PER_HOUR)
                .clamp(0.0, 100.0),
            mileage: MILEAGE_BASELINE + hours_back as f64 * MILEAGE_GAIN_PER_HOUR,
            timestamp: until - Duration::hours(hours_back),
        })
        .collect()
}
