use crate::model::TelemetryRecord;
use chrono::{DateTime, Utc};

/// Placeholder text shown instead of an empty table
pub const NO_DATA_TEXT: &str = "No data available for the selected time period";

/// Presentational emphasis bucket for a fuel reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelSeverity {
    Critical,
    Warning,
    Normal,
}

impl FuelSeverity {
    pub fn for_level(fuel_level: f64) -> Self {
        if fuel_level < 20.0 {
            FuelSeverity::Critical
        } else if fuel_level < 40.0 {
            FuelSeverity::Warning
        } else {
            FuelSeverity::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FuelSeverity::Critical => "critical",
            FuelSeverity::Warning => "warning",
            FuelSeverity::Normal => "normal",
        }
    }
}

/// One fully formatted table row
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRow {
    pub object_id: String,
    pub severity: FuelSeverity,
    pub fuel: String,
    pub mileage: String,
    pub recorded: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    Sample(SampleRow),
    NoData,
}

/// Per-row actions the host UI layer implements
pub trait RowActions {
    fn show_details(&self, object_id: &str);
    fn download_report(&self, object_id: &str);
}

/// Maps fetched records to renderable rows, newest first. Empty input
/// yields exactly one placeholder row, never zero rows.
pub fn present(mut records: Vec<TelemetryRecord>) -> Vec<Row> {
    if records.is_empty() {
        return vec![Row::NoData];
    }

    // Stable sort keeps the original order for equal timestamps
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    records
        .into_iter()
        .map(|r| {
            Row::Sample(SampleRow {
                severity: FuelSeverity::for_level(r.fuel_level),
                fuel: format_fuel(r.fuel_level),
                mileage: format_mileage(r.mileage),
                recorded: format_recorded(r.timestamp),
                object_id: r.object_id,
                timestamp: r.timestamp,
            })
        })
        .collect()
}

/// Rounded integer percentage
pub fn format_fuel(level: f64) -> String {
    format!("{}%", level.round() as i64)
}

/// Rounded integer with thousands grouping and a unit suffix
pub fn format_mileage(miles: f64) -> String {
    format!("{} mi", group_thousands(miles.round() as i64))
}

/// Short date/time, e.g. `Feb 23, 2025 14:05`
pub fn format_recorded(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y %H:%M").to_string()
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
