use crate::app::{Notice, UiState};
use crate::present::{Row, NO_DATA_TEXT};

/// Pure mapping from display state to terminal text; the binary only prints.
pub fn render(state: &UiState) -> String {
    match state {
        UiState::Loading => "Fetching telemetry...\n".to_string(),
        UiState::Failed(notice) => format!("{}\n", banner(notice)),
        UiState::Loaded { rows, notice } => {
            let mut out = String::new();
            if let Some(n) = notice {
                out.push_str(&banner(n));
                out.push('\n');
            }
            out.push_str(&table(rows));
            out
        }
    }
}

fn banner(notice: &Notice) -> String {
    match notice {
        Notice::Warning(msg) => format!("notice: {msg}"),
        Notice::Error(msg) => format!("error: {msg}"),
    }
}

fn table(rows: &[Row]) -> String {
    let object_width = rows
        .iter()
        .filter_map(|row| match row {
            Row::Sample(s) => Some(s.object_id.len()),
            Row::NoData => None,
        })
        .chain(["OBJECT".len()])
        .max()
        .unwrap_or(6);

    let mut out = format!(
        "{:<object_width$}  {:<8}  {:>5}  {:>12}  {}\n",
        "OBJECT", "STATUS", "FUEL", "MILEAGE", "RECORDED"
    );
    for row in rows {
        match row {
            Row::Sample(s) => out.push_str(&format!(
                "{:<object_width$}  {:<8}  {:>5}  {:>12}  {}\n",
                s.object_id,
                s.severity.label(),
                s.fuel,
                s.mileage,
                s.recorded
            )),
            Row::NoData => out.push_str(&format!("{NO_DATA_TEXT}\n")),
        }
    }
    out
}
