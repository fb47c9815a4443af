use log::warn;
use serde_json::Value;

use crate::domain::PlayerRow;

/// Parse player rows from either listing shape: the ranking and highlight
/// endpoints wrap rows in `{"data": [...]}`, the dropdown search returns a
/// bare array. Rows that do not deserialize are skipped, not fatal.
pub fn parse_player_rows(payload: &Value) -> Vec<PlayerRow> {
    rows_of(payload)
        .iter()
        .filter_map(|row| match serde_json::from_value(row.clone()) {
            Ok(row) => Some(row),
            Err(e) => {
                warn!("Skipping unparsable player row: {}", e);
                None
            }
        })
        .collect()
}

fn rows_of(payload: &Value) -> &[Value] {
    match payload {
        Value::Array(rows) => rows.as_slice(),
        _ => payload
            .get("data")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]),
    }
}
