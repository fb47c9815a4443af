use log::warn;
use serde_json::Value;

use crate::domain::{StatSeries, StatValue};

/// Parse performance-portal rows. Each row is an array whose first element
/// names the series and whose remaining elements are chronological samples;
/// `null` samples are kept as gaps so the last element stays meaningful.
pub fn parse_stat_series(payload: &Value) -> Vec<StatSeries> {
    let Some(rows) = payload.as_array() else {
        warn!("Performance data was not an array of series");
        return Vec::new();
    };

    rows.iter().filter_map(parse_series_row).collect()
}

fn parse_series_row(row: &Value) -> Option<StatSeries> {
    let items = row.as_array()?;
    let (name, samples) = items.split_first()?;

    Some(StatSeries {
        name: name.as_str()?.to_string(),
        samples: samples.iter().map(parse_sample).collect(),
    })
}

fn parse_sample(value: &Value) -> Option<StatValue> {
    match value {
        Value::Number(n) => n.as_f64().map(StatValue::Number),
        Value::String(s) => Some(StatValue::Text(s.clone())),
        _ => None,
    }
}
