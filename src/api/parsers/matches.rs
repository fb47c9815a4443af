use log::warn;
use serde_json::Value;

use crate::domain::MatchRow;

/// Parse recent-match rows from the `{"data": [...]}` wrapper, skipping
/// rows that do not deserialize.
pub fn parse_match_rows(payload: &Value) -> Vec<MatchRow> {
    let Some(rows) = payload.get("data").and_then(Value::as_array) else {
        warn!("Match data missing the expected \"data\" array");
        return Vec::new();
    };

    rows.iter()
        .filter_map(|row| match serde_json::from_value(row.clone()) {
            Ok(row) => Some(row),
            Err(e) => {
                warn!("Skipping unparsable match row: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_match_rows() {
        let payload = json!({
            "data": [
                {
                    "opponent": "<a href=\"#\">Luke Littler</a>",
                    "match_date": "2024-12-21",
                    "loser_score": 2,
                    "winner_score": 3,
                    "stat1": 4
                }
            ]
        });

        let rows = parse_match_rows(&payload);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].match_date, "2024-12-21");
        assert_eq!(rows[0].loser_score, 2);
        assert_eq!(rows[0].winner_score, 3);
        assert_eq!(rows[0].stat1, 4.0);
    }

    #[test]
    fn incomplete_rows_are_skipped() {
        let payload = json!({
            "data": [
                {"opponent": "X", "match_date": "2024-01-01"},
            ]
        });

        assert!(parse_match_rows(&payload).is_empty());
    }

    #[test]
    fn missing_wrapper_yields_nothing() {
        assert!(parse_match_rows(&json!([])).is_empty());
    }
}
