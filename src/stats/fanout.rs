use log::debug;

use crate::api::OrakelClient;
use crate::domain::{DateWindow, PlayerRecord, PlayerRow, StatValue};
use crate::http::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Average,
    AverageActual,
    CheckoutPcnt,
    CheckoutPcntActual,
    MaximumPerLeg,
    MaximumPerLegActual,
}

/// One statistic endpoint: which rank key selects it upstream and whether
/// the request is bounded by the caller's date window ("actual") or served
/// from the all-time highlight table.
pub struct StatEndpoint {
    pub kind: StatKind,
    pub rank_key: u32,
    pub date_bounded: bool,
}

pub const STAT_ENDPOINTS: [StatEndpoint; 6] = [
    StatEndpoint {
        kind: StatKind::Average,
        rank_key: 25,
        date_bounded: false,
    },
    StatEndpoint {
        kind: StatKind::AverageActual,
        rank_key: 25,
        date_bounded: true,
    },
    StatEndpoint {
        kind: StatKind::CheckoutPcnt,
        rank_key: 1053,
        date_bounded: false,
    },
    StatEndpoint {
        kind: StatKind::CheckoutPcntActual,
        rank_key: 1053,
        date_bounded: true,
    },
    StatEndpoint {
        kind: StatKind::MaximumPerLeg,
        rank_key: 1055,
        date_bounded: false,
    },
    StatEndpoint {
        kind: StatKind::MaximumPerLegActual,
        rank_key: 1055,
        date_bounded: true,
    },
];

/// Fetch every statistic in [`STAT_ENDPOINTS`] and copy the player's `stat`
/// value into the record. The fetches are independent: one endpoint coming
/// back empty leaves its field absent and never blocks the rest.
pub async fn apply_stat_fanout<T: Transport>(
    client: &OrakelClient<T>,
    window: &DateWindow,
    stamp: i64,
    record: &mut PlayerRecord,
) {
    for endpoint in &STAT_ENDPOINTS {
        let url = if endpoint.date_bounded {
            client.build_ranking_url(endpoint.rank_key, window, stamp)
        } else {
            client.build_highlight_url(endpoint.rank_key, &record.key, stamp)
        };

        let rows = client.fetch_player_rows(&url).await;
        match stat_for(rows, &record.name) {
            Some(value) => assign_stat(record, endpoint.kind, value),
            None => debug!(
                "No {:?} entry for '{}' (rank key {})",
                endpoint.kind, record.name, endpoint.rank_key
            ),
        }
    }
}

/// Scan a table for the player's row. Rows are scanned in order and a later
/// duplicate overwrites an earlier one, matching the resolver's semantics.
fn stat_for(rows: Vec<PlayerRow>, player_name: &str) -> Option<StatValue> {
    rows.into_iter()
        .filter(|row| row.player_name == player_name)
        .filter_map(|row| row.stat)
        .last()
}

fn assign_stat(record: &mut PlayerRecord, kind: StatKind, value: StatValue) {
    let slot = match kind {
        StatKind::Average => &mut record.average,
        StatKind::AverageActual => &mut record.average_actual,
        StatKind::CheckoutPcnt => &mut record.checkout_pcnt,
        StatKind::CheckoutPcntActual => &mut record.checkout_pcnt_actual,
        StatKind::MaximumPerLeg => &mut record.maximum_per_leg,
        StatKind::MaximumPerLegActual => &mut record.maximum_per_leg_actual,
    };
    *slot = Some(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, stat: Option<StatValue>) -> PlayerRow {
        PlayerRow {
            player_name: name.to_string(),
            player_key: None,
            rank: None,
            stat,
        }
    }

    #[test]
    fn each_base_stat_has_a_date_bounded_twin() {
        assert_eq!(STAT_ENDPOINTS.len(), 6);
        for pair in STAT_ENDPOINTS.chunks(2) {
            assert_eq!(pair[0].rank_key, pair[1].rank_key);
            assert!(!pair[0].date_bounded);
            assert!(pair[1].date_bounded);
        }
    }

    #[test]
    fn picks_the_players_row() {
        let rows = vec![
            row("Max Hopp", Some(StatValue::Number(93.5))),
            row("Test Player", Some(StatValue::Number(50.0))),
        ];

        assert_eq!(
            stat_for(rows, "Test Player"),
            Some(StatValue::Number(50.0))
        );
    }

    #[test]
    fn missing_row_leaves_no_value() {
        let rows = vec![row("Max Hopp", Some(StatValue::Number(93.5)))];
        assert_eq!(stat_for(rows, "Test Player"), None);
    }

    #[test]
    fn later_duplicate_row_wins() {
        let rows = vec![
            row("Test Player", Some(StatValue::Number(1.0))),
            row("Test Player", Some(StatValue::Number(2.0))),
        ];

        assert_eq!(stat_for(rows, "Test Player"), Some(StatValue::Number(2.0)));
    }

    #[test]
    fn assigns_into_the_matching_field() {
        let mut record = PlayerRecord::default();
        assign_stat(&mut record, StatKind::CheckoutPcnt, StatValue::Text("41.02%".into()));
        assign_stat(&mut record, StatKind::MaximumPerLegActual, StatValue::Number(0.3));

        assert_eq!(record.checkout_pcnt, Some(StatValue::Text("41.02%".into())));
        assert_eq!(record.maximum_per_leg_actual, Some(StatValue::Number(0.3)));
        assert_eq!(record.average, None);
    }
}
