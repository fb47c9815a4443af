use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{MatchSummary, PlayerRecord, ResolvedPlayer, StatValue};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsResponse {
    pub player_name: String,
    pub player_key: String,
    pub rank: Option<i64>,
    pub maximums: Option<StatValue>,
    pub average: Option<StatValue>,
    pub current_average: Option<StatValue>,
    pub checkout_pcnt: Option<StatValue>,
    pub current_checkout_pcnt: Option<StatValue>,
    pub maximums_per_leg: Option<StatValue>,
    pub current_maximums_per_leg: Option<StatValue>,
    pub additional_stats: HashMap<String, Vec<Option<StatValue>>>,
    pub last_matches: Vec<MatchItem>,
}

impl PlayerStatsResponse {
    pub fn from_record(record: PlayerRecord) -> Self {
        Self {
            player_name: record.name,
            player_key: record.key,
            rank: record.rank,
            maximums: record.maximums,
            average: record.average,
            current_average: record.average_actual,
            checkout_pcnt: record.checkout_pcnt,
            current_checkout_pcnt: record.checkout_pcnt_actual,
            maximums_per_leg: record.maximum_per_leg,
            current_maximums_per_leg: record.maximum_per_leg_actual,
            additional_stats: record.additional_stats,
            last_matches: record.last_matches.iter().map(MatchItem::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchItem {
    pub opponent: String,
    pub date: String,
    pub legs_total: i64,
    pub maximums: f64,
}

impl From<&MatchSummary> for MatchItem {
    fn from(summary: &MatchSummary) -> Self {
        Self {
            opponent: summary.opponent_name.clone(),
            date: summary.date.clone(),
            legs_total: summary.legs_total,
            maximums: summary.maximums_in_match,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMatchesResponse {
    pub player_name: String,
    pub player_key: String,
    pub matches: Vec<MatchItem>,
}

impl PlayerMatchesResponse {
    pub fn new(player: ResolvedPlayer, matches: &[MatchSummary]) -> Self {
        Self {
            player_name: player.name,
            player_key: player.key,
            matches: matches.iter().map(MatchItem::from).collect(),
        }
    }
}
