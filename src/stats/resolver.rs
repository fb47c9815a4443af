use std::collections::HashMap;

use log::{debug, info};

use crate::api::OrakelClient;
use crate::config::{PipelineSettings, ResolverSource};
use crate::domain::{DateWindow, PlayerRow, ResolvedPlayer};
use crate::http::Transport;

/// Resolve a player name to the upstream's opaque key via a bulk listing.
///
/// `None` means the name is not in the listing; the caller stops there and
/// performs no further fetches for the request.
pub async fn resolve_player<T: Transport>(
    client: &OrakelClient<T>,
    settings: &PipelineSettings,
    window: &DateWindow,
    stamp: i64,
    player_name: &str,
) -> Option<ResolvedPlayer> {
    let url = match settings.resolver_source {
        ResolverSource::RankingTable => {
            client.build_ranking_url(settings.resolver_rank_key, window, stamp)
        }
        ResolverSource::DropdownSearch => client.build_dropdown_url(),
    };

    let rows = client.fetch_player_rows(&url).await;
    let resolved = resolve_from_rows(rows, player_name);
    match &resolved {
        Some(player) => info!("Resolved player '{}' to key {}", player.name, player.key),
        None => info!("Player '{}' not found in the listing", player_name),
    }
    resolved
}

/// Index the listing by name (exact, case-sensitive; a duplicate name is a
/// plain overwrite, so the later row wins) and look the player up.
pub fn resolve_from_rows(rows: Vec<PlayerRow>, player_name: &str) -> Option<ResolvedPlayer> {
    let mut by_name: HashMap<String, PlayerRow> = HashMap::new();
    for row in rows {
        if row.player_key.is_none() {
            // A keyless row cannot resolve anything
            debug!("Listing row for '{}' has no player_key", row.player_name);
            continue;
        }
        by_name.insert(row.player_name.clone(), row);
    }

    let row = by_name.remove(player_name)?;
    let key = row.player_key?;
    Some(ResolvedPlayer {
        name: row.player_name,
        key,
        rank: row.rank,
        maximums: row.stat,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatValue;

    fn row(name: &str, key: &str, rank: Option<i64>, stat: Option<f64>) -> PlayerRow {
        PlayerRow {
            player_name: name.to_string(),
            player_key: Some(key.to_string()),
            rank,
            stat: stat.map(StatValue::Number),
        }
    }

    #[test]
    fn resolves_listed_player() {
        let rows = vec![
            row("Max Hopp", "628", Some(40), Some(12.0)),
            row("Test Player", "12345", Some(1), Some(100.0)),
        ];

        let resolved = resolve_from_rows(rows, "Test Player").unwrap();
        assert_eq!(resolved.key, "12345");
        assert_eq!(resolved.rank, Some(1));
        assert_eq!(resolved.maximums, Some(StatValue::Number(100.0)));
    }

    #[test]
    fn unknown_name_is_not_found() {
        let rows = vec![row("Max Hopp", "628", None, None)];
        assert_eq!(resolve_from_rows(rows, "Luke Littler"), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let rows = vec![row("Max Hopp", "628", None, None)];
        assert_eq!(resolve_from_rows(rows, "max hopp"), None);
    }

    #[test]
    fn later_duplicate_wins() {
        let rows = vec![
            row("Max Hopp", "628", Some(40), None),
            row("Max Hopp", "999", Some(41), None),
        ];

        let resolved = resolve_from_rows(rows, "Max Hopp").unwrap();
        assert_eq!(resolved.key, "999");
        assert_eq!(resolved.rank, Some(41));
    }

    #[test]
    fn keyless_rows_are_ignored() {
        let rows = vec![PlayerRow {
            player_name: "Max Hopp".to_string(),
            player_key: None,
            rank: Some(40),
            stat: None,
        }];

        assert_eq!(resolve_from_rows(rows, "Max Hopp"), None);
    }
}
