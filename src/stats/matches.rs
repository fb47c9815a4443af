use scraper::Html;

use crate::api::OrakelClient;
use crate::domain::{MatchRow, MatchSummary};
use crate::http::Transport;

/// Fetch a player's most recent matches. An absent response becomes an
/// empty list, never an error.
pub async fn fetch_recent_matches<T: Transport>(
    client: &OrakelClient<T>,
    player_key: &str,
    limit: usize,
) -> Vec<MatchSummary> {
    let rows = client.fetch_match_rows(player_key, limit).await;
    summarize_matches(rows, limit)
}

/// Turn raw rows into summaries, newest first as delivered. Accumulation
/// stops once `limit` summaries are collected; only the output is
/// truncated, the raw rows are consumed as fetched.
pub fn summarize_matches(rows: Vec<MatchRow>, limit: usize) -> Vec<MatchSummary> {
    let mut summaries = Vec::new();
    for row in rows {
        if summaries.len() == limit {
            break;
        }
        summaries.push(MatchSummary {
            opponent_name: strip_markup(&row.opponent),
            date: row.match_date,
            legs_total: row.loser_score + row.winner_score,
            maximums_in_match: row.stat1,
        });
    }
    summaries
}

/// Strip all markup from an HTML fragment, keeping the concatenated visible
/// text. No whitespace trimming beyond what the markup itself implies.
pub fn strip_markup(fragment: &str) -> String {
    Html::parse_fragment(fragment).root_element().text().collect()
}
