use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use log::debug;

use crate::api::OrakelClient;
use crate::cache::TtlCache;
use crate::config::{AppConfig, PipelineSettings};
use crate::domain::{DateWindow, MatchSummary, PlayerRecord, ResolvedPlayer};
use crate::http::{HttpClient, Transport};
use crate::stats::{
    apply_stat_fanout, fetch_recent_matches, merge_additional_stats, resolve_player,
};

/// Runs the aggregation pipeline: resolve the player, fan out to the
/// statistic endpoints, fold in the performance series, attach recent
/// matches. The result is built fresh per invocation; only the injected
/// cache is shared across invocations.
pub struct PlayerStatsService<T = HttpClient> {
    client: OrakelClient<T>,
    settings: PipelineSettings,
}

impl PlayerStatsService<HttpClient> {
    pub fn new(config: &AppConfig, cache: Arc<TtlCache>) -> Result<Self> {
        let client = OrakelClient::new(config.api.clone(), cache)?;
        Ok(Self {
            client,
            settings: config.pipeline.clone(),
        })
    }
}

impl<T: Transport> PlayerStatsService<T> {
    pub fn with_transport(transport: T, config: &AppConfig, cache: Arc<TtlCache>) -> Self {
        Self {
            client: OrakelClient::with_transport(transport, config.api.clone(), cache),
            settings: config.pipeline.clone(),
        }
    }

    /// The window used when the caller supplies no dates
    pub fn default_window(&self) -> DateWindow {
        DateWindow::last_days(self.settings.lookback_days)
    }

    /// Aggregate everything known about a player within the window.
    /// `None` is the not-found sentinel: the name was absent from the bulk
    /// listing and nothing else was fetched.
    pub async fn fetch_player_record(
        &self,
        player_name: &str,
        window: &DateWindow,
    ) -> Option<PlayerRecord> {
        let stamp = invocation_stamp();
        let resolved =
            resolve_player(&self.client, &self.settings, window, stamp, player_name).await?;

        let mut record = PlayerRecord::from_resolved(resolved);
        apply_stat_fanout(&self.client, window, stamp, &mut record).await;
        merge_additional_stats(&self.client, &mut record).await;
        record.last_matches =
            fetch_recent_matches(&self.client, &record.key, self.settings.match_limit).await;

        debug!(
            "Aggregated record for '{}': {} additional series, {} recent matches",
            record.name,
            record.additional_stats.len(),
            record.last_matches.len()
        );
        Some(record)
    }

    /// Resolve the player and fetch only their recent matches
    pub async fn fetch_player_matches(
        &self,
        player_name: &str,
        window: &DateWindow,
        limit: usize,
    ) -> Option<(ResolvedPlayer, Vec<MatchSummary>)> {
        let stamp = invocation_stamp();
        let resolved =
            resolve_player(&self.client, &self.settings, window, stamp, player_name).await?;

        let matches = fetch_recent_matches(&self.client, &resolved.key, limit).await;
        Some((resolved, matches))
    }
}

/// One cache-busting stamp per invocation, so all ranking URLs of a single
/// pipeline run stay identical to each other.
fn invocation_stamp() -> i64 {
    Utc::now().timestamp_millis()
}
