use std::sync::Arc;

use log::{debug, warn};
use serde_json::Value;

use crate::api::parsers;
use crate::cache::TtlCache;
use crate::config::ApiSettings;
use crate::domain::{DateWindow, MatchRow, PlayerRow, StatSeries};
use crate::http::{HttpClient, Transport};

use anyhow::Result;

/// What a cached fetch produced.
///
/// Transport failures, non-200 statuses and unparsable bodies all collapse
/// to `NoData`: the pipeline treats them as "nothing to merge", never as an
/// error to raise. The dedicated type keeps that distinct from a found but
/// empty payload.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Data(Value),
    NoData,
}

impl FetchOutcome {
    pub fn into_data(self) -> Option<Value> {
        match self {
            FetchOutcome::Data(value) => Some(value),
            FetchOutcome::NoData => None,
        }
    }
}

/// dartsorakel API client: URL construction plus fetch-through-cache
pub struct OrakelClient<T = HttpClient> {
    transport: T,
    cache: Arc<TtlCache>,
    settings: ApiSettings,
}

impl OrakelClient<HttpClient> {
    pub fn new(settings: ApiSettings, cache: Arc<TtlCache>) -> Result<Self> {
        let transport = HttpClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self::with_transport(transport, settings, cache))
    }
}

impl<T: Transport> OrakelClient<T> {
    pub fn with_transport(transport: T, settings: ApiSettings, cache: Arc<TtlCache>) -> Self {
        Self {
            transport,
            cache,
            settings,
        }
    }

    /// Fetch a URL through the cache. A fresh cached payload short-circuits
    /// the network; otherwise the response is parsed and stored on HTTP 200.
    pub async fn fetch_json(&self, url: &str) -> FetchOutcome {
        if let Some(payload) = self.cache.get(url) {
            return FetchOutcome::Data(payload);
        }

        debug!("Fetching {}", url);
        let response = match self.transport.get(url).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to {} failed: {:?}", url, e);
                return FetchOutcome::NoData;
            }
        };

        if response.status != 200 {
            warn!("Upstream returned status {} for {}", response.status, url);
            return FetchOutcome::NoData;
        }

        let payload: Value = match serde_json::from_str(&response.body) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to parse JSON from {}: {}", url, e);
                return FetchOutcome::NoData;
            }
        };

        self.cache.insert(url, payload.clone());
        FetchOutcome::Data(payload)
    }

    /// Rows of a ranking or highlight table; `NoData` becomes no rows
    pub async fn fetch_player_rows(&self, url: &str) -> Vec<PlayerRow> {
        match self.fetch_json(url).await {
            FetchOutcome::Data(payload) => parsers::parse_player_rows(&payload),
            FetchOutcome::NoData => Vec::new(),
        }
    }

    /// Performance-portal series; `None` means the endpoint yielded nothing
    pub async fn fetch_stat_series(&self, player_key: &str) -> Option<Vec<StatSeries>> {
        let url = self.build_performance_url(player_key);
        let payload = self.fetch_json(&url).await.into_data()?;
        Some(parsers::parse_stat_series(&payload))
    }

    /// Recent-match rows, capped upstream by `limit`
    pub async fn fetch_match_rows(&self, player_key: &str, limit: usize) -> Vec<MatchRow> {
        let url = self.build_matches_url(player_key, limit);
        match self.fetch_json(&url).await {
            FetchOutcome::Data(payload) => parsers::parse_match_rows(&payload),
            FetchOutcome::NoData => Vec::new(),
        }
    }

    // --- URL builders ---
    // The `_` millisecond stamp mirrors the upstream web app's requests. It
    // makes each invocation's ranking URLs unique, which defeats the cache
    // for them; observed behavior, kept as is.

    /// Date-bounded ranking table for one statistic
    pub fn build_ranking_url(&self, rank_key: u32, window: &DateWindow, stamp: i64) -> String {
        format!(
            "{}/api/stats/player?dateFrom={}&dateTo={}&rankKey={}&organStat=All&tourns=All&minMatches={}&tourCardYear=&showStatsBreakdown=0&_={}",
            self.settings.base_url,
            window.from_str(),
            window.to_str(),
            rank_key,
            self.settings.min_matches,
            stamp,
        )
    }

    /// All-time table for one statistic, highlighting the player's row
    pub fn build_highlight_url(&self, rank_key: u32, player_key: &str, stamp: i64) -> String {
        format!(
            "{}/api/stats/player?rankKey={}&showStatsBreakdown=0&playerKeyToHighlight={}&minMatches={}&limit={}&_={}",
            self.settings.base_url,
            rank_key,
            player_key,
            self.settings.min_matches,
            self.settings.highlight_limit,
            stamp,
        )
    }

    pub fn build_dropdown_url(&self) -> String {
        format!("{}/dropdownDataSearch", self.settings.base_url)
    }

    fn build_performance_url(&self, player_key: &str) -> String {
        format!(
            "{}/api/tools/performancePortalPlayerData?playerId={}",
            self.settings.base_url, player_key,
        )
    }

    fn build_matches_url(&self, player_key: &str, limit: usize) -> String {
        format!(
            "{}/api/player/matches/{}?limit={}",
            self.settings.base_url, player_key, limit,
        )
    }
}
