/// Upstream dartsorakel API settings
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: &'static str,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    /// `minMatches` query constant carried on every ranking request
    pub min_matches: u32,
    /// Row limit for the highlight-table requests
    pub highlight_limit: u32,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://app.dartsorakel.com",
            user_agent: "Staty/1.0",
            timeout_secs: 30,
            min_matches: 200,
            highlight_limit: 32,
        }
    }
}

/// Which bulk listing the player resolver queries.
///
/// The ranking table also carries rank and total maximums; the dropdown
/// search only carries name/key pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverSource {
    RankingTable,
    DropdownSearch,
}

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub cache_ttl_secs: u64,
    /// Default date window length when the caller supplies no dates
    pub lookback_days: i64,
    pub resolver_source: ResolverSource,
    /// Rank key of the listing used for name resolution (total-180s table)
    pub resolver_rank_key: u32,
    pub match_limit: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 3600,
            lookback_days: 45,
            resolver_source: ResolverSource::RankingTable,
            resolver_rank_key: 26,
            match_limit: 10,
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub pipeline: PipelineSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            api: ApiSettings::default(),
            pipeline: PipelineSettings::default(),
        }
    }
}
