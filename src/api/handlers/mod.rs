use serde::Deserialize;

use crate::config::AppConfig;
use crate::http::HttpClient;
use crate::services::player_stats::PlayerStatsService;

pub mod players;

pub struct AppState {
    pub service: PlayerStatsService<HttpClient>,
    pub config: AppConfig,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerParams {
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub limit: Option<usize>,
}
