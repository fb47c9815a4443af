use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{AppState, PlayerParams};
use crate::api::models::{PlayerMatchesResponse, PlayerStatsResponse};
use crate::config::AppConfig;
use crate::domain::DateWindow;

pub async fn get_player_stats(
    State(state): State<Arc<AppState>>,
    Path(player_name): Path<String>,
    Query(params): Query<PlayerParams>,
) -> impl IntoResponse {
    let window = match requested_window(&state.config, &params) {
        Ok(window) => window,
        Err(message) => return (StatusCode::BAD_REQUEST, message).into_response(),
    };

    match state.service.fetch_player_record(&player_name, &window).await {
        Some(record) => Json(PlayerStatsResponse::from_record(record)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            format!("No data found for player {}", player_name),
        )
            .into_response(),
    }
}

pub async fn get_player_matches(
    State(state): State<Arc<AppState>>,
    Path(player_name): Path<String>,
    Query(params): Query<PlayerParams>,
) -> impl IntoResponse {
    let window = match requested_window(&state.config, &params) {
        Ok(window) => window,
        Err(message) => return (StatusCode::BAD_REQUEST, message).into_response(),
    };
    let limit = params
        .limit
        .unwrap_or(state.config.pipeline.match_limit)
        .clamp(1, 100);

    match state
        .service
        .fetch_player_matches(&player_name, &window, limit)
        .await
    {
        Some((player, matches)) => Json(PlayerMatchesResponse::new(player, &matches)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            format!("No data found for player {}", player_name),
        )
            .into_response(),
    }
}

/// Date validation happens here, before the pipeline is invoked. Dates must
/// come as a pair; with neither supplied the configured lookback applies.
fn requested_window(config: &AppConfig, params: &PlayerParams) -> Result<DateWindow, String> {
    match (params.date_from.as_deref(), params.date_to.as_deref()) {
        (Some(from), Some(to)) => DateWindow::parse(from, to).map_err(|e| e.to_string()),
        (None, None) => Ok(DateWindow::last_days(config.pipeline.lookback_days)),
        _ => Err("Supply both dateFrom and dateTo, or neither".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(date_from: Option<&str>, date_to: Option<&str>) -> PlayerParams {
        PlayerParams {
            date_from: date_from.map(String::from),
            date_to: date_to.map(String::from),
            limit: None,
        }
    }

    #[test]
    fn explicit_dates_win() {
        let config = AppConfig::new();
        let window =
            requested_window(&config, &params(Some("2024-04-18"), Some("2024-12-21"))).unwrap();
        assert_eq!(window.from_str(), "2024-04-18");
        assert_eq!(window.to_str(), "2024-12-21");
    }

    #[test]
    fn missing_dates_fall_back_to_lookback() {
        let config = AppConfig::new();
        let window = requested_window(&config, &params(None, None)).unwrap();
        assert_eq!(
            (window.to - window.from).num_days(),
            config.pipeline.lookback_days
        );
    }

    #[test]
    fn malformed_or_lone_dates_are_rejected() {
        let config = AppConfig::new();
        assert!(requested_window(&config, &params(Some("21.12.2024"), Some("2024-12-21"))).is_err());
        assert!(requested_window(&config, &params(Some("2024-04-18"), None)).is_err());
    }
}
