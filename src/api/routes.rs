use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    players::{get_player_matches, get_player_stats},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/player/:name/stats", get(get_player_stats))
        .route("/api/player/:name/matches", get(get_player_matches))
        .with_state(state)
}
