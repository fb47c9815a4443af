use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::cache::TtlCache;
use crate::config::AppConfig;
use crate::services::player_stats::PlayerStatsService;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        // One cache for the process lifetime, shared by every request
        let cache = Arc::new(TtlCache::new(Duration::from_secs(
            self.config.pipeline.cache_ttl_secs,
        )));
        let service = PlayerStatsService::new(&self.config, cache)?;

        let state = Arc::new(AppState {
            service,
            config: self.config.clone(),
        });

        let app = create_router(state).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
