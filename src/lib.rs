pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod http;
pub mod services;
pub mod stats;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cache::TtlCache;
use crate::cli::Command;
use crate::config::AppConfig;
use crate::domain::DateWindow;
use crate::services::player_stats::PlayerStatsService;
use crate::services::report;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_stats(player: &str, date_from: Option<&str>, date_to: Option<&str>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let window = requested_window(&config, date_from, date_to)?;
        let service = build_service(&config)?;

        match service.fetch_player_record(player, &window).await {
            Some(record) => report::print_player_record(&record),
            None => println!("No data found for player {player}."),
        }
        Ok(())
    })
}

pub fn handle_matches(player: &str, limit: Option<usize>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let limit = limit.unwrap_or(config.pipeline.match_limit);
        let service = build_service(&config)?;
        let window = service.default_window();

        match service.fetch_player_matches(player, &window, limit).await {
            Some((resolved, matches)) => report::print_player_matches(&resolved, &matches),
            None => println!("No data found for player {player}."),
        }
        Ok(())
    })
}

fn build_service(config: &AppConfig) -> Result<PlayerStatsService> {
    let cache = Arc::new(TtlCache::new(Duration::from_secs(
        config.pipeline.cache_ttl_secs,
    )));
    PlayerStatsService::new(config, cache)
}

/// Dates must come as a pair; with neither supplied the configured
/// lookback window applies.
fn requested_window(
    config: &AppConfig,
    date_from: Option<&str>,
    date_to: Option<&str>,
) -> Result<DateWindow> {
    match (date_from, date_to) {
        (Some(from), Some(to)) => DateWindow::parse(from, to),
        (None, None) => Ok(DateWindow::last_days(config.pipeline.lookback_days)),
        _ => anyhow::bail!("Supply both --date-from and --date-to, or neither"),
    }
}
