pub mod additional;
pub mod fanout;
pub mod matches;
pub mod resolver;

pub use additional::merge_additional_stats;
pub use fanout::{apply_stat_fanout, StatKind, StatEndpoint, STAT_ENDPOINTS};
pub use matches::fetch_recent_matches;
pub use resolver::resolve_player;
