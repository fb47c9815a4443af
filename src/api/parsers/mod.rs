pub mod matches;
pub mod players;
pub mod series;

pub use matches::parse_match_rows;
pub use players::parse_player_rows;
pub use series::parse_stat_series;
