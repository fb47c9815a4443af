pub mod models;

pub use models::{
    DateWindow, MatchRow, MatchSummary, PlayerRecord, PlayerRow, ResolvedPlayer, StatSeries,
    StatValue,
};
