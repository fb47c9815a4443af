use std::collections::HashMap;
use std::fmt;

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A statistic scalar exactly as the upstream emits it: a plain number
/// (`60.0`) or a formatted string (`"50.00%"`). The raw representation is
/// kept; rendering decides how to show it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl StatValue {
    /// Numeric view of the sample. Percentage strings are read with the
    /// trailing `%` stripped; anything unparsable counts as no value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StatValue::Number(n) => Some(*n),
            StatValue::Text(s) => s.trim().trim_end_matches('%').parse().ok(),
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) => write!(f, "{n}"),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

/// Player identity as resolved from a bulk listing
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlayer {
    pub name: String,
    pub key: String,
    pub rank: Option<i64>,
    pub maximums: Option<StatValue>,
}

/// The merged per-player record the pipeline produces.
///
/// Everything past `name`/`key` is an optional enrichment: an individual
/// fetch that fails or has no matching row simply leaves its field absent.
/// Records live for one invocation and are never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub key: String,
    pub rank: Option<i64>,
    /// Total 180s in the resolver listing's context
    pub maximums: Option<StatValue>,
    pub average: Option<StatValue>,
    pub average_actual: Option<StatValue>,
    pub checkout_pcnt: Option<StatValue>,
    pub checkout_pcnt_actual: Option<StatValue>,
    pub maximum_per_leg: Option<StatValue>,
    pub maximum_per_leg_actual: Option<StatValue>,
    /// Named time series from the performance portal, chronological order,
    /// missing samples kept as `None`
    pub additional_stats: HashMap<String, Vec<Option<StatValue>>>,
    pub last_matches: Vec<MatchSummary>,
}

impl PlayerRecord {
    pub fn from_resolved(resolved: ResolvedPlayer) -> Self {
        Self {
            name: resolved.name,
            key: resolved.key,
            rank: resolved.rank,
            maximums: resolved.maximums,
            ..Self::default()
        }
    }
}

/// One recent match, opponent markup already stripped
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary {
    pub opponent_name: String,
    pub date: String,
    /// Sum of both players' leg counts
    pub legs_total: i64,
    pub maximums_in_match: f64,
}

/// One named series from the performance portal
#[derive(Debug, Clone, PartialEq)]
pub struct StatSeries {
    pub name: String,
    pub samples: Vec<Option<StatValue>>,
}

/// Inclusive date range for the "actual" statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Parse caller-supplied `YYYY-MM-DD` strings. Callers surface the error
    /// to the user; the pipeline is never run on malformed dates.
    pub fn parse(from: &str, to: &str) -> Result<Self> {
        Ok(Self {
            from: parse_date(from)?,
            to: parse_date(to)?,
        })
    }

    /// Window ending today, reaching `days` back
    pub fn last_days(days: i64) -> Self {
        let to = Utc::now().date_naive();
        let from = to
            .checked_sub_days(Days::new(days.max(0) as u64))
            .unwrap_or(to);
        Self { from, to }
    }

    pub fn from_str(&self) -> String {
        self.from.format(DATE_FORMAT).to_string()
    }

    pub fn to_str(&self) -> String {
        self.to.format(DATE_FORMAT).to_string()
    }
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .with_context(|| format!("Invalid date '{input}': expected YYYY-MM-DD"))
}

// --- API Response Structures ---

/// Raw row of the ranking/highlight tables and the dropdown search.
///
/// The highlight tables omit `player_key` and `rank` on some rows, so both
/// stay optional here.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRow {
    pub player_name: String,
    #[serde(default)]
    pub player_key: Option<String>,
    #[serde(default)]
    pub rank: Option<i64>,
    #[serde(default)]
    pub stat: Option<StatValue>,
}

/// Raw row of the recent-matches endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRow {
    /// HTML fragment containing the opponent name
    pub opponent: String,
    pub match_date: String,
    pub loser_score: i64,
    pub winner_score: i64,
    /// Maximums thrown in the match
    pub stat1: f64,
}
