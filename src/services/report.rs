use colored::Colorize;

use crate::domain::{MatchSummary, PlayerRecord, ResolvedPlayer, StatValue};

/// Print the merged record as an aligned terminal table, the same fields
/// the chat embed shows. Absent enrichments render as a dimmed `N/A`.
pub fn print_player_record(record: &PlayerRecord) {
    println!();
    println!("{}", format!("Statistics for {}", record.name).bold());
    println!();

    print_row("Player Key", record.key.clone());
    print_row("Rank", format_opt_int(record.rank));
    print_row("Maximums", format_stat(&record.maximums));
    print_pair("Average", &record.average, &record.average_actual);
    print_pair("Checkout %", &record.checkout_pcnt, &record.checkout_pcnt_actual);
    print_pair(
        "Maximums per Leg",
        &record.maximum_per_leg,
        &record.maximum_per_leg_actual,
    );

    if !record.last_matches.is_empty() {
        println!();
        println!("{}", "Recent matches".bold());
        for summary in &record.last_matches {
            print_match(summary);
        }
    }
    println!();
}

/// Print a resolved player's recent matches on their own
pub fn print_player_matches(player: &ResolvedPlayer, matches: &[MatchSummary]) {
    println!();
    println!("{}", format!("Recent matches for {}", player.name).bold());
    println!();

    if matches.is_empty() {
        println!("  {}", "No matches found.".dimmed());
    }
    for summary in matches {
        print_match(summary);
    }
    println!();
}

fn print_match(summary: &MatchSummary) {
    println!(
        "  {}  vs {:<24} {:>2} legs, {} maximums",
        summary.date.cyan(),
        summary.opponent_name,
        summary.legs_total,
        summary.maximums_in_match,
    );
}

fn print_row(label: &str, value: String) {
    println!("  {:<20} {}", label.cyan(), value);
}

/// All-time value with the date-window value in parentheses
fn print_pair(label: &str, value: &Option<StatValue>, actual: &Option<StatValue>) {
    print_row(
        label,
        format!("{} (Actual: {})", format_stat(value), format_stat(actual)),
    );
}

fn format_stat(value: &Option<StatValue>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "N/A".dimmed().to_string(),
    }
}

fn format_opt_int(value: Option<i64>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "N/A".dimmed().to_string(),
    }
}
