use colored::*;
use tabled::{settings::Style, Table, Tabled};

use crate::analysis::hourly::HourlyStats;
use crate::analysis::snapshot::Snapshot;
use crate::api::models::MmrHistoryEntry;

const BAR_WIDTH: u32 = 24;
const GAUGE_WIDTH: usize = 40;
const RECENT_GAMES_SHOWN: usize = 10;

#[derive(Tabled)]
struct GameRow {
    #[tabled(rename = "#")]
    number: String,
    played: String,
    map: String,
    rank: String,
    result: String,
    mmr: String,
    elo: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Full dashboard for one snapshot: chart, gauge, totals, recent games.
pub fn render_dashboard(snapshot: &Snapshot, recent: &[MmrHistoryEntry]) {
    println!(
        "\n{}",
        format!(
            "🎮 Hourly win/loss for {} on {}",
            snapshot.player, snapshot.server
        )
        .bold()
        .cyan()
    );
    println!(
        "{}",
        format!(
            "Fetched at {}",
            snapshot.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
        .dimmed()
    );

    display_hourly_chart(&snapshot.stats);
    display_win_rate_gauge(&snapshot.stats);
    display_summary(&snapshot.stats);
    display_recent_games(recent);
}

pub fn display_hourly_chart(stats: &HourlyStats) {
    println!("\n{}", "📊 WINS / LOSSES PER HOUR OF THE DAY".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if stats.buckets.is_empty() {
        println!("{}\n", "No games in this history window".yellow());
        return;
    }

    let max = stats
        .buckets
        .iter()
        .map(|b| b.wins.max(b.losses))
        .max()
        .unwrap_or(1);

    for bucket in &stats.buckets {
        println!(
            " {:>2}h  {} {:>3} {}",
            bucket.hour,
            "W".green(),
            bucket.wins,
            bar(bucket.wins, max).green()
        );
        println!(
            "      {} {:>3} {}",
            "L".red(),
            bucket.losses,
            bar(bucket.losses, max).red()
        );
    }
    println!();
}

// Proportional bar scaled against the busiest hour; any non-zero
// count gets at least one cell.
fn bar(count: u32, max: u32) -> String {
    if count == 0 || max == 0 {
        return String::new();
    }
    let len = (count * BAR_WIDTH).div_ceil(max) as usize;
    "█".repeat(len)
}

pub fn display_win_rate_gauge(stats: &HourlyStats) {
    println!("{}", "🎯 WIN RATE".bold().cyan());

    let filled = ((stats.win_rate / 100.0) * GAUGE_WIDTH as f64).round() as usize;
    let filled = filled.min(GAUGE_WIDTH);
    let gauge = format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(GAUGE_WIDTH - filled)
    );

    let gauge = if stats.win_rate >= 50.0 {
        gauge.blue()
    } else {
        gauge.red()
    };

    println!(" [{}] {:.2}%\n", gauge, stats.win_rate);
}

pub fn display_summary(stats: &HourlyStats) {
    println!(
        "{} {} W / {} L over {} games\n",
        "📈 Overall:".bold(),
        stats.total_wins.to_string().green(),
        stats.total_losses.to_string().red(),
        stats.total_games
    );
}

pub fn display_recent_games(entries: &[MmrHistoryEntry]) {
    if entries.is_empty() {
        return;
    }

    let shown = entries.len().min(RECENT_GAMES_SHOWN);
    println!("{}", format!("🕹️  LAST {} GAMES", shown).bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let mut rows = vec![];
    for (idx, entry) in entries.iter().take(RECENT_GAMES_SHOWN).enumerate() {
        let played = entry
            .match_record()
            .map(|r| r.timestamp.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| entry.date.clone());

        let map = entry
            .map
            .as_ref()
            .map(|m| m.name.clone())
            .unwrap_or_else(|| "-".to_string());

        let result = if entry.mmr_change_to_last_game > 0 {
            "WIN".green().to_string()
        } else {
            "LOSS".red().to_string()
        };

        rows.push(GameRow {
            number: format!("{}", idx + 1),
            played,
            map,
            rank: entry.currenttier_patched.clone(),
            result,
            mmr: format!("{:+}", entry.mmr_change_to_last_game),
            elo: format!("{}", entry.elo),
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}
