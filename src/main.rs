mod analysis;
mod api;
mod config;
mod display;
mod error;
mod watch;

use std::time::Duration;

use analysis::hourly;
use analysis::snapshot::Snapshot;
use api::client::HenrikApiClient;
use api::models::MmrHistoryEntry;
use chrono::Utc;
use clap::Parser;
use config::Config;
use display::output::{display_error, display_info, render_dashboard};
use error::AppError;
use indicatif::ProgressBar;

#[derive(Parser, Debug)]
#[command(name = "Valo Stats")]
#[command(about = "Hourly win/loss statistics for a Valorant player", long_about = None)]
struct Args {
    /// Riot game name
    name: String,

    /// Riot tag (tag line)
    tag: String,

    /// Server: na, eu, ap, kr, latam or br (default: VALO_SERVER or eu)
    #[arg(short, long)]
    server: Option<String>,

    /// Keep refreshing the dashboard instead of exiting after one fetch
    #[arg(long)]
    watch: bool,

    /// Seconds between fetches in watch mode
    #[arg(long, default_value = "60")]
    interval: u64,

    /// Print the snapshot as JSON instead of rendering the dashboard
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(server) = args.server {
        config.server = server;
    }

    let server = config.server.clone();
    let client = HenrikApiClient::new(config);

    if args.watch {
        return watch::run(
            &client,
            &server,
            &args.name,
            &args.tag,
            Duration::from_secs(args.interval),
            args.json,
        );
    }

    display_info(&format!(
        "Fetching MMR history for {}#{} on {}",
        args.name, args.tag, server
    ));

    let (snapshot, recent) = fetch_snapshot(&client, &server, &args.name, &args.tag)?;

    if args.json {
        let json = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| AppError::JsonError(e.to_string()))?;
        println!("{}", json);
        return Ok(());
    }

    render_dashboard(&snapshot, &recent);
    Ok(())
}

/// One fetch/aggregate cycle: MMR history in, immutable snapshot out.
fn fetch_snapshot(
    client: &HenrikApiClient,
    server: &str,
    name: &str,
    tag: &str,
) -> Result<(Snapshot, Vec<MmrHistoryEntry>), AppError> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Fetching match history");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = client.get_match_records(server, name, tag);
    spinner.finish_and_clear();

    let (records, entries) = result?;
    let stats = hourly::aggregate(&records);

    let snapshot = Snapshot {
        player: format!("{}#{}", name, tag),
        server: server.to_string(),
        fetched_at: Utc::now(),
        stats,
    };

    Ok((snapshot, entries))
}
