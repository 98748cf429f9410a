use std::thread;
use std::time::Duration;

use crate::analysis::snapshot::SnapshotStore;
use crate::api::client::HenrikApiClient;
use crate::display::output::{display_error, display_info, render_dashboard};
use crate::error::AppError;

/// Re-run the fetch/aggregate/render cycle on a fixed interval.
///
/// Cycles are coalesced: a new fetch starts only after the previous one has
/// resolved, and every result goes through the generation-guarded snapshot
/// store, so a stale response can never replace a newer one on screen. A
/// failed cycle keeps the last dashboard visible and prints the error line;
/// the next successful cycle clears it.
pub fn run(
    client: &HenrikApiClient,
    server: &str,
    name: &str,
    tag: &str,
    interval: Duration,
    json: bool,
) -> Result<(), AppError> {
    let mut store = SnapshotStore::new();

    display_info(&format!(
        "Watching {}#{} on {} every {}s (Ctrl-C to stop)",
        name,
        tag,
        server,
        interval.as_secs()
    ));

    loop {
        let ticket = store.begin_fetch();

        match crate::fetch_snapshot(client, server, name, tag) {
            Ok((snapshot, recent)) => {
                if store.publish(ticket, snapshot.clone()) {
                    if json {
                        // One JSON line per cycle
                        let line = serde_json::to_string(&snapshot)
                            .map_err(|e| AppError::JsonError(e.to_string()))?;
                        println!("{}", line);
                    } else {
                        // Clear and redraw the whole dashboard
                        print!("\x1B[2J\x1B[1;1H");
                        render_dashboard(&snapshot, &recent);
                    }
                }
            }
            Err(e) => {
                store.fail(ticket, e.to_string());
                if let Some(message) = store.error() {
                    display_error(message);
                }
            }
        }

        thread::sleep(interval);
    }
}
