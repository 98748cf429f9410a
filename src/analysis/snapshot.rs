use chrono::{DateTime, Utc};
use serde::Serialize;

use super::hourly::HourlyStats;

/// Immutable result of one successful fetch/aggregate cycle.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub player: String,
    pub server: String,
    pub fetched_at: DateTime<Utc>,
    pub stats: HourlyStats,
}

/// Ticket identifying one in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Holds the snapshot currently on display plus the current error line.
///
/// Publication is generation-guarded: a fetch that started before a newer
/// one can never overwrite the newer result, no matter when it resolves.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: Option<Snapshot>,
    error: Option<String>,
    generation: u64,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket(self.generation)
    }

    /// Install a new snapshot and clear any lingering error line.
    ///
    /// Returns false, leaving the store untouched, when a newer fetch has
    /// started since this ticket was issued.
    pub fn publish(&mut self, ticket: FetchTicket, snapshot: Snapshot) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.current = Some(snapshot);
        self.error = None;
        true
    }

    /// Record a failed fetch. The last good snapshot stays on display.
    pub fn fail(&mut self, ticket: FetchTicket, message: String) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.error = Some(message);
        true
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.current.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
