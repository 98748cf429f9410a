use chrono::DateTime;
use serde::Deserialize;

use crate::analysis::hourly::MatchRecord;
use crate::error::AppError;

// MMR history v1 response
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct MmrHistoryResponse {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tag: String,
    pub data: Vec<MmrHistoryEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MmrHistoryEntry {
    pub mmr_change_to_last_game: i32,

    /// ISO-8601 timestamp of the match, offset included.
    pub date: String,

    #[serde(default)]
    pub elo: i32,
    #[serde(default)]
    pub ranking_in_tier: i32,
    #[serde(default)]
    pub currenttier_patched: String,
    #[serde(default)]
    pub map: Option<MapInfo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MapInfo {
    pub name: String,
}

impl MmrHistoryEntry {
    /// Convert one raw history entry into the aggregator's input record.
    ///
    /// The timestamp keeps the offset the API sent; a date that does not
    /// parse as RFC 3339 fails the whole fetch rather than being skipped.
    pub fn match_record(&self) -> Result<MatchRecord, AppError> {
        let timestamp = DateTime::parse_from_rfc3339(&self.date)
            .map_err(|_| AppError::TimestampError(self.date.clone()))?;

        Ok(MatchRecord {
            timestamp,
            rating_delta: self.mmr_change_to_last_game,
        })
    }
}
