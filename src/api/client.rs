use crate::analysis::hourly::MatchRecord;
use crate::config::Config;
use crate::error::AppError;

use super::endpoints;
use super::models::*;

pub struct HenrikApiClient {
    config: Config,
}

impl HenrikApiClient {
    pub fn new(config: Config) -> Self {
        HenrikApiClient { config }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        let response = ureq::get(url)
            .set("User-Agent", "valo_stats/0.1.0")
            .call();

        match response {
            Ok(resp) => resp.into_string().map_err(|e| {
                AppError::HttpError(e.to_string())
            }),
            Err(ureq::Error::Status(429, _)) => Err(AppError::RateLimited),
            Err(ureq::Error::Status(code, _)) => Err(AppError::ApiStatus(code)),
            Err(e) => Err(AppError::HttpError(e.to_string())),
        }
    }

    pub fn get_mmr_history(
        &self,
        server: &str,
        name: &str,
        tag: &str,
    ) -> Result<MmrHistoryResponse, AppError> {
        let url = endpoints::mmr_history_url(server, name, tag, &self.config.api_key);

        let body = match self.execute_request(&url) {
            Ok(body) => body,
            Err(AppError::ApiStatus(404)) => {
                return Err(AppError::PlayerNotFound(format!("{}#{}", name, tag)))
            }
            Err(e) => return Err(e),
        };

        serde_json::from_str(&body).map_err(|e| {
            AppError::JsonError(e.to_string())
        })
    }

    /// Fetch a player's MMR history and convert it to aggregator input.
    pub fn get_match_records(
        &self,
        server: &str,
        name: &str,
        tag: &str,
    ) -> Result<(Vec<MatchRecord>, Vec<MmrHistoryEntry>), AppError> {
        let history = self.get_mmr_history(server, name, tag)?;

        if history.data.is_empty() {
            return Err(AppError::NoMatchHistory);
        }

        let records = history
            .data
            .iter()
            .map(|entry| entry.match_record())
            .collect::<Result<Vec<_>, _>>()?;

        Ok((records, history.data))
    }
}
