// API endpoint definitions and URL builders

pub const MMR_HISTORY_ENDPOINT: &str = "https://api.henrikdev.xyz/valorant/v1/mmr-history";

pub fn mmr_history_url(server: &str, name: &str, tag: &str, api_key: &str) -> String {
    format!(
        "{}/{}/{}/{}?api_key={}",
        MMR_HISTORY_ENDPOINT, server, name, tag, api_key
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mmr_history_url() {
        let url = mmr_history_url("eu", "Henrik", "EUW3", "HDEV-key");
        assert_eq!(
            url,
            "https://api.henrikdev.xyz/valorant/v1/mmr-history/eu/Henrik/EUW3?api_key=HDEV-key"
        );
    }
}
