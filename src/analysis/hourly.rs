use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, Timelike};
use serde::Serialize;

/// One rated match as delivered by the API client.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub timestamp: DateTime<FixedOffset>,
    pub rating_delta: i32,
}

/// Win/loss counts for one hour of the day.
///
/// Serializes the hour under the key `x` so the output can be fed
/// straight into a plotting consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourBucket {
    #[serde(rename = "x")]
    pub hour: u32,
    pub wins: u32,
    pub losses: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyStats {
    /// Only hours that appear in the input, sorted ascending.
    pub buckets: Vec<HourBucket>,
    pub total_wins: u32,
    pub total_losses: u32,
    pub total_games: u32,
    /// Percentage in [0, 100], rounded to 2 decimal places; 0 when no games.
    pub win_rate: f64,
}

/// Bucket matches by hour of day and compute overall win/loss totals.
///
/// The hour is taken from each timestamp's embedded offset, never from the
/// host locale, so the same input buckets identically on every machine.
/// A rating delta of exactly 0 counts as a loss.
pub fn aggregate(matches: &[MatchRecord]) -> HourlyStats {
    let mut counts: BTreeMap<u32, (u32, u32)> = BTreeMap::new();

    for record in matches {
        let entry = counts.entry(record.timestamp.hour()).or_insert((0, 0));
        if record.rating_delta > 0 {
            entry.0 += 1;
        } else {
            entry.1 += 1;
        }
    }

    let buckets: Vec<HourBucket> = counts
        .into_iter()
        .map(|(hour, (wins, losses))| HourBucket { hour, wins, losses })
        .collect();

    let total_wins: u32 = buckets.iter().map(|b| b.wins).sum();
    let total_losses: u32 = buckets.iter().map(|b| b.losses).sum();
    let total_games = total_wins + total_losses;

    let win_rate = if total_games > 0 {
        round2(total_wins as f64 / total_games as f64 * 100.0)
    } else {
        0.0
    };

    HourlyStats {
        buckets,
        total_wins,
        total_losses,
        total_games,
        win_rate,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(hour: u32, delta: i32) -> MatchRecord {
        let timestamp = DateTime::parse_from_rfc3339(&format!(
            "2024-06-14T{:02}:30:00+00:00",
            hour
        ))
        .unwrap();
        MatchRecord {
            timestamp,
            rating_delta: delta,
        }
    }

    #[test]
    fn test_empty_input() {
        let stats = aggregate(&[]);
        assert!(stats.buckets.is_empty());
        assert_eq!(stats.total_wins, 0);
        assert_eq!(stats.total_losses, 0);
        assert_eq!(stats.total_games, 0);
        assert_eq!(stats.win_rate, 0.0);
    }

    #[test]
    fn test_mixed_hours() {
        let stats = aggregate(&[rec(10, 20), rec(10, -5), rec(14, 3)]);
        assert_eq!(
            stats.buckets,
            vec![
                HourBucket { hour: 10, wins: 1, losses: 1 },
                HourBucket { hour: 14, wins: 1, losses: 0 },
            ]
        );
        assert_eq!(stats.total_wins, 2);
        assert_eq!(stats.total_losses, 1);
        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.win_rate, 66.67);
    }

    #[test]
    fn test_zero_delta_counts_as_loss() {
        let stats = aggregate(&[rec(9, 0)]);
        assert_eq!(
            stats.buckets,
            vec![HourBucket { hour: 9, wins: 0, losses: 1 }]
        );
        assert_eq!(stats.win_rate, 0.0);
    }

    #[test]
    fn test_all_zero_deltas_in_one_hour() {
        let input: Vec<MatchRecord> = (0..5).map(|_| rec(22, 0)).collect();
        let stats = aggregate(&input);
        assert_eq!(
            stats.buckets,
            vec![HourBucket { hour: 22, wins: 0, losses: 5 }]
        );
        assert_eq!(stats.total_games, 5);
        assert_eq!(stats.win_rate, 0.0);
    }

    #[test]
    fn test_every_match_counted_exactly_once() {
        let input = vec![rec(1, 5), rec(1, -5), rec(2, 0), rec(2, 18), rec(3, -1)];
        let stats = aggregate(&input);

        assert_eq!(stats.total_games as usize, input.len());
        assert_eq!(stats.total_wins + stats.total_losses, stats.total_games);

        let bucket_wins: u32 = stats.buckets.iter().map(|b| b.wins).sum();
        let bucket_losses: u32 = stats.buckets.iter().map(|b| b.losses).sum();
        assert_eq!(bucket_wins, stats.total_wins);
        assert_eq!(bucket_losses, stats.total_losses);
    }

    #[test]
    fn test_order_independent() {
        let forward = vec![rec(3, 7), rec(3, -2), rec(15, 1), rec(23, -30), rec(0, 12)];
        let mut shuffled = forward.clone();
        shuffled.reverse();
        shuffled.swap(0, 3);

        assert_eq!(aggregate(&forward), aggregate(&shuffled));
    }

    #[test]
    fn test_win_rate_rounded_to_two_decimals() {
        let stats = aggregate(&[rec(5, 1), rec(5, 1), rec(5, -1)]);
        assert_eq!(stats.win_rate, 66.67);

        let stats = aggregate(&[rec(5, 1), rec(5, -1), rec(5, -1)]);
        assert_eq!(stats.win_rate, 33.33);
    }

    #[test]
    fn test_hour_uses_embedded_offset() {
        let timestamp =
            DateTime::parse_from_rfc3339("2024-06-14T23:30:00+02:00").unwrap();
        let stats = aggregate(&[MatchRecord {
            timestamp,
            rating_delta: 4,
        }]);
        // 23:30 at +02:00 lands in the 23h bucket, not 21h UTC
        assert_eq!(stats.buckets[0].hour, 23);
    }

    #[test]
    fn test_bucket_serializes_in_plot_shape() {
        let bucket = HourBucket { hour: 10, wins: 1, losses: 2 };
        let json = serde_json::to_value(&bucket).unwrap();
        assert_eq!(json, serde_json::json!({ "x": 10, "wins": 1, "losses": 2 }));
    }
}
