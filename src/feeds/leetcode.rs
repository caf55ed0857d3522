// LeetCode stats widget
// The stats API has shipped several field names over time, so every figure
// is looked up through a list of aliases and falls back to a static value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{FeedConfig, FeedError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsBundle {
    pub total_solved: String,
    pub acceptance_rate: String,
    pub rating: String,
    pub practice_streak: String,
    pub easy_solved: String,
    pub medium_solved: String,
    pub hard_solved: String,
}

impl Default for StatsBundle {
    fn default() -> Self {
        Self {
            total_solved: "245+".to_string(),
            acceptance_rate: "72%".to_string(),
            rating: "2100 (self-calibrated)".to_string(),
            practice_streak: "25+ months".to_string(),
            easy_solved: "110".to_string(),
            medium_solved: "85".to_string(),
            hard_solved: "52".to_string(),
        }
    }
}

/// Strings pass through, numbers are printed, anything else is replaced
fn normalize_stat(value: Option<&Value>, fallback: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => fallback.to_string(),
    }
}

/// First alias that is present and not null
fn first_present<'a>(payload: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| payload.get(key))
        .find(|value| !value.is_null())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn stat(payload: &Value, keys: &[&str], default: &str) -> String {
    normalize_stat(first_present(payload, keys), default)
}

pub fn to_stats_bundle(payload: &Value) -> StatsBundle {
    let fallback = StatsBundle::default();
    let rating = match first_present(payload, &["rating", "ranking"]) {
        Some(value) if is_truthy(value) => normalize_stat(Some(value), &fallback.rating),
        _ => fallback.rating.clone(),
    };

    StatsBundle {
        total_solved: stat(payload, &["totalSolved", "totalSolvedCount", "solved"], &fallback.total_solved),
        acceptance_rate: stat(payload, &["acceptanceRate", "acceptRate"], &fallback.acceptance_rate),
        rating,
        practice_streak: stat(payload, &["practiceStreak", "streak"], &fallback.practice_streak),
        easy_solved: stat(payload, &["easySolved", "easy"], &fallback.easy_solved),
        medium_solved: stat(payload, &["mediumSolved", "medium"], &fallback.medium_solved),
        hard_solved: stat(payload, &["hardSolved", "hard"], &fallback.hard_solved),
    }
}

pub async fn fetch_stats(
    http: &reqwest::Client,
    config: &FeedConfig,
) -> Result<StatsBundle, FeedError> {
    let url = format!("{}/{}", config.leetcode_api, config.leetcode_user);
    let payload = super::get_json(http, &url).await?;

    // The stats API reports lookup failures inside a 200 response
    if let Some(status) = payload.get("status").and_then(|s| s.as_str()) {
        if status != "success" {
            return Err(FeedError::Shape(format!("LeetCode status: {}", status)));
        }
    }
    Ok(to_stats_bundle(&payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers_become_strings() {
        let stats = to_stats_bundle(&json!({
            "status": "success",
            "totalSolved": 312,
            "acceptanceRate": 68.4,
            "ranking": 150000,
            "easySolved": 140,
            "mediumSolved": 130,
            "hardSolved": 42
        }));
        assert_eq!(stats.total_solved, "312");
        assert_eq!(stats.acceptance_rate, "68.4");
        assert_eq!(stats.rating, "150000");
        assert_eq!(stats.hard_solved, "42");
        // Not reported by this API
        assert_eq!(stats.practice_streak, "25+ months");
    }

    #[test]
    fn test_aliases_and_fallbacks() {
        let stats = to_stats_bundle(&json!({
            "totalSolved": null,
            "solved": "300",
            "acceptRate": "70%",
            "rating": 0,
            "easy": true,
            "streak": "30 months"
        }));
        assert_eq!(stats.total_solved, "300");
        assert_eq!(stats.acceptance_rate, "70%");
        assert_eq!(stats.rating, "2100 (self-calibrated)");
        assert_eq!(stats.easy_solved, "110");
        assert_eq!(stats.practice_streak, "30 months");
    }

    #[test]
    fn test_empty_payload_is_all_fallback() {
        assert_eq!(to_stats_bundle(&json!({})), StatsBundle::default());
        assert_eq!(to_stats_bundle(&json!([1, 2])), StatsBundle::default());
    }
}
