// GitHub repositories and public activity
// Payloads are checked defensively; anything unexpected becomes an empty list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{FeedConfig, FeedError};

/// Number of repos shown in the Projects window
pub const TOP_REPO_LIMIT: usize = 10;
/// Number of entries kept in the contribution feed
pub const FEED_LIMIT: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    pub name: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub fork: bool,
}

/// Keep well-formed repo objects; a non-array payload yields nothing
pub fn parse_repos(payload: &Value) -> Vec<Repo> {
    match payload.as_array() {
        Some(items) => items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
        None => Vec::new(),
    }
}

/// Drop forks and the portfolio's own repos, most stars first
pub fn top_repos(repos: Vec<Repo>, excluded: &[String], limit: usize) -> Vec<Repo> {
    let mut kept: Vec<Repo> = repos
        .into_iter()
        .filter(|r| !r.fork && !excluded.iter().any(|name| name == &r.name))
        .collect();
    kept.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    kept.truncate(limit);
    kept
}

pub async fn fetch_top_repos(
    http: &reqwest::Client,
    config: &FeedConfig,
) -> Result<Vec<Repo>, FeedError> {
    let url = format!(
        "{}/users/{}/repos?sort=updated&per_page=100",
        config.github_api, config.github_user
    );
    let payload = super::get_json(http, &url).await?;
    let repos = parse_repos(&payload);
    tracing::debug!("[Feeds] {} repos from GitHub", repos.len());
    Ok(top_repos(repos, &config.excluded_repos, TOP_REPO_LIMIT))
}

// ===== Contribution feed =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub id: String,
    pub repo: String,
    pub summary: String,
    pub updated_at: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRepo {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub repo: Option<EventRepo>,
    #[serde(default)]
    pub payload: Value,
}

/// API repo URL to the browsable one
pub fn normalize_repo_url(raw_url: Option<&str>, name: Option<&str>) -> String {
    match (raw_url, name) {
        (Some(url), _) => url.replace("https://api.github.com/repos/", "https://github.com/"),
        (None, Some(name)) => format!("https://github.com/{}", name),
        (None, None) => "https://github.com/dayy346".to_string(),
    }
}

fn str_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    let mut current = value;
    for key in path {
        current = current.get(key)?;
    }
    current.as_str()
}

fn summarize(event: &GitHubEvent, repo_name: &str) -> String {
    let payload = &event.payload;
    match event.kind.as_str() {
        "PushEvent" => {
            let commits = payload
                .get("commits")
                .and_then(|c| c.as_array())
                .map(|c| c.as_slice())
                .unwrap_or_default();
            let count = commits.len().max(1);
            let message = commits
                .first()
                .and_then(|c| c.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or("Updated codebase");
            format!(
                "Push · {} commit{} · {}",
                count,
                if count == 1 { "" } else { "s" },
                message
            )
        }
        "PullRequestEvent" => format!(
            "PR {} · {}",
            str_at(payload, &["action"]).unwrap_or("updated"),
            str_at(payload, &["pull_request", "title"]).unwrap_or("Pull request activity")
        ),
        "IssuesEvent" => format!(
            "Issue {} · {}",
            str_at(payload, &["action"]).unwrap_or("updated"),
            str_at(payload, &["issue", "title"]).unwrap_or("Issue chatter")
        ),
        "CreateEvent" => format!(
            "Created {} · {}",
            str_at(payload, &["ref_type"]).unwrap_or("resource"),
            repo_name
        ),
        "ReleaseEvent" => format!(
            "Released {}",
            str_at(payload, &["release", "name"]).unwrap_or("release")
        ),
        _ => "Activity streaming from GitHub.".to_string(),
    }
}

/// One feed line per event; events without an id or repo are skipped
pub fn convert_event_to_entry(event: &GitHubEvent, now: DateTime<Utc>) -> Option<FeedEntry> {
    let id = event.id.as_ref()?;
    let repo = event.repo.as_ref()?;

    let base_url = normalize_repo_url(repo.url.as_deref(), Some(&repo.name));
    let detail_url = str_at(&event.payload, &["pull_request", "html_url"])
        .filter(|u| !u.is_empty())
        .or_else(|| str_at(&event.payload, &["issue", "html_url"]).filter(|u| !u.is_empty()))
        .or_else(|| str_at(&event.payload, &["comment", "html_url"]).filter(|u| !u.is_empty()))
        .map(str::to_string)
        .unwrap_or(base_url);

    Some(FeedEntry {
        id: id.clone(),
        repo: repo.name.clone(),
        summary: summarize(event, &repo.name),
        updated_at: event
            .created_at
            .clone()
            .unwrap_or_else(|| now.to_rfc3339()),
        url: detail_url,
    })
}

pub fn parse_events(payload: &Value, now: DateTime<Utc>) -> Result<Vec<FeedEntry>, FeedError> {
    let items = payload
        .as_array()
        .ok_or_else(|| FeedError::Shape("Unexpected feed payload".to_string()))?;

    let entries: Vec<FeedEntry> = items
        .iter()
        .filter_map(|item| serde_json::from_value::<GitHubEvent>(item.clone()).ok())
        .filter_map(|event| convert_event_to_entry(&event, now))
        .take(FEED_LIMIT)
        .collect();

    if entries.is_empty() {
        return Err(FeedError::Shape("Empty GitHub activity list".to_string()));
    }
    Ok(entries)
}

pub async fn fetch_contributions(
    http: &reqwest::Client,
    config: &FeedConfig,
) -> Result<Vec<FeedEntry>, FeedError> {
    let url = format!(
        "{}/users/{}/events/public?per_page={}",
        config.github_api, config.github_user, FEED_LIMIT
    );
    let payload = super::get_json(http, &url).await?;
    parse_events(&payload, Utc::now())
}

/// Shown until the first live sync, and kept when GitHub is unreachable
pub fn fallback_feed() -> Vec<FeedEntry> {
    [
        (
            "fallback-camera-guardrail",
            "CollabLab/camera-guardrails",
            "Ship camera-required guardrails paired with backend verification for secure tutor rooms.",
            "2026-02-10T14:20:00Z",
            "https://github.com/dayy346/camera-guardrails",
        ),
        (
            "fallback-gxp-docs",
            "Regeneron/quality-automation",
            "Automated GxP documentation pipelines to improve traceability across SOP reviews.",
            "2026-02-05T09:00:00Z",
            "https://github.com/dayy346/quality-automation",
        ),
        (
            "fallback-missive",
            "Dayyan-OS/Missive",
            "Missive board telemetry updates keep premium deliveries transparent and resilient.",
            "2026-02-01T18:10:00Z",
            "https://github.com/dayy346/Dayyan-OS",
        ),
        (
            "fallback-infra",
            "CollabLab/infrastructure",
            "Infra contributions harmonize telemetry, logging, and scheduler rails for reliability rituals.",
            "2026-01-27T11:05:00Z",
            "https://github.com/dayy346/infra-telemetry",
        ),
    ]
    .iter()
    .map(|(id, repo, summary, updated_at, url)| FeedEntry {
        id: id.to_string(),
        repo: repo.to_string(),
        summary: summary.to_string(),
        updated_at: updated_at.to_string(),
        url: url.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn repo(name: &str, stars: u64, fork: bool) -> Value {
        json!({
            "name": name,
            "language": "Rust",
            "stargazers_count": stars,
            "description": null,
            "html_url": format!("https://github.com/dayy346/{}", name),
            "fork": fork
        })
    }

    #[test]
    fn test_repo_filter_and_sort() {
        let payload = json!([
            repo("small", 1, false),
            repo("forked", 99, true),
            repo("Dayyan-Portfolio", 50, false),
            repo("big", 42, false),
            repo("mid", 19, false),
        ]);
        let excluded = vec!["Dayyan-Portfolio".to_string()];
        let top = top_repos(parse_repos(&payload), &excluded, TOP_REPO_LIMIT);
        let names: Vec<_> = top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["big", "mid", "small"]);
    }

    #[test]
    fn test_repo_limit() {
        let payload = Value::Array((0..15).map(|i| repo(&format!("r{}", i), i, false)).collect());
        let top = top_repos(parse_repos(&payload), &[], TOP_REPO_LIMIT);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].name, "r14");
    }

    #[test]
    fn test_non_array_payload_is_empty() {
        let payload = json!({"message": "API rate limit exceeded"});
        assert!(parse_repos(&payload).is_empty());
    }

    #[test]
    fn test_event_summaries() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let payload = json!([
            {
                "id": "1", "type": "PushEvent", "created_at": "2026-02-28T10:00:00Z",
                "repo": {"name": "dayy346/os", "url": "https://api.github.com/repos/dayy346/os"},
                "payload": {"commits": [{"message": "Fix focus"}, {"message": "Tidy"}]}
            },
            {
                "id": "2", "type": "PullRequestEvent",
                "repo": {"name": "dayy346/os"},
                "payload": {"action": "opened", "pull_request": {"title": "Alt+Tab", "html_url": "https://github.com/dayy346/os/pull/3"}}
            },
            {"id": "3", "type": "CreateEvent", "repo": {"name": "dayy346/new"}, "payload": {}},
            {"id": "4", "type": "WatchEvent", "repo": {"name": "dayy346/os"}},
            {"type": "PushEvent", "repo": {"name": "dayy346/no-id"}}
        ]);

        let entries = parse_events(&payload, now).unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].summary, "Push · 2 commits · Fix focus");
        assert_eq!(entries[0].url, "https://github.com/dayy346/os");
        assert_eq!(entries[1].summary, "PR opened · Alt+Tab");
        assert_eq!(entries[1].url, "https://github.com/dayy346/os/pull/3");
        assert_eq!(entries[1].updated_at, now.to_rfc3339());
        assert_eq!(entries[2].summary, "Created resource · dayy346/new");
        assert_eq!(entries[3].summary, "Activity streaming from GitHub.");
    }

    #[test]
    fn test_push_without_commits_counts_one() {
        let event: GitHubEvent = serde_json::from_value(json!({
            "id": "9", "type": "PushEvent", "repo": {"name": "a/b"}, "payload": {}
        }))
        .unwrap();
        let entry = convert_event_to_entry(&event, Utc::now()).unwrap();
        assert_eq!(entry.summary, "Push · 1 commit · Updated codebase");
    }

    #[test]
    fn test_empty_detail_url_falls_through() {
        let event: GitHubEvent = serde_json::from_value(json!({
            "id": "10", "type": "IssueCommentEvent", "repo": {"name": "a/b"},
            "payload": {
                "pull_request": {"html_url": ""},
                "issue": {"html_url": "https://github.com/a/b/issues/1"}
            }
        }))
        .unwrap();
        let entry = convert_event_to_entry(&event, Utc::now()).unwrap();
        assert_eq!(entry.url, "https://github.com/a/b/issues/1");

        let bare: GitHubEvent = serde_json::from_value(json!({
            "id": "11", "type": "IssuesEvent", "repo": {"name": "a/b"},
            "payload": {"issue": {"html_url": ""}}
        }))
        .unwrap();
        let entry = convert_event_to_entry(&bare, Utc::now()).unwrap();
        assert_eq!(entry.url, "https://github.com/a/b");
    }

    #[test]
    fn test_fallback_feed_copy() {
        let feed = fallback_feed();
        assert_eq!(feed.len(), 4);
        let infra = feed.iter().find(|e| e.id == "fallback-infra").unwrap();
        assert_eq!(
            infra.summary,
            "Infra contributions harmonize telemetry, logging, and scheduler rails for reliability rituals."
        );
    }

    #[test]
    fn test_empty_event_list_is_an_error() {
        assert!(parse_events(&json!([]), Utc::now()).is_err());
        assert!(parse_events(&json!({"oops": true}), Utc::now()).is_err());
    }
}
