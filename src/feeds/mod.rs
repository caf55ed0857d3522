// External read-only feeds: GitHub repos, GitHub activity, LeetCode stats.
// Fetch failures never reach the UI as errors; each feed keeps a fallback.

pub mod github;
pub mod leetcode;
pub mod slot;

use chrono::{Duration, Utc};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use self::github::{FeedEntry, Repo};
use self::leetcode::StatsBundle;
use self::slot::{FeedSlot, FeedStatus, FetchTicket};

pub const CONTRIBUTIONS_TTL_MINUTES: i64 = 12;
pub const LEETCODE_TTL_MINUTES: i64 = 45;
pub const REPOS_TTL_MINUTES: i64 = 12;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream returned HTTP {0}")]
    Status(u16),
    #[error("unexpected payload: {0}")]
    Shape(String),
}

/// Where the feeds come from
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub github_api: String,
    pub github_user: String,
    pub leetcode_api: String,
    pub leetcode_user: String,
    /// The portfolio's own repos, hidden from the Projects window
    pub excluded_repos: Vec<String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            github_api: "https://api.github.com".to_string(),
            github_user: "dayy346".to_string(),
            leetcode_api: "https://leetcode-stats-api.herokuapp.com".to_string(),
            leetcode_user: "dayy345".to_string(),
            excluded_repos: vec![
                "Dayyan-Portfolio".to_string(),
                "Dayy346".to_string(),
                "DailyCodingDashboard".to_string(),
            ],
        }
    }
}

/// Build the shared HTTP client (GitHub rejects requests without a user agent)
pub fn http_client() -> Result<reqwest::Client, FeedError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("dayyanos/", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(15))
        .build()?;
    Ok(client)
}

async fn get_json(http: &reqwest::Client, url: &str) -> Result<Value, FeedError> {
    let response = http.get(url).send().await?;
    if !response.status().is_success() {
        return Err(FeedError::Status(response.status().as_u16()));
    }
    Ok(response.json::<Value>().await?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Repos,
    Contributions,
    Leetcode,
}

/// Current value and sync state of every feed
pub struct FeedHub {
    pub repos: FeedSlot<Vec<Repo>>,
    pub contributions: FeedSlot<Vec<FeedEntry>>,
    pub leetcode: FeedSlot<StatsBundle>,
}

impl FeedHub {
    pub fn new() -> Self {
        Self {
            repos: FeedSlot::new(Vec::new(), Duration::minutes(REPOS_TTL_MINUTES)),
            contributions: FeedSlot::new(
                github::fallback_feed(),
                Duration::minutes(CONTRIBUTIONS_TTL_MINUTES),
            ),
            leetcode: FeedSlot::new(
                StatsBundle::default(),
                Duration::minutes(LEETCODE_TTL_MINUTES),
            ),
        }
    }

    /// Whether a sync is worth starting (value missing or past its TTL)
    pub fn needs_refresh(&self, kind: FeedKind) -> bool {
        let now = Utc::now();
        match kind {
            FeedKind::Repos => !self.repos.is_fresh(now),
            FeedKind::Contributions => !self.contributions.is_fresh(now),
            FeedKind::Leetcode => !self.leetcode.is_fresh(now),
        }
    }

    pub fn begin(&mut self, kind: FeedKind) -> FetchTicket {
        match kind {
            FeedKind::Repos => self.repos.begin(),
            FeedKind::Contributions => self.contributions.begin(),
            FeedKind::Leetcode => self.leetcode.begin(),
        }
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot {
            repos: self.repos.value().clone(),
            repos_status: self.repos.status(),
            contributions: self.contributions.value().clone(),
            contributions_status: self.contributions.status(),
            leetcode: self.leetcode.value().clone(),
            leetcode_status: self.leetcode.status(),
        }
    }
}

impl Default for FeedHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Feed data as handed to the panels
#[derive(Debug, Clone, Serialize)]
pub struct FeedSnapshot {
    pub repos: Vec<Repo>,
    pub repos_status: FeedStatus,
    pub contributions: Vec<FeedEntry>,
    pub contributions_status: FeedStatus,
    pub leetcode: StatsBundle,
    pub leetcode_status: FeedStatus,
}

impl Default for FeedSnapshot {
    fn default() -> Self {
        FeedHub::new().snapshot()
    }
}

/// Outcome of one fetch, ready to land in its slot
pub enum FeedUpdate {
    Repos(Result<Vec<Repo>, FeedError>),
    Contributions(Result<Vec<FeedEntry>, FeedError>),
    Leetcode(Result<StatsBundle, FeedError>),
}

impl FeedUpdate {
    /// Store the result; returns false when a newer fetch already started
    pub fn apply(self, hub: &mut FeedHub, ticket: FetchTicket) -> bool {
        let now = Utc::now();
        match self {
            FeedUpdate::Repos(result) => hub.repos.finish(ticket, log_failure("repos", result), now),
            FeedUpdate::Contributions(result) => {
                hub.contributions
                    .finish(ticket, log_failure("contributions", result), now)
            }
            FeedUpdate::Leetcode(result) => {
                hub.leetcode
                    .finish(ticket, log_failure("leetcode", result), now)
            }
        }
    }
}

fn log_failure<T>(feed: &str, result: Result<T, FeedError>) -> Result<T, FeedError> {
    if let Err(e) = &result {
        tracing::warn!("[Feeds] {} sync failed: {}", feed, e);
    }
    result
}

/// Run the network half of a refresh. Holds no lock on the hub.
pub async fn fetch(http: &reqwest::Client, config: &FeedConfig, kind: FeedKind) -> FeedUpdate {
    match kind {
        FeedKind::Repos => FeedUpdate::Repos(github::fetch_top_repos(http, config).await),
        FeedKind::Contributions => {
            FeedUpdate::Contributions(github::fetch_contributions(http, config).await)
        }
        FeedKind::Leetcode => FeedUpdate::Leetcode(leetcode::fetch_stats(http, config).await),
    }
}
