// Window bodies for each app
// Static copy lives in `resume`; the API-backed panels read the feed snapshot.

pub mod resume;

use serde::Serialize;

use crate::apps::AppId;
use crate::feeds::github::{FeedEntry, Repo};
use crate::feeds::leetcode::StatsBundle;
use crate::feeds::slot::FeedStatus;
use crate::feeds::FeedSnapshot;

use self::resume::{Card, Link, ResumeSection, TimelineEntry};

pub const PROJECTS_UNAVAILABLE: &str = "GitHub data loading unavailable right now.";
pub const REPO_DESCRIPTION_FALLBACK: &str =
    "Built to solve real-world problems with practical engineering.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub name: String,
    /// "Rust • ★ 42"
    pub meta: String,
    pub description: String,
    pub url: String,
}

impl From<&Repo> for ProjectCard {
    fn from(repo: &Repo) -> Self {
        Self {
            name: repo.name.clone(),
            meta: format!(
                "{} • ★ {}",
                repo.language.as_deref().unwrap_or("Multi"),
                repo.stargazers_count
            ),
            description: repo
                .description
                .clone()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| REPO_DESCRIPTION_FALLBACK.to_string()),
            url: repo.html_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shortcut {
    pub keys: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Panel {
    About {
        name: &'static str,
        tagline: &'static str,
        intro: &'static str,
        chips: Vec<&'static str>,
    },
    Resume {
        sections: Vec<ResumeSection>,
    },
    Projects {
        cards: Vec<ProjectCard>,
        /// Set when there is nothing to list
        placeholder: Option<&'static str>,
        status: FeedStatus,
    },
    Contributions {
        entries: Vec<FeedEntry>,
        highlights: Vec<Card>,
        status: FeedStatus,
    },
    Experience {
        entries: Vec<TimelineEntry>,
    },
    Skills {
        cards: Vec<Card>,
    },
    Extracurricular {
        title: &'static str,
        body: &'static str,
    },
    Leetcode {
        stats: StatsBundle,
        profile_url: &'static str,
        status: FeedStatus,
    },
    Contact {
        links: Vec<Link>,
    },
    Chat,
    Help {
        shortcuts: Vec<Shortcut>,
    },
}

impl Panel {
    pub fn app_id(&self) -> AppId {
        match self {
            Panel::About { .. } => AppId::About,
            Panel::Resume { .. } => AppId::Resume,
            Panel::Projects { .. } => AppId::Projects,
            Panel::Contributions { .. } => AppId::Contributions,
            Panel::Experience { .. } => AppId::Experience,
            Panel::Skills { .. } => AppId::Skills,
            Panel::Extracurricular { .. } => AppId::Power,
            Panel::Leetcode { .. } => AppId::Leetcode,
            Panel::Contact { .. } => AppId::Contact,
            Panel::Chat => AppId::Chatbot,
            Panel::Help { .. } => AppId::Help,
        }
    }
}

pub fn shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut { keys: "Alt + Tab", action: "cycle focused window" },
        Shortcut { keys: "Ctrl + M", action: "minimize focused window" },
        Shortcut { keys: "Esc", action: "close Start menu" },
        Shortcut { keys: "Double-click", action: "open apps from desktop icons" },
    ]
}

/// Build the body of `app`'s window
pub fn panel_for(app: AppId, feeds: &FeedSnapshot) -> Panel {
    match app {
        AppId::About => Panel::About {
            name: resume::OWNER_NAME,
            tagline: resume::TAGLINE,
            intro: resume::INTRO,
            chips: resume::ABOUT_CHIPS.to_vec(),
        },
        AppId::Resume => Panel::Resume {
            sections: resume::resume_sections(),
        },
        AppId::Projects => {
            let cards: Vec<ProjectCard> = feeds.repos.iter().map(ProjectCard::from).collect();
            let placeholder = if cards.is_empty() {
                Some(PROJECTS_UNAVAILABLE)
            } else {
                None
            };
            Panel::Projects {
                cards,
                placeholder,
                status: feeds.repos_status,
            }
        }
        AppId::Contributions => Panel::Contributions {
            entries: feeds.contributions.clone(),
            highlights: resume::contribution_highlights(),
            status: feeds.contributions_status,
        },
        AppId::Experience => Panel::Experience {
            entries: resume::experience(),
        },
        AppId::Skills => Panel::Skills {
            cards: resume::skills(),
        },
        AppId::Power => Panel::Extracurricular {
            title: resume::POWERLIFTING_TITLE,
            body: resume::POWERLIFTING_BODY,
        },
        AppId::Leetcode => Panel::Leetcode {
            stats: feeds.leetcode.clone(),
            profile_url: resume::LEETCODE_PROFILE,
            status: feeds.leetcode_status,
        },
        AppId::Contact => Panel::Contact {
            links: resume::contact_links(),
        },
        AppId::Chatbot => Panel::Chat,
        AppId::Help => Panel::Help {
            shortcuts: shortcuts(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, language: Option<&str>, description: Option<&str>) -> Repo {
        Repo {
            name: name.to_string(),
            language: language.map(str::to_string),
            stargazers_count: 3,
            description: description.map(str::to_string),
            html_url: format!("https://github.com/dayy346/{}", name),
            homepage: None,
            fork: false,
        }
    }

    #[test]
    fn test_every_app_has_a_panel() {
        let feeds = FeedSnapshot::default();
        for app in AppId::ALL {
            assert_eq!(panel_for(app, &feeds).app_id(), app);
        }
    }

    #[test]
    fn test_projects_placeholder_without_repos() {
        let panel = panel_for(AppId::Projects, &FeedSnapshot::default());
        match panel {
            Panel::Projects { cards, placeholder, .. } => {
                assert!(cards.is_empty());
                assert_eq!(placeholder, Some(PROJECTS_UNAVAILABLE));
            }
            other => panic!("unexpected panel {:?}", other),
        }
    }

    #[test]
    fn test_project_cards_from_repos() {
        let mut feeds = FeedSnapshot::default();
        feeds.repos = vec![
            repo("retro-shell", Some("Rust"), Some("Window manager")),
            repo("notes", None, Some("  ")),
        ];
        let Panel::Projects { cards, placeholder, .. } = panel_for(AppId::Projects, &feeds) else {
            panic!("expected projects panel");
        };
        assert!(placeholder.is_none());
        assert_eq!(cards[0].meta, "Rust • ★ 3");
        assert_eq!(cards[0].description, "Window manager");
        assert_eq!(cards[1].meta, "Multi • ★ 3");
        assert_eq!(cards[1].description, REPO_DESCRIPTION_FALLBACK);
    }

    #[test]
    fn test_contributions_use_fallback_feed() {
        let Panel::Contributions { entries, status, .. } =
            panel_for(AppId::Contributions, &FeedSnapshot::default())
        else {
            panic!("expected contributions panel");
        };
        assert_eq!(entries, crate::feeds::github::fallback_feed());
        assert_eq!(status, FeedStatus::Idle);
    }

    #[test]
    fn test_panel_serializes_with_kind_tag() {
        let json = serde_json::to_value(panel_for(AppId::Help, &FeedSnapshot::default())).unwrap();
        assert_eq!(json["kind"], "help");
        assert_eq!(json["shortcuts"][0]["keys"], "Alt + Tab");

        let json = serde_json::to_value(panel_for(AppId::Chatbot, &FeedSnapshot::default())).unwrap();
        assert_eq!(json["kind"], "chat");
    }
}
