// App registry for the desktop shell
// The order of `AppId::ALL` is the registration order used by the start menu,
// the desktop icons, the running-apps strip and Alt+Tab cycling.

use serde::{Deserialize, Serialize};

/// Identifier of one desktop application (one window per app)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppId {
    About,
    Resume,
    Projects,
    Contributions,
    Experience,
    Skills,
    Power,
    Leetcode,
    Contact,
    Chatbot,
    Help,
}

/// App that holds focus when no window is visible
pub const FALLBACK_APP: AppId = AppId::About;

impl AppId {
    pub const ALL: [AppId; 11] = [
        AppId::About,
        AppId::Resume,
        AppId::Projects,
        AppId::Contributions,
        AppId::Experience,
        AppId::Skills,
        AppId::Power,
        AppId::Leetcode,
        AppId::Contact,
        AppId::Chatbot,
        AppId::Help,
    ];

    /// Parse from the frontend id string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "about" => Some(AppId::About),
            "resume" => Some(AppId::Resume),
            "projects" => Some(AppId::Projects),
            "contributions" => Some(AppId::Contributions),
            "experience" => Some(AppId::Experience),
            "skills" => Some(AppId::Skills),
            "power" => Some(AppId::Power),
            "leetcode" => Some(AppId::Leetcode),
            "contact" => Some(AppId::Contact),
            "chatbot" => Some(AppId::Chatbot),
            "help" => Some(AppId::Help),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppId::About => "about",
            AppId::Resume => "resume",
            AppId::Projects => "projects",
            AppId::Contributions => "contributions",
            AppId::Experience => "experience",
            AppId::Skills => "skills",
            AppId::Power => "power",
            AppId::Leetcode => "leetcode",
            AppId::Contact => "contact",
            AppId::Chatbot => "chatbot",
            AppId::Help => "help",
        }
    }

    /// Position in the registration order
    pub fn index(&self) -> usize {
        AppId::ALL
            .iter()
            .position(|app| app == self)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppId::About => "About.me",
            AppId::Resume => "Resume.pdf",
            AppId::Projects => "Projects.dir",
            AppId::Contributions => "Contributions.log",
            AppId::Experience => "Experience.log",
            AppId::Skills => "Skills.cfg",
            AppId::Power => "Extracurricular.log",
            AppId::Leetcode => "LeetCode.trn",
            AppId::Contact => "Contact.net",
            AppId::Chatbot => "Assist.chat",
            AppId::Help => "Help.txt",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AppId::About => "👤",
            AppId::Resume => "📄",
            AppId::Projects => "🗂️",
            AppId::Contributions => "📈",
            AppId::Experience => "🧰",
            AppId::Skills => "⚙️",
            AppId::Power => "🏋️",
            AppId::Leetcode => "🧩",
            AppId::Contact => "📡",
            AppId::Chatbot => "🤖",
            AppId::Help => "⌨️",
        }
    }

    /// Where the window appears the first time it is opened
    pub fn initial_position(&self) -> (f64, f64) {
        match self {
            AppId::About => (90.0, 84.0),
            AppId::Resume => (140.0, 100.0),
            AppId::Projects => (190.0, 116.0),
            AppId::Contributions => (210.0, 92.0),
            AppId::Experience => (230.0, 96.0),
            AppId::Skills => (160.0, 130.0),
            AppId::Power => (200.0, 140.0),
            AppId::Leetcode => (240.0, 124.0),
            AppId::Contact => (260.0, 118.0),
            AppId::Chatbot => (220.0, 150.0),
            AppId::Help => (280.0, 88.0),
        }
    }
}

/// Registry entry as shown by the start menu and desktop icons
#[derive(Debug, Clone, Serialize)]
pub struct AppEntry {
    pub id: AppId,
    pub icon: &'static str,
    pub label: &'static str,
}

pub fn registry() -> Vec<AppEntry> {
    AppId::ALL
        .iter()
        .map(|&id| AppEntry {
            id,
            icon: id.icon(),
            label: id.label(),
        })
        .collect()
}
