// Static portfolio copy

use serde::Serialize;

pub const OWNER_NAME: &str = "Dayyan Hamid";
pub const TAGLINE: &str = "Software Engineer • Data + Frontend Builder • Rutgers CS '25";
pub const INTRO: &str = "I build polished frontend systems with strong backend integration. \
This shell is designed to feel nostalgic, fast, and intentional.";
pub const ABOUT_CHIPS: [&str; 5] = ["React", "TypeScript", "Nuxt", "Python/FastAPI", "Azure"];

pub const POWERLIFTING_TITLE: &str = "Collegiate Powerlifting";
pub const POWERLIFTING_BODY: &str = "Placed 6th in Dec 2024 championships. \
I bring the same consistency and focus into product execution.";

pub const LEETCODE_PROFILE: &str = "https://leetcode.com/dayy345";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeSection {
    pub title: &'static str,
    pub summary: Option<&'static str>,
    pub bullets: Vec<&'static str>,
    pub footer: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub role: &'static str,
    pub points: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

pub fn resume_sections() -> Vec<ResumeSection> {
    vec![
        ResumeSection {
            title: "Education & Certifications",
            summary: Some(
                "Rutgers BA in Computer Science & Mathematics '25; certifications in software design, data science, and MLOps.",
            ),
            bullets: vec![
                "Bachelor of Arts in Computer Science and Mathematics, Rutgers University, New Brunswick, NJ · May 2025",
                "Relevant coursework: Systems Programming, OS Design, Computational Algorithms, Machine Learning Principles, Linear Optimization, Probability & Statistics, Intro to AI, Design and Analysis of Algorithms",
                "Certifications: MLOps and Data Pipeline Orchestration for AI Systems (LinkedIn, Oct 2025); Software Design: From Requirements to Release (Aug 2024); Data Science Fundamentals; Power BI Desktop · Pursuing AWS Cloud Practitioner",
            ],
            footer: None,
        },
        ResumeSection {
            title: "Technical Experience",
            summary: None,
            bullets: vec![
                "Junior AI Engineer · FCB Health New York | IPG Health (Oct 2025, Present): Python and FastAPI backend with Azure AI Search retrieval; Nuxt frontend on Azure App Service.",
                "Engineering Manager · Troy Tutors / CollabLab (Jan 2026, Present): leading a group of full-stack engineers at CollabLab.",
                "Full Stack Software Engineer · CollabLab (Mar 2025 to Jan 2026): Node/Express/Vue/Mongo/Daily; shipped camera-required enforcement for tutoring and proctored rooms.",
                "QA Document Control Analyst · Regeneron (Jun 2025 to Oct 2025): GxP documentation with OpenText, myQumas, TrackWise; improved internal SharePoint workflows.",
                "QA Developer Intern · Regeneron (May 2024 to Sep 2024): Power Automate, Power BI, SharePoint, SQL, PowerApps; launched a SharePoint intake site with 1,000+ submissions in its first week.",
                "Warehouse Associate · Amazon Fulfillment Technologies & Robotics (Dec 2022 to Mar 2023), Robbinsville NJ.",
            ],
            footer: None,
        },
        ResumeSection {
            title: "Signature Projects",
            summary: None,
            bullets: vec![
                "Custom Neural Network Model Generator · Flask · PyTorch · React · Docker · TensorFlow: LeNet-5 based image classification; 40% accuracy gain via batch norm, dropout, augmentation.",
                "Crime Catcher AI Security System · Tkinter · Flask · OpenCV · Vue · SQLite · PyTorch: motion-triggered weapon detection with real-time alerts.",
                "Big Data Bowl · Aggressive vs Defensive Back Coverage (Kaggle): NFL coverage analysis notebook built with a partner.",
            ],
            footer: None,
        },
        ResumeSection {
            title: "Leadership & Skills",
            summary: None,
            bullets: vec![
                "Collegiate Powerlifter, Rutgers University (Sep 2023, Present): 6th place, 67.5kg, East Coast Collegiate Championships (Dec 2024); qualified for nationals. Secretary, Pakistani Student Association (Sep 2022 to May 2025).",
                "Skills: Python, Java, JavaScript, TypeScript, SQL, C#, C/C++; Node.js, Vue.js, Nuxt, React.js, Express, Flask, FastAPI; Azure, Azure AI Search; Power BI, Power Automate, Power Apps, SharePoint; Git, Docker, MongoDB, PostgreSQL",
            ],
            footer: Some(
                "This resume window mirrors the latest PDF; see LinkedIn for full experience and skills.",
            ),
        },
    ]
}

pub fn experience() -> Vec<TimelineEntry> {
    vec![
        TimelineEntry {
            role: "Software Engineer · FCB Health",
            points: vec![
                "Built Nuxt frontend for production-facing user workflows.",
                "Implemented Python + FastAPI backend services.",
                "Integrated Azure AI Search for retrieval-driven functionality.",
                "Hosted on Azure App Service with stable deployment pipelines.",
            ],
        },
        TimelineEntry {
            role: "Part-time Engineering Manager · CollabLab",
            points: vec![
                "Promoted internally while continuing to contribute hands-on as an engineer.",
                "Leading delivery across frontend-focused initiatives and mentoring contributors.",
            ],
        },
        TimelineEntry {
            role: "Regeneron Roles",
            points: vec![
                "Delivered QA/document-control workflows and Power Platform solutions for process reliability.",
            ],
        },
    ]
}

pub fn skills() -> Vec<Card> {
    vec![
        Card {
            title: "Frontend",
            body: "React, TypeScript, Nuxt, accessibility, interaction design, CSS systems.",
        },
        Card {
            title: "Backend",
            body: "Node.js, Express, Python/FastAPI, API architecture.",
        },
        Card {
            title: "Data + Cloud",
            body: "Azure App Service, Azure AI Search, SQL, Power BI.",
        },
    ]
}

pub fn contribution_highlights() -> Vec<Card> {
    vec![
        Card {
            title: "Camera-required guardrail",
            body: "CollabLab feature enforcing video availability for tutor rooms, pairing frontend toggles with backend verification.",
        },
        Card {
            title: "GxP-ready documentation",
            body: "Regeneron doc control tooling and SharePoint automation improved traceability across SOP review cycles.",
        },
        Card {
            title: "Infra contributions",
            body: "Missive board, telemetry, and live GitHub feed keep delivery signals transparent.",
        },
    ]
}

pub fn contact_links() -> Vec<Link> {
    vec![
        Link { label: "Email", href: "mailto:dh820@scarletmail.rutgers.edu" },
        Link { label: "LinkedIn", href: "https://www.linkedin.com/in/dayyan-hamid/" },
        Link { label: "GitHub", href: "https://github.com/dayy346" },
        Link { label: "LeetCode", href: LEETCODE_PROFILE },
    ]
}

/// A project the chat assistant can talk about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectBlurb {
    pub name: &'static str,
    pub description: &'static str,
}

pub const PROJECTS: [ProjectBlurb; 7] = [
    ProjectBlurb {
        name: "LeNet5Tool",
        description: "A personal project using a modified version of the LeNet-5 structure to develop machine learning models for any labeled datasets.",
    },
    ProjectBlurb {
        name: "AI_final",
        description: "Comparison between Perceptron and Naïve Bayes algorithms, analyzing their performance on classification tasks.",
    },
    ProjectBlurb {
        name: "Price Tracker Extension",
        description: "A Chrome extension that tracks product prices and notifies users when a price drop occurs. Uses React for the frontend, Puppeteer for web scraping, and Node.js for the backend.",
    },
    ProjectBlurb {
        name: "NFC Attendance System",
        description: "An NFC tag reader connected via USB to track attendance. When an NFC tag is scanned, the system records attendance and stores the data in a spreadsheet. Built in Java.",
    },
    ProjectBlurb {
        name: "EmailSpamChecker",
        description: "A machine learning-based email spam checker that classifies emails as 'spam' or 'ham' (legitimate). Provides an automated solution for spam detection.",
    },
    ProjectBlurb {
        name: "DiscordMusicBot",
        description: "A simple Discord bot that joins voice channels, plays audio from YouTube URLs, and controls playback. Uses discord.py and yt-dlp for streaming.",
    },
    ProjectBlurb {
        name: "Portfolio Website",
        description: "A personal portfolio showcasing projects, GitHub activity, and problem-solving skills. Features an interactive chatbot, GitHub contributions, LeetCode statistics, and a powerlifting section.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_links_are_absolute() {
        for link in contact_links() {
            assert!(
                link.href.starts_with("https://") || link.href.starts_with("mailto:"),
                "{}",
                link.href
            );
        }
    }

    #[test]
    fn test_resume_has_footer_on_last_section() {
        let sections = resume_sections();
        assert_eq!(sections.len(), 4);
        assert!(sections.last().and_then(|s| s.footer).is_some());
    }
}
