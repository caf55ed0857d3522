// Boot story content: four stages revealed line by line before the desktop

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BootStage {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub accent: &'static str,
    pub duration_ms: u64,
    pub metric_label: &'static str,
    pub metric_value: &'static str,
    pub lines: &'static [&'static str],
    pub narrative: &'static str,
    pub pulse: &'static str,
}

impl BootStage {
    /// Time between two revealed lines of this stage
    pub fn line_interval_ms(&self) -> u64 {
        if self.lines.is_empty() {
            self.duration_ms.max(1)
        } else {
            (self.duration_ms / self.lines.len() as u64).max(1)
        }
    }
}

pub const BOOT_STAGES: &[BootStage] = &[
    BootStage {
        id: "bios",
        title: "Crystalline POST",
        subtitle: "Cinematic sensor choreography aligns hardware with narrative intent.",
        accent: "#f0a95e",
        duration_ms: 2000,
        metric_label: "Sensor coherence",
        metric_value: "Crystalline POST at 99.7% readiness",
        narrative: "Early storytelling cues shrink uncertainty. We warm up the instruments in stillness before revealing the story.",
        pulse: "Pulse: measured breath, slow amber pulses, and mechanical shutters easing into motion.",
        lines: &[
            "[POST] Crystalline sensors performing 32-bit handshake",
            "[POST] Haptic keyboard + pointer calibrations verified",
            "[POST] NVMe memory grid refreshed with redundancy guardrails",
            "[POST] Ambient light grid warming for premium palettes",
            "[POST] Story fragments prepped for the cinematic arc",
            "[OK] BIOS warp drive engaged · hush tuned for stage two",
        ],
    },
    BootStage {
        id: "kernel",
        title: "Quantum Kernel Rhythm",
        subtitle: "Interaction engine, motion cues, and reliability services get in sync.",
        accent: "#82c7b3",
        duration_ms: 1800,
        metric_label: "Kernel cadence",
        metric_value: "Scheduler locks 3.2ms beats · input concierge armed",
        narrative: "Embodied interaction principles keep every micro-cue consistent, comfortable, and intentional.",
        pulse: "Pulse: ribboned teal glow that swirls with each scheduler beat.",
        lines: &[
            "[OK] Kernel heartbeat synced with atmospheric motion cadence",
            "[OK] Scheduler choreographs cinematic + comfort zones",
            "[OK] Window manager wires tuned for layered inertia",
            "[OK] Input concierge armed: Alt+Tab, Ctrl+M, Enter",
            "[OK] Missive board + telemetry streaming curated pulses",
            "[OK] Reduced-motion fallbacks standing by",
        ],
    },
    BootStage {
        id: "atmosphere",
        title: "Atmospheric Shell",
        subtitle: "Gradient fog, halos, and depth cues paint the workspace.",
        accent: "#c27dcf",
        duration_ms: 1500,
        metric_label: "Atmospheric depth",
        metric_value: "Four matte gradients locked · halo intensity steady",
        narrative: "Layered gradients and subtle haze keep focus while delivering nostalgia.",
        pulse: "Pulse: violet halos ripple gently as if breathing through a retro console.",
        lines: &[
            "[OK] Palette matrix applying atmospheric gradient overlays",
            "[OK] Atmosphere conductor warms stage lighting + halos",
            "[OK] Desktop motif introduces matte, chrome, and warmth",
            "[OK] Narrative audio hints locked to transition cadence",
            "[OK] Taskbar + overlays tuned to kinetic bounce rhythms",
            "[READY] Ambient shell present · retro lightscapes ready",
        ],
    },
    BootStage {
        id: "story",
        title: "Story Sync & Launch",
        subtitle: "Every window, repo, and missive narrates the mission.",
        accent: "#6edb9f",
        duration_ms: 1400,
        metric_label: "Story sync",
        metric_value: "Repo + Missive signals streaming · narrative locked",
        narrative: "Closing with a friendly narrative hook makes the shell feel alive and trustworthy.",
        pulse: "Pulse: emerald streaks cascade toward the horizon, teasing the desktop.",
        lines: &[
            "[OK] Story watchers align: focus, mood, and highlight cues",
            "[OK] Repositories, missives, and windows materialized",
            "[OK] Cinematic boot story synced to live analytics",
            "[READY] Portfolio interface fully awake · welcoming you home",
        ],
    },
];

/// Number of lines across every stage
pub fn total_lines() -> usize {
    BOOT_STAGES.iter().map(|s| s.lines.len()).sum()
}
