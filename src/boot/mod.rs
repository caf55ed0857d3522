// Boot sequence reducer
// Pure state transitions over elapsed time; the host owns the timer.

pub mod stages;
pub mod transfer;

use serde::Serialize;
use std::time::Duration;

pub use stages::{BootStage, BOOT_STAGES};

/// Keys that short-circuit the boot story
pub const SKIP_KEYS: [&str; 5] = ["s", "S", "Escape", "Enter", " "];

pub fn is_skip_key(key: &str) -> bool {
    SKIP_KEYS.contains(&key)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Complete,
    Active,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootSequence {
    stage_index: usize,
    lines_shown: usize,
    carry_ms: u64, // Time banked toward the next line
    done: bool,
}

impl BootSequence {
    /// Reduced motion skips straight to the desktop
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            stage_index: 0,
            lines_shown: 0,
            carry_ms: 0,
            done: reduced_motion || BOOT_STAGES.is_empty(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn stage_index(&self) -> usize {
        self.stage_index
    }

    pub fn stage(&self) -> &'static BootStage {
        &BOOT_STAGES[self.stage_index.min(BOOT_STAGES.len() - 1)]
    }

    /// Advance by `elapsed`, revealing one line per stage interval
    pub fn advance(mut self, elapsed: Duration) -> Self {
        if self.done {
            return self;
        }

        self.carry_ms += elapsed.as_millis() as u64;
        loop {
            let interval = self.stage().line_interval_ms();
            if self.done || self.carry_ms < interval {
                break;
            }
            self.carry_ms -= interval;
            self = self.step();
        }
        self
    }

    /// Reveal the next line, or move on once the stage is exhausted
    fn step(mut self) -> Self {
        if self.lines_shown < self.stage().lines.len() {
            self.lines_shown += 1;
        } else if self.stage_index + 1 < BOOT_STAGES.len() {
            self.stage_index += 1;
            self.lines_shown = 0;
            tracing::debug!("[Boot] stage -> {}", self.stage().id);
        } else {
            self = self.skip();
        }
        self
    }

    /// Jump to the end; calling it again changes nothing
    pub fn skip(mut self) -> Self {
        if !self.done {
            tracing::info!("[Boot] sequence complete");
        }
        self.done = true;
        self.stage_index = BOOT_STAGES.len() - 1;
        self.lines_shown = self.stage().lines.len();
        self.carry_ms = 0;
        self
    }

    pub fn handle_key(self, key: &str) -> Self {
        if is_skip_key(key) {
            self.skip()
        } else {
            self
        }
    }

    pub fn visible_lines(&self) -> &'static [&'static str] {
        let lines = self.stage().lines;
        &lines[..self.lines_shown.min(lines.len())]
    }

    /// Up to three lines still to come in the current stage
    pub fn upcoming_lines(&self) -> &'static [&'static str] {
        let lines = self.stage().lines;
        let start = self.lines_shown.min(lines.len());
        let end = (start + 3).min(lines.len());
        &lines[start..end]
    }

    pub fn stage_percent(&self) -> f64 {
        let total = self.stage().lines.len();
        if total == 0 {
            return 1.0;
        }
        (self.lines_shown as f64 / total as f64).min(1.0)
    }

    /// Overall progress across every stage, 0..=1
    pub fn progress(&self) -> f64 {
        if self.done {
            return 1.0;
        }
        let total = stages::total_lines();
        if total == 0 {
            return 1.0;
        }
        let before: usize = BOOT_STAGES[..self.stage_index]
            .iter()
            .map(|s| s.lines.len())
            .sum();
        ((before + self.lines_shown) as f64 / total as f64).min(1.0)
    }

    pub fn stage_statuses(&self) -> Vec<(&'static str, StageStatus)> {
        BOOT_STAGES
            .iter()
            .enumerate()
            .map(|(i, stage)| {
                let status = if self.done || i < self.stage_index {
                    StageStatus::Complete
                } else if i == self.stage_index {
                    StageStatus::Active
                } else {
                    StageStatus::Pending
                };
                (stage.id, status)
            })
            .collect()
    }

    pub fn view(&self) -> BootView {
        let stage = self.stage();
        BootView {
            done: self.done,
            stage_id: stage.id,
            stage_title: stage.title,
            subtitle: stage.subtitle,
            accent: stage.accent,
            metric_label: stage.metric_label,
            metric_value: stage.metric_value,
            narrative: stage.narrative,
            pulse: stage.pulse,
            stage_index: self.stage_index,
            stage_count: BOOT_STAGES.len(),
            visible_lines: self.visible_lines().to_vec(),
            upcoming_lines: self.upcoming_lines().to_vec(),
            stage_percent: self.stage_percent(),
            progress: self.progress(),
            next_stage: BOOT_STAGES.get(self.stage_index + 1).map(|s| s.title),
            statuses: self
                .stage_statuses()
                .into_iter()
                .map(|(id, status)| StageStatusView { id, status })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StageStatusView {
    pub id: &'static str,
    pub status: StageStatus,
}

/// Serializable snapshot for the boot screen
#[derive(Debug, Clone, Serialize)]
pub struct BootView {
    pub done: bool,
    pub stage_id: &'static str,
    pub stage_title: &'static str,
    pub subtitle: &'static str,
    /// CSS color of the stage badge
    pub accent: &'static str,
    pub metric_label: &'static str,
    pub metric_value: &'static str,
    pub narrative: &'static str,
    pub pulse: &'static str,
    pub stage_index: usize,
    pub stage_count: usize,
    pub visible_lines: Vec<&'static str>,
    pub upcoming_lines: Vec<&'static str>,
    pub stage_percent: f64,
    pub progress: f64,
    pub next_stage: Option<&'static str>,
    pub statuses: Vec<StageStatusView>,
}
