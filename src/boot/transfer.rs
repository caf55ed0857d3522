// Win9x "file transfer" boot dialog
// Alternate boot screen: a simulated download that opens the desktop when complete.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Length of the full simulated download
pub const TRANSFER_DURATION_MS: u64 = 8000;
/// Progress granted when a cancelled transfer resumes
pub const RESUME_BOOST: f64 = 0.4;
/// How long the dialog shows "Cancelling..." before resuming
pub const CANCEL_HOLD_MS: u64 = 1200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferPhase {
    Idle,
    Transferring,
    Cancelling,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransferState {
    pub phase: TransferPhase,
    pub progress: f64, // 0..=1
    pub close_when_complete: bool,
    pub rate_kbs: u32,
    pub eta_seconds: u32,
}

/// Simulated (rate KB/s, seconds remaining) for a given progress
pub fn simulate_transfer(progress: f64) -> (u32, u32) {
    let p = progress.clamp(0.0, 1.0);
    let rate = (120.0 + p * 180.0 + (p * PI).sin() * 40.0).round() as u32;
    let remaining = 1.0 - p;
    let eta = if remaining <= 0.0 {
        0
    } else {
        ((remaining * TRANSFER_DURATION_MS as f64) / 1000.0)
            .round()
            .max(1.0) as u32
    };
    (rate, eta)
}

impl TransferState {
    pub fn new(reduced_motion: bool) -> Self {
        let state = Self {
            phase: TransferPhase::Transferring,
            progress: 0.0,
            close_when_complete: false,
            rate_kbs: 0,
            eta_seconds: 0,
        };
        if reduced_motion {
            state.completed()
        } else {
            state
        }
    }

    fn completed(self) -> Self {
        Self {
            phase: TransferPhase::Completed,
            progress: 1.0,
            rate_kbs: 0,
            eta_seconds: 0,
            ..self
        }
    }

    /// Advance progress by `delta`, optionally forcing the phase first
    pub fn tick(self, delta: f64, phase_override: Option<TransferPhase>) -> Self {
        match phase_override.unwrap_or(self.phase) {
            TransferPhase::Cancelling => Self {
                phase: TransferPhase::Cancelling,
                ..self
            },
            TransferPhase::Completed => self.completed(),
            TransferPhase::Idle | TransferPhase::Transferring => {
                let progress = (self.progress + delta).min(1.0);
                let (rate_kbs, eta_seconds) = simulate_transfer(progress);
                let phase = if progress >= 1.0 {
                    TransferPhase::Completed
                } else {
                    TransferPhase::Transferring
                };
                Self {
                    phase,
                    progress,
                    rate_kbs,
                    eta_seconds,
                    ..self
                }
            }
        }
    }

    /// Progress delta for `elapsed_ms` of wall time
    pub fn advance_ms(self, elapsed_ms: u64) -> Self {
        if self.phase != TransferPhase::Transferring {
            return self;
        }
        self.tick(elapsed_ms as f64 / TRANSFER_DURATION_MS as f64, None)
    }

    pub fn cancel(self) -> Self {
        match self.phase {
            TransferPhase::Completed | TransferPhase::Cancelling => self,
            _ => Self {
                phase: TransferPhase::Cancelling,
                ..self
            },
        }
    }

    /// Leave "Cancelling..." and continue with a progress boost
    pub fn resume(self) -> Self {
        if self.phase != TransferPhase::Cancelling {
            return self;
        }
        self.tick(RESUME_BOOST, Some(TransferPhase::Transferring))
    }

    pub fn set_close_when_complete(self, close_when_complete: bool) -> Self {
        Self {
            close_when_complete,
            ..self
        }
    }

    /// The Open button only works once the transfer is done
    pub fn can_open(&self) -> bool {
        self.phase == TransferPhase::Completed
    }

    pub fn should_auto_close(&self) -> bool {
        self.can_open() && self.close_when_complete
    }
}
