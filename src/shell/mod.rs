// Desktop session controller
// Owns the window manager plus the boot, login and start menu state. Every
// mutation goes through the methods below so the host (Tauri or a test) can
// drive the shell without a renderer.

pub mod clock;

use serde::Serialize;
use std::time::Duration;

use crate::apps::{registry, AppEntry, AppId};
use crate::boot::transfer::TransferState;
use crate::boot::{BootSequence, BootView};
use crate::input::{resolve_shell_key, KeyPress, ShellAction};
use crate::state::window::{DragSession, WindowInstance};
use crate::state::WindowManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionPhase {
    Booting,
    LoggingIn,
    Desktop,
}

pub struct DesktopShell {
    phase: SessionPhase,
    boot: BootSequence,
    windows: WindowManager,
    start_menu_open: bool,
    is_mobile: bool,
    drag: Option<DragSession>,
}

impl DesktopShell {
    pub fn new(reduced_motion: bool) -> Self {
        let boot = BootSequence::new(reduced_motion);
        let phase = if boot.is_done() {
            SessionPhase::LoggingIn
        } else {
            SessionPhase::Booting
        };
        Self {
            phase,
            boot,
            windows: WindowManager::new(),
            start_menu_open: false,
            is_mobile: false,
            drag: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn boot(&self) -> &BootSequence {
        &self.boot
    }

    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    pub fn is_start_menu_open(&self) -> bool {
        self.start_menu_open
    }

    // ===== Boot & login =====

    /// Feed elapsed timer time into the boot reducer
    pub fn tick(&mut self, elapsed: Duration) {
        if self.phase != SessionPhase::Booting {
            return;
        }
        self.boot = self.boot.advance(elapsed);
        self.sync_boot_phase();
    }

    pub fn skip_boot(&mut self) {
        if self.phase != SessionPhase::Booting {
            return;
        }
        self.boot = self.boot.skip();
        self.sync_boot_phase();
    }

    /// Transfer dialog reached 100% with "close when complete" checked:
    /// leave the boot screen. Returns whether the session moved on.
    pub fn finish_transfer(&mut self, transfer: &TransferState) -> bool {
        if self.phase != SessionPhase::Booting || !transfer.should_auto_close() {
            return false;
        }
        tracing::info!("[Boot] transfer complete, closing dialog");
        self.skip_boot();
        true
    }

    /// Cosmetic log-on: no credentials, just the transition to the desktop
    pub fn log_on(&mut self) -> bool {
        if self.phase != SessionPhase::LoggingIn {
            return false;
        }
        tracing::info!("[Shell] session active");
        self.phase = SessionPhase::Desktop;
        true
    }

    fn sync_boot_phase(&mut self) {
        if self.boot.is_done() {
            self.phase = SessionPhase::LoggingIn;
        }
    }

    // ===== Keyboard =====

    /// Route a key press; returns true when shell state changed
    pub fn handle_key(&mut self, press: &KeyPress) -> bool {
        match self.phase {
            SessionPhase::Booting => {
                let before = self.boot;
                self.boot = self.boot.handle_key(&press.key);
                self.sync_boot_phase();
                self.boot != before
            }
            SessionPhase::LoggingIn => false,
            SessionPhase::Desktop => {
                if self.is_mobile {
                    return false;
                }
                match resolve_shell_key(press) {
                    Some(action) => self.apply_action(action),
                    None => false,
                }
            }
        }
    }

    pub fn apply_action(&mut self, action: ShellAction) -> bool {
        if self.phase != SessionPhase::Desktop || self.is_mobile {
            return false;
        }
        match action {
            ShellAction::CloseStartMenu => self.close_start_menu(),
            ShellAction::CycleFocus => self.windows.cycle_focus().is_some(),
            ShellAction::MinimizeFocused => {
                let target = self.windows.focus_target();
                self.windows.minimize_window(target).is_some()
            }
        }
    }

    // ===== Start menu =====

    pub fn toggle_start_menu(&mut self) -> bool {
        self.start_menu_open = !self.start_menu_open;
        self.start_menu_open
    }

    /// Returns true if the menu was open
    pub fn close_start_menu(&mut self) -> bool {
        std::mem::replace(&mut self.start_menu_open, false)
    }

    /// Clicking the empty desktop dismisses the start menu
    pub fn click_desktop(&mut self) {
        self.close_start_menu();
    }

    pub fn set_mobile(&mut self, is_mobile: bool) {
        self.is_mobile = is_mobile;
    }

    // ===== Windows =====

    /// Launch from the start menu, a desktop icon or the taskbar
    pub fn open_window(&mut self, app_id: AppId) -> WindowInstance {
        self.start_menu_open = false;
        self.windows.open_window(app_id)
    }

    pub fn focus_window(&mut self, app_id: AppId) -> WindowInstance {
        self.windows.focus_window(app_id)
    }

    pub fn close_window(&mut self, app_id: AppId) -> Option<WindowInstance> {
        self.windows.close_window(app_id)
    }

    pub fn minimize_window(&mut self, app_id: AppId) -> Option<WindowInstance> {
        self.windows.minimize_window(app_id)
    }

    pub fn toggle_maximize(&mut self, app_id: AppId) -> WindowInstance {
        self.windows.toggle_maximize(app_id)
    }

    pub fn drag_window(&mut self, app_id: AppId, x: f64, y: f64) -> Option<WindowInstance> {
        self.windows.drag_window(app_id, x, y)
    }

    pub fn cycle_focus(&mut self) -> Option<AppId> {
        self.windows.cycle_focus()
    }

    // ===== Pointer drag =====

    /// Title bar pressed: focus the window and remember where the drag began.
    /// Maximized windows don't move, so no session starts.
    pub fn begin_drag(&mut self, app_id: AppId, pointer_x: f64, pointer_y: f64) -> bool {
        let window = self.windows.focus_window(app_id);
        if window.maximized {
            self.drag = None;
            return false;
        }
        self.drag = Some(DragSession::begin(&window, pointer_x, pointer_y));
        true
    }

    pub fn drag_pointer(&mut self, pointer_x: f64, pointer_y: f64) -> Option<WindowInstance> {
        let session = self.drag?;
        let (x, y) = session.target(pointer_x, pointer_y);
        self.windows.drag_window(session.app_id, x, y)
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn snapshot(&self) -> DesktopSnapshot {
        DesktopSnapshot {
            phase: self.phase,
            boot: self.boot.view(),
            apps: registry(),
            windows: self.windows.get_all_windows(),
            visible: self
                .windows
                .visible_windows()
                .iter()
                .map(|w| w.app_id)
                .collect(),
            running: self.windows.running_apps(),
            focused: self.windows.focused_window().map(|w| w.app_id),
            start_menu_open: self.start_menu_open,
            is_mobile: self.is_mobile,
        }
    }
}

/// Everything the frontend needs to render the shell
#[derive(Debug, Clone, Serialize)]
pub struct DesktopSnapshot {
    pub phase: SessionPhase,
    pub boot: BootView,
    pub apps: Vec<AppEntry>,
    pub windows: Vec<WindowInstance>,
    /// Rendered windows, bottom of the stack first
    pub visible: Vec<AppId>,
    /// Taskbar strip, registration order
    pub running: Vec<AppId>,
    pub focused: Option<AppId>,
    pub start_menu_open: bool,
    pub is_mobile: bool,
}
