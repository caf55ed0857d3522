use serde::{Deserialize, Serialize};

use crate::apps::AppId;

/// Left edge a dragged window may not cross
pub const MIN_DRAG_X: f64 = 8.0;
/// Top strip reserved for the taskbar
pub const MIN_DRAG_Y: f64 = 52.0;

/// Render state derived from the window flags
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum WindowState {
    /// Not in the visible set and not running
    Closed,
    /// Running (listed in the taskbar) but not rendered
    Minimized,
    /// Rendered at its dragged position
    Normal,
    /// Rendered over the full desktop area, drag suspended
    Maximized,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct WindowInstance {
    pub app_id: AppId,
    pub title: String,
    pub is_open: bool,
    pub minimized: bool,
    pub maximized: bool,
    pub x: f64,
    pub y: f64,
    pub z_order: u32,
}

impl WindowInstance {
    /// Fresh, closed window at the app's initial position
    pub fn new(app_id: AppId) -> Self {
        let (x, y) = app_id.initial_position();
        Self {
            app_id,
            title: app_id.label().to_string(),
            is_open: false,
            minimized: false,
            maximized: false,
            x,
            y,
            z_order: 0,
        }
    }

    /// Open and not minimized
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.minimized
    }

    pub fn state(&self) -> WindowState {
        if !self.is_open {
            WindowState::Closed
        } else if self.minimized {
            WindowState::Minimized
        } else if self.maximized {
            WindowState::Maximized
        } else {
            WindowState::Normal
        }
    }
}

/// Keep a dragged window inside the visible desktop
pub fn clamp_drag_position(x: f64, y: f64) -> (f64, f64) {
    (x.max(MIN_DRAG_X), y.max(MIN_DRAG_Y))
}

/// Pointer drag in progress on a window title bar
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub app_id: AppId,
    origin: (f64, f64),
    pointer_start: (f64, f64),
}

impl DragSession {
    pub fn begin(window: &WindowInstance, pointer_x: f64, pointer_y: f64) -> Self {
        Self {
            app_id: window.app_id,
            origin: (window.x, window.y),
            pointer_start: (pointer_x, pointer_y),
        }
    }

    /// Clamped window position for the current pointer location
    pub fn target(&self, pointer_x: f64, pointer_y: f64) -> (f64, f64) {
        clamp_drag_position(
            self.origin.0 + pointer_x - self.pointer_start.0,
            self.origin.1 + pointer_y - self.pointer_start.1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_flags() {
        let mut win = WindowInstance::new(AppId::Skills);
        assert_eq!(win.state(), WindowState::Closed);
        win.is_open = true;
        assert_eq!(win.state(), WindowState::Normal);
        win.maximized = true;
        assert_eq!(win.state(), WindowState::Maximized);
        win.minimized = true;
        assert_eq!(win.state(), WindowState::Minimized);
        assert!(!win.is_visible());
    }

    #[test]
    fn test_drag_session_clamps_to_desktop() {
        let win = WindowInstance::new(AppId::About); // starts at (90, 84)
        let drag = DragSession::begin(&win, 100.0, 100.0);
        assert_eq!(drag.target(150.0, 130.0), (140.0, 114.0));
        // Dragged past the left edge and into the taskbar strip
        assert_eq!(drag.target(-500.0, 0.0), (MIN_DRAG_X, MIN_DRAG_Y));
    }
}
