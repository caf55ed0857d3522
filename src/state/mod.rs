use std::collections::HashMap;

use self::window::{WindowInstance, WindowState};
use crate::apps::{AppId, FALLBACK_APP};

pub mod window;

/// Window map, focus target and stacking counter for the desktop
pub struct WindowManager {
    windows: HashMap<AppId, WindowInstance>,
    focused: AppId,
    z_counter: u32, // Only ever incremented
}

impl WindowManager {
    /// Desktop with the About window open and focused
    pub fn new() -> Self {
        let mut manager = Self {
            windows: HashMap::new(),
            focused: FALLBACK_APP,
            z_counter: 0,
        };
        manager.focus_window(FALLBACK_APP);
        manager
    }

    /// Bring a window to the front and give it focus, opening it if needed
    pub fn focus_window(&mut self, app_id: AppId) -> WindowInstance {
        self.focus_entry(app_id).clone()
    }

    fn focus_entry(&mut self, app_id: AppId) -> &mut WindowInstance {
        self.z_counter += 1;
        let z_order = self.z_counter;

        let window = self
            .windows
            .entry(app_id)
            .or_insert_with(|| WindowInstance::new(app_id));
        window.z_order = z_order;
        window.is_open = true;
        window.minimized = false;
        self.focused = app_id;

        tracing::debug!("[WM] focus {} (z={})", app_id.as_str(), z_order);
        window
    }

    pub fn open_window(&mut self, app_id: AppId) -> WindowInstance {
        self.focus_window(app_id)
    }

    /// Close a window; its position is kept for the next open
    pub fn close_window(&mut self, app_id: AppId) -> Option<WindowInstance> {
        let window = self.windows.get_mut(&app_id)?;
        window.is_open = false;
        window.minimized = false;
        let closed = window.clone();

        tracing::debug!("[WM] close {}", app_id.as_str());
        self.reassign_focus_from(app_id);
        Some(closed)
    }

    /// Hide a window while keeping it in the running list
    pub fn minimize_window(&mut self, app_id: AppId) -> Option<WindowInstance> {
        let window = self.windows.get_mut(&app_id)?;
        if !window.is_open {
            return None;
        }
        window.minimized = true;
        let minimized = window.clone();

        tracing::debug!("[WM] minimize {}", app_id.as_str());
        self.reassign_focus_from(app_id);
        Some(minimized)
    }

    /// Focus the window, then flip its maximized flag
    pub fn toggle_maximize(&mut self, app_id: AppId) -> WindowInstance {
        let window = self.focus_entry(app_id);
        window.maximized = !window.maximized;

        tracing::debug!("[WM] {} maximized={}", app_id.as_str(), window.maximized);
        window.clone()
    }

    /// Move a window. Clamping is up to the pointer handler; maximized windows stay put.
    pub fn drag_window(&mut self, app_id: AppId, x: f64, y: f64) -> Option<WindowInstance> {
        let window = self.windows.get_mut(&app_id)?;
        if window.maximized {
            return None;
        }
        window.x = x;
        window.y = y;
        Some(window.clone())
    }

    /// Alt+Tab: next visible window in registration order, wrapping around
    pub fn cycle_focus(&mut self) -> Option<AppId> {
        let visible: Vec<AppId> = AppId::ALL
            .iter()
            .copied()
            .filter(|app| self.is_visible(*app))
            .collect();

        if visible.is_empty() {
            return None;
        }

        let next = match visible.iter().position(|app| *app == self.focused) {
            Some(index) => visible[(index + 1) % visible.len()],
            None => visible[0],
        };
        self.focus_window(next);
        Some(next)
    }

    /// App currently holding focus, whether or not its window is visible
    pub fn focus_target(&self) -> AppId {
        self.focused
    }

    /// The focused window, only if it is actually rendered
    pub fn focused_window(&self) -> Option<&WindowInstance> {
        self.windows.get(&self.focused).filter(|w| w.is_visible())
    }

    pub fn is_focused(&self, app_id: AppId) -> bool {
        self.focused == app_id && self.is_visible(app_id)
    }

    pub fn is_visible(&self, app_id: AppId) -> bool {
        self.windows
            .get(&app_id)
            .map(|w| w.is_visible())
            .unwrap_or(false)
    }

    pub fn get_window(&self, app_id: AppId) -> Option<&WindowInstance> {
        self.windows.get(&app_id)
    }

    pub fn window_state(&self, app_id: AppId) -> WindowState {
        self.windows
            .get(&app_id)
            .map(|w| w.state())
            .unwrap_or(WindowState::Closed)
    }

    /// Rendered windows, bottom of the stack first
    pub fn visible_windows(&self) -> Vec<WindowInstance> {
        let mut visible: Vec<WindowInstance> = self
            .windows
            .values()
            .filter(|w| w.is_visible())
            .cloned()
            .collect();
        visible.sort_by_key(|w| w.z_order);
        visible
    }

    /// Open windows (minimized included) in registration order, for the taskbar
    pub fn running_apps(&self) -> Vec<AppId> {
        AppId::ALL
            .iter()
            .copied()
            .filter(|app| self.windows.get(app).map(|w| w.is_open).unwrap_or(false))
            .collect()
    }

    /// Every materialized window in registration order
    pub fn get_all_windows(&self) -> Vec<WindowInstance> {
        AppId::ALL
            .iter()
            .filter_map(|app| self.windows.get(app).cloned())
            .collect()
    }

    fn reassign_focus_from(&mut self, app_id: AppId) {
        if self.focused != app_id {
            return;
        }

        let next = self
            .windows
            .values()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_order)
            .map(|w| w.app_id)
            .unwrap_or(FALLBACK_APP);

        tracing::debug!(
            "[WM] focus moves {} -> {}",
            app_id.as_str(),
            next.as_str()
        );
        self.focused = next;
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_focus_invariant(wm: &WindowManager) {
        let focused: Vec<AppId> = AppId::ALL
            .iter()
            .copied()
            .filter(|app| wm.is_focused(*app))
            .collect();
        assert!(focused.len() <= 1);
        if let Some(app) = focused.first() {
            let win = wm.get_window(*app).unwrap();
            assert!(win.is_open && !win.minimized);
        }
    }

    #[test]
    fn test_starts_with_about_open() {
        let wm = WindowManager::new();
        assert!(wm.is_focused(AppId::About));
        assert_eq!(wm.running_apps(), vec![AppId::About]);
        // Other apps are materialized lazily
        assert!(wm.get_window(AppId::Projects).is_none());
    }

    #[test]
    fn test_desktop_scenario() {
        let mut wm = WindowManager::new();
        wm.open_window(AppId::About);
        wm.open_window(AppId::Projects);

        assert!(!wm.is_focused(AppId::About));
        assert!(wm.is_focused(AppId::Projects));
        let z_about = wm.get_window(AppId::About).unwrap().z_order;
        let z_projects = wm.get_window(AppId::Projects).unwrap().z_order;
        assert!(z_projects > z_about);

        wm.minimize_window(AppId::Projects);
        assert!(wm.is_focused(AppId::About));
        assert!(wm.running_apps().contains(&AppId::Projects));
        assert!(!wm
            .visible_windows()
            .iter()
            .any(|w| w.app_id == AppId::Projects));

        wm.close_window(AppId::About);
        assert_eq!(wm.focus_target(), FALLBACK_APP);
        assert!(wm.focused_window().is_none());
        assert_focus_invariant(&wm);
    }

    #[test]
    fn test_z_order_strictly_increases() {
        let mut wm = WindowManager::new();
        let mut last = wm.get_window(AppId::About).unwrap().z_order;
        for app in [AppId::Skills, AppId::About, AppId::Help, AppId::Skills, AppId::Contact] {
            let z = wm.focus_window(app).z_order;
            assert!(z > last);
            last = z;
        }

        let zs: HashSet<u32> = wm.get_all_windows().iter().map(|w| w.z_order).collect();
        assert_eq!(zs.len(), wm.get_all_windows().len());
    }

    #[test]
    fn test_close_focused_picks_highest_z() {
        let mut wm = WindowManager::new();
        wm.open_window(AppId::Skills);
        wm.open_window(AppId::Contact);
        wm.open_window(AppId::Resume);
        wm.focus_window(AppId::Skills); // Skills now above Contact and Resume
        wm.close_window(AppId::Skills);
        assert!(wm.is_focused(AppId::Resume));

        // Closing an unfocused window leaves focus alone
        wm.close_window(AppId::About);
        assert!(wm.is_focused(AppId::Resume));
        assert_focus_invariant(&wm);
    }

    #[test]
    fn test_close_preserves_position_and_reopen() {
        let mut wm = WindowManager::new();
        wm.open_window(AppId::Projects);
        wm.drag_window(AppId::Projects, 400.0, 300.0);
        wm.minimize_window(AppId::Projects);
        wm.close_window(AppId::Projects);
        assert_eq!(wm.window_state(AppId::Projects), WindowState::Closed);
        assert!(!wm.running_apps().contains(&AppId::Projects));

        let reopened = wm.open_window(AppId::Projects);
        assert!(reopened.is_visible());
        assert_eq!((reopened.x, reopened.y), (400.0, 300.0));
    }

    #[test]
    fn test_operations_on_unmaterialized_window_are_noops() {
        let mut wm = WindowManager::new();
        assert!(wm.close_window(AppId::Chatbot).is_none());
        assert!(wm.minimize_window(AppId::Chatbot).is_none());
        assert!(wm.drag_window(AppId::Chatbot, 10.0, 10.0).is_none());
        assert!(wm.is_focused(AppId::About));
    }

    #[test]
    fn test_minimize_closed_window_is_noop() {
        let mut wm = WindowManager::new();
        wm.open_window(AppId::Help);
        wm.close_window(AppId::Help);
        assert!(wm.minimize_window(AppId::Help).is_none());
        assert_eq!(wm.window_state(AppId::Help), WindowState::Closed);
    }

    #[test]
    fn test_maximized_window_ignores_drag() {
        let mut wm = WindowManager::new();
        let win = wm.toggle_maximize(AppId::About);
        assert!(win.maximized);
        let (x, y) = (win.x, win.y);
        assert!(wm.drag_window(AppId::About, 500.0, 500.0).is_none());
        let win = wm.get_window(AppId::About).unwrap();
        assert_eq!((win.x, win.y), (x, y));

        let win = wm.toggle_maximize(AppId::About);
        assert!(!win.maximized);
        let moved = wm.drag_window(AppId::About, 120.0, 90.0).unwrap();
        assert_eq!((moved.x, moved.y), (120.0, 90.0));
    }

    #[test]
    fn test_toggle_maximize_brings_to_front() {
        let mut wm = WindowManager::new();
        wm.open_window(AppId::Skills);
        let win = wm.toggle_maximize(AppId::About);
        assert!(wm.is_focused(AppId::About));
        assert!(win.z_order > wm.get_window(AppId::Skills).unwrap().z_order);
    }

    #[test]
    fn test_cycle_returns_after_n_steps() {
        let mut wm = WindowManager::new();
        wm.open_window(AppId::Projects);
        wm.open_window(AppId::Help);
        wm.open_window(AppId::Skills);
        wm.open_window(AppId::Contact);
        wm.minimize_window(AppId::Contact);

        let start = wm.focus_target();
        let n = wm.visible_windows().len();
        assert_eq!(n, 4);
        let mut seen = Vec::new();
        for _ in 0..n {
            seen.push(wm.cycle_focus().unwrap());
            assert_focus_invariant(&wm);
        }
        assert_eq!(wm.focus_target(), start);
        // Registration order, not stacking order
        assert_eq!(
            seen,
            vec![AppId::Help, AppId::About, AppId::Projects, AppId::Skills]
        );
    }

    #[test]
    fn test_cycle_with_nothing_visible_is_noop() {
        let mut wm = WindowManager::new();
        wm.close_window(AppId::About);
        let counter_before = wm.z_counter;
        assert_eq!(wm.cycle_focus(), None);
        assert_eq!(wm.z_counter, counter_before);
    }

    #[test]
    fn test_cycle_single_window_stays_put() {
        let mut wm = WindowManager::new();
        wm.open_window(AppId::Help);
        wm.focus_window(AppId::Resume);
        wm.minimize_window(AppId::Resume);
        wm.close_window(AppId::About);
        assert!(wm.is_focused(AppId::Help));
        assert_eq!(wm.cycle_focus(), Some(AppId::Help));
        assert_eq!(wm.cycle_focus(), Some(AppId::Help));
    }

    #[test]
    fn test_focus_invariant_over_mixed_sequence() {
        let mut wm = WindowManager::new();
        let script = [
            (0, AppId::Projects),
            (0, AppId::Skills),
            (2, AppId::Skills),
            (1, AppId::About),
            (0, AppId::Help),
            (2, AppId::Projects),
            (1, AppId::Help),
            (0, AppId::Skills),
            (3, AppId::Skills),
            (2, AppId::Skills),
            (1, AppId::Projects),
        ];
        for (op, app) in script {
            match op {
                0 => {
                    wm.open_window(app);
                }
                1 => {
                    wm.close_window(app);
                }
                2 => {
                    wm.minimize_window(app);
                }
                _ => {
                    wm.toggle_maximize(app);
                }
            }
            assert_focus_invariant(&wm);
            if wm.visible_windows().is_empty() {
                assert_eq!(wm.focus_target(), FALLBACK_APP);
            } else {
                assert!(wm.focused_window().is_some());
            }
        }
    }
}
