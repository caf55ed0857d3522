// Tauri host: exposes the shell core to the webview.
// Every command that changes the shell emits `desktop-changed` with a fresh snapshot.

use std::sync::Mutex;
use std::time::Duration;

use serde::Serialize;
use tauri::{AppHandle, Emitter, Manager, State};
use tauri_plugin_global_shortcut::{Code, GlobalShortcutExt, Modifiers, Shortcut, ShortcutState};

use crate::apps::AppId;
use crate::boot::transfer::{TransferState, CANCEL_HOLD_MS};
use crate::chat::{ask_relay, ChatMessage, ChatSession};
use crate::content::{panel_for, Panel};
use crate::feeds::{self, FeedConfig, FeedHub, FeedKind, FeedSnapshot};
use crate::input::{KeyPress, ShellAction};
use crate::shell::clock::taskbar_clock;
use crate::shell::{DesktopShell, DesktopSnapshot};

const DEFAULT_RELAY_URL: &str = "http://localhost:3000/chat";

/// Long-lived handles shared by the async commands
struct Services {
    http: reqwest::Client,
    feeds: FeedConfig,
    relay_url: String,
}

#[derive(Clone, Serialize)]
struct GlobalShortcutPayload {
    action: ShellAction,
    changed: bool,
}

fn emit_snapshot(app: &AppHandle, shell: &DesktopShell) -> Result<DesktopSnapshot, String> {
    let snapshot = shell.snapshot();
    app.emit("desktop-changed", snapshot.clone())
        .map_err(|e| e.to_string())?;
    Ok(snapshot)
}

/// Unknown ids from the frontend are ignored, not errors
fn parse_app(app_id: &str) -> Option<AppId> {
    let parsed = AppId::from_str(app_id);
    if parsed.is_none() {
        tracing::debug!("[TAURI CMD] ignoring unknown app id {:?}", app_id);
    }
    parsed
}

// ===== Window Management Commands =====

#[tauri::command]
fn get_desktop_snapshot(state: State<Mutex<DesktopShell>>) -> Result<DesktopSnapshot, String> {
    let shell = state.lock().map_err(|e| e.to_string())?;
    Ok(shell.snapshot())
}

#[tauri::command]
fn open_window(
    app_id: String,
    app: AppHandle,
    state: State<Mutex<DesktopShell>>,
) -> Result<DesktopSnapshot, String> {
    let mut shell = state.lock().map_err(|e| e.to_string())?;
    if let Some(id) = parse_app(&app_id) {
        tracing::info!("[WM] open {}", id.as_str());
        shell.open_window(id);
    }
    emit_snapshot(&app, &shell)
}

#[tauri::command]
fn close_window(
    app_id: String,
    app: AppHandle,
    state: State<Mutex<DesktopShell>>,
) -> Result<DesktopSnapshot, String> {
    let mut shell = state.lock().map_err(|e| e.to_string())?;
    if let Some(id) = parse_app(&app_id) {
        shell.close_window(id);
    }
    emit_snapshot(&app, &shell)
}

#[tauri::command]
fn minimize_window(
    app_id: String,
    app: AppHandle,
    state: State<Mutex<DesktopShell>>,
) -> Result<DesktopSnapshot, String> {
    let mut shell = state.lock().map_err(|e| e.to_string())?;
    if let Some(id) = parse_app(&app_id) {
        shell.minimize_window(id);
    }
    emit_snapshot(&app, &shell)
}

#[tauri::command]
fn toggle_maximize(
    app_id: String,
    app: AppHandle,
    state: State<Mutex<DesktopShell>>,
) -> Result<DesktopSnapshot, String> {
    let mut shell = state.lock().map_err(|e| e.to_string())?;
    if let Some(id) = parse_app(&app_id) {
        shell.toggle_maximize(id);
    }
    emit_snapshot(&app, &shell)
}

#[tauri::command]
fn focus_window(
    app_id: String,
    app: AppHandle,
    state: State<Mutex<DesktopShell>>,
) -> Result<DesktopSnapshot, String> {
    let mut shell = state.lock().map_err(|e| e.to_string())?;
    if let Some(id) = parse_app(&app_id) {
        shell.focus_window(id);
    }
    emit_snapshot(&app, &shell)
}

/// Direct position write (keyboard nudges, restore). Clamped here since the
/// frontend may send anything.
#[tauri::command]
fn drag_window(
    app_id: String,
    x: f64,
    y: f64,
    app: AppHandle,
    state: State<Mutex<DesktopShell>>,
) -> Result<DesktopSnapshot, String> {
    let mut shell = state.lock().map_err(|e| e.to_string())?;
    if let Some(id) = parse_app(&app_id) {
        let (x, y) = crate::state::window::clamp_drag_position(x, y);
        shell.drag_window(id, x, y);
    }
    emit_snapshot(&app, &shell)
}

#[tauri::command]
fn begin_drag(
    app_id: String,
    pointer_x: f64,
    pointer_y: f64,
    app: AppHandle,
    state: State<Mutex<DesktopShell>>,
) -> Result<DesktopSnapshot, String> {
    let mut shell = state.lock().map_err(|e| e.to_string())?;
    if let Some(id) = parse_app(&app_id) {
        shell.begin_drag(id, pointer_x, pointer_y);
    }
    emit_snapshot(&app, &shell)
}

#[tauri::command]
fn drag_pointer(
    pointer_x: f64,
    pointer_y: f64,
    app: AppHandle,
    state: State<Mutex<DesktopShell>>,
) -> Result<DesktopSnapshot, String> {
    let mut shell = state.lock().map_err(|e| e.to_string())?;
    shell.drag_pointer(pointer_x, pointer_y);
    emit_snapshot(&app, &shell)
}

#[tauri::command]
fn end_drag(state: State<Mutex<DesktopShell>>) -> Result<(), String> {
    let mut shell = state.lock().map_err(|e| e.to_string())?;
    shell.end_drag();
    Ok(())
}

#[tauri::command]
fn cycle_focus(app: AppHandle, state: State<Mutex<DesktopShell>>) -> Result<DesktopSnapshot, String> {
    let mut shell = state.lock().map_err(|e| e.to_string())?;
    shell.cycle_focus();
    emit_snapshot(&app, &shell)
}

// ===== Start menu & keyboard =====

#[tauri::command]
fn toggle_start_menu(app: AppHandle, state: State<Mutex<DesktopShell>>) -> Result<bool, String> {
    let mut shell = state.lock().map_err(|e| e.to_string())?;
    let open = shell.toggle_start_menu();
    emit_snapshot(&app, &shell)?;
    Ok(open)
}

#[tauri::command]
fn close_start_menu(app: AppHandle, state: State<Mutex<DesktopShell>>) -> Result<bool, String> {
    let mut shell = state.lock().map_err(|e| e.to_string())?;
    let was_open = shell.close_start_menu();
    if was_open {
        emit_snapshot(&app, &shell)?;
    }
    Ok(was_open)
}

#[tauri::command]
fn set_mobile_layout(
    is_mobile: bool,
    app: AppHandle,
    state: State<Mutex<DesktopShell>>,
) -> Result<DesktopSnapshot, String> {
    let mut shell = state.lock().map_err(|e| e.to_string())?;
    shell.set_mobile(is_mobile);
    emit_snapshot(&app, &shell)
}

/// Keys seen by the webview while it has focus
#[tauri::command]
fn handle_shell_key(
    press: KeyPress,
    app: AppHandle,
    state: State<Mutex<DesktopShell>>,
) -> Result<bool, String> {
    let mut shell = state.lock().map_err(|e| e.to_string())?;
    let changed = shell.handle_key(&press);
    if changed {
        emit_snapshot(&app, &shell)?;
    }
    Ok(changed)
}

#[tauri::command]
fn get_taskbar_clock() -> String {
    taskbar_clock(&chrono::Local::now())
}

// ===== Boot & login =====

#[tauri::command]
fn boot_tick(
    elapsed_ms: u64,
    app: AppHandle,
    state: State<Mutex<DesktopShell>>,
) -> Result<DesktopSnapshot, String> {
    let mut shell = state.lock().map_err(|e| e.to_string())?;
    shell.tick(Duration::from_millis(elapsed_ms));
    emit_snapshot(&app, &shell)
}

#[tauri::command]
fn skip_boot(app: AppHandle, state: State<Mutex<DesktopShell>>) -> Result<DesktopSnapshot, String> {
    let mut shell = state.lock().map_err(|e| e.to_string())?;
    tracing::info!("[Boot] skipped");
    shell.skip_boot();
    emit_snapshot(&app, &shell)
}

#[tauri::command]
fn log_on(app: AppHandle, state: State<Mutex<DesktopShell>>) -> Result<DesktopSnapshot, String> {
    let mut shell = state.lock().map_err(|e| e.to_string())?;
    shell.log_on();
    emit_snapshot(&app, &shell)
}

// ===== Transfer dialog =====

fn emit_transfer(app: &AppHandle, transfer: TransferState) -> Result<TransferState, String> {
    app.emit("transfer-changed", transfer)
        .map_err(|e| e.to_string())?;
    Ok(transfer)
}

/// Leave the boot screen if the dialog completed with "close when complete" set
fn finish_transfer(
    app: &AppHandle,
    shell: &Mutex<DesktopShell>,
    transfer: &TransferState,
) -> Result<(), String> {
    let mut shell = shell.lock().map_err(|e| e.to_string())?;
    if shell.finish_transfer(transfer) {
        emit_snapshot(app, &shell)?;
    }
    Ok(())
}

#[tauri::command]
fn transfer_tick(
    elapsed_ms: u64,
    app: AppHandle,
    state: State<Mutex<TransferState>>,
    shell: State<Mutex<DesktopShell>>,
) -> Result<TransferState, String> {
    let ticked = {
        let mut transfer = state.lock().map_err(|e| e.to_string())?;
        *transfer = transfer.advance_ms(elapsed_ms);
        *transfer
    };
    emit_transfer(&app, ticked)?;
    finish_transfer(&app, &shell, &ticked)?;
    Ok(ticked)
}

/// Show "Cancelling..." for a moment, then carry on with a progress boost
#[tauri::command]
fn transfer_cancel(app: AppHandle, state: State<Mutex<TransferState>>) -> Result<TransferState, String> {
    let mut transfer = state.lock().map_err(|e| e.to_string())?;
    let before = *transfer;
    *transfer = transfer.cancel();
    if *transfer != before {
        let handle = app.clone();
        tauri::async_runtime::spawn(async move {
            tokio::time::sleep(Duration::from_millis(CANCEL_HOLD_MS)).await;
            let state = handle.state::<Mutex<TransferState>>();
            let resumed = match state.lock() {
                Ok(mut transfer) => {
                    *transfer = transfer.resume();
                    *transfer
                }
                Err(e) => {
                    tracing::error!("[Boot] transfer state poisoned: {}", e);
                    return;
                }
            };
            if let Err(e) = emit_transfer(&handle, resumed) {
                tracing::warn!("[Boot] failed to emit transfer state: {}", e);
            }
            let shell = handle.state::<Mutex<DesktopShell>>();
            if let Err(e) = finish_transfer(&handle, &shell, &resumed) {
                tracing::warn!("[Boot] failed to close transfer dialog: {}", e);
            }
        });
    }
    emit_transfer(&app, *transfer)
}

#[tauri::command]
fn transfer_set_close_when_complete(
    close_when_complete: bool,
    app: AppHandle,
    state: State<Mutex<TransferState>>,
) -> Result<TransferState, String> {
    let mut transfer = state.lock().map_err(|e| e.to_string())?;
    *transfer = transfer.set_close_when_complete(close_when_complete);
    emit_transfer(&app, *transfer)
}

/// The dialog's Open button; ends the boot once the transfer completed
#[tauri::command]
fn transfer_open(
    app: AppHandle,
    transfer: State<Mutex<TransferState>>,
    shell: State<Mutex<DesktopShell>>,
) -> Result<bool, String> {
    let can_open = transfer.lock().map_err(|e| e.to_string())?.can_open();
    if can_open {
        let mut shell = shell.lock().map_err(|e| e.to_string())?;
        shell.skip_boot();
        emit_snapshot(&app, &shell)?;
    }
    Ok(can_open)
}

// ===== Panels & feeds =====

#[tauri::command]
fn get_panel(app_id: String, hub: State<Mutex<FeedHub>>) -> Result<Option<Panel>, String> {
    let hub = hub.lock().map_err(|e| e.to_string())?;
    Ok(parse_app(&app_id).map(|id| panel_for(id, &hub.snapshot())))
}

async fn refresh_feed(
    kind: FeedKind,
    force: bool,
    app: &AppHandle,
    hub: &Mutex<FeedHub>,
    services: &Services,
) -> Result<FeedSnapshot, String> {
    let ticket = {
        let mut hub = hub.lock().map_err(|e| e.to_string())?;
        if !force && !hub.needs_refresh(kind) {
            return Ok(hub.snapshot());
        }
        hub.begin(kind)
    };

    let update = feeds::fetch(&services.http, &services.feeds, kind).await;

    let snapshot = {
        let mut hub = hub.lock().map_err(|e| e.to_string())?;
        if !update.apply(&mut hub, ticket) {
            tracing::debug!("[Feeds] dropped superseded {:?} result", kind);
        }
        hub.snapshot()
    };
    app.emit("feeds-changed", snapshot.clone())
        .map_err(|e| e.to_string())?;
    Ok(snapshot)
}

#[tauri::command]
async fn refresh_projects(
    force: Option<bool>,
    app: AppHandle,
    hub: State<'_, Mutex<FeedHub>>,
    services: State<'_, Services>,
) -> Result<FeedSnapshot, String> {
    refresh_feed(FeedKind::Repos, force.unwrap_or(false), &app, &hub, &services).await
}

#[tauri::command]
async fn refresh_contributions(
    force: Option<bool>,
    app: AppHandle,
    hub: State<'_, Mutex<FeedHub>>,
    services: State<'_, Services>,
) -> Result<FeedSnapshot, String> {
    refresh_feed(FeedKind::Contributions, force.unwrap_or(false), &app, &hub, &services).await
}

#[tauri::command]
async fn refresh_leetcode(
    force: Option<bool>,
    app: AppHandle,
    hub: State<'_, Mutex<FeedHub>>,
    services: State<'_, Services>,
) -> Result<FeedSnapshot, String> {
    refresh_feed(FeedKind::Leetcode, force.unwrap_or(false), &app, &hub, &services).await
}

// ===== Chat =====

#[tauri::command]
fn get_chat_transcript(chat: State<Mutex<ChatSession>>) -> Result<Vec<ChatMessage>, String> {
    let session = chat.lock().map_err(|e| e.to_string())?;
    Ok(session.messages().to_vec())
}

#[tauri::command]
async fn send_chat_message(
    message: String,
    app: AppHandle,
    chat: State<'_, Mutex<ChatSession>>,
    services: State<'_, Services>,
) -> Result<Vec<ChatMessage>, String> {
    let outgoing = {
        let mut session = chat.lock().map_err(|e| e.to_string())?;
        match session.submit(&message) {
            Some(text) => {
                app.emit("chat-changed", session.messages().to_vec())
                    .map_err(|e| e.to_string())?;
                text
            }
            None => return Ok(session.messages().to_vec()),
        }
    };

    let reply = ask_relay(&services.http, &services.relay_url, &outgoing).await;

    let transcript = {
        let mut session = chat.lock().map_err(|e| e.to_string())?;
        session.receive(reply);
        session.messages().to_vec()
    };
    app.emit("chat-changed", transcript.clone())
        .map_err(|e| e.to_string())?;
    Ok(transcript)
}

// ===== Host window =====

#[tauri::command]
fn toggle_fullscreen(app: AppHandle) -> Result<bool, String> {
    let window = app
        .get_webview_window("main")
        .ok_or_else(|| "Main window not found".to_string())?;

    let is_fullscreen = window
        .is_fullscreen()
        .map_err(|e| format!("Failed to check fullscreen state: {}", e))?;

    window
        .set_fullscreen(!is_fullscreen)
        .map_err(|e| format!("Failed to toggle fullscreen: {}", e))?;
    Ok(!is_fullscreen)
}

/// OS-level bindings for the shell keys
fn shell_shortcuts() -> Vec<(Shortcut, ShellAction)> {
    vec![
        (
            Shortcut::new(Some(Modifiers::ALT), Code::Tab),
            ShellAction::CycleFocus,
        ),
        (
            Shortcut::new(Some(Modifiers::CONTROL), Code::KeyM),
            ShellAction::MinimizeFocused,
        ),
        (
            Shortcut::new(Some(Modifiers::empty()), Code::Escape),
            ShellAction::CloseStartMenu,
        ),
    ]
}

fn process_shortcut(app: &AppHandle, action: ShellAction) {
    let state = app.state::<Mutex<DesktopShell>>();
    let mut shell = match state.lock() {
        Ok(shell) => shell,
        Err(e) => {
            tracing::error!("[TAURI CMD] shell state poisoned: {}", e);
            return;
        }
    };
    let changed = shell.apply_action(action);
    if changed {
        if let Err(e) = emit_snapshot(app, &shell) {
            tracing::warn!("[TAURI CMD] failed to emit snapshot: {}", e);
        }
    }
    if let Err(e) = app.emit("global-shortcut", GlobalShortcutPayload { action, changed }) {
        tracing::warn!("[TAURI CMD] failed to emit shortcut event: {}", e);
    }
}

/// Register the shell keys while the window has focus and release them on blur,
/// so Alt+Tab keeps working for the rest of the OS
#[tauri::command]
fn set_global_shortcuts_enabled(app: AppHandle, enabled: bool) -> Result<(), String> {
    if enabled {
        // Avoid "already registered" errors on repeated focus events
        let _ = app.global_shortcut().unregister_all();

        let mut registered = 0;
        let mut last_error = None;
        for (shortcut, _) in shell_shortcuts() {
            match app.global_shortcut().register(shortcut.clone()) {
                Ok(_) => registered += 1,
                Err(e) => {
                    tracing::warn!("[TAURI CMD] failed to register {:?}: {}", shortcut, e);
                    last_error = Some(e);
                }
            }
        }

        match (registered, last_error) {
            (0, Some(e)) => Err(format!("Failed to register any shortcuts: {}", e)),
            _ => {
                tracing::info!("[TAURI CMD] global shortcuts enabled ({} keys)", registered);
                Ok(())
            }
        }
    } else {
        tracing::info!("[TAURI CMD] global shortcuts disabled");
        app.global_shortcut()
            .unregister_all()
            .map_err(|e| format!("Failed to unregister shortcuts: {}", e))
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    crate::init_tracing();

    let reduced_motion = std::env::var("DAYYANOS_REDUCED_MOTION").is_ok();
    let relay_url =
        std::env::var("DAYYANOS_RELAY_URL").unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string());
    let http = match feeds::http_client() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("[TAURI CMD] failed to build HTTP client: {}", e);
            return;
        }
    };
    let services = Services {
        http,
        feeds: FeedConfig::default(),
        relay_url,
    };

    let shortcuts = shell_shortcuts();

    let result = tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(
            tauri_plugin_global_shortcut::Builder::new()
                .with_handler(move |app, shortcut, event| {
                    // Only on key press, not release
                    if event.state != ShortcutState::Pressed {
                        return;
                    }
                    if let Some((_, action)) = shortcuts.iter().find(|(s, _)| s == shortcut) {
                        process_shortcut(app, *action);
                    }
                })
                .build(),
        )
        .manage(Mutex::new(DesktopShell::new(reduced_motion)))
        .manage(Mutex::new(TransferState::new(reduced_motion)))
        .manage(Mutex::new(FeedHub::new()))
        .manage(Mutex::new(ChatSession::new()))
        .manage(services)
        .setup(|_app| {
            // Shortcuts register on window focus via set_global_shortcuts_enabled()
            tracing::info!("[Boot] shell initialized, waiting for frontend");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Window management
            get_desktop_snapshot,
            open_window,
            close_window,
            minimize_window,
            toggle_maximize,
            focus_window,
            drag_window,
            begin_drag,
            drag_pointer,
            end_drag,
            cycle_focus,
            // Shell
            toggle_start_menu,
            close_start_menu,
            set_mobile_layout,
            handle_shell_key,
            get_taskbar_clock,
            // Boot
            boot_tick,
            skip_boot,
            log_on,
            transfer_tick,
            transfer_cancel,
            transfer_set_close_when_complete,
            transfer_open,
            // Panels and feeds
            get_panel,
            refresh_projects,
            refresh_contributions,
            refresh_leetcode,
            // Chat
            get_chat_transcript,
            send_chat_message,
            // Host
            toggle_fullscreen,
            set_global_shortcuts_enabled,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        tracing::error!("[TAURI CMD] error while running tauri application: {}", e);
    }
}
