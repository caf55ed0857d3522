// App registry and per-app window content
pub mod apps;
pub mod content;

// Window manager state
pub mod state;

// Boot sequence and transfer dialog reducers
pub mod boot;

// Desktop session: login, start menu, shortcuts, clock
pub mod input;
pub mod shell;

// External feeds and the chat assistant
pub mod chat;
pub mod feeds;
pub mod relay;

#[cfg(feature = "desktop")]
mod desktop;

#[cfg(feature = "desktop")]
pub use desktop::run;

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the default `info`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    // A second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
