//! Diagnostic logging through a `tracing` subscriber on stderr.

use once_cell::sync::OnceCell;
use std::env;
use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

/// Environment variable holding filter directives that override the config.
pub const LOG_LEVEL_ENV: &str = "MAR1BASH_LOG";

static FILTER_HANDLE: OnceCell<reload::Handle<EnvFilter, Registry>> = OnceCell::new();

/// Install the stderr subscriber at `warn`. Safe to call more than once.
pub fn init() -> Result<(), TryInitError> {
    if FILTER_HANDLE.get().is_some() {
        return Ok(());
    }

    let initial = build_filter(env_directives().as_deref(), LevelFilter::WARN);
    let (filter, handle) = reload::Layer::new(initial);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init()?;

    let _ = FILTER_HANDLE.set(handle);
    Ok(())
}

/// Apply `configured`, unless `MAR1BASH_LOG` holds valid directives.
pub fn set_level(configured: LevelFilter) {
    let Some(handle) = FILTER_HANDLE.get() else {
        return;
    };
    if let Err(err) = handle.reload(build_filter(env_directives().as_deref(), configured)) {
        eprintln!("mar1bash: unable to update log filter: {err}");
    }
}

fn env_directives() -> Option<String> {
    env::var(LOG_LEVEL_ENV).ok().filter(|value| !value.trim().is_empty())
}

fn build_filter(directives: Option<&str>, configured: LevelFilter) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives.trim()).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(configured.into()))
}
