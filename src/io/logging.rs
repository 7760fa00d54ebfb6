use std::fs::File;
use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber writing to stderr (CLI mode).
///
/// Filter comes from `RUST_LOG`, defaulting to `warn`.
pub fn init_stderr() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

/// Install the tracing subscriber writing to a log file (TUI mode, where
/// stderr would scribble over the alternate screen). Failure to open the
/// file silently disables logging rather than breaking the UI.
pub fn init_file(path: &Path) {
    let Ok(file) = File::create(path) else {
        return;
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file)
        .with_target(true)
        .with_ansi(false)
        .try_init();
}
