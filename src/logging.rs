//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize diagnostics logging.
///
/// Reads the `WORLDCUP_LOG` environment variable, e.g.
/// `WORLDCUP_LOG=worldcup_dashboard::loader=debug`. Falls back to
/// `worldcup_dashboard=info`. Output goes to stderr so the dashboard on
/// stdout is unaffected. Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("WORLDCUP_LOG")
            .unwrap_or_else(|_| EnvFilter::new("worldcup_dashboard=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
