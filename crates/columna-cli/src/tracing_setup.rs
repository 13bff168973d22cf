//! Tracing initialization for the CLI binary.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging from the `COLUMNA_LOG` environment variable,
/// falling back to `columna=info`. Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("COLUMNA_LOG")
            .unwrap_or_else(|_| EnvFilter::new("columna=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
