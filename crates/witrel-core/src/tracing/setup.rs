//! Subscriber installation for witrel binaries and tests.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INSTALL: Once = Once::new();

/// Install the stderr subscriber with the `witrel=info` fallback.
///
/// `WITREL_LOG` overrides per target, e.g.
/// `WITREL_LOG=witrel_analysis::pipeline=debug,witrel_core=warn`.
pub fn init_tracing() {
    init_tracing_with_default(DEFAULT_LOG_FILTER);
}

/// Install the subscriber once; later calls are no-ops. `fallback` applies
/// when `WITREL_LOG` is unset or unparsable.
pub fn init_tracing_with_default(fallback: &str) {
    INSTALL.call_once(|| {
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        // A subscriber installed by the host application wins.
        let _ = tracing_subscriber::registry()
            .with(layer)
            .with(env_filter(fallback))
            .try_init();
    });
}

/// Fallback filter for a `-v` count: warn, info, debug, then trace.
pub fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "witrel=warn",
        1 => "witrel=info",
        2 => "witrel=debug",
        _ => "witrel=trace",
    }
}

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback))
}
