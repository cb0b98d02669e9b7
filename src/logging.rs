//! Logging initialisation.
//!
//! Diagnostics go to stderr so the report on stdout stays clean.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, util::SubscriberInitExt};

static INIT_ONCE: Once = Once::new();

/// Default filter directive for a given `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "restdiff=warn",
        1 => "restdiff=info",
        2 => "restdiff=debug",
        _ => "restdiff=trace",
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over
/// `verbosity`. Later calls are no-ops.
pub fn init(verbosity: u8) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .finish()
            .init();
    });
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init(0);
        init(2);
        init(5);
    }

    #[test]
    fn test_default_directive_by_verbosity() {
        check!(default_directive(0) == "restdiff=warn");
        check!(default_directive(1) == "restdiff=info");
        check!(default_directive(2) == "restdiff=debug");
        check!(default_directive(3) == "restdiff=trace");
        check!(default_directive(u8::MAX) == "restdiff=trace");
    }
}
