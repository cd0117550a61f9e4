//! Subscriber setup for the `lindiff` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the application.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Install a stderr `fmt` subscriber.  `RUST_LOG` wins when set; otherwise
/// `lindiff=debug` with `verbose`, `lindiff=warn` without.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init(verbose: bool) {
    INIT_ONCE.call_once(|| {
        let default = if verbose { "lindiff=debug" } else { "lindiff=warn" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        // Another subscriber may already be installed (e.g. by a test
        // harness); keep it.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_idempotent() {
        init(false);
        init(true);
        init(false);
    }
}
