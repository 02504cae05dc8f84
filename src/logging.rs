//! Opt-in diagnostics for hosts that want to see what the library is doing.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr subscriber.
///
/// The filter is fixed in code; the process environment is never consulted.
/// Returns `false` if a global subscriber was already set.
pub fn init(verbose: bool) -> bool {
    let filter = if verbose {
        EnvFilter::new("algo_binding=debug")
    } else {
        EnvFilter::new("algo_binding=info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_noop() {
        // Whichever call lands first wins; later ones must not panic.
        let _ = init(true);
        assert!(!init(false));
    }
}
