use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. stderr is reserved for the fatal
/// diagnostic unless the operator opts in.
pub const DEFAULT_FILTER: &str = "off";

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already set.
pub fn init_tracing(default_filter: &str) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .try_init()
        .is_ok()
}
