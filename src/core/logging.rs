//! Tracing subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter: quiet dependencies, informative crate logs.
pub const DEFAULT_FILTER: &str = "warn,sleeper_awards=info";

/// Filter used with `--verbose`.
pub const VERBOSE_FILTER: &str = "warn,sleeper_awards=debug";

/// The filter directive to use when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `verbose`.
///
/// Logs go to stderr so `--json` output on stdout stays parseable. Calling
/// this twice is harmless; the second call is ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn,sleeper_awards=info");
        assert_eq!(default_directive(true), "warn,sleeper_awards=debug");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
