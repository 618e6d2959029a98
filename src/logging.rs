use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding an `EnvFilter` directive, e.g. `shelf_guard=debug`.
pub const LOG_ENV: &str = "SHELF_GUARD_LOG";

/// Default filter directive for the given verbosity flags.
#[must_use]
pub const fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_filter(env_value: Option<&str>, verbose: u8, quiet: bool) -> EnvFilter {
    if !quiet
        && let Some(directive) = env_value
        && let Ok(filter) = EnvFilter::try_new(directive)
    {
        return filter;
    }
    EnvFilter::new(default_directive(verbose, quiet))
}

/// Install the global subscriber writing to stderr.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: u8, quiet: bool) {
    let env_value = std::env::var(LOG_ENV).ok();
    let filter = build_filter(env_value.as_deref(), verbose, quiet);

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_directive(0, false), "warn");
        assert_eq!(default_directive(1, false), "info");
        assert_eq!(default_directive(2, false), "debug");
        assert_eq!(default_directive(3, false), "trace");
        assert_eq!(default_directive(9, false), "trace");
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(default_directive(3, true), "error");
    }

    #[test]
    fn env_directive_is_used_when_valid() {
        let filter = build_filter(Some("shelf_guard=debug"), 0, false);
        assert_eq!(filter.to_string(), "shelf_guard=debug");
    }

    #[test]
    fn quiet_ignores_env_directive() {
        let filter = build_filter(Some("trace"), 0, true);
        assert_eq!(filter.to_string(), "error");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0, true);
        init(2, false);
    }
}
