//! tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Environment variable holding an env-filter directive
pub const LOG_ENV: &str = "DRIFTFENCE_LOG";

/// Filter directive for the verbosity flags
pub fn level_directive(verbose: u8, quiet: bool) -> &'static str {
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

/// Install a stderr subscriber. `DRIFTFENCE_LOG` wins over the flags.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_directive(verbose, quiet)));

    // A second init only happens in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_directive() {
        assert_eq!(level_directive(0, false), "warn");
        assert_eq!(level_directive(1, false), "info");
        assert_eq!(level_directive(2, false), "debug");
        assert_eq!(level_directive(7, false), "trace");
        assert_eq!(level_directive(3, true), "error");
    }
}
