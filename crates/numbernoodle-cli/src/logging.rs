//! Tracing subscriber setup

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Builds the log filter: `RUST_LOG` when set, otherwise the verbosity level
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()))
}

/// Installs the global subscriber, writing to stderr
///
/// A second call keeps the subscriber already installed and reports it at
/// debug level.
pub fn init(verbosity: Verbosity) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if let Err(err) = installed {
        debug!(%err, "keeping existing tracing subscriber");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init(Verbosity::Quiet);
        init(Verbosity::Debug);
        assert!(tracing::dispatcher::has_been_set());
    }

    #[test]
    fn test_env_filter_builds_for_every_level() {
        for verbosity in [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Debug,
        ] {
            let _ = env_filter(verbosity);
        }
    }
}
