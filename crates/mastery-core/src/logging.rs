//! Tracing setup shared by the desktop app and the CLI.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count
pub fn directive_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr `fmt` subscriber. `RUST_LOG` wins over `verbosity`.
///
/// Calling this twice is harmless; the second subscriber is discarded.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive_for(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(directive_for(0), "warn");
        assert_eq!(directive_for(1), "info");
        assert_eq!(directive_for(2), "debug");
        assert_eq!(directive_for(7), "trace");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0);
        init(2);
    }
}
