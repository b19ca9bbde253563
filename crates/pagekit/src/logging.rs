//! Logging setup
//!
//! Behaviors only emit `tracing` events; hosts that want them printed call
//! [`init`] once at startup.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG` (default `info`)
///
/// Returns false if a global subscriber was already installed.
pub fn init() -> bool {
    init_with_default("info")
}

/// Like [`init`], with a custom fallback directive when `RUST_LOG` is unset
pub fn init_with_default(directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_second_init_is_harmless() {
        super::init();
        assert!(!super::init());
    }
}
