// src/log.rs
use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install the global subscriber once. Level defaults to `info`; `RUST_LOG` overrides.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"));
        // A subscriber may already be set (tests, embedding); keep theirs.
        let _ = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
