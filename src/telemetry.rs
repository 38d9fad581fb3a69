use std::env;

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info,actix_web=info";

/// Installs the global subscriber. `RUST_LOG` controls filtering and
/// `APP_LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let json = env::var("APP_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        fmt().with_env_filter(filter).json().init();
    } else {
        fmt().with_env_filter(filter).init();
    }
}
