use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Posts shown in the home page blog section.
pub const DEFAULT_RECENT_POSTS: usize = 6;
pub const MAX_RECENT_POSTS: usize = 50;

/// How long a health report is reused before the sources are probed again.
pub const HEALTH_CACHE_SECS: i64 = 5;
