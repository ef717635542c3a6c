//! Engine configuration read from the environment.
//!
//! `.env.local` and `.env` at the workspace root are loaded first (see
//! [`load_dotenv_from_repo_root`]); real environment variables win over both.
//!
//! | Variable                         | Default                  |
//! |----------------------------------|--------------------------|
//! | `LANCERLOG_MAX_LL_CLOCK_CHANGE`  | 25                       |
//! | `LANCERLOG_GM_LOG_PAGE_LIMIT`    | 50 (capped at 200)       |
//! | `LANCERLOG_LOG`                  | `lancerlog_engine=info`  |

use std::str::FromStr;

use lancerlog_domain::{DEFAULT_MAX_LL_CLOCK_CHANGE, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};

pub const MAX_LL_CLOCK_CHANGE_VAR: &str = "LANCERLOG_MAX_LL_CLOCK_CHANGE";
pub const GM_LOG_PAGE_LIMIT_VAR: &str = "LANCERLOG_GM_LOG_PAGE_LIMIT";
pub const LOG_FILTER_VAR: &str = "LANCERLOG_LOG";

/// Tracing filter used when neither `RUST_LOG` nor `LANCERLOG_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "lancerlog_engine=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Ceiling for a single log entry's LL tick delta
    pub max_ll_clock_change: i32,
    /// Default page size for the GM log listing
    pub gm_log_page_limit: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_ll_clock_change: DEFAULT_MAX_LL_CLOCK_CHANGE,
            gm_log_page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Missing or unparseable values keep their
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let max_ll_clock_change = parse_or(
            &lookup,
            MAX_LL_CLOCK_CHANGE_VAR,
            defaults.max_ll_clock_change,
        )
        .max(0);
        let gm_log_page_limit =
            parse_or(&lookup, GM_LOG_PAGE_LIMIT_VAR, defaults.gm_log_page_limit)
                .clamp(1, MAX_PAGE_LIMIT);

        Self {
            max_ll_clock_change,
            gm_log_page_limit,
        }
    }

    /// Filter directive for the tracing subscriber.
    pub fn log_filter_from_env() -> String {
        std::env::var(LOG_FILTER_VAR)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(
                    key,
                    value = %raw,
                    default = %default,
                    "Ignoring unparseable config value"
                );
                default
            }
        },
    }
}

/// Load `.env.local` then `.env` from the workspace root, if present.
pub fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
