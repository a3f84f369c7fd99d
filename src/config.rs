//! Configuration surface (spec §6). All values are overridable at process
//! startup via environment variables, read once in `main.rs` and threaded
//! through `AppState` — no globals.

use std::time::Duration;

/// Numeric knobs for the dispatcher, emitters, and planner.
///
/// Wire values produced using these knobs are not part of any compatibility
/// contract; only the protocol shape (delimiter, envelope keys) is.
#[derive(Debug, Clone)]
pub struct Config {
    pub max_components_per_response: usize,
    pub max_tables_per_response: usize,
    pub max_charts_per_response: usize,
    pub max_table_rows: usize,
    pub max_chart_points: usize,

    pub word_delay: Duration,
    pub char_delay: Duration,
    pub frame_delay: Duration,
    pub table_row_delay: Duration,
    pub chart_point_delay: Duration,
    pub single_delayed_card_wait: Duration,
    pub multi_delayed_card_wait: Duration,

    pub llm_cache_ttl: Duration,
    pub llm_max_attempts: u32,
    pub llm_request_timeout: Duration,
    pub llm_max_components_per_plan: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_components_per_response: 5,
            max_tables_per_response: 3,
            max_charts_per_response: 3,
            max_table_rows: 20,
            max_chart_points: 50,

            word_delay: Duration::from_millis(100),
            char_delay: Duration::from_millis(15),
            frame_delay: Duration::from_millis(100),
            table_row_delay: Duration::from_millis(200),
            chart_point_delay: Duration::from_millis(200),
            single_delayed_card_wait: Duration::from_secs(5),
            multi_delayed_card_wait: Duration::from_secs(3),

            llm_cache_ttl: Duration::from_secs(3600),
            llm_max_attempts: 3,
            llm_request_timeout: Duration::from_secs(30),
            llm_max_components_per_plan: 5,
        }
    }
}

impl Config {
    /// Builds the default configuration, overriding fields present as
    /// `STREAMCHAT_*` environment variables. Unset or unparsable variables
    /// fall back to the default silently (this is a local-dev knob set,
    /// not user input — see spec §7's error taxonomy, which has no entry
    /// for configuration parse failures).
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Some(v) = env_usize("STREAMCHAT_MAX_COMPONENTS") {
            cfg.max_components_per_response = v;
        }
        if let Some(v) = env_usize("STREAMCHAT_MAX_TABLES") {
            cfg.max_tables_per_response = v;
        }
        if let Some(v) = env_usize("STREAMCHAT_MAX_CHARTS") {
            cfg.max_charts_per_response = v;
        }
        if let Some(v) = env_usize("STREAMCHAT_MAX_TABLE_ROWS") {
            cfg.max_table_rows = v;
        }
        if let Some(v) = env_usize("STREAMCHAT_MAX_CHART_POINTS") {
            cfg.max_chart_points = v;
        }
        if let Some(v) = env_u64("STREAMCHAT_LLM_CACHE_TTL_SECS") {
            cfg.llm_cache_ttl = Duration::from_secs(v);
        }
        cfg
    }
}

fn env_usize(key: &str) -> Option<usize> {
    std::env::var(key).ok()?.parse().ok()
}

fn env_u64(key: &str) -> Option<u64> {
    std::env::var(key).ok()?.parse().ok()
}
