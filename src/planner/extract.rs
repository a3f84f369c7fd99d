//! Response extraction (spec §4.7 step 4): locate the last delimited
//! region in the model's text; if absent, fall back to best-effort
//! extraction by stripping Markdown code fences and repairing
//! single-quoted strings.

use serde_json::Value;

use crate::protocol::DELIMITER;

pub fn extract_plan_json(text: &str) -> Option<Vec<Value>> {
    if let Some(region) = last_delimited_region(text) {
        if let Some(items) = parse_array(&region) {
            return Some(items);
        }
    }

    let stripped = strip_code_fences(text);
    if let Some(items) = parse_array(&stripped) {
        return Some(items);
    }

    let repaired = repair_single_quotes(&stripped);
    parse_array(&repaired)
}

fn parse_array(candidate: &str) -> Option<Vec<Value>> {
    match serde_json::from_str::<Value>(candidate.trim()) {
        Ok(Value::Array(items)) => Some(items),
        _ => None,
    }
}

/// Finds the *last* pair of delimiters in `text` and returns the text
/// between them. Earlier delimiter pairs (e.g. ones the model echoed from
/// the prompt) are ignored.
fn last_delimited_region(text: &str) -> Option<String> {
    let mut positions = Vec::new();
    let mut search_from = 0;
    while let Some(rel) = text[search_from..].find(DELIMITER) {
        let pos = search_from + rel;
        positions.push(pos);
        search_from = pos + DELIMITER.len();
    }
    if positions.len() < 2 {
        return None;
    }
    let close = positions[positions.len() - 1];
    let open = positions[positions.len() - 2];
    Some(text[open + DELIMITER.len()..close].to_owned())
}

/// Strips a leading/trailing Markdown code fence (```` ``` ```` or
/// ```` ```json ````) if present, otherwise returns the input unchanged.
fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_owned();
    }
    let after_open = match trimmed.find('\n') {
        Some(idx) => &trimmed[idx + 1..],
        None => return trimmed.trim_matches('`').to_owned(),
    };
    match after_open.rfind("```") {
        Some(idx) => after_open[..idx].trim().to_owned(),
        None => after_open.trim().to_owned(),
    }
}

/// Best-effort repair of single-quoted JSON-ish text into double-quoted
/// JSON. Not a general-purpose parser: it only handles the common case of
/// a model using `'` where `"` was required.
fn repair_single_quotes(text: &str) -> String {
    text.replace('\'', "\"")
}
