//! Wire framing: the envelope codec (spec §4.1) and the fixed delimiter
//! (spec §6). Stateless — every function here is a pure transform.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Three U+0024 code points. Chosen by the spec to be distinctive and
/// absent from ordinary prose.
pub const DELIMITER: &str = "$$$";

/// Closed set of component kinds (spec §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComponentKind {
    SimpleComponent,
    TableA,
    ChartComponent,
}

impl ComponentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::SimpleComponent => "SimpleComponent",
            ComponentKind::TableA => "TableA",
            ComponentKind::ChartComponent => "ChartComponent",
        }
    }
}

/// One wire frame: `{"type": ..., "id": ..., "data": {...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentEnvelope {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub id: String,
    pub data: Map<String, Value>,
}

impl ComponentEnvelope {
    pub fn new(kind: ComponentKind, id: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            kind,
            id: id.into(),
            data,
        }
    }
}

/// Serializes one envelope wrapped in the delimiter, with no internal
/// pretty-printing (spec §4.1: "MUST NOT pretty-print").
///
/// # Panics
///
/// Never panics: `Map<String, Value>` always serializes successfully.
pub fn encode_envelope(env: &ComponentEnvelope) -> String {
    let body = serde_json::to_string(env).expect("envelope data is always JSON-serializable");
    format!("{DELIMITER}{body}{DELIMITER}")
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unbalanced delimiter: expected a closing `$$$`")]
    UnbalancedDelimiter,
    #[error("invalid envelope JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// A decoded frame, used only by tests to verify what the server emitted
/// (spec invariants T1–T6). Production code never decodes its own output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFrame {
    pub kind: String,
    pub id: String,
    pub data: Map<String, Value>,
}

/// Splits a response body into interleaved prose segments and decoded
/// component frames, in emission order.
pub fn parse_body(body: &str) -> Result<Vec<BodySegment>, DecodeError> {
    let mut segments = Vec::new();
    let mut rest = body;
    loop {
        match rest.find(DELIMITER) {
            None => {
                if !rest.is_empty() {
                    segments.push(BodySegment::Text(rest.to_owned()));
                }
                break;
            }
            Some(open) => {
                if open > 0 {
                    segments.push(BodySegment::Text(rest[..open].to_owned()));
                }
                let after_open = &rest[open + DELIMITER.len()..];
                let close = after_open
                    .find(DELIMITER)
                    .ok_or(DecodeError::UnbalancedDelimiter)?;
                let json = &after_open[..close];
                let value: Value = serde_json::from_str(json)?;
                let kind = value
                    .get("type")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_owned();
                let id = value
                    .get("id")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_owned();
                let data = value
                    .get("data")
                    .and_then(Value::as_object)
                    .cloned()
                    .unwrap_or_default();
                segments.push(BodySegment::Frame(DecodedFrame { kind, id, data }));
                rest = &after_open[close + DELIMITER.len()..];
            }
        }
    }
    Ok(segments)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySegment {
    Text(String),
    Frame(DecodedFrame),
}
