//! Progressive emitters (spec §2 Emitters, §4.4–§4.6).
//!
//! Modeled as the spec's design notes (§9) recommend: a cooperative task
//! pushing byte chunks into a channel read by the HTTP writer, rather than
//! an actual (unstable) Rust async generator. [`EmitContext`] is the
//! stack-local handle every emitter function threads through — it owns the
//! per-request [`ComponentRegistry`], [`IdGen`], and [`Config`], and wraps
//! the one real side effect (writing to the sink) plus the timing
//! discipline (spec §4.4 "Timing discipline").

pub mod card;
pub mod chart;
pub mod table;

use axum::body::Bytes;
use serde_json::{Map, Value};
use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::config::Config;
use crate::ids::IdGen;
use crate::protocol::{encode_envelope, ComponentEnvelope, ComponentKind};
use crate::registry::ComponentRegistry;

/// The client (or the local HTTP writer) has gone away; callers should stop
/// emitting and let the request task end (spec §5 "Cancellation").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disconnected;

pub type EmitResult = Result<(), Disconnected>;

pub struct EmitContext {
    pub registry: ComponentRegistry,
    pub ids: IdGen,
    pub config: Config,
    sink: mpsc::Sender<std::io::Result<Bytes>>,
}

impl EmitContext {
    pub fn new(config: Config, sink: mpsc::Sender<std::io::Result<Bytes>>) -> Self {
        Self {
            registry: ComponentRegistry::new(),
            ids: IdGen::new(),
            config,
            sink,
        }
    }

    async fn send_bytes(&self, bytes: Vec<u8>) -> EmitResult {
        self.sink
            .send(Ok(Bytes::from(bytes)))
            .await
            .map_err(|_| Disconnected)
    }

    /// Emits raw prose a character at a time with the spec's typing
    /// cadence: ≈10ms between characters, ≈100ms between words.
    pub async fn emit_prose(&self, text: &str) -> EmitResult {
        let words: Vec<&str> = text.split(' ').collect();
        let last_word = words.len().saturating_sub(1);
        for (wi, word) in words.into_iter().enumerate() {
            let chars: Vec<char> = word.chars().collect();
            let last_char = chars.len().saturating_sub(1);
            for (ci, ch) in chars.into_iter().enumerate() {
                self.send_bytes(ch.to_string().into_bytes()).await?;
                if ci != last_char {
                    sleep(self.config.char_delay).await;
                }
            }
            if wi != last_word {
                self.send_bytes(b" ".to_vec()).await?;
                sleep(self.config.word_delay).await;
            }
        }
        Ok(())
    }

    /// Introduces a fresh component id and emits its first frame. `data`
    /// may be empty (spec §3: "first frame... may be empty" for
    /// SimpleComponent) or a partial map (single-delayed card).
    pub async fn introduce(
        &mut self,
        kind: ComponentKind,
        id: &str,
        data: Map<String, Value>,
    ) -> EmitResult {
        if let Err(err) = self.registry.introduce(id, kind, data.clone()) {
            // Programming error per spec §4.2 / §7.2: log and drop, never
            // surface to the client.
            tracing::warn!(%err, id, "dropping introduce frame after registry rejection");
            return Ok(());
        }
        self.emit_envelope(kind, id, data).await
    }

    /// Applies `patch` to the registry and emits it as a partial-update
    /// frame, carrying only the patched keys (spec I1). For cumulative
    /// fields (`rows`, `series`) callers pass the already-accumulated full
    /// array as the patch value.
    pub async fn update(&mut self, kind: ComponentKind, id: &str, patch: Map<String, Value>) -> EmitResult {
        if let Err(err) = self.registry.update(id, kind, patch.clone()) {
            tracing::warn!(%err, id, "dropping update frame after registry rejection");
            return Ok(());
        }
        self.emit_envelope(kind, id, patch).await
    }

    async fn emit_envelope(&self, kind: ComponentKind, id: &str, data: Map<String, Value>) -> EmitResult {
        let env = ComponentEnvelope::new(kind, id, data);
        let wire = encode_envelope(&env);
        self.send_bytes(wire.into_bytes()).await?;
        sleep(self.config.frame_delay).await;
        Ok(())
    }

    pub async fn sleep_for(&self, duration: std::time::Duration) {
        sleep(duration).await;
    }
}

pub fn obj(pairs: impl IntoIterator<Item = (&'static str, Value)>) -> Map<String, Value> {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}
