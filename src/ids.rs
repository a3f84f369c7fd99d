//! Time-ordered component id generation (spec §2 IdGen, §3 ComponentId).
//!
//! An id is a 48-bit millisecond Unix timestamp (12 hex chars, zero-padded)
//! followed by 4 random bytes (8 hex chars). Sortable by timestamp prefix;
//! collisions across the suffix space are astronomically unlikely within a
//! single request and are not a correctness requirement (spec: "unique
//! within one request... ties are broken by suffix").

use rand::RngCore;
use std::time::{SystemTime, UNIX_EPOCH};

/// Constructed fresh per request alongside the [`crate::registry::ComponentRegistry`] —
/// no shared counter, no global state.
#[derive(Debug, Default)]
pub struct IdGen;

impl IdGen {
    pub fn new() -> Self {
        Self
    }

    /// Generates the next component id. Not `async`: the RNG draw and clock
    /// read are synchronous and never held across an await point.
    pub fn next(&self) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
            & 0x0000_FFFF_FFFF_FFFF; // 48 bits

        let mut suffix = [0u8; 4];
        rand::thread_rng().fill_bytes(&mut suffix);

        format!("{:012x}{}", millis, hex::encode(suffix))
    }
}
