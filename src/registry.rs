//! Per-request component registry (spec §3 "Registry entry", §4.2).
//!
//! Stack-local to the request task: no `Arc`, no lock. Created empty at the
//! start of a request, discarded when the request ends (simply dropped).

use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;

use crate::protocol::ComponentKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("component id {0} was already introduced")]
    DuplicateId(String),
    #[error("component id {0} was updated before being introduced")]
    UnknownId(String),
    #[error("component id {id} was introduced as {introduced_as:?} but updated as {updated_as:?}")]
    KindMismatch {
        id: String,
        introduced_as: ComponentKind,
        updated_as: ComponentKind,
    },
}

struct Entry {
    kind: ComponentKind,
    data: Map<String, Value>,
}

#[derive(Default)]
pub struct ComponentRegistry {
    entries: HashMap<String, Entry>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new entry. Fails if `id` is already present (spec §4.2:
    /// "`introduce` of a duplicate id is a programming error and MUST be
    /// prevented by id generation" — callers should treat `Err` here as a
    /// bug in id generation, not a recoverable condition).
    pub fn introduce(
        &mut self,
        id: impl Into<String>,
        kind: ComponentKind,
        initial_data: Map<String, Value>,
    ) -> Result<(), RegistryError> {
        let id = id.into();
        if self.entries.contains_key(&id) {
            return Err(RegistryError::DuplicateId(id));
        }
        self.entries.insert(id, Entry { kind, data: initial_data });
        Ok(())
    }

    /// Shallow-merges `patch` into the entry's data map (spec I1/I2: callers
    /// pass the already-accumulated full array for cumulative fields, so
    /// plain key replacement is correct here).
    ///
    /// `kind` must match the kind the id was introduced with — this is the
    /// actual enforcement of T1 ("every frame after the first for that id
    /// has the same `type`"), rather than relying on every call site
    /// threading through the same fixed `KIND` constant by convention.
    pub fn update(&mut self, id: &str, kind: ComponentKind, patch: Map<String, Value>) -> Result<(), RegistryError> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| RegistryError::UnknownId(id.to_owned()))?;
        if entry.kind != kind {
            return Err(RegistryError::KindMismatch {
                id: id.to_owned(),
                introduced_as: entry.kind,
                updated_as: kind,
            });
        }
        for (k, v) in patch {
            entry.data.insert(k, v);
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Map<String, Value>> {
        self.entries.get(id).map(|e| &e.data)
    }

    pub fn has(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn introduce_then_get_roundtrips() {
        let mut reg = ComponentRegistry::new();
        reg.introduce("a", ComponentKind::SimpleComponent, obj(&[("title", json!("x"))]))
            .unwrap();
        assert!(reg.has("a"));
        assert_eq!(reg.get("a").unwrap().get("title"), Some(&json!("x")));
    }

    #[test]
    fn introduce_duplicate_id_is_an_error() {
        let mut reg = ComponentRegistry::new();
        reg.introduce("a", ComponentKind::SimpleComponent, Map::new()).unwrap();
        let err = reg
            .introduce("a", ComponentKind::SimpleComponent, Map::new())
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId("a".to_owned()));
    }

    #[test]
    fn update_unknown_id_is_an_error_and_does_not_panic() {
        let mut reg = ComponentRegistry::new();
        let err = reg
            .update("ghost", ComponentKind::SimpleComponent, Map::new())
            .unwrap_err();
        assert_eq!(err, RegistryError::UnknownId("ghost".to_owned()));
    }

    #[test]
    fn update_merges_keys_and_preserves_untouched_ones() {
        let mut reg = ComponentRegistry::new();
        reg.introduce(
            "a",
            ComponentKind::TableA,
            obj(&[("columns", json!(["A", "B"])), ("rows", json!([]))]),
        )
        .unwrap();
        reg.update("a", ComponentKind::TableA, obj(&[("rows", json!([["1", "2"]]))]))
            .unwrap();
        let data = reg.get("a").unwrap();
        assert_eq!(data.get("columns"), Some(&json!(["A", "B"])));
        assert_eq!(data.get("rows"), Some(&json!([["1", "2"]])));
    }

    #[test]
    fn update_with_a_different_kind_than_introduced_is_an_error() {
        let mut reg = ComponentRegistry::new();
        reg.introduce("a", ComponentKind::SimpleComponent, Map::new()).unwrap();
        let err = reg
            .update("a", ComponentKind::TableA, Map::new())
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::KindMismatch {
                id: "a".to_owned(),
                introduced_as: ComponentKind::SimpleComponent,
                updated_as: ComponentKind::TableA,
            }
        );
    }
}
