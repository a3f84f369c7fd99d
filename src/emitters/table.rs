//! TableA emitter (spec §4.5): kind selection, then row-by-row round-robin
//! interleaving across all selected tables.

use serde_json::json;
use std::collections::HashSet;

use crate::keywords::{multi_count, tokenize};
use crate::presets::TableKind as Kind;
use crate::protocol::ComponentKind;

use super::{obj, EmitContext, EmitResult};

const KIND: ComponentKind = ComponentKind::TableA;

/// Selects which table kinds to render for `message` (spec §4.5 rules 1–3).
pub fn select_kinds(message: &str, max_tables: usize) -> Vec<Kind> {
    let tokens = tokenize(message);
    let named: Vec<Kind> = Kind::ORDER
        .into_iter()
        .filter(|k| any_names_kind(&tokens, *k))
        .collect();

    let selected = match (named.len(), multi_count(&tokens)) {
        (0, Some(count)) => Kind::ORDER.into_iter().take(count).collect(),
        (1, Some(count)) if count > 1 => vec![named[0]; count],
        _ => {
            if named.is_empty() {
                vec![Kind::Sales]
            } else {
                named
            }
        }
    };

    selected.into_iter().take(max_tables).collect()
}

fn any_names_kind(tokens: &HashSet<String>, kind: Kind) -> bool {
    let words: &[&str] = match kind {
        Kind::Sales => &["sales", "sale"],
        Kind::Users => &["user", "users"],
        Kind::Products => &["product", "products"],
    };
    words.iter().any(|w| tokens.contains(*w))
}

/// Drives the full table sequence: introduce all, then interleave rows
/// round-robin by row index (spec §4.5).
pub async fn emit(ctx: &mut EmitContext, message: &str) -> EmitResult {
    let max_rows = ctx.config.max_table_rows;
    let kinds = select_kinds(message, ctx.config.max_tables_per_response);

    let mut tables: Vec<(String, Kind)> = Vec::with_capacity(kinds.len());
    for kind in &kinds {
        let id = ctx.ids.next();
        ctx.introduce(
            KIND,
            &id,
            obj([
                ("columns", json!(kind.columns())),
                ("rows", json!([])),
                ("total_rows", json!(0)),
            ]),
        )
        .await?;
        tables.push((id, *kind));
    }

    let label = kinds
        .iter()
        .map(|k| format!("{k:?}").to_lowercase())
        .collect::<Vec<_>>()
        .join(", ");
    ctx.emit_prose(&format!("Loading {label} …")).await?;

    let max_row_count = kinds.iter().map(|k| k.total_rows().min(max_rows)).max().unwrap_or(0);
    let mut total_rows_emitted = 0usize;

    for row_index in 0..max_row_count {
        for (id, kind) in &tables {
            let preset_rows = kind.rows();
            if row_index >= preset_rows.len().min(max_rows) {
                continue;
            }
            let mut rows: Vec<serde_json::Value> = ctx
                .registry
                .get(id)
                .and_then(|d| d.get("rows"))
                .and_then(|v| v.as_array())
                .cloned()
                .unwrap_or_default();
            rows.push(json!(preset_rows[row_index]));
            let total = rows.len();
            ctx.update(KIND, id, obj([("rows", json!(rows)), ("total_rows", json!(total))]))
                .await?;
            total_rows_emitted += 1;
            ctx.sleep_for(ctx.config.table_row_delay).await;
        }
    }

    ctx.emit_prose(&format!("Done — {total_rows_emitted} rows loaded.")).await
}
