//! SimpleComponent ("card") emitter — all five sub-modes of spec §4.4.

use chrono::Utc;
use serde_json::json;

use crate::presets::CardScenario;
use crate::protocol::ComponentKind;

use super::{obj, EmitContext, EmitResult};

const KIND: ComponentKind = ComponentKind::SimpleComponent;

/// P4: single normal card.
pub async fn single_normal(ctx: &mut EmitContext) -> EmitResult {
    let id = ctx.ids.next();
    ctx.introduce(KIND, &id, obj([])).await?;
    ctx.emit_prose("Generating your card …").await?;

    let data = CardScenario::pick(0).data();
    ctx.update(
        KIND,
        &id,
        obj([
            ("title", json!(data.title)),
            ("description", json!(data.description)),
            ("value", json!(data.value)),
            ("timestamp", json!(Utc::now().to_rfc3339())),
        ]),
    )
    .await?;
    ctx.emit_prose("All set!").await
}

/// P1: single delayed card.
pub async fn single_delayed(ctx: &mut EmitContext) -> EmitResult {
    let id = ctx.ids.next();
    let scenario = CardScenario::pick(0).data();
    ctx.introduce(
        KIND,
        &id,
        obj([
            ("title", json!(format!("Delayed {}", scenario.title))),
            ("date", json!(Utc::now().date_naive().to_string())),
        ]),
    )
    .await?;
    ctx.emit_prose("Generating units … please wait.").await?;
    ctx.sleep_for(ctx.config.single_delayed_card_wait).await;

    ctx.update(KIND, &id, obj([("units", json!(scenario.units))])).await?;
    ctx.emit_prose("All set!").await
}

/// P3: multi normal cards. `count` is already clamped by the caller.
pub async fn multi_normal(ctx: &mut EmitContext, count: usize) -> EmitResult {
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        let id = ctx.ids.next();
        ctx.introduce(KIND, &id, obj([])).await?;
        ids.push(id);
    }

    ctx.emit_prose(&format!("Loading {count} cards …")).await?;

    for (i, id) in ids.iter().enumerate() {
        let n = i + 1;
        let scenario = CardScenario::pick(i).data();
        ctx.update(
            KIND,
            id,
            obj([
                ("title", json!(format!("{} #{n}", scenario.title))),
                ("description", json!(scenario.description)),
                ("value", json!(100 * n as i64)),
                ("timestamp", json!(Utc::now().to_rfc3339())),
            ]),
        )
        .await?;
    }

    ctx.emit_prose("All cards are ready!").await
}

/// P2: multi delayed cards.
pub async fn multi_delayed(ctx: &mut EmitContext, count: usize) -> EmitResult {
    let mut ids = Vec::with_capacity(count);
    let today = Utc::now().date_naive().to_string();
    for i in 0..count {
        let n = i + 1;
        let id = ctx.ids.next();
        ctx.introduce(
            KIND,
            &id,
            obj([
                ("title", json!(format!("Delayed Card #{n}"))),
                ("date", json!(today.clone())),
                (
                    "description",
                    json!("Generating units … please wait."),
                ),
            ]),
        )
        .await?;
        ids.push(id);
    }

    ctx.emit_prose(&format!("Processing {count} delayed cards…")).await?;
    ctx.sleep_for(ctx.config.multi_delayed_card_wait).await;

    for (i, id) in ids.iter().enumerate() {
        let n = i + 1;
        ctx.update(
            KIND,
            id,
            obj([
                ("description", json!("Units added successfully!")),
                ("units", json!(50 * n as i64)),
            ]),
        )
        .await?;
    }

    ctx.emit_prose("All delayed cards are complete!").await
}

/// P5: incremental card — one new field revealed per frame.
pub async fn incremental(ctx: &mut EmitContext) -> EmitResult {
    let id = ctx.ids.next();
    let scenario = CardScenario::pick(0).data();
    ctx.introduce(KIND, &id, obj([])).await?;
    ctx.emit_prose("Loading card details …").await?;

    ctx.update(KIND, &id, obj([("title", json!(scenario.title))])).await?;
    ctx.update(KIND, &id, obj([("description", json!(scenario.description))]))
        .await?;
    ctx.update(KIND, &id, obj([("value", json!(scenario.value))])).await?;

    ctx.emit_prose("All set!").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::protocol::{parse_body, BodySegment};
    use tokio::sync::mpsc;

    async fn run(f: impl FnOnce(&mut EmitContext) -> futures_util::future::BoxFuture<'_, EmitResult>) -> String {
        let (tx, mut rx) = mpsc::channel(1024);
        let mut ctx = EmitContext::new(Config::default(), tx);
        f(&mut ctx).await.unwrap();
        drop(ctx);
        let mut out = Vec::new();
        while let Some(chunk) = rx.recv().await {
            out.extend_from_slice(&chunk.unwrap());
        }
        String::from_utf8(out).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn single_normal_emits_introduce_then_full_update() {
        let body = run(|ctx| Box::pin(single_normal(ctx))).await;
        let segments = parse_body(&body).unwrap();
        let frames: Vec<_> = segments
            .iter()
            .filter_map(|s| match s {
                BodySegment::Frame(f) => Some(f),
                _ => None,
            })
            .collect();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].kind, "SimpleComponent");
        assert_eq!(frames[0].id, frames[1].id);
        assert!(frames[0].data.is_empty());
        assert!(frames[1].data.contains_key("title"));
        assert!(frames[1].data.contains_key("value"));
    }

    #[tokio::test(start_paused = true)]
    async fn single_delayed_card_only_adds_units_on_second_frame() {
        let body = run(|ctx| Box::pin(single_delayed(ctx))).await;
        let segments = parse_body(&body).unwrap();
        let frames: Vec<_> = segments
            .iter()
            .filter_map(|s| match s {
                BodySegment::Frame(f) => Some(f),
                _ => None,
            })
            .collect();
        assert_eq!(frames.len(), 2);
        assert!(frames[0].data.contains_key("title"));
        assert!(frames[0].data.contains_key("date"));
        assert!(!frames[0].data.contains_key("units"));
        assert_eq!(frames[1].data.len(), 1);
        assert!(frames[1].data.contains_key("units"));
    }

    #[tokio::test(start_paused = true)]
    async fn multi_normal_introduces_n_ids_then_updates_each() {
        let body = run(|ctx| Box::pin(multi_normal(ctx, 2))).await;
        let segments = parse_body(&body).unwrap();
        let frames: Vec<_> = segments
            .iter()
            .filter_map(|s| match s {
                BodySegment::Frame(f) => Some(f),
                _ => None,
            })
            .collect();
        // 2 introductions + 2 updates.
        assert_eq!(frames.len(), 4);
        let ids: std::collections::HashSet<_> = frames.iter().map(|f| f.id.clone()).collect();
        assert_eq!(ids.len(), 2);
        assert!(frames[0].data.is_empty());
        assert!(frames[1].data.is_empty());
        assert_eq!(frames[2].data.get("value"), Some(&serde_json::json!(100)));
        assert_eq!(frames[3].data.get("value"), Some(&serde_json::json!(200)));
    }

    #[tokio::test(start_paused = true)]
    async fn multi_delayed_applies_units_per_index() {
        let body = run(|ctx| Box::pin(multi_delayed(ctx, 2))).await;
        let segments = parse_body(&body).unwrap();
        let frames: Vec<_> = segments
            .iter()
            .filter_map(|s| match s {
                BodySegment::Frame(f) => Some(f),
                _ => None,
            })
            .collect();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[2].data.get("units"), Some(&serde_json::json!(50)));
        assert_eq!(frames[3].data.get("units"), Some(&serde_json::json!(100)));
    }

    #[tokio::test(start_paused = true)]
    async fn incremental_reveals_one_field_per_frame() {
        let body = run(|ctx| Box::pin(incremental(ctx))).await;
        let segments = parse_body(&body).unwrap();
        let frames: Vec<_> = segments
            .iter()
            .filter_map(|s| match s {
                BodySegment::Frame(f) => Some(f),
                _ => None,
            })
            .collect();
        assert_eq!(frames.len(), 4);
        assert!(frames[0].data.is_empty());
        assert_eq!(frames[1].data.keys().collect::<Vec<_>>(), vec!["title"]);
        assert_eq!(frames[2].data.keys().collect::<Vec<_>>(), vec!["description"]);
        assert_eq!(frames[3].data.keys().collect::<Vec<_>>(), vec!["value"]);
    }
}
