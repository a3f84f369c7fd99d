//! LLM planning collaborator (spec §4.7). Invoked only for pattern P0:
//! replaces the dispatcher's rule-based plan with an externally-sourced
//! one, with caching, retry, validation, and a deterministic fallback.
//!
//! Failure is entirely internal (spec §7.4): every error path here ends in
//! either a retry or the fixed fallback plan — nothing is ever surfaced to
//! the HTTP client.

pub mod backend;
pub mod cache;
pub mod extract;
pub mod fallback;
pub mod prompt;
pub mod validate;

use serde_json::{Map, Value};
use std::time::Duration;

use crate::config::Config;
use crate::emitters::EmitContext;
use crate::protocol::ComponentKind;

pub use backend::{PlannerBackend, PlannerError};
pub use cache::PlanCache;

/// One validated, not-yet-emitted plan component (spec §3 component shapes,
/// §4.7 step 5 "Per-component validation"). Ids are assigned fresh at
/// emission time, never cached, per spec T10.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedComponent {
    pub kind: ComponentKind,
    pub data: Map<String, Value>,
}

/// Runs the full pipeline (cache → prompt → retry → extract → validate →
/// clamp → fallback → cache-store) and returns the plan to emit.
pub async fn resolve_plan(
    message: &str,
    cache: &PlanCache,
    backend: &dyn PlannerBackend,
    cfg: &Config,
) -> Vec<PlannedComponent> {
    let key = cache::cache_key(message);
    if let Some(plan) = cache.get(&key).await {
        return plan;
    }

    let full_prompt = prompt::build_prompt(message, cfg);
    let mut delay = Duration::from_secs(1);

    for attempt in 1..=cfg.llm_max_attempts {
        let outcome = tokio::time::timeout(cfg.llm_request_timeout, backend.complete(full_prompt.clone())).await;
        let text = match outcome {
            Ok(Ok(text)) => text,
            Ok(Err(err)) => {
                tracing::warn!(attempt, %err, "planner backend call failed, retrying");
                sleep_and_double(&mut delay, attempt, cfg.llm_max_attempts).await;
                continue;
            }
            Err(_) => {
                tracing::warn!(attempt, "planner backend call timed out, retrying");
                sleep_and_double(&mut delay, attempt, cfg.llm_max_attempts).await;
                continue;
            }
        };

        let Some(items) = extract::extract_plan_json(&text) else {
            tracing::warn!(attempt, "planner response had no extractable plan JSON, retrying");
            sleep_and_double(&mut delay, attempt, cfg.llm_max_attempts).await;
            continue;
        };

        let mut plan = validate::validate_plan(items, cfg);
        plan.truncate(cfg.llm_max_components_per_plan);

        if plan.is_empty() {
            tracing::warn!(attempt, "planner response had no valid components, retrying");
            sleep_and_double(&mut delay, attempt, cfg.llm_max_attempts).await;
            continue;
        }

        cache.insert(key, plan.clone(), cfg.llm_cache_ttl).await;
        return plan;
    }

    tracing::error!("planner exhausted retry budget, serving fallback plan");
    fallback::fallback_plan()
}

async fn sleep_and_double(delay: &mut Duration, attempt: u32, max_attempts: u32) {
    if attempt < max_attempts {
        tokio::time::sleep(*delay).await;
        *delay *= 2;
    }
}

/// Emits a resolved plan as single-frame envelopes, in declared order, with
/// a small inter-frame pause (spec §4.7 step 9). The registry still
/// records each id for protocol consistency (I4) even though no follow-up
/// update ever targets it.
pub async fn emit_plan(ctx: &mut EmitContext, plan: Vec<PlannedComponent>) -> crate::emitters::EmitResult {
    for component in plan {
        let id = ctx.ids.next();
        ctx.introduce(component.kind, &id, component.data).await?;
    }
    Ok(())
}
