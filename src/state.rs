//! Process-wide shared state (spec §6 Transport, §4.7 planner wiring).
//!
//! Everything request-scoped — [`crate::registry::ComponentRegistry`],
//! [`crate::ids::IdGen`] — lives on the stack inside the request task
//! instead of here; this struct only holds what genuinely outlives a single
//! request.

use std::sync::Arc;

use crate::config::Config;
use crate::planner::{PlanCache, PlannerBackend};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub plan_cache: PlanCache,
    pub planner: Arc<dyn PlannerBackend>,
}

impl AppState {
    pub fn new(config: Config, planner: Arc<dyn PlannerBackend>) -> Self {
        Self {
            config,
            plan_cache: PlanCache::new(),
            planner,
        }
    }
}
