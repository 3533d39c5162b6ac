use crate::{ApiError, ApiResult};
use lineup_core::lineup::LineupEditor;
use lineup_core::shared::PlanId;
use lineup_core::GameFormat;
use std::collections::HashMap;

pub struct Plan {
    pub id: PlanId,
    pub format: GameFormat,
    pub editor: LineupEditor,
}

#[derive(Default)]
pub struct PlanStore {
    plans: HashMap<PlanId, Plan>,
}

impl PlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, plan: Plan) {
        self.plans.insert(plan.id.clone(), plan);
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn find(&self, plan_id: &PlanId) -> ApiResult<&Plan> {
        self.plans
            .get(plan_id)
            .ok_or_else(|| ApiError::NotFound(format!("Plan '{}' not found", plan_id)))
    }

    pub fn find_mut(&mut self, plan_id: &PlanId) -> ApiResult<&mut Plan> {
        self.plans
            .get_mut(plan_id)
            .ok_or_else(|| ApiError::NotFound(format!("Plan '{}' not found", plan_id)))
    }
}
