//! Daily plan persistence and completion tracking.
//!
//! Plans are held in a single keyed map, `(week_id, date_key)` to plan,
//! persisted as one blob. All mutation is a synchronous load-modify-save
//! on that map; readers never observe a partial write.

use std::collections::HashMap;

use jiff::Timestamp;

use crate::error::Result;
use crate::models::{DailyPlan, EngagementSignal};
use crate::selector;

use super::kv::DAILY_PLANS_NAMESPACE;

const DAILY_PLANS_VERSION: u32 = 1;

type PlanMap = HashMap<String, DailyPlan>;

impl super::Database {
    /// Returns the plan for `(week_id, date_key)`, generating one when
    /// needed.
    ///
    /// A cached plan is reused untouched while it is non-empty and every
    /// one of its lessons is still present in the pool. Otherwise a fresh
    /// plan is generated through the selector; practiced lessons that
    /// re-appear in the new selection stay practiced. The second tuple
    /// field reports whether generation happened.
    pub fn ensure_plan(
        &mut self,
        week_id: &str,
        date_key: &str,
        lesson_pool: &[String],
        engagement: &HashMap<String, EngagementSignal>,
        now: Timestamp,
    ) -> Result<(DailyPlan, bool)> {
        let mut plans: PlanMap = self.load_state(DAILY_PLANS_NAMESPACE)?;
        let key = DailyPlan::key_for(week_id, date_key);

        if let Some(cached) = plans.get(&key) {
            if cached.is_compatible_with(lesson_pool) {
                return Ok((cached.clone(), false));
            }
        }

        let lesson_ids = selector::select_daily_lessons(lesson_pool, date_key, engagement, now);

        // Carry completion forward for lessons that survived regeneration.
        let practiced = plans
            .get(&key)
            .map(|old| {
                old.practiced
                    .iter()
                    .filter(|id| lesson_ids.contains(id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        let plan = DailyPlan {
            week_id: week_id.to_string(),
            date_key: date_key.to_string(),
            lesson_ids,
            practiced,
            generated_at: now,
        };

        plans.insert(key, plan.clone());
        self.save_state(DAILY_PLANS_NAMESPACE, DAILY_PLANS_VERSION, &plans)?;
        Ok((plan, true))
    }

    /// Flips a lesson's membership in the plan's practiced set.
    ///
    /// Returns `None` when no plan exists for the key or the lesson is not
    /// part of it (a no-op), otherwise whether the lesson is practiced
    /// after the flip.
    pub fn toggle_practiced_lesson(
        &mut self,
        week_id: &str,
        date_key: &str,
        lesson_id: &str,
    ) -> Result<Option<bool>> {
        let mut plans: PlanMap = self.load_state(DAILY_PLANS_NAMESPACE)?;
        let key = DailyPlan::key_for(week_id, date_key);

        let Some(plan) = plans.get_mut(&key) else {
            return Ok(None);
        };
        if !plan.contains(lesson_id) {
            return Ok(None);
        }

        let practiced = if plan.is_practiced(lesson_id) {
            plan.practiced.retain(|id| id != lesson_id);
            false
        } else {
            plan.practiced.push(lesson_id.to_string());
            true
        };

        self.save_state(DAILY_PLANS_NAMESPACE, DAILY_PLANS_VERSION, &plans)?;
        Ok(Some(practiced))
    }

    /// The cached plan for a key, if any.
    pub fn plan_for(&self, week_id: &str, date_key: &str) -> Result<Option<DailyPlan>> {
        let plans: PlanMap = self.load_state(DAILY_PLANS_NAMESPACE)?;
        Ok(plans.get(&DailyPlan::key_for(week_id, date_key)).cloned())
    }

    /// Clears all cached daily plans, the day-rollover reset entry point.
    pub fn clear_daily_plans(&mut self) -> Result<()> {
        self.delete_blob(DAILY_PLANS_NAMESPACE)
    }
}
