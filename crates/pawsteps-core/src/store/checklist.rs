//! Per-day step checklist persistence.

use std::collections::HashMap;

use crate::error::Result;

use super::kv::CHECKLIST_NAMESPACE;

const CHECKLIST_VERSION: u32 = 1;

type ChecklistMap = HashMap<String, Vec<String>>;

impl super::Database {
    /// Flips a step's checked state for a day. Returns the new state.
    pub fn toggle_checklist_step(&mut self, date_key: &str, step_id: &str) -> Result<bool> {
        let mut checklists: ChecklistMap = self.load_state(CHECKLIST_NAMESPACE)?;
        let steps = checklists.entry(date_key.to_string()).or_default();

        let checked = if steps.iter().any(|id| id == step_id) {
            steps.retain(|id| id != step_id);
            false
        } else {
            steps.push(step_id.to_string());
            true
        };

        self.save_state(CHECKLIST_NAMESPACE, CHECKLIST_VERSION, &checklists)?;
        Ok(checked)
    }

    /// The checked step ids for a day, in check order.
    pub fn checklist_for(&self, date_key: &str) -> Result<Vec<String>> {
        let checklists: ChecklistMap = self.load_state(CHECKLIST_NAMESPACE)?;
        Ok(checklists.get(date_key).cloned().unwrap_or_default())
    }
}
