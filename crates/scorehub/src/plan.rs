//! Plan tracking: a declared decomposition of the user's goal into ordered
//! steps, advanced one step at a time by the plan-control tools.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

/// Attempted plan transitions that are rejected without a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The step index is outside `[0, steps.len())` or behind the current
    /// position.
    StepOutOfRange { index: usize, len: usize },
}

/// A multi-step analysis plan.
///
/// `current_step` is the index of the next unstarted step and never
/// decreases. Status flips to `Completed` exactly when `current_step`
/// reaches the number of steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub goal: String,
    pub steps: Vec<String>,
    pub current_step: usize,
    pub status: PlanStatus,
    pub created_at: DateTime<Utc>,
}

impl Plan {
    pub fn new(goal: impl Into<String>, steps: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            goal: goal.into(),
            steps,
            current_step: 0,
            status: PlanStatus::InProgress,
            created_at: Utc::now(),
        }
    }

    /// Mark `step_index` as completed, moving `current_step` past it.
    ///
    /// Valid only for indices in `[current_step, steps.len())`; anything
    /// else is rejected so the step pointer stays monotone.
    pub fn advance(&mut self, step_index: usize) -> Result<(), PlanError> {
        if step_index >= self.steps.len() || step_index < self.current_step {
            return Err(PlanError::StepOutOfRange {
                index: step_index,
                len: self.steps.len(),
            });
        }
        self.current_step = step_index + 1;
        if self.current_step == self.steps.len() {
            self.status = PlanStatus::Completed;
        }
        Ok(())
    }

    /// Number of steps not yet completed.
    pub fn remaining_steps(&self) -> usize {
        self.steps.len() - self.current_step
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.status, PlanStatus::Completed | PlanStatus::Failed)
    }

    /// Reserved transition: mark the plan failed. No current tool exercises
    /// it; terminal states are left untouched.
    pub fn fail(&mut self) {
        if !self.is_terminal() {
            self.status = PlanStatus::Failed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> Plan {
        Plan::new(
            "compare two countries",
            vec![
                "fetch profiles".to_string(),
                "run correlation".to_string(),
                "summarize".to_string(),
            ],
        )
    }

    #[test]
    fn new_plan_starts_in_progress() {
        let plan = plan();
        assert_eq!(plan.status, PlanStatus::InProgress);
        assert_eq!(plan.current_step, 0);
        assert_eq!(plan.remaining_steps(), 3);
    }

    #[test]
    fn advance_moves_past_the_step() {
        let mut plan = plan();
        plan.advance(0).unwrap();
        assert_eq!(plan.current_step, 1);
        assert_eq!(plan.status, PlanStatus::InProgress);
        assert_eq!(plan.remaining_steps(), 2);
    }

    #[test]
    fn out_of_range_advance_is_rejected_without_state_change() {
        let mut plan = plan();
        let before = plan.clone();
        assert!(plan.advance(3).is_err());
        assert!(plan.advance(99).is_err());
        assert_eq!(plan, before);
    }

    #[test]
    fn advance_never_moves_backwards() {
        let mut plan = plan();
        plan.advance(1).unwrap();
        assert_eq!(plan.current_step, 2);
        assert!(plan.advance(0).is_err());
        assert_eq!(plan.current_step, 2);
    }

    #[test]
    fn completing_the_last_step_flips_status_once() {
        let mut plan = plan();
        plan.advance(0).unwrap();
        plan.advance(1).unwrap();
        assert_eq!(plan.status, PlanStatus::InProgress);
        plan.advance(2).unwrap();
        assert_eq!(plan.status, PlanStatus::Completed);
        assert_eq!(plan.remaining_steps(), 0);
        // Already complete: nothing left to advance.
        assert!(plan.advance(2).is_err());
        assert_eq!(plan.status, PlanStatus::Completed);
    }

    #[test]
    fn skipping_ahead_completes_intermediate_steps() {
        let mut plan = plan();
        plan.advance(2).unwrap();
        assert_eq!(plan.current_step, 3);
        assert_eq!(plan.status, PlanStatus::Completed);
    }

    #[test]
    fn fail_is_ignored_on_terminal_plans() {
        let mut plan = plan();
        plan.advance(2).unwrap();
        plan.fail();
        assert_eq!(plan.status, PlanStatus::Completed);

        let mut active = self::plan();
        active.fail();
        assert_eq!(active.status, PlanStatus::Failed);
    }

    #[test]
    fn serde_uses_snake_case_status() {
        let json = serde_json::to_value(plan()).unwrap();
        assert_eq!(json["status"], "in_progress");
    }
}
