//! Plan-control tools: the only handlers allowed to mutate the session plan.

use serde_json::{json, Value};

use super::outcome::{ToolErrorKind, ToolOutcome};
use super::registry::{ToolContext, ToolRegistry};
use super::schema::ToolDescriptor;
use crate::plan::Plan;

pub fn register(registry: &mut ToolRegistry) {
    registry.register(
        ToolDescriptor::new(
            "create_analysis_plan",
            "Create a multi-step analysis plan for the user's question",
            json!({
                "type": "object",
                "required": ["goal", "steps"],
                "properties": {
                    "goal": {"type": "string"},
                    "steps": {"type": "array"},
                }
            }),
        ),
        Box::new(create_analysis_plan),
    );

    registry.register(
        ToolDescriptor::new(
            "update_plan_progress",
            "Mark a plan step as completed",
            json!({
                "type": "object",
                "required": ["step_completed"],
                "properties": {
                    "step_completed": {"type": "integer"},
                }
            }),
        ),
        Box::new(update_plan_progress),
    );
}

fn create_analysis_plan(params: &Value, ctx: &mut ToolContext<'_>) -> ToolOutcome {
    let goal = match params["goal"].as_str() {
        Some(goal) if !goal.trim().is_empty() => goal.trim(),
        _ => return ToolOutcome::err(ToolErrorKind::InvalidParams, "goal must be a non-empty string"),
    };

    let steps: Vec<String> = match params["steps"].as_array() {
        Some(raw) if !raw.is_empty() => {
            let mut steps = Vec::with_capacity(raw.len());
            for step in raw {
                match step.as_str() {
                    Some(s) if !s.trim().is_empty() => steps.push(s.trim().to_string()),
                    _ => {
                        return ToolOutcome::err(
                            ToolErrorKind::InvalidParams,
                            "steps must be non-empty strings",
                        )
                    }
                }
            }
            steps
        }
        _ => {
            return ToolOutcome::err(
                ToolErrorKind::InvalidParams,
                "steps must be a non-empty array",
            )
        }
    };

    let plan = Plan::new(goal, steps);
    let payload = json!({
        "plan": plan,
        "message": format!("Analysis plan created with {} steps", plan.steps.len()),
    });
    // A new plan replaces any prior one for the session.
    *ctx.plan = Some(plan);
    ToolOutcome::ok(payload)
}

fn update_plan_progress(params: &Value, ctx: &mut ToolContext<'_>) -> ToolOutcome {
    let plan = match ctx.plan.as_mut() {
        Some(plan) => plan,
        None => {
            return ToolOutcome::err(
                ToolErrorKind::NoActivePlan,
                "no plan exists; call create_analysis_plan first",
            )
        }
    };

    let step = match params["step_completed"].as_u64() {
        Some(step) => step as usize,
        None => {
            return ToolOutcome::err(
                ToolErrorKind::InvalidParams,
                "step_completed must be a non-negative integer",
            )
        }
    };

    if let Err(err) = plan.advance(step) {
        return ToolOutcome::Err(err.into());
    }

    ToolOutcome::ok(json!({
        "plan": plan,
        "remaining_steps": plan.remaining_steps(),
        "message": format!("Step {step} completed"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::PlanStatus;

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        register(&mut registry);
        registry
    }

    #[test]
    fn create_then_advance_to_completion() {
        let registry = registry();
        let mut plan = None;
        let mut ctx = ToolContext { plan: &mut plan };

        let created = registry
            .invoke(
                "create_analysis_plan",
                &json!({"goal": "compare KEN and SWE", "steps": ["fetch", "correlate"]}),
                &mut ctx,
            )
            .into_value();
        assert_eq!(created["plan"]["status"], "in_progress");
        assert!(ctx.plan.is_some());

        let first = registry
            .invoke("update_plan_progress", &json!({"step_completed": 0}), &mut ctx)
            .into_value();
        assert_eq!(first["remaining_steps"], 1);

        registry.invoke("update_plan_progress", &json!({"step_completed": 1}), &mut ctx);
        assert_eq!(ctx.plan.as_ref().unwrap().status, PlanStatus::Completed);
    }

    #[test]
    fn empty_goal_or_steps_is_invalid() {
        let registry = registry();
        let mut plan = None;
        let mut ctx = ToolContext { plan: &mut plan };

        let value = registry
            .invoke(
                "create_analysis_plan",
                &json!({"goal": "  ", "steps": ["a"]}),
                &mut ctx,
            )
            .into_value();
        assert_eq!(value["error"]["kind"], "invalid_params");

        let value = registry
            .invoke(
                "create_analysis_plan",
                &json!({"goal": "g", "steps": []}),
                &mut ctx,
            )
            .into_value();
        assert_eq!(value["error"]["kind"], "invalid_params");
        assert!(ctx.plan.is_none());
    }

    #[test]
    fn progress_without_plan_is_reported_not_raised() {
        let registry = registry();
        let mut plan = None;
        let mut ctx = ToolContext { plan: &mut plan };
        let value = registry
            .invoke("update_plan_progress", &json!({"step_completed": 0}), &mut ctx)
            .into_value();
        assert_eq!(value["error"]["kind"], "no_active_plan");
    }

    #[test]
    fn out_of_range_step_keeps_plan_untouched() {
        let registry = registry();
        let mut plan = None;
        let mut ctx = ToolContext { plan: &mut plan };
        registry.invoke(
            "create_analysis_plan",
            &json!({"goal": "g", "steps": ["only"]}),
            &mut ctx,
        );
        let value = registry
            .invoke("update_plan_progress", &json!({"step_completed": 5}), &mut ctx)
            .into_value();
        assert_eq!(value["error"]["kind"], "step_out_of_range");
        assert_eq!(ctx.plan.as_ref().unwrap().current_step, 0);
    }

    #[test]
    fn new_plan_replaces_prior_plan() {
        let registry = registry();
        let mut plan = None;
        let mut ctx = ToolContext { plan: &mut plan };
        registry.invoke(
            "create_analysis_plan",
            &json!({"goal": "first", "steps": ["a"]}),
            &mut ctx,
        );
        let first_id = ctx.plan.as_ref().unwrap().id.clone();
        registry.invoke(
            "create_analysis_plan",
            &json!({"goal": "second", "steps": ["b", "c"]}),
            &mut ctx,
        );
        let plan = ctx.plan.as_ref().unwrap();
        assert_ne!(plan.id, first_id);
        assert_eq!(plan.goal, "second");
        assert_eq!(plan.current_step, 0);
    }
}
