//! Append-only session trace: one [`ThoughtStep`] per reasoning fragment,
//! tool call, tool result, plan change, or final answer.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Kind of one recorded step. Wire names match the original trace format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Free-form model reasoning text.
    #[serde(rename = "thinking")]
    Reasoning,
    /// A tool invocation request (name + input).
    Action,
    /// A tool's output, fed back to the oracle.
    Observation,
    /// The plan was created or advanced.
    Plan,
    /// The final answer for the session.
    Result,
}

/// One immutable record in the session trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThoughtStep {
    pub id: String,
    pub kind: StepKind,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_input: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_output: Option<Value>,
    pub timestamp: DateTime<Utc>,
}

impl ThoughtStep {
    pub fn new(kind: StepKind, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            content: content.into(),
            tool_name: None,
            tool_input: None,
            tool_output: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_tool_input(mut self, tool_name: impl Into<String>, input: Value) -> Self {
        self.tool_name = Some(tool_name.into());
        self.tool_input = Some(input);
        self
    }

    pub fn with_tool_output(mut self, tool_name: impl Into<String>, output: Value) -> Self {
        self.tool_name = Some(tool_name.into());
        self.tool_output = Some(output);
        self
    }
}

/// Synchronous observer invoked at append time, in the loop's execution
/// context. Implementations wanting another concurrency domain must hand
/// off themselves (see [`crate::bus::Bus`]).
pub type ProgressHook = Arc<dyn Fn(&ThoughtStep) + Send + Sync>;

/// Append-only, strictly ordered trace for one session.
pub struct Trace {
    steps: Vec<ThoughtStep>,
    hook: Option<ProgressHook>,
}

impl Trace {
    pub fn new(hook: Option<ProgressHook>) -> Self {
        Self {
            steps: Vec::new(),
            hook,
        }
    }

    /// Append a step and notify the hook. Append order is the session's
    /// causal order; appended steps are never mutated.
    pub fn append(&mut self, step: ThoughtStep) {
        if let Some(hook) = &self.hook {
            hook(&step);
        }
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[ThoughtStep] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<ThoughtStep> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    #[test]
    fn append_preserves_order() {
        let mut trace = Trace::new(None);
        trace.append(ThoughtStep::new(StepKind::Reasoning, "first"));
        trace.append(
            ThoughtStep::new(StepKind::Action, "Calling compute_statistics")
                .with_tool_input("compute_statistics", json!({"values": [1, 2]})),
        );
        trace.append(
            ThoughtStep::new(StepKind::Observation, "Result from compute_statistics")
                .with_tool_output("compute_statistics", json!({"mean": 1.5})),
        );

        let kinds: Vec<StepKind> = trace.steps().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![StepKind::Reasoning, StepKind::Action, StepKind::Observation]
        );
    }

    #[test]
    fn hook_fires_synchronously_per_append() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let hook: ProgressHook = Arc::new(move |step| {
            sink.lock().unwrap().push(step.content.clone());
        });

        let mut trace = Trace::new(Some(hook));
        trace.append(ThoughtStep::new(StepKind::Reasoning, "a"));
        trace.append(ThoughtStep::new(StepKind::Result, "b"));

        assert_eq!(*seen.lock().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn step_kind_wire_names() {
        let step = ThoughtStep::new(StepKind::Reasoning, "x");
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["kind"], "thinking");
        assert!(json.get("tool_name").is_none());

        let action = ThoughtStep::new(StepKind::Action, "y")
            .with_tool_input("query_bank", serde_json::json!({}));
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["kind"], "action");
        assert_eq!(json["tool_name"], "query_bank");
    }
}
