use serde::Serialize;
use serde_json::{json, Value};

use crate::analytics::AnalyticsError;
use crate::plan::PlanError;

/// Business failure classes a tool can report. These travel back to the
/// oracle as observation payloads, never as Rust errors, so the loop keeps
/// running and the oracle can adapt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolErrorKind {
    UnknownTool,
    InvalidParams,
    NoActivePlan,
    StepOutOfRange,
    NotFound,
    EmptyInput,
    ShapeMismatch,
    DegenerateInput,
}

impl ToolErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolErrorKind::UnknownTool => "unknown_tool",
            ToolErrorKind::InvalidParams => "invalid_params",
            ToolErrorKind::NoActivePlan => "no_active_plan",
            ToolErrorKind::StepOutOfRange => "step_out_of_range",
            ToolErrorKind::NotFound => "not_found",
            ToolErrorKind::EmptyInput => "empty_input",
            ToolErrorKind::ShapeMismatch => "shape_mismatch",
            ToolErrorKind::DegenerateInput => "degenerate_input",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolError {
    pub kind: ToolErrorKind,
    pub detail: String,
}

impl ToolError {
    pub fn new(kind: ToolErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

impl From<AnalyticsError> for ToolError {
    fn from(err: AnalyticsError) -> Self {
        let kind = match err {
            AnalyticsError::EmptyInput => ToolErrorKind::EmptyInput,
            AnalyticsError::ShapeMismatch => ToolErrorKind::ShapeMismatch,
            AnalyticsError::DegenerateInput => ToolErrorKind::DegenerateInput,
        };
        ToolError::new(kind, err.to_string())
    }
}

impl From<PlanError> for ToolError {
    fn from(err: PlanError) -> Self {
        match err {
            PlanError::StepOutOfRange { index, len } => ToolError::new(
                ToolErrorKind::StepOutOfRange,
                format!("step {index} out of range (plan has {len} steps)"),
            ),
        }
    }
}

/// Result of one tool dispatch: a success payload or a tagged error
/// envelope. Both render to JSON via [`ToolOutcome::into_value`].
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    Ok(Value),
    Err(ToolError),
}

impl ToolOutcome {
    pub fn ok(payload: Value) -> Self {
        ToolOutcome::Ok(payload)
    }

    pub fn err(kind: ToolErrorKind, detail: impl Into<String>) -> Self {
        ToolOutcome::Err(ToolError::new(kind, detail))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, ToolOutcome::Err(_))
    }

    /// Render the envelope the oracle observes.
    pub fn into_value(self) -> Value {
        match self {
            ToolOutcome::Ok(payload) => payload,
            ToolOutcome::Err(error) => json!({
                "error": {
                    "kind": error.kind.as_str(),
                    "detail": error.detail,
                }
            }),
        }
    }
}

impl<E: Into<ToolError>> From<Result<Value, E>> for ToolOutcome {
    fn from(result: Result<Value, E>) -> Self {
        match result {
            Ok(payload) => ToolOutcome::Ok(payload),
            Err(err) => ToolOutcome::Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_renders_payload_unwrapped() {
        let value = ToolOutcome::ok(json!({"mean": 1.5})).into_value();
        assert_eq!(value, json!({"mean": 1.5}));
        assert!(value.get("error").is_none());
    }

    #[test]
    fn error_renders_tagged_envelope() {
        let value = ToolOutcome::err(ToolErrorKind::NotFound, "no country matching 'atlantis'")
            .into_value();
        assert_eq!(value["error"]["kind"], "not_found");
        assert_eq!(value["error"]["detail"], "no country matching 'atlantis'");
    }

    #[test]
    fn analytics_errors_map_one_to_one() {
        assert_eq!(
            ToolError::from(AnalyticsError::EmptyInput).kind,
            ToolErrorKind::EmptyInput
        );
        assert_eq!(
            ToolError::from(AnalyticsError::ShapeMismatch).kind,
            ToolErrorKind::ShapeMismatch
        );
        assert_eq!(
            ToolError::from(AnalyticsError::DegenerateInput).kind,
            ToolErrorKind::DegenerateInput
        );
    }

    #[test]
    fn plan_error_carries_both_numbers() {
        let err = ToolError::from(PlanError::StepOutOfRange { index: 7, len: 3 });
        assert_eq!(err.kind, ToolErrorKind::StepOutOfRange);
        assert!(err.detail.contains('7') && err.detail.contains('3'));
    }
}
