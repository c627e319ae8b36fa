use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use super::outcome::{ToolErrorKind, ToolOutcome};
use super::schema::{validate_params, ToolDescriptor};
use crate::plan::Plan;

/// Mutable context passed to tool handlers. Only the plan-control tools
/// touch the plan; everything else treats it as read-only.
pub struct ToolContext<'a> {
    pub plan: &'a mut Option<Plan>,
}

/// Handler type: takes JSON args + mutable execution context, returns an
/// outcome envelope.
pub type ToolHandler = Box<dyn Fn(&Value, &mut ToolContext) -> ToolOutcome + Send + Sync>;

struct Tool {
    descriptor: ToolDescriptor,
    handler: ToolHandler,
}

/// Ordered tool catalog with name-indexed dispatch.
///
/// Registration order is the catalog order advertised to the oracle; it is
/// stable across runs.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Tool>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool at the end of the catalog. A duplicate name replaces
    /// the handler but keeps the original position.
    pub fn register(&mut self, descriptor: ToolDescriptor, handler: ToolHandler) {
        match self.index.get(&descriptor.name) {
            Some(&pos) => self.tools[pos] = Tool { descriptor, handler },
            None => {
                self.index
                    .insert(descriptor.name.clone(), self.tools.len());
                self.tools.push(Tool { descriptor, handler });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Catalog metadata, in registration order.
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools.iter().map(|t| t.descriptor.clone()).collect()
    }

    /// Dispatch one call. Unknown names and schema violations come back as
    /// error envelopes, not Rust errors.
    pub fn invoke(&self, name: &str, params: &Value, ctx: &mut ToolContext<'_>) -> ToolOutcome {
        let tool = match self.index.get(name) {
            Some(&pos) => &self.tools[pos],
            None => {
                debug!(tool = name, "unknown tool requested");
                return ToolOutcome::err(
                    ToolErrorKind::UnknownTool,
                    format!("no tool named '{name}'"),
                );
            }
        };

        if let Err(detail) = validate_params(params, &tool.descriptor.input_schema) {
            debug!(tool = name, %detail, "tool params rejected");
            return ToolOutcome::err(ToolErrorKind::InvalidParams, detail);
        }

        debug!(tool = name, "invoking tool");
        (tool.handler)(params, ctx)
    }
}
