//! The reasoning seam: the engine drives any [`ReasoningOracle`] through a
//! typed conversation. Production wires an LLM provider behind this trait;
//! tests use [`ScriptedOracle`].

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{HubError, HubResult};
use crate::tools::ToolDescriptor;

/// One piece of an oracle turn, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// Free-form reasoning text.
    Text(String),
    /// A request to invoke a tool.
    ToolUse { id: String, name: String, input: Value },
}

/// A full oracle response. A turn with no [`Fragment::ToolUse`] terminates
/// the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OracleTurn {
    pub fragments: Vec<Fragment>,
}

impl OracleTurn {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    /// A text-only turn (the usual final answer).
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(vec![Fragment::Text(content.into())])
    }

    pub fn has_tool_use(&self) -> bool {
        self.fragments
            .iter()
            .any(|f| matches!(f, Fragment::ToolUse { .. }))
    }
}

/// Conversation entries the engine accumulates and replays to the oracle.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatMessage {
    User(String),
    Assistant(Vec<Fragment>),
    ToolResult { call_id: String, output: Value },
}

/// Anything that can produce the next turn of reasoning given the
/// conversation so far and the available tools.
#[async_trait]
pub trait ReasoningOracle: Send + Sync {
    async fn complete(
        &self,
        system: &str,
        tools: &[ToolDescriptor],
        conversation: &[ChatMessage],
    ) -> HubResult<OracleTurn>;
}

/// Deterministic oracle for tests: replays a fixed queue of turns.
///
/// Once the queue is exhausted, further calls fail with
/// [`HubError::Oracle`].
pub struct ScriptedOracle {
    turns: Mutex<VecDeque<OracleTurn>>,
}

impl ScriptedOracle {
    pub fn new(turns: Vec<OracleTurn>) -> Self {
        Self {
            turns: Mutex::new(turns.into()),
        }
    }
}

#[async_trait]
impl ReasoningOracle for ScriptedOracle {
    async fn complete(
        &self,
        _system: &str,
        _tools: &[ToolDescriptor],
        _conversation: &[ChatMessage],
    ) -> HubResult<OracleTurn> {
        self.turns
            .lock()
            .map_err(|_| HubError::Internal("scripted oracle mutex poisoned".to_string()))?
            .pop_front()
            .ok_or_else(|| HubError::Oracle("script exhausted".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn scripted_oracle_replays_in_order() {
        let oracle = ScriptedOracle::new(vec![
            OracleTurn::new(vec![Fragment::ToolUse {
                id: "call-1".to_string(),
                name: "list_data_sources".to_string(),
                input: json!({}),
            }]),
            OracleTurn::text("done"),
        ]);

        let first = oracle.complete("", &[], &[]).await.unwrap();
        assert!(first.has_tool_use());
        let second = oracle.complete("", &[], &[]).await.unwrap();
        assert!(!second.has_tool_use());
    }

    #[tokio::test]
    async fn exhausted_script_is_an_oracle_failure() {
        let oracle = ScriptedOracle::new(vec![]);
        let err = oracle.complete("", &[], &[]).await.unwrap_err();
        assert!(matches!(err, HubError::Oracle(_)));
    }

    #[test]
    fn text_turn_has_no_tool_use() {
        assert!(!OracleTurn::text("answer").has_tool_use());
    }
}
