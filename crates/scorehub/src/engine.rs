//! Orchestration engine: drives the reasoning oracle through a bounded
//! reason/act/observe loop, recording every step in the session trace.

use std::env;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::HubResult;
use crate::oracle::{ChatMessage, Fragment, ReasoningOracle};
use crate::plan::Plan;
use crate::session::{Analysis, SessionRegistry};
use crate::tools::{ToolContext, ToolRegistry};
use crate::trace::{ProgressHook, StepKind, ThoughtStep, Trace};

pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are a data analyst for a gender-responsive climate policy scorecard \
covering 25 countries across six data sources. Start complex questions by \
creating an analysis plan, then work through it step by step using the \
available tools, marking steps completed as you go. Ground every claim in \
tool output, cite which source a number came from, and finish with a clear \
written answer.";

const MAX_ITERATIONS_VAR: &str = "SCOREHUB_MAX_ITERATIONS";
const SYSTEM_PROMPT_VAR: &str = "SCOREHUB_SYSTEM_PROMPT";

/// Engine tuning, overridable from the environment.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Upper bound on oracle turns per session.
    pub max_iterations: usize,
    pub system_prompt: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_iterations: 15,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl EngineConfig {
    /// Read configuration from `SCOREHUB_MAX_ITERATIONS` and
    /// `SCOREHUB_SYSTEM_PROMPT`, falling back to defaults for anything
    /// unset or unparseable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = env::var(MAX_ITERATIONS_VAR) {
            match raw.parse::<usize>() {
                Ok(n) if n > 0 => config.max_iterations = n,
                _ => warn!(value = %raw, "ignoring invalid {}", MAX_ITERATIONS_VAR),
            }
        }
        if let Ok(prompt) = env::var(SYSTEM_PROMPT_VAR) {
            if !prompt.trim().is_empty() {
                config.system_prompt = prompt;
            }
        }
        config
    }
}

/// The orchestration core: one engine, many sequential sessions.
pub struct Engine {
    oracle: Arc<dyn ReasoningOracle>,
    tools: ToolRegistry,
    sessions: Arc<SessionRegistry>,
    config: EngineConfig,
}

impl Engine {
    pub fn new(oracle: Arc<dyn ReasoningOracle>, tools: ToolRegistry, config: EngineConfig) -> Self {
        Self {
            oracle,
            tools,
            sessions: Arc::new(SessionRegistry::new()),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn list_sessions(&self) -> Vec<Analysis> {
        self.sessions.list()
    }

    pub fn get_session(&self, id: &str) -> Option<Analysis> {
        self.sessions.get(id)
    }

    pub fn clear_sessions(&self) {
        self.sessions.clear()
    }

    /// Run one analysis session to completion.
    ///
    /// Business failures inside tools flow back to the oracle as
    /// observations and never abort the session. Two conditions end a
    /// session without a final answer: iteration budget exhaustion (stored
    /// as an errored session, returned as `Ok`) and oracle failure (stored
    /// as an errored session, returned as `Err`).
    pub async fn submit(&self, query: &str, hook: Option<ProgressHook>) -> HubResult<Analysis> {
        info!(query, "starting analysis session");
        let mut analysis = Analysis::new(query);
        let mut trace = Trace::new(hook);
        let mut plan: Option<Plan> = None;
        let mut conversation = vec![ChatMessage::User(query.to_string())];
        let descriptors = self.tools.descriptors();

        let mut candidate_answer = String::new();
        let mut iterations = 0;

        loop {
            if iterations >= self.config.max_iterations {
                warn!(
                    session = %analysis.id,
                    max_iterations = self.config.max_iterations,
                    "iteration budget exhausted"
                );
                analysis.fail("iteration budget exhausted");
                break;
            }
            iterations += 1;
            debug!(session = %analysis.id, iteration = iterations, "requesting oracle turn");

            let turn = match self
                .oracle
                .complete(&self.config.system_prompt, &descriptors, &conversation)
                .await
            {
                Ok(turn) => turn,
                Err(err) => {
                    warn!(session = %analysis.id, error = %err, "oracle failed");
                    analysis.fail(err.to_string());
                    analysis.plan = plan;
                    analysis.thoughts = trace.into_steps();
                    self.sessions.insert(analysis);
                    return Err(err);
                }
            };

            conversation.push(ChatMessage::Assistant(turn.fragments.clone()));

            let mut tool_results = Vec::new();
            for fragment in &turn.fragments {
                match fragment {
                    Fragment::Text(text) => {
                        trace.append(ThoughtStep::new(StepKind::Reasoning, text.clone()));
                        candidate_answer = text.clone();
                    }
                    Fragment::ToolUse { id, name, input } => {
                        trace.append(
                            ThoughtStep::new(StepKind::Action, format!("Calling {name}"))
                                .with_tool_input(name.clone(), input.clone()),
                        );

                        let plan_before = plan.clone();
                        let mut ctx = ToolContext { plan: &mut plan };
                        let output = self.tools.invoke(name, input, &mut ctx).into_value();

                        trace.append(
                            ThoughtStep::new(StepKind::Observation, format!("Result from {name}"))
                                .with_tool_output(name.clone(), output.clone()),
                        );
                        if let Some(step) = plan_change_step(&plan_before, &plan) {
                            trace.append(step);
                        }

                        tool_results.push(ChatMessage::ToolResult {
                            call_id: id.clone(),
                            output,
                        });
                    }
                }
            }

            if !turn.has_tool_use() {
                trace.append(ThoughtStep::new(StepKind::Result, candidate_answer.clone()));
                analysis.complete(candidate_answer.clone());
                break;
            }
            conversation.extend(tool_results);
        }

        analysis.plan = plan;
        analysis.thoughts = trace.into_steps();
        info!(
            session = %analysis.id,
            status = ?analysis.status,
            steps = analysis.thoughts.len(),
            iterations,
            "session finished"
        );
        self.sessions.insert(analysis.clone());
        Ok(analysis)
    }
}

fn plan_change_step(before: &Option<Plan>, after: &Option<Plan>) -> Option<ThoughtStep> {
    let plan = after.as_ref()?;
    if before.as_ref() == Some(plan) {
        return None;
    }
    let content = if before.as_ref().map(|b| b.id.as_str()) == Some(plan.id.as_str()) {
        format!(
            "Plan progress: {}/{} steps completed",
            plan.current_step,
            plan.steps.len()
        )
    } else {
        format!("Plan created: {} ({} steps)", plan.goal, plan.steps.len())
    };
    Some(ThoughtStep::new(StepKind::Plan, content))
}
