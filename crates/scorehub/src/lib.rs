pub mod error;

pub mod analytics;
pub mod databank;
pub mod plan;
pub mod trace;
pub mod bus;
pub mod tools;
pub mod oracle;
pub mod session;
pub mod engine;

pub use crate::bus::Bus;
pub use crate::engine::{Engine, EngineConfig};
pub use crate::error::{HubError, HubResult};
pub use crate::oracle::{ChatMessage, Fragment, OracleTurn, ReasoningOracle, ScriptedOracle};
pub use crate::plan::{Plan, PlanStatus};
pub use crate::session::{Analysis, AnalysisStatus, SessionRegistry};
pub use crate::tools::{builtin_registry, ToolDescriptor, ToolOutcome, ToolRegistry};
pub use crate::trace::{ProgressHook, StepKind, ThoughtStep, Trace};
