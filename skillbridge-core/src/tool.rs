use crate::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// A capability an agent runtime can register and invoke.
///
/// The `description` is the tool's full model-facing interface surface; hosts
/// pass it to their own tool-declaration mechanism verbatim.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;

    /// JSON schema for the tool's arguments, if it takes any.
    fn parameters_schema(&self) -> Option<Value> {
        None
    }

    async fn execute(&self, ctx: Arc<dyn ToolContext>, args: Value) -> Result<Value>;
}

/// Per-invocation context supplied by the host runtime.
pub trait ToolContext: Send + Sync {
    fn invocation_id(&self) -> &str;
    fn agent_name(&self) -> &str;
}
