//! # skillbridge-tool
//!
//! The skill tool adapter: advertises externally-authored skill documents to
//! an agent runtime and serves a document's instructions on invocation.
//!
//! ## Overview
//!
//! - [`SkillTool`] - The single invocable operation. At construction it
//!   resolves the skill catalog once and fixes its advertisement string; on
//!   each call it resolves the requested name fresh, re-reads the backing
//!   document, strips the front matter, and returns the rendered body.
//! - [`SkillToolConfig`] - One option, `opencode_only`, restricting both the
//!   catalog and per-call resolution to the runtime-native scope roots.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use skillbridge_tool::{SkillTool, SkillToolConfig};
//!
//! # async fn register() -> skillbridge_core::Result<()> {
//! let tool = SkillTool::from_project_root(".", SkillToolConfig::default()).await?;
//! // hand `tool` to the host runtime's tool registry
//! # Ok(())
//! # }
//! ```
//!
//! Skill documents whose descriptions contain markup-special characters can
//! corrupt the advertisement block; markup-safe content is an authoring
//! contract, not something this crate enforces.

mod tool;

pub use skillbridge_core::{BridgeError, Result, Tool, ToolContext};
pub use tool::{SkillTool, SkillToolConfig};
