//! # skillbridge-core
//!
//! Core traits and types shared across the Skillbridge workspace.
//!
//! ## Overview
//!
//! This crate defines the seam between the skill adapter and whatever agent
//! runtime hosts it:
//!
//! - [`Tool`] - The registration surface a host consumes (name, description,
//!   parameters schema, async execute)
//! - [`ToolContext`] - Per-invocation context handed to a tool by the host
//! - [`BridgeError`] / [`Result`] - Unified error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use skillbridge_core::{Result, Tool, ToolContext};
//! use async_trait::async_trait;
//! use serde_json::Value;
//! use std::sync::Arc;
//!
//! struct Echo;
//!
//! #[async_trait]
//! impl Tool for Echo {
//!     fn name(&self) -> &str {
//!         "echo"
//!     }
//!     fn description(&self) -> &str {
//!         "Returns its arguments unchanged"
//!     }
//!     async fn execute(&self, _ctx: Arc<dyn ToolContext>, args: Value) -> Result<Value> {
//!         Ok(args)
//!     }
//! }
//! ```

pub mod error;
pub mod tool;

pub use error::{BridgeError, Result};
pub use tool::{Tool, ToolContext};
