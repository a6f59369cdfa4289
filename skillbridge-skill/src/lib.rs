//! # skillbridge-skill
//!
//! Skill documents for the Skillbridge adapter: the descriptor model, YAML
//! front-matter splitting, and scoped filesystem discovery.
//!
//! ## Overview
//!
//! Skills are markdown files named `SKILL.md`, one per directory, with YAML
//! front matter carrying the skill's metadata:
//!
//! ```markdown
//! ---
//! name: code-review
//! description: Reviews code for correctness and style.
//! compatibility: v1
//! ---
//! Read the diff, then...
//! ```
//!
//! Documents are gathered from four scope roots, highest precedence first:
//!
//! 1. `<project>/.opencode/skill/`
//! 2. `<project>/.claude/skills/` (compatibility)
//! 3. `~/.config/opencode/skill/`
//! 4. `~/.claude/skills/` (compatibility)
//!
//! On duplicate names the higher-precedence scope wins. The compatibility
//! pair can be excluded wholesale via
//! [`DiscoverOptions::opencode_only`].
//!
//! The seams the adapter consumes — [`SkillDiscovery`],
//! [`FrontMatterSplitter`], [`SkillStore`] — are traits, so tests can
//! substitute deterministic fixtures for the filesystem implementations.

mod discovery;
mod error;
mod frontmatter;
mod model;
mod store;

pub use discovery::{FsSkillDiscovery, SKILL_FILE_NAME, SkillDiscovery};
pub use error::{SkillError, SkillResult};
pub use frontmatter::{FrontMatterSplitter, SkillFrontmatter, SplitDocument, YamlFrontMatterSplitter};
pub use model::{DiscoverOptions, SkillDescriptor, SkillScope};
pub use store::{FsSkillStore, SkillStore};
