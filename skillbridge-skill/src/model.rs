use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// The precedence tier a skill document was found under.
///
/// Variant order is precedence order, highest first: a project-level
/// OpenCode document shadows everything else with the same name, and a
/// per-user compatibility document yields to all other tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillScope {
    /// `.opencode/skill/` under the project root.
    OpencodeProject,
    /// `.claude/skills/` under the project root (compatibility layout).
    Project,
    /// `~/.config/opencode/skill/`.
    Opencode,
    /// `~/.claude/skills/` (compatibility layout).
    User,
}

impl SkillScope {
    /// All scopes in precedence order, highest first.
    pub const ALL: [SkillScope; 4] =
        [SkillScope::OpencodeProject, SkillScope::Project, SkillScope::Opencode, SkillScope::User];

    /// True for the runtime's own scope roots; false for the
    /// backward-compatibility family.
    pub fn is_native(self) -> bool {
        matches!(self, SkillScope::OpencodeProject | SkillScope::Opencode)
    }
}

/// One resolvable skill, projected from a document's front matter.
///
/// Built once per adapter at construction time and never mutated; a fresh
/// adapter re-reads the catalog, so document edits are visible only to newly
/// constructed adapters.
#[derive(Debug, Clone, Serialize)]
pub struct SkillDescriptor {
    /// Unique identifier within the resolved catalog. Never empty.
    pub name: String,
    /// May be empty, never absent, so formatting needs no null checks.
    pub description: String,
    /// Path to the backing document.
    pub location: PathBuf,
    /// Precedence tier the document was found under.
    pub scope: SkillScope,
    pub license: Option<String>,
    pub compatibility: Option<String>,
    /// Arbitrary author-supplied extension fields.
    pub metadata: HashMap<String, String>,
    /// Pre-approved tool names the skill may use.
    pub allowed_tools: Vec<String>,
}

/// Options shared by catalog discovery and per-call resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscoverOptions {
    /// When true, only the runtime-native scope roots are consulted and the
    /// compatibility family is skipped entirely.
    pub opencode_only: bool,
}
