use async_trait::async_trait;
use serde_json::{Value, json};
use skillbridge_core::{BridgeError, Result, Tool, ToolContext};
use skillbridge_skill::{
    DiscoverOptions, FrontMatterSplitter, FsSkillDiscovery, FsSkillStore, SkillDescriptor,
    SkillDiscovery, SkillStore, YamlFrontMatterSplitter,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

const DESCRIPTION_PREFIX: &str = "Load a skill to get detailed instructions for a specific kind \
of task. Skills are reusable instruction sets authored alongside the project or the user's \
configuration. Invoke this tool with a skill's name to receive its full instructions.";

const DESCRIPTION_NO_SKILLS: &str = "No skills are currently available. Add SKILL.md documents \
under a skill directory to make this tool useful.";

/// Construction-time configuration for [`SkillTool`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillToolConfig {
    /// Restrict discovery and per-call resolution to the runtime-native
    /// scope roots, excluding the compatibility family.
    pub opencode_only: bool,
}

/// Exposes skill documents as one invocable tool.
///
/// The catalog is resolved once at construction and the advertisement string
/// is fixed from it; invocation resolves the requested name with a fresh
/// lookup and re-reads the backing document, so catalog and resolution may
/// diverge if documents change after construction. All fields are immutable
/// once built, so concurrent invocations share nothing mutable.
pub struct SkillTool {
    description: String,
    catalog: Vec<SkillDescriptor>,
    options: DiscoverOptions,
    discovery: Arc<dyn SkillDiscovery>,
    store: Arc<dyn SkillStore>,
    splitter: Arc<dyn FrontMatterSplitter>,
}

impl SkillTool {
    /// Builds the adapter from explicit collaborators: one discovery pass,
    /// then the advertisement is fixed.
    ///
    /// A discovery failure propagates and the adapter must not be registered
    /// with the host runtime in that case; there is no partial-catalog
    /// fallback.
    pub async fn discover(
        discovery: Arc<dyn SkillDiscovery>,
        store: Arc<dyn SkillStore>,
        splitter: Arc<dyn FrontMatterSplitter>,
        config: SkillToolConfig,
    ) -> Result<Self> {
        let options = DiscoverOptions { opencode_only: config.opencode_only };
        let catalog = discovery.discover_all(options).await?;
        info!(skills = catalog.len(), opencode_only = options.opencode_only, "skill catalog built");

        let description = if catalog.is_empty() {
            DESCRIPTION_NO_SKILLS.to_string()
        } else {
            format!("{DESCRIPTION_PREFIX}{}", format_available_skills(&catalog))
        };

        Ok(Self { description, catalog, options, discovery, store, splitter })
    }

    /// Wires the default filesystem collaborators rooted at `project_root`.
    ///
    /// Host integration layers call this at their own startup; there is no
    /// pre-constructed process-wide instance.
    pub async fn from_project_root(
        project_root: impl Into<PathBuf>,
        config: SkillToolConfig,
    ) -> Result<Self> {
        Self::discover(
            Arc::new(FsSkillDiscovery::new(project_root)),
            Arc::new(FsSkillStore),
            Arc::new(YamlFrontMatterSplitter),
            config,
        )
        .await
    }

    /// The construction-time catalog, in advertisement order.
    pub fn catalog(&self) -> &[SkillDescriptor] {
        &self.catalog
    }

    fn available_names(&self) -> String {
        if self.catalog.is_empty() {
            "none".to_string()
        } else {
            self.catalog.iter().map(|skill| skill.name.as_str()).collect::<Vec<_>>().join(", ")
        }
    }
}

/// Renders the machine-parsable advertisement block.
///
/// Descriptor text is interpolated verbatim; keeping names and descriptions
/// free of markup-special characters is an authoring contract on skill
/// documents. Fields without a value are omitted rather than emitted empty.
fn format_available_skills(catalog: &[SkillDescriptor]) -> String {
    if catalog.is_empty() {
        return String::new();
    }

    let entries = catalog
        .iter()
        .map(|skill| {
            let mut lines = vec![
                "  <skill>".to_string(),
                format!("    <name>{}</name>", skill.name),
                format!("    <description>{}</description>", skill.description),
            ];
            if let Some(compatibility) = &skill.compatibility {
                lines.push(format!("    <compatibility>{compatibility}</compatibility>"));
            }
            lines.push("  </skill>".to_string());
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("\n\n<available_skills>\n{entries}\n</available_skills>")
}

#[async_trait]
impl Tool for SkillTool {
    fn name(&self) -> &str {
        "skill"
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters_schema(&self) -> Option<Value> {
        Some(json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "The skill identifier from available_skills (e.g., 'code-review')"
                }
            },
            "required": ["name"]
        }))
    }

    async fn execute(&self, _ctx: Arc<dyn ToolContext>, args: Value) -> Result<Value> {
        let name = args["name"]
            .as_str()
            .ok_or_else(|| BridgeError::Tool("name must be a string".to_string()))?;

        debug!(skill = name, "resolving skill");
        let Some(descriptor) = self.discovery.find_by_name(name, self.options).await? else {
            return Err(BridgeError::Tool(format!(
                "Skill \"{name}\" not found. Available skills: {}",
                self.available_names()
            )));
        };

        let raw = self.store.read_text(&descriptor.location).await?;
        let document = self.splitter.split_front_matter(&raw)?;
        let base_dir = descriptor.location.parent().unwrap_or_else(|| Path::new("."));

        let output = [
            format!("## Skill: {}", descriptor.name),
            String::new(),
            format!("**Base directory**: {}", base_dir.display()),
            String::new(),
            document.body.trim().to_string(),
        ]
        .join("\n");

        Ok(Value::String(output))
    }
}
