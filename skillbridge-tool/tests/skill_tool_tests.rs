use async_trait::async_trait;
use serde_json::{Value, json};
use skillbridge_core::{BridgeError, Tool, ToolContext};
use skillbridge_skill::{
    DiscoverOptions, FsSkillDiscovery, FsSkillStore, SKILL_FILE_NAME, SkillDescriptor,
    SkillDiscovery, SkillError, SkillResult, SkillScope, SkillStore, YamlFrontMatterSplitter,
};
use skillbridge_tool::{SkillTool, SkillToolConfig};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

struct MockToolContext;

impl ToolContext for MockToolContext {
    fn invocation_id(&self) -> &str {
        "inv-1"
    }
    fn agent_name(&self) -> &str {
        "test-agent"
    }
}

fn ctx() -> Arc<dyn ToolContext> {
    Arc::new(MockToolContext)
}

/// Deterministic discovery fixture backed by a fixed descriptor list.
struct StaticDiscovery {
    skills: Vec<SkillDescriptor>,
}

#[async_trait]
impl SkillDiscovery for StaticDiscovery {
    async fn discover_all(&self, _options: DiscoverOptions) -> SkillResult<Vec<SkillDescriptor>> {
        Ok(self.skills.clone())
    }

    async fn find_by_name(
        &self,
        name: &str,
        _options: DiscoverOptions,
    ) -> SkillResult<Option<SkillDescriptor>> {
        Ok(self.skills.iter().find(|skill| skill.name == name).cloned())
    }
}

/// In-memory store fixture.
struct StaticStore {
    files: HashMap<PathBuf, String>,
}

#[async_trait]
impl SkillStore for StaticStore {
    async fn read_text(&self, path: &Path) -> SkillResult<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            SkillError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "no such document"))
        })
    }
}

struct FailingDiscovery;

#[async_trait]
impl SkillDiscovery for FailingDiscovery {
    async fn discover_all(&self, _options: DiscoverOptions) -> SkillResult<Vec<SkillDescriptor>> {
        Err(SkillError::InvalidSkillRoot(PathBuf::from("/not/a/dir")))
    }

    async fn find_by_name(
        &self,
        _name: &str,
        _options: DiscoverOptions,
    ) -> SkillResult<Option<SkillDescriptor>> {
        Ok(None)
    }
}

fn descriptor(name: &str, description: &str, compatibility: Option<&str>) -> SkillDescriptor {
    SkillDescriptor {
        name: name.to_string(),
        description: description.to_string(),
        location: PathBuf::from(format!("/skills/{name}/SKILL.md")),
        scope: SkillScope::OpencodeProject,
        license: None,
        compatibility: compatibility.map(str::to_string),
        metadata: HashMap::new(),
        allowed_tools: Vec::new(),
    }
}

async fn static_tool(skills: Vec<SkillDescriptor>, files: Vec<(&str, &str)>) -> SkillTool {
    let files = files
        .into_iter()
        .map(|(path, content)| (PathBuf::from(path), content.to_string()))
        .collect();
    SkillTool::discover(
        Arc::new(StaticDiscovery { skills }),
        Arc::new(StaticStore { files }),
        Arc::new(YamlFrontMatterSplitter),
        SkillToolConfig::default(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn advertises_each_skill_as_a_tagged_entry() {
    let tool = static_tool(
        vec![descriptor("code-review", "Reviews code", Some("v1"))],
        vec![],
    )
    .await;

    assert_eq!(tool.name(), "skill");
    let description = tool.description();
    assert!(description.contains("<available_skills>"));
    assert!(description.contains("<name>code-review</name>"));
    assert!(description.contains("<description>Reviews code</description>"));
    assert!(description.contains("<compatibility>v1</compatibility>"));
}

#[tokio::test]
async fn omits_compatibility_when_absent() {
    let tool = static_tool(vec![descriptor("deploy", "Ships it", None)], vec![]).await;
    assert!(!tool.description().contains("<compatibility>"));
    assert!(tool.description().contains("<name>deploy</name>"));
}

#[tokio::test]
async fn empty_catalog_advertises_no_skills_message() {
    for opencode_only in [false, true] {
        let tool = SkillTool::discover(
            Arc::new(StaticDiscovery { skills: vec![] }),
            Arc::new(StaticStore { files: HashMap::new() }),
            Arc::new(YamlFrontMatterSplitter),
            SkillToolConfig { opencode_only },
        )
        .await
        .unwrap();
        assert!(tool.description().contains("No skills are currently available"));
        assert!(!tool.description().contains("<available_skills>"));
    }
}

#[tokio::test]
async fn parameters_schema_requires_name() {
    let tool = static_tool(vec![], vec![]).await;
    let schema = tool.parameters_schema().unwrap();
    assert_eq!(schema["required"], json!(["name"]));
    assert_eq!(schema["properties"]["name"]["type"], json!("string"));
}

#[tokio::test]
async fn renders_header_base_directory_and_trimmed_body() {
    let tool = static_tool(
        vec![descriptor("code-review", "Reviews code", None)],
        vec![(
            "/skills/code-review/SKILL.md",
            "---\nname: code-review\ndescription: Reviews code\n---\n\nRead the diff.\nFlag bugs.\n",
        )],
    )
    .await;

    let result = tool.execute(ctx(), json!({"name": "code-review"})).await.unwrap();
    let Value::String(text) = result else { panic!("expected a text result") };
    assert_eq!(
        text,
        "## Skill: code-review\n\n**Base directory**: /skills/code-review\n\nRead the diff.\nFlag bugs."
    );
}

#[tokio::test]
async fn trims_only_outer_whitespace_of_the_body() {
    let tool = static_tool(
        vec![descriptor("foo", "", None)],
        vec![("/skills/foo/SKILL.md", "---\nname: foo\n---\n  \nDo X.\n  ")],
    )
    .await;

    let result = tool.execute(ctx(), json!({"name": "foo"})).await.unwrap();
    let Value::String(text) = result else { panic!("expected a text result") };
    assert!(text.ends_with("\n\nDo X."));
}

#[tokio::test]
async fn repeated_invocations_are_byte_identical() {
    let tool = static_tool(
        vec![descriptor("foo", "", None)],
        vec![("/skills/foo/SKILL.md", "---\nname: foo\n---\nStable body.\n")],
    )
    .await;

    let first = tool.execute(ctx(), json!({"name": "foo"})).await.unwrap();
    let second = tool.execute(ctx(), json!({"name": "foo"})).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_name_fails_listing_catalog_names() {
    let tool = static_tool(
        vec![descriptor("alpha", "", None), descriptor("beta", "", None)],
        vec![],
    )
    .await;

    let err = tool.execute(ctx(), json!({"name": "gamma"})).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Tool error: Skill \"gamma\" not found. Available skills: alpha, beta"
    );
}

#[tokio::test]
async fn unknown_name_on_empty_catalog_lists_none() {
    let tool = static_tool(vec![], vec![]).await;
    let err = tool.execute(ctx(), json!({"name": "anything"})).await.unwrap_err();
    assert!(err.to_string().ends_with("Available skills: none"));
}

#[tokio::test]
async fn missing_name_argument_is_a_tool_error() {
    let tool = static_tool(vec![], vec![]).await;
    let err = tool.execute(ctx(), json!({})).await.unwrap_err();
    assert!(matches!(err, BridgeError::Tool(_)));
}

#[tokio::test]
async fn unreadable_document_surfaces_io_error() {
    // Resolution succeeds but the backing file is gone by read time.
    let tool = static_tool(vec![descriptor("ghost", "", None)], vec![]).await;
    let err = tool.execute(ctx(), json!({"name": "ghost"})).await.unwrap_err();
    assert!(matches!(err, BridgeError::Io(_)));
}

#[tokio::test]
async fn construction_fails_fast_on_discovery_error() {
    let result = SkillTool::discover(
        Arc::new(FailingDiscovery),
        Arc::new(StaticStore { files: HashMap::new() }),
        Arc::new(YamlFrontMatterSplitter),
        SkillToolConfig::default(),
    )
    .await;
    assert!(result.is_err());
}

fn write_skill(root: &Path, rel_dir: &str, content: &str) {
    let dir = root.join(rel_dir);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(SKILL_FILE_NAME), content).unwrap();
}

async fn fs_tool(root: &Path, config: SkillToolConfig) -> SkillTool {
    SkillTool::discover(
        Arc::new(
            FsSkillDiscovery::new(root.join("project")).with_home_dir(root.join("home")),
        ),
        Arc::new(FsSkillStore),
        Arc::new(YamlFrontMatterSplitter),
        config,
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn end_to_end_over_the_filesystem() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    write_skill(
        root,
        "project/.opencode/skill/code-review",
        "---\nname: code-review\ndescription: Reviews code\ncompatibility: v1\n---\nRead the diff.\n",
    );
    write_skill(
        root,
        "home/.claude/skills/changelog",
        "---\nname: changelog\ndescription: Writes changelogs\n---\nSummarize commits.\n",
    );

    let tool = fs_tool(root, SkillToolConfig::default()).await;
    assert_eq!(tool.catalog().len(), 2);
    assert!(tool.description().contains("<name>code-review</name>"));
    assert!(tool.description().contains("<name>changelog</name>"));

    let result = tool.execute(ctx(), json!({"name": "code-review"})).await.unwrap();
    let Value::String(text) = result else { panic!("expected a text result") };
    assert!(text.starts_with("## Skill: code-review\n\n**Base directory**: "));
    let base_dir = root.join("project/.opencode/skill/code-review");
    assert!(text.contains(&base_dir.display().to_string()));
    assert!(text.ends_with("Read the diff."));
}

#[tokio::test]
async fn opencode_only_restricts_catalog_and_resolution() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    write_skill(
        root,
        "project/.opencode/skill/native",
        "---\nname: native\ndescription: Native skill\n---\nN.\n",
    );
    write_skill(
        root,
        "home/.claude/skills/compat",
        "---\nname: compat\ndescription: Compat skill\n---\nC.\n",
    );

    let tool = fs_tool(root, SkillToolConfig { opencode_only: true }).await;
    assert_eq!(tool.catalog().len(), 1);
    assert!(!tool.description().contains("<name>compat</name>"));

    let err = tool.execute(ctx(), json!({"name": "compat"})).await.unwrap_err();
    assert!(err.to_string().contains("Available skills: native"));
}

#[tokio::test]
async fn resolution_is_live_while_the_catalog_is_a_snapshot() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    let tool = fs_tool(root, SkillToolConfig::default()).await;
    assert!(tool.description().contains("No skills are currently available"));

    // A document created after construction resolves, but the
    // construction-time advertisement and not-found listing do not change.
    write_skill(
        root,
        "project/.opencode/skill/late",
        "---\nname: late\ndescription: Added later\n---\nLate body.\n",
    );

    let result = tool.execute(ctx(), json!({"name": "late"})).await.unwrap();
    let Value::String(text) = result else { panic!("expected a text result") };
    assert!(text.ends_with("Late body."));

    let err = tool.execute(ctx(), json!({"name": "missing"})).await.unwrap_err();
    assert!(err.to_string().ends_with("Available skills: none"));
}
