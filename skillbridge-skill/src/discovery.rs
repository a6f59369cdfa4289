use crate::error::{SkillError, SkillResult};
use crate::frontmatter::{FrontMatterSplitter, YamlFrontMatterSplitter};
use crate::model::{DiscoverOptions, SkillDescriptor, SkillScope};
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;
use walkdir::WalkDir;

/// File name marking a skill directory.
pub const SKILL_FILE_NAME: &str = "SKILL.md";

/// Enumerates and resolves skill documents.
///
/// The returned order of [`discover_all`](SkillDiscovery::discover_all) is
/// the advertisement order, and precedence among duplicate names is this
/// collaborator's contract; consumers perform no re-sorting or
/// de-duplication of their own.
#[async_trait]
pub trait SkillDiscovery: Send + Sync {
    async fn discover_all(&self, options: DiscoverOptions) -> SkillResult<Vec<SkillDescriptor>>;

    /// Resolve one skill by name. A fresh lookup every call, never served
    /// from a previously discovered catalog.
    async fn find_by_name(
        &self,
        name: &str,
        options: DiscoverOptions,
    ) -> SkillResult<Option<SkillDescriptor>>;
}

/// Filesystem discovery over one root directory per scope.
///
/// Each immediate subdirectory of a scope root containing a `SKILL.md` file
/// is one skill; the `SKILL.md` path becomes the descriptor's location.
/// Scope roots are visited in precedence order and the first occurrence of a
/// name wins, so a project-level document shadows a per-user one.
pub struct FsSkillDiscovery {
    project_root: PathBuf,
    home_dir: Option<PathBuf>,
    splitter: Arc<dyn FrontMatterSplitter>,
}

impl FsSkillDiscovery {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            home_dir: dirs::home_dir(),
            splitter: Arc::new(YamlFrontMatterSplitter),
        }
    }

    /// Override the home directory the global scope roots resolve under.
    pub fn with_home_dir(mut self, home_dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home_dir.into());
        self
    }

    pub fn with_splitter(mut self, splitter: Arc<dyn FrontMatterSplitter>) -> Self {
        self.splitter = splitter;
        self
    }

    fn scope_roots(&self, options: DiscoverOptions) -> Vec<(SkillScope, PathBuf)> {
        SkillScope::ALL
            .into_iter()
            .filter(|scope| !options.opencode_only || scope.is_native())
            .filter_map(|scope| {
                let root = match scope {
                    SkillScope::OpencodeProject => {
                        Some(self.project_root.join(".opencode").join("skill"))
                    }
                    SkillScope::Project => Some(self.project_root.join(".claude").join("skills")),
                    SkillScope::Opencode => self
                        .home_dir
                        .as_ref()
                        .map(|home| home.join(".config").join("opencode").join("skill")),
                    SkillScope::User => {
                        self.home_dir.as_ref().map(|home| home.join(".claude").join("skills"))
                    }
                };
                root.map(|root| (scope, root))
            })
            .collect()
    }

    fn scan_root(&self, scope: SkillScope, root: &Path) -> SkillResult<Vec<SkillDescriptor>> {
        if !root.exists() {
            return Ok(Vec::new());
        }
        if !root.is_dir() {
            return Err(SkillError::InvalidSkillRoot(root.to_path_buf()));
        }

        let mut files = WalkDir::new(root)
            .min_depth(2)
            .max_depth(2)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| entry.file_name() == SKILL_FILE_NAME)
            .map(walkdir::DirEntry::into_path)
            .collect::<Vec<_>>();
        files.sort();

        debug!(scope = ?scope, root = %root.display(), count = files.len(), "scanned skill root");

        files.into_iter().map(|path| self.load_descriptor(scope, path)).collect()
    }

    fn load_descriptor(&self, scope: SkillScope, path: PathBuf) -> SkillResult<SkillDescriptor> {
        let raw = std::fs::read_to_string(&path)?;
        let doc = self.splitter.split_front_matter(&raw).map_err(|err| match err {
            SkillError::InvalidFrontmatter(message) => {
                SkillError::InvalidFrontmatter(format!("{}: {message}", path.display()))
            }
            other => other,
        })?;
        let fields = doc.fields;

        let name = fields
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .or_else(|| directory_name(&path))
            .ok_or_else(|| SkillError::MissingName { path: path.clone() })?;

        Ok(SkillDescriptor {
            name,
            description: fields
                .description
                .map(|text| text.trim().to_string())
                .unwrap_or_default(),
            location: path,
            scope,
            license: fields.license,
            compatibility: fields.compatibility,
            metadata: fields.metadata,
            allowed_tools: fields.allowed_tools,
        })
    }
}

fn directory_name(skill_file: &Path) -> Option<String> {
    skill_file
        .parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .filter(|name| !name.is_empty())
}

#[async_trait]
impl SkillDiscovery for FsSkillDiscovery {
    async fn discover_all(&self, options: DiscoverOptions) -> SkillResult<Vec<SkillDescriptor>> {
        let mut seen = HashSet::new();
        let mut catalog = Vec::new();
        for (scope, root) in self.scope_roots(options) {
            for descriptor in self.scan_root(scope, &root)? {
                if seen.insert(descriptor.name.clone()) {
                    catalog.push(descriptor);
                } else {
                    debug!(
                        name = %descriptor.name,
                        scope = ?scope,
                        "skill shadowed by a higher-precedence scope"
                    );
                }
            }
        }
        Ok(catalog)
    }

    async fn find_by_name(
        &self,
        name: &str,
        options: DiscoverOptions,
    ) -> SkillResult<Option<SkillDescriptor>> {
        for (scope, root) in self.scope_roots(options) {
            let matched =
                self.scan_root(scope, &root)?.into_iter().find(|skill| skill.name == name);
            if matched.is_some() {
                return Ok(matched);
            }
        }
        Ok(None)
    }
}
