use crate::error::SkillResult;
use async_trait::async_trait;
use std::path::Path;

/// Storage-read primitive for skill document bodies.
///
/// Documents are read fresh on every invocation; there is no caching layer
/// in front of this trait.
#[async_trait]
pub trait SkillStore: Send + Sync {
    async fn read_text(&self, path: &Path) -> SkillResult<String>;
}

/// Reads documents from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSkillStore;

#[async_trait]
impl SkillStore for FsSkillStore {
    async fn read_text(&self, path: &Path) -> SkillResult<String> {
        Ok(tokio::fs::read_to_string(path).await?)
    }
}
