use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid front matter: {0}")]
    InvalidFrontmatter(String),

    #[error("skill document at {path} has no usable name")]
    MissingName { path: PathBuf },

    #[error("invalid skill root, expected directory: {0}")]
    InvalidSkillRoot(PathBuf),
}

pub type SkillResult<T> = Result<T, SkillError>;

impl From<SkillError> for skillbridge_core::BridgeError {
    fn from(err: SkillError) -> Self {
        match err {
            SkillError::Io(io) => Self::Io(io),
            other => Self::Catalog(other.to_string()),
        }
    }
}
