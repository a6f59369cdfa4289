use crate::error::{SkillError, SkillResult};
use serde::Deserialize;
use std::collections::HashMap;

/// Front-matter fields recognized in a skill document.
///
/// Everything is optional at this layer; discovery decides which absences
/// are tolerable (a missing `name` falls back to the skill's directory name,
/// a missing `description` collapses to the empty string).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SkillFrontmatter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub license: Option<String>,
    pub compatibility: Option<String>,
    pub metadata: HashMap<String, String>,
    #[serde(rename = "allowed-tools")]
    pub allowed_tools: Vec<String>,
}

/// A skill document split into parsed front matter and its raw body.
#[derive(Debug, Clone)]
pub struct SplitDocument {
    pub fields: SkillFrontmatter,
    /// Body text exactly as authored; callers trim as needed.
    pub body: String,
}

/// Splits a raw document into front-matter fields and body text.
///
/// Injected so tests can substitute deterministic fixtures for the YAML
/// implementation.
pub trait FrontMatterSplitter: Send + Sync {
    fn split_front_matter(&self, raw: &str) -> SkillResult<SplitDocument>;
}

/// The default splitter: a document opens with a `---` line, YAML fields run
/// until the next `---` line, and everything after is the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFrontMatterSplitter;

impl FrontMatterSplitter for YamlFrontMatterSplitter {
    fn split_front_matter(&self, raw: &str) -> SkillResult<SplitDocument> {
        let normalized = raw.replace("\r\n", "\n");
        let mut lines = normalized.lines();

        if lines.next().map(str::trim) != Some("---") {
            return Err(SkillError::InvalidFrontmatter(
                "missing opening front-matter delimiter (`---`)".to_string(),
            ));
        }

        let mut field_lines = Vec::new();
        let mut found_end = false;
        for line in lines.by_ref() {
            if line.trim() == "---" {
                found_end = true;
                break;
            }
            field_lines.push(line);
        }

        if !found_end {
            return Err(SkillError::InvalidFrontmatter(
                "missing closing front-matter delimiter (`---`)".to_string(),
            ));
        }

        let raw_fields = field_lines.join("\n");
        let fields = if raw_fields.trim().is_empty() {
            SkillFrontmatter::default()
        } else {
            serde_yaml::from_str(&raw_fields)?
        };

        let body = lines.collect::<Vec<_>>().join("\n");
        Ok(SplitDocument { fields, body })
    }
}
