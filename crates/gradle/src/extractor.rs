use std::io;
use std::path::Path;
use std::sync::OnceLock;

use async_trait::async_trait;
use depdrift_core::{Declaration, ExtractError, Extractor, FileIndex};
use regex::Regex;
use tokio::fs::read_to_string;

/// Matches: group:'<group>',name:'<artifact>',version:'<version>'
static RE_DEPENDENCY: OnceLock<Regex> = OnceLock::new();

fn re_dependency() -> &'static Regex {
    RE_DEPENDENCY
        .get_or_init(|| Regex::new(r"group:'([^']*)',name:'([^']*)',version:'([^']*)'").unwrap())
}

/// Line-oriented extractor for Gradle Groovy dependency declarations.
///
/// Recognizes the map-style clause anywhere on a line; only the first clause
/// per line is used. Lines without a full three-attribute clause in
/// group/name/version order are skipped without diagnostics.
#[derive(Debug, Default)]
pub struct GradleExtractor;

impl GradleExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Scan file content for dependency clauses, lines 1-indexed.
///
/// A key declared on more than one line keeps the later line's version.
#[must_use]
pub fn parse_declarations(path: &Path, content: &str) -> FileIndex {
    let mut index = FileIndex::new(path.to_path_buf());
    for (line_idx, line) in content.lines().enumerate() {
        if let Some(caps) = re_dependency().captures(line) {
            let group = caps.get(1).map_or("", |m| m.as_str());
            let artifact = caps.get(2).map_or("", |m| m.as_str());
            let version = caps.get(3).map_or("", |m| m.as_str());
            index.insert(Declaration::new(
                group.to_string(),
                artifact.to_string(),
                version.to_string(),
                line_idx as u32 + 1,
            ));
        }
    }
    index
}

#[async_trait]
impl Extractor for GradleExtractor {
    async fn extract(&self, path: &Path) -> Result<FileIndex, ExtractError> {
        let content = read_to_string(path).await.map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ExtractError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ExtractError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Ok(parse_declarations(path, &content))
    }
}
