/// One parsed dependency occurrence from a build file.
///
/// Immutable once extracted. `line` is the 1-indexed source line the clause
/// was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    group: String,
    artifact: String,
    version: String,
    line: u32,
}

impl Declaration {
    #[must_use]
    pub const fn new(group: String, artifact: String, version: String, line: u32) -> Self {
        Self {
            group,
            artifact,
            version,
            line,
        }
    }

    /// Identity of the logical dependency: `group:artifact`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }

    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[must_use]
    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}
