use serde::{Deserialize, Serialize};

/// How one dependency key resolves within one file: a declared version, or no
/// declaration at all.
///
/// Absence is a real variant rather than a sentinel string, so a literal
/// version text can never collide with "missing". The derived order puts
/// `Absent` before every `Present` value and present versions in
/// lexicographic order; reports rely on that for value-group ordering.
///
/// Serializes untagged: the version string for `Present`, `null` for
/// `Absent`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Resolution {
    /// The key has no declaration in the file.
    Absent,
    /// The key resolves to this version string.
    Present(String),
}

impl Resolution {
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::Present(version) => Some(version),
            Self::Absent => None,
        }
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}
