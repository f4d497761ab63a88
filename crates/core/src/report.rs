use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::resolution::Resolution;

/// Where a resolution came from: the input file and, for declared versions,
/// the 1-indexed line of the declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    path: PathBuf,
    line: Option<u32>,
}

impl Provenance {
    #[must_use]
    pub const fn new(path: PathBuf, line: Option<u32>) -> Self {
        Self { path, line }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn line(&self) -> Option<u32> {
        self.line
    }
}

/// One resolved value of a divergent key, with every file that carries it in
/// original input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionGroup {
    #[serde(rename = "version")]
    resolution: Resolution,
    locations: Vec<Provenance>,
}

impl VersionGroup {
    #[must_use]
    pub const fn new(resolution: Resolution, locations: Vec<Provenance>) -> Self {
        Self {
            resolution,
            locations,
        }
    }

    #[must_use]
    pub const fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    #[must_use]
    pub fn locations(&self) -> &[Provenance] {
        &self.locations
    }
}

/// A dependency key that resolves differently across the input files.
///
/// Groups are ordered by resolution (absent first, then versions
/// lexicographically).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Divergence {
    key: String,
    groups: Vec<VersionGroup>,
}

impl Divergence {
    #[must_use]
    pub const fn new(key: String, groups: Vec<VersionGroup>) -> Self {
        Self { key, groups }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn groups(&self) -> &[VersionGroup] {
        &self.groups
    }
}

/// Full comparison outcome over all input files.
///
/// Divergences are ordered by key; every key in the union is accounted for
/// either here or in the consistent count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    file_count: usize,
    key_count: usize,
    divergences: Vec<Divergence>,
    consistent_count: usize,
}

impl ComparisonReport {
    #[must_use]
    pub const fn new(
        file_count: usize,
        key_count: usize,
        divergences: Vec<Divergence>,
        consistent_count: usize,
    ) -> Self {
        Self {
            file_count,
            key_count,
            divergences,
            consistent_count,
        }
    }

    #[must_use]
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    #[must_use]
    pub const fn key_count(&self) -> usize {
        self.key_count
    }

    #[must_use]
    pub fn divergences(&self) -> &[Divergence] {
        &self.divergences
    }

    #[must_use]
    pub fn divergent_count(&self) -> usize {
        self.divergences.len()
    }

    #[must_use]
    pub const fn consistent_count(&self) -> usize {
        self.consistent_count
    }
}
