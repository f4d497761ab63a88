use std::collections::{BTreeMap, BTreeSet};

use crate::file_index::FileIndex;
use crate::report::{ComparisonReport, Divergence, Provenance, VersionGroup};
use crate::resolution::Resolution;

/// Sorted union of dependency keys across all file indexes.
#[must_use]
pub fn comparison_keys(indexes: &[FileIndex]) -> Vec<String> {
    let keys: BTreeSet<&str> = indexes.iter().flat_map(|index| index.keys()).collect();
    keys.into_iter().map(str::to_string).collect()
}

/// Compare every dependency key across all file indexes.
///
/// Keys resolving to a single distinct value (version or absence) in every
/// file count as consistent. Everything else becomes a [`Divergence`] with
/// resolutions grouped by value, files within a group in input order.
#[must_use]
pub fn compare(indexes: &[FileIndex]) -> ComparisonReport {
    let keys = comparison_keys(indexes);
    let key_count = keys.len();

    let mut divergences = Vec::new();
    let mut consistent_count = 0usize;

    for key in keys {
        let resolutions: Vec<Resolution> = indexes
            .iter()
            .map(|index| {
                index.get(&key).map_or(Resolution::Absent, |declaration| {
                    Resolution::Present(declaration.version().to_string())
                })
            })
            .collect();

        let distinct: BTreeSet<&Resolution> = resolutions.iter().collect();
        if distinct.len() == 1 {
            consistent_count += 1;
            continue;
        }

        let mut groups: BTreeMap<Resolution, Vec<Provenance>> = BTreeMap::new();
        for (index, resolution) in indexes.iter().zip(resolutions) {
            let line = index.get(&key).map(|declaration| declaration.line());
            groups
                .entry(resolution)
                .or_default()
                .push(Provenance::new(index.path().to_path_buf(), line));
        }

        let groups = groups
            .into_iter()
            .map(|(resolution, locations)| VersionGroup::new(resolution, locations))
            .collect();
        divergences.push(Divergence::new(key, groups));
    }

    ComparisonReport::new(indexes.len(), key_count, divergences, consistent_count)
}
