use super::model::{LaunchDataset, LaunchRecord, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Scatter filter: payload window, then site
// ---------------------------------------------------------------------------

/// Return indices (in source order) of launches inside `range` and, unless
/// the selection is "All Sites", launched from the selected site.
///
/// Never fails: an unknown site or an inverted range simply yields no rows.
pub fn scatter_indices(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| range.contains(rec.payload_mass_kg))
        .filter(|(_, rec)| site.matches(&rec.launch_site))
        .map(|(i, _)| i)
        .collect()
}

/// Borrow the records behind a set of indices.
pub fn select<'a>(dataset: &'a LaunchDataset, indices: &[usize]) -> Vec<&'a LaunchRecord> {
    indices.iter().map(|&i| &dataset.records[i]).collect()
}
