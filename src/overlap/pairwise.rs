use crate::overlap::interval_set::IntervalSet;
use itertools::Itertools;
use tracing::trace;

/// Maximum number of intervals sharing an interior point, found by probing the
/// midpoint of every pairwise intersection.
///
/// Runs in O(n³). A set with fewer than two intervals yields 0, since no pair
/// exists to probe.
#[must_use]
pub fn max_overlap_pairwise(set: &IntervalSet) -> usize {
    set.intervals()
        .iter()
        .tuple_combinations()
        .filter_map(|(a, b)| a.probe_with(b))
        .map(|probe| {
            let count = set.count_covering(probe);
            trace!(%probe, count, "Probed");
            count
        })
        .max()
        .unwrap_or(0)
}
