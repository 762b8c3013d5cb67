use crate::overlap::interval_set::IntervalSet;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    // Ends sort before starts at the same coordinate: touching intervals share no interior.
    End,
    Start,
}

/// Sorted-event sweep over interval endpoints, O(n log n).
///
/// Reports the deepest interior overlap when at least two intervals take part,
/// and 0 otherwise, matching [`crate::overlap::pairwise::max_overlap_pairwise`]
/// on every input.
#[must_use]
pub fn max_overlap_sweep(set: &IntervalSet) -> usize {
    let mut events: Vec<(i64, EventKind)> = set
        .intervals()
        .iter()
        .filter(|interval| !interval.is_degenerate())
        .flat_map(|interval| {
            [
                (interval.left, EventKind::Start),
                (interval.right, EventKind::End),
            ]
        })
        .collect();
    events.sort_unstable();

    let mut depth = 0usize;
    let mut deepest = 0usize;
    for (coordinate, kind) in events {
        match kind {
            EventKind::Start => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            EventKind::End => depth -= 1,
        }
        trace!(coordinate, ?kind, depth, "Swept");
    }

    if deepest >= 2 { deepest } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlap::interval::Interval;

    fn set(pairs: &[(i64, i64)]) -> IntervalSet {
        pairs.iter().copied().map(Interval::from).collect()
    }

    #[test]
    fn sample_instances() {
        assert_eq!(max_overlap_sweep(&set(&[(1, 5), (3, 7), (6, 10)])), 2);
        assert_eq!(max_overlap_sweep(&set(&[(1, 10), (2, 9), (3, 8), (4, 7)])), 4);
    }

    #[test]
    fn lone_interval_reports_zero() {
        assert_eq!(max_overlap_sweep(&set(&[(0, 10)])), 0);
        assert_eq!(max_overlap_sweep(&set(&[(0, 1), (5, 6)])), 0);
    }

    #[test]
    fn endpoint_contact_is_ignored() {
        assert_eq!(max_overlap_sweep(&set(&[(1, 3), (3, 5), (5, 7)])), 0);
        assert_eq!(max_overlap_sweep(&set(&[(1, 3), (3, 5), (2, 4)])), 2);
    }

    #[test]
    fn degenerate_intervals_are_skipped() {
        assert_eq!(max_overlap_sweep(&set(&[(5, 5), (7, 2), (0, 10)])), 0);
    }
}
