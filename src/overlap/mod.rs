//! Maximum-overlap-of-segments solver.
//!
//! Reads closed integer intervals and reports how many of them share a common
//! interior point at most.

pub mod algorithm;
pub mod interval;
pub mod interval_set;
pub mod pairwise;
pub mod probe_point;
pub mod sweep;

use crate::overlap::algorithm::OverlapAlgorithm;
use crate::overlap::interval_set::IntervalSet;
use tracing::debug;

/// Parse `input` as a problem instance and count its maximum overlap.
///
/// # Errors
///
/// Returns an error if `input` is not a well-formed instance.
pub fn solve(input: &str, algorithm: OverlapAlgorithm) -> eyre::Result<usize> {
    let set: IntervalSet = input.parse()?;
    let answer = algorithm.count(&set);
    debug!(
        intervals = set.len(),
        %algorithm,
        answer,
        "Solved overlap instance"
    );
    Ok(answer)
}
