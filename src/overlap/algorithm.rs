use crate::overlap::interval_set::IntervalSet;
use crate::overlap::pairwise::max_overlap_pairwise;
use crate::overlap::sweep::max_overlap_sweep;
use arbitrary::Arbitrary;
use clap::ValueEnum;
use strum::AsRefStr;
use strum::Display;
use strum::EnumIter;
use strum::EnumString;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    ValueEnum,
    Arbitrary,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum OverlapAlgorithm {
    /// Probe the midpoint of every pairwise intersection (O(n³))
    #[default]
    Pairwise,
    /// Sweep sorted endpoints (O(n log n))
    Sweep,
}

impl OverlapAlgorithm {
    #[must_use]
    pub fn count(self, set: &IntervalSet) -> usize {
        match self {
            OverlapAlgorithm::Pairwise => max_overlap_pairwise(set),
            OverlapAlgorithm::Sweep => max_overlap_sweep(set),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn names_match_clap_values() -> eyre::Result<()> {
        for algorithm in OverlapAlgorithm::iter() {
            let value = algorithm
                .to_possible_value()
                .ok_or_else(|| eyre::eyre!("{algorithm} has no clap value"))?;
            assert_eq!(value.get_name(), algorithm.as_ref());
            assert_eq!(algorithm.as_ref().parse::<OverlapAlgorithm>()?, algorithm);
        }
        Ok(())
    }
}
