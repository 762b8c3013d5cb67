use crate::overlap::probe_point::ProbePoint;
use arbitrary::Arbitrary;
use eyre::Context;
use std::fmt;
use std::str::FromStr;

/// A closed integer range `[left, right]` on the number line.
///
/// Coverage is judged on the open interior: an interval never covers its own endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Arbitrary)]
pub struct Interval {
    pub left: i64,
    pub right: i64,
}

impl Interval {
    #[must_use]
    pub const fn new(left: i64, right: i64) -> Self {
        Self { left, right }
    }

    /// True when the interval has an empty interior (`left >= right`).
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.left >= self.right
    }

    /// Non-degenerate intersection of the two closed ranges, as `(lo, hi)` with `lo < hi`.
    #[must_use]
    pub fn intersection(&self, other: &Interval) -> Option<(i64, i64)> {
        let lo = self.left.max(other.left);
        let hi = self.right.min(other.right);
        (lo < hi).then_some((lo, hi))
    }

    /// Midpoint of the intersection with `other`, if the two share any interior.
    #[must_use]
    pub fn probe_with(&self, other: &Interval) -> Option<ProbePoint> {
        self.intersection(other)
            .map(|(lo, hi)| ProbePoint::midpoint(lo, hi))
    }

    /// `left < probe < right`, compared exactly.
    #[must_use]
    pub fn strictly_contains(&self, probe: ProbePoint) -> bool {
        let doubled = probe.doubled();
        2 * i128::from(self.left) < doubled && doubled < 2 * i128::from(self.right)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.left, self.right)
    }
}

impl From<(i64, i64)> for Interval {
    fn from((left, right): (i64, i64)) -> Self {
        Self { left, right }
    }
}

impl FromStr for Interval {
    type Err = eyre::Report;

    /// Parses exactly two whitespace-separated integers, `"l r"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let [left, right] = tokens.as_slice() else {
            eyre::bail!(
                "expected 2 integers per interval, found {} in {:?}",
                tokens.len(),
                s.trim()
            );
        };
        let left: i64 = left
            .parse()
            .wrap_err_with(|| format!("invalid left endpoint {left:?}"))?;
        let right: i64 = right
            .parse()
            .wrap_err_with(|| format!("invalid right endpoint {right:?}"))?;
        Ok(Self { left, right })
    }
}
