use std::fmt;

/// A point on the real line, stored as twice its value so that the midpoint of
/// two integer bounds is always exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProbePoint {
    doubled: i128,
}

impl ProbePoint {
    /// Midpoint of `lo` and `hi`. Never truncated, so `(3, 4)` probes at `3.5`.
    #[must_use]
    pub fn midpoint(lo: i64, hi: i64) -> Self {
        Self {
            doubled: i128::from(lo) + i128::from(hi),
        }
    }

    #[must_use]
    pub fn doubled(self) -> i128 {
        self.doubled
    }
}

impl fmt::Display for ProbePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.doubled < 0 { "-" } else { "" };
        let magnitude = self.doubled.unsigned_abs();
        let whole = magnitude / 2;
        if magnitude % 2 == 0 {
            write!(f, "{sign}{whole}")
        } else {
            write!(f, "{sign}{whole}.5")
        }
    }
}
