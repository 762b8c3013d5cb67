use crate::overlap::interval::Interval;
use crate::overlap::probe_point::ProbePoint;
use arbitrary::Arbitrary;
use eyre::Context;
use eyre::OptionExt;
use std::io::Read;
use std::ops::Deref;
use std::str::FromStr;
use tracing::debug;
use tracing::warn;

/// The intervals of one problem instance, in input order. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Default, Arbitrary)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    #[must_use]
    pub fn new(intervals: Vec<Interval>) -> Self {
        Self { intervals }
    }

    #[must_use]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Number of intervals whose open interior contains `probe`.
    #[must_use]
    pub fn count_covering(&self, probe: ProbePoint) -> usize {
        self.intervals
            .iter()
            .filter(|interval| interval.strictly_contains(probe))
            .count()
    }

    /// Read the whole of `reader` and parse it as a problem instance.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the text is not a well-formed instance.
    pub fn read_from(mut reader: impl Read) -> eyre::Result<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .wrap_err("Failed to read interval input")?;
        text.parse()
    }
}

impl Deref for IntervalSet {
    type Target = [Interval];
    fn deref(&self) -> &Self::Target {
        &self.intervals
    }
}

impl From<Vec<Interval>> for IntervalSet {
    fn from(intervals: Vec<Interval>) -> Self {
        Self { intervals }
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self {
        Self {
            intervals: iter.into_iter().collect(),
        }
    }
}

/*
3
1 5
3 7
6 10
*/
impl FromStr for IntervalSet {
    type Err = eyre::Report;

    /// First line holds the count `n`, each of the next `n` lines holds one `l r` pair.
    /// Anything after the `n`-th interval line is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().enumerate();
        let (_, count_line) = lines.next().ok_or_eyre("missing interval count line")?;
        let count: usize = count_line
            .trim()
            .parse()
            .wrap_err_with(|| format!("line 1: invalid interval count {:?}", count_line.trim()))?;
        debug!("Expecting {} intervals", count);

        let mut intervals = Vec::new();
        for found in 0..count {
            let Some((index, line)) = lines.next() else {
                eyre::bail!("expected {count} intervals, found {found}");
            };
            let interval: Interval = line
                .parse()
                .wrap_err_with(|| format!("line {}: malformed interval", index + 1))?;
            if interval.is_degenerate() {
                warn!(
                    line = index + 1,
                    "Interval {} has an empty interior and will never be counted", interval
                );
            }
            intervals.push(interval);
        }
        Ok(Self { intervals })
    }
}
