//! Skip ranges: time intervals elided from both streams

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::SkipTableError;

/// Half-open interval `[start, end)` in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(from = "(f64, f64)")]
pub struct SkipRange {
    pub start: f64,
    pub end: f64,
}

impl SkipRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time < self.end
    }
}

impl From<(f64, f64)> for SkipRange {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

impl fmt::Display for SkipRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Parses `START:END`, as accepted on the command line.
impl FromStr for SkipRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once(':')
            .ok_or_else(|| format!("expected START:END, got '{}'", s))?;
        let start: f64 = start
            .trim()
            .parse()
            .map_err(|e| format!("invalid start '{}': {}", start, e))?;
        let end: f64 = end
            .trim()
            .parse()
            .map_err(|e| format!("invalid end '{}': {}", end, e))?;
        Ok(Self::new(start, end))
    }
}

/// Ordered set of skip ranges. Ranges are expected to be disjoint and
/// sorted; when they are not, the first match in declared order wins.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct SkipTable {
    ranges: Vec<SkipRange>,
}

impl SkipTable {
    pub fn new(ranges: Vec<SkipRange>) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &[SkipRange] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns the end of the first range containing `time`, if any.
    ///
    /// A range's own `end` never matches it, so jumping to the returned value
    /// does not re-trigger the same range.
    pub fn resolve_skip(&self, time: f64) -> Option<f64> {
        self.ranges
            .iter()
            .find(|range| range.contains(time))
            .map(|range| range.end)
    }

    /// Follows skips from `time` until the position is outside every range.
    ///
    /// Adjacent ranges such as `[0, 5)` and `[5, 10)` chain to the last end.
    /// Every hop lands strictly later than the previous one, so at most
    /// `len()` hops are taken.
    pub fn resolve_landing(&self, time: f64) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let mut landing = self.resolve_skip(time)?;
        for _ in 1..self.len() {
            match self.resolve_skip(landing) {
                Some(next) => landing = next,
                None => break,
            }
        }
        Some(landing)
    }

    /// Reports every inverted, out-of-order or overlapping range. An empty
    /// result means the table is well formed.
    pub fn validate(&self) -> Vec<SkipTableError> {
        let mut problems = Vec::new();

        for (index, range) in self.ranges.iter().enumerate() {
            if !(range.start < range.end) {
                problems.push(SkipTableError::Inverted {
                    index,
                    start: range.start,
                    end: range.end,
                });
            }
        }

        for (index, pair) in self.ranges.windows(2).enumerate() {
            let (prev, next) = (pair[0], pair[1]);
            if next.start < prev.start {
                problems.push(SkipTableError::OutOfOrder { index: index + 1 });
            } else if next.start < prev.end {
                problems.push(SkipTableError::Overlapping {
                    first: index,
                    second: index + 1,
                });
            }
        }

        problems
    }
}

impl FromIterator<SkipRange> for SkipTable {
    fn from_iter<I: IntoIterator<Item = SkipRange>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<(f64, f64)>> for SkipTable {
    fn from(pairs: Vec<(f64, f64)>) -> Self {
        pairs.into_iter().map(SkipRange::from).collect()
    }
}
