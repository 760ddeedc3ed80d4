//! Snapshot of a trajectory returned by `solve`.

use crate::solver1d::Stats;

/// Result of a call to `solve`.
///
/// The vectors are copies of the solver's buffers, taken when `solve` returned.
/// Solving again or dropping the solver leaves them untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Time points, `t[0]` being the initial time.
    pub t: Vec<f64>,
    /// Approximate solution at each time point.
    pub sol: Vec<f64>,
    /// Configured number of samples.
    pub steps: usize,
    pub stats: Stats,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Final `(t, y)` pair.
    pub fn last(&self) -> Option<(f64, f64)> {
        Some((*self.t.last()?, *self.sol.last()?))
    }

    /// Iterates over the `(t, y)` samples in order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.t.iter().copied().zip(self.sol.iter().copied())
    }
}
