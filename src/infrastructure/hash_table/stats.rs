// Positional distribution statistics shared by every table variant

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Summary of the gaps between consecutive occupied positions
///
/// A gap is the number of unoccupied positions strictly between two
/// occupied ones. With fewer than two occupied positions there are no gaps
/// and every field is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GapStats {
    /// Smallest gap
    pub min: usize,
    /// Largest gap
    pub max: usize,
    /// Arithmetic mean of all gaps
    pub mean: f64,
    /// Number of gaps measured
    pub count: usize,
}

impl GapStats {
    /// Check whether any gap was measured
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl fmt::Display for GapStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "no gaps")
        } else {
            write!(f, "min {}, max {}, mean {:.2}", self.min, self.max, self.mean)
        }
    }
}

/// Compute gap statistics over occupied positions given in ascending order
///
/// A position not strictly above the previous one is skipped, so repeated or
/// out-of-order input never underflows.
pub fn gap_statistics<I>(occupied: I) -> GapStats
where
    I: IntoIterator<Item = usize>,
{
    let mut min = usize::MAX;
    let mut max = 0;
    let mut sum: u64 = 0;
    let mut count = 0;
    let mut previous: Option<usize> = None;

    for index in occupied {
        if let Some(last) = previous {
            let Some(gap) = index.checked_sub(last).and_then(|d| d.checked_sub(1)) else {
                continue;
            };
            min = min.min(gap);
            max = max.max(gap);
            sum += gap as u64;
            count += 1;
        }
        previous = Some(index);
    }

    if count == 0 {
        return GapStats::default();
    }

    GapStats {
        min,
        max,
        mean: sum as f64 / count as f64,
        count,
    }
}

/// Length of the longest run of consecutive occupied positions
///
/// Runs do not wrap around the end of the table.
pub fn longest_run<I>(occupied: I) -> usize
where
    I: IntoIterator<Item = bool>,
{
    let mut longest = 0;
    let mut current = 0;
    for is_occupied in occupied {
        if is_occupied {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// The `n` largest values, largest first
pub fn largest_n<I>(values: I, n: usize) -> Vec<usize>
where
    I: IntoIterator<Item = usize>,
{
    // Min-heap of the best `n` seen so far
    let mut heap = BinaryHeap::with_capacity(n + 1);
    for value in values {
        heap.push(Reverse(value));
        if heap.len() > n {
            heap.pop();
        }
    }

    let mut result: Vec<usize> = heap.into_iter().map(|Reverse(v)| v).collect();
    result.sort_unstable_by(|a, b| b.cmp(a));
    result
}
