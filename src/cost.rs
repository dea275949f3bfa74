//! degree anonymization costs, Section 4 and Section 8 of Liu & Terzi
//! <https://dl.acm.org/doi/10.1145/1376616.1376629>.
//!
//! A group of vertices gets collapsed to a single degree value ; the cost of a
//! candidate group is the number of unit edge adjustments needed to bring
//! every member to the representative value. [CostMatrix] precomputes these
//! costs for every span that can become a group.

use ndarray::Array2;

/// cost of raising every degree of a descending span to the span maximum,
/// by edge additions only. Representative value is span[0].
pub fn assignment_cost_additions_only(span: &[usize]) -> f64 {
    span.iter().map(|&d| (span[0] - d) as f64).sum()
} // end of assignment_cost_additions_only

/// lower median of a descending sorted span
pub fn lower_median(span: &[usize]) -> usize {
    span[span.len() / 2]
}

/// cost of moving every degree of a descending span to the span median, edge
/// additions and deletions both allowed. Representative value is the lower
/// median, which minimizes the sum of absolute deviations.
pub fn assignment_cost_additions_deletions(span: &[usize]) -> f64 {
    let median = lower_median(span) as f64;
    span.iter().map(|&d| (median - d as f64).abs()).sum()
} // end of assignment_cost_additions_deletions

/// representative degree a span collapses to under the selected cost model
pub fn group_representative(span: &[usize], with_deletions: bool) -> usize {
    if with_deletions {
        lower_median(span)
    } else {
        span[0]
    }
}

/// Precomputed anonymization costs C\[i, j\] for contiguous rank spans
/// i..=j of the descending degree sequence.
///
/// Only spans of length k to 2k-1 are filled : shorter spans cannot form a
/// group and longer ones are always at least as cheap when split (Liu & Terzi
/// Eq. 4), which keeps the construction O(n·k). Every other entry stays at
/// +infinity.
pub struct CostMatrix {
    costs: Array2<f64>,
}

impl CostMatrix {
    /// builds the matrix for a degree sequence sorted descending
    pub fn build(degrees: &[usize], k: usize, with_deletions: bool) -> Self {
        let n = degrees.len();
        let mut costs = Array2::from_elem((n, n), f64::INFINITY);
        for i in 0..n.saturating_sub(1) {
            let last = (i + 2 * k).min(n);
            for j in (i + k - 1)..last {
                let span = &degrees[i..=j];
                if costs[[i, j - 1]].is_infinite() {
                    // first valid span on this row, compute directly
                    costs[[i, j]] = if with_deletions {
                        assignment_cost_additions_deletions(span)
                    } else {
                        assignment_cost_additions_only(span)
                    };
                } else {
                    // extending the span by its smallest element shifts the
                    // cost by (pivot - degrees[j]). For the median model the
                    // pivot is the upper median of the extended span : it lies
                    // in the minimizing interval of both spans, so the
                    // increment matches the direct formula exactly.
                    let pivot = if with_deletions {
                        degrees[i + (span.len() - 1) / 2]
                    } else {
                        degrees[i]
                    };
                    costs[[i, j]] = costs[[i, j - 1]] + (pivot - degrees[j]) as f64;
                }
            }
        }
        log::debug!(
            "cost matrix built, n = {}, k = {}, with_deletions = {}",
            n,
            k,
            with_deletions
        );
        CostMatrix { costs }
    } // end of build

    /// cost of anonymizing ranks i..=j as one group, +infinity if the span
    /// cannot form a group
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.costs[[i, j]]
    }
} // end of impl CostMatrix

//===============================================================

#[cfg(test)]
mod tests {

    #[allow(unused)]
    use super::*;

    #[allow(dead_code)]
    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_span_costs() {
        //
        log_init_test();
        //
        let span = [5, 3, 2];
        assert_eq!(assignment_cost_additions_only(&span), 5.);
        assert_eq!(lower_median(&span), 3);
        assert_eq!(assignment_cost_additions_deletions(&span), 3.);
        // even length : lower median is the smaller middle value
        let span = [6, 4, 2, 1];
        assert_eq!(lower_median(&span), 2);
        assert_eq!(assignment_cost_additions_deletions(&span), 7.);
    } // end of test_span_costs

    // cross-check the incremental construction against direct recomputation
    // on every valid span, for both cost models
    #[test]
    fn test_incremental_matches_direct() {
        //
        log_init_test();
        //
        let degrees = vec![9, 9, 8, 7, 7, 6, 5, 5, 5, 4, 3, 3, 2, 2, 1, 0];
        let n = degrees.len();
        for k in 2..=4 {
            for &with_deletions in &[false, true] {
                let matrix = CostMatrix::build(&degrees, k, with_deletions);
                for i in 0..n {
                    for j in 0..n {
                        let valid = j >= i + k - 1 && j < i + 2 * k && i < n - 1;
                        if !valid {
                            assert!(matrix.get(i, j).is_infinite());
                            continue;
                        }
                        let span = &degrees[i..=j];
                        let direct = if with_deletions {
                            assignment_cost_additions_deletions(span)
                        } else {
                            assignment_cost_additions_only(span)
                        };
                        let incremental = matrix.get(i, j);
                        log::trace!(
                            "k {} deletions {} span ({}, {}) direct {} incremental {}",
                            k,
                            with_deletions,
                            i,
                            j,
                            direct,
                            incremental
                        );
                        assert_eq!(incremental, direct);
                    }
                }
            }
        }
    } // end of test_incremental_matches_direct
} // end of mod tests
