//! PRIORITY graph construction, Section 6.2 of Liu & Terzi
//! <https://dl.acm.org/doi/10.1145/1376616.1376629>.
//!
//! Builds a simple graph matching a target degree sequence exactly, biased
//! towards reusing edges of the original graph. Greedy and randomized : it
//! can get stuck, which is reported as a retryable failure and handled by
//! probing in the orchestrator.

use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::graph::Graph;

/// why a realization attempt failed ; both cases are retryable
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RealizeFailure {
    /// a degree sequence with odd sum has no realization at all
    OddDegreeSum,
    /// the greedy construction drove a remaining degree negative
    Stalled,
}

/// attempts to build a graph whose vertex v has degree target\[v\], reusing
/// edges of the original graph first. The original graph is only queried,
/// never mutated.
pub fn priority(
    target: &[usize],
    original: &Graph,
    rng: &mut Xoshiro256PlusPlus,
) -> Result<Graph, RealizeFailure> {
    let n = target.len();
    if n == 0 {
        return Ok(Graph::new());
    }
    if target.iter().sum::<usize>() % 2 != 0 {
        log::debug!("target degree sequence has odd sum, not realizable");
        return Err(RealizeFailure::OddDegreeSum);
    }
    let mut constructed = Graph::with_capacity(n, 0);
    for v in 0..n {
        constructed.add_node(v);
    }
    // remaining degree of every vertex, signed so a stall shows up as a
    // negative entry at the next re-sort
    let mut remaining: Vec<(usize, i64)> = target
        .iter()
        .enumerate()
        .map(|(v, &d)| (v, d as i64))
        .collect();
    //
    loop {
        remaining.sort_by(|a, b| b.1.cmp(&a.1));
        if remaining[n - 1].1 < 0 {
            log::debug!(
                "construction stalled, vertex {} over-saturated",
                remaining[n - 1].0
            );
            return Err(RealizeFailure::Stalled);
        }
        if remaining.iter().all(|r| r.1 == 0) {
            log::debug!(
                "realization succeeded, {} edges",
                constructed.edge_count()
            );
            return Ok(constructed);
        }
        // pick one vertex still needing edges, uniformly
        let pending: Vec<usize> = (0..n).filter(|&i| remaining[i].1 > 0).collect();
        let picked = pending[rng.gen_range(0..pending.len())];
        let v = remaining[picked].0;
        let needed = remaining[picked].1;
        // first pass : reuse edges of the original graph between vertices
        // that both still need degree
        for i in 0..n {
            if remaining[picked].1 == 0 {
                break;
            }
            let (u, left) = remaining[i];
            if u == v || left <= 0 {
                continue;
            }
            if constructed.contains_edge(v, u) {
                continue;
            }
            if original.contains_edge(v, u) {
                log::trace!("reusing original edge ({}, {})", v, u);
                constructed.add_edge(v, u, ());
                remaining[i].1 -= 1;
                remaining[picked].1 -= 1;
            }
        }
        // second pass : invent edges absent from the original graph. No
        // positivity check on the partner here, the original algorithm lets
        // a saturated vertex go negative so the stall check above can fire
        // instead of looping forever.
        for i in 0..n {
            if remaining[picked].1 == 0 {
                break;
            }
            let u = remaining[i].0;
            if u == v {
                continue;
            }
            if constructed.contains_edge(v, u) {
                continue;
            }
            if !original.contains_edge(v, u) {
                log::trace!("adding new edge ({}, {})", v, u);
                constructed.add_edge(v, u, ());
                remaining[i].1 -= 1;
                remaining[picked].1 -= 1;
            }
        }
        // both passes may reject every candidate : this happens when all the
        // not-yet-connected vertices are saturated original neighbors of v
        // (skipped by the first pass for their exhausted degree, by the
        // second for being original edges). Nothing goes negative then, so
        // the stall must be reported here or the loop would spin forever.
        if remaining[picked].1 == needed {
            log::debug!("construction stalled, no candidate left for vertex {}", v);
            return Err(RealizeFailure::Stalled);
        }
    }
} // end of priority

//===============================================================

// end of mod tests
