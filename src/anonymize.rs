//! the anonymization driver : DP degree anonymizer + PRIORITY construction +
//! PROBING retries, after Liu & Terzi
//! <https://dl.acm.org/doi/10.1145/1376616.1376629>.

use anyhow::anyhow;

use cpu_time::ProcessTime;
use std::time::SystemTime;

use rand_xoshiro::Xoshiro256PlusPlus;

use crate::cost::CostMatrix;
use crate::dp::optimal_groups;
use crate::graph::{degree_pairs, edit_stats, Graph};
use crate::realize::priority;
use crate::sequence::{is_graphical, probe, sort_by_degree};

/// default number of lowest-degree vertices perturbed per probing retry
pub const DEFAULT_NOISE: usize = 10;
/// default bound on realization attempts before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// anonymization parameters
#[derive(Copy, Clone, Debug)]
pub struct AnonymParams {
    /// anonymity level : every degree value of the output occurs in at
    /// least k vertices. Must satisfy 2 <= k <= number of vertices.
    pub k: usize,
    /// how many lowest-degree vertices get their degree raised when a
    /// realization attempt fails
    pub noise: usize,
    /// false : cost model allows edge additions only, a group collapses to
    /// its maximum degree. true : additions and deletions, a group collapses
    /// to its lower median.
    pub with_deletions: bool,
    /// probing retries before the run is abandoned
    pub max_attempts: usize,
}

impl AnonymParams {
    pub fn new(k: usize, noise: usize, with_deletions: bool) -> Self {
        AnonymParams {
            k,
            noise,
            with_deletions,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// k with default noise and the additions-only cost model
    pub fn with_k(k: usize) -> Self {
        Self::new(k, DEFAULT_NOISE, false)
    }
} // end of impl AnonymParams

/// anonymizes a graph : returns a graph on the same vertex set whose degree
/// sequence is k-anonymous, as close to the original edge set as the
/// heuristic manages.
///
/// The rng drives the randomized construction ; a given (graph, params, seed)
/// triple always produces the same output. Fails on invalid parameters or
/// when max_attempts realization attempts were exhausted.
pub fn anonymize(
    graph: &Graph,
    params: &AnonymParams,
    rng: &mut Xoshiro256PlusPlus,
) -> anyhow::Result<Graph> {
    //
    let nb_nodes = graph.node_count();
    if params.k < 2 {
        log::error!("anonymize received k = {}, need k >= 2", params.k);
        return Err(anyhow!("k must be at least 2, got {}", params.k));
    }
    if params.k > nb_nodes {
        log::error!(
            "anonymize received k = {} for a graph of {} vertices",
            params.k,
            nb_nodes
        );
        return Err(anyhow!(
            "k ({}) exceeds the number of vertices ({})",
            params.k,
            nb_nodes
        ));
    }
    //
    let cpu_start = ProcessTime::now();
    let sys_start = SystemTime::now();
    //
    let mut pairs = degree_pairs(graph);
    for attempt in 1..=params.max_attempts {
        log::info!("anonymization attempt {}", attempt);
        if attempt > 1 {
            // pairs are still sorted from the previous round, perturb the tail
            probe(&mut pairs, params.noise);
        }
        let (degrees, permutation) = sort_by_degree(&mut pairs);
        let matrix = CostMatrix::build(&degrees, params.k, params.with_deletions);
        let ranked = optimal_groups(&degrees, params.k, &matrix, params.with_deletions);
        // back from rank order to original vertex order
        let mut target = vec![0usize; nb_nodes];
        for (rank, &v) in permutation.iter().enumerate() {
            target[v] = ranked[rank];
        }
        // after probing the sequence may not be graphical at all, skip the
        // construction and probe again
        if attempt > 1 && !is_graphical(&target) {
            log::debug!("anonymized sequence not graphical, probing again");
            continue;
        }
        match priority(&target, graph, rng) {
            Ok(anonymized) => {
                let stats = edit_stats(graph, &anonymized);
                log::info!(
                    "anonymization succeeded at attempt {} : {} edges kept, {} added, {} removed",
                    attempt,
                    stats.kept,
                    stats.added,
                    stats.removed
                );
                log::info!(
                    "anonymize sys time(ms) {:?} cpu time(ms) {:?}",
                    sys_start.elapsed().unwrap().as_millis(),
                    cpu_start.elapsed().as_millis()
                );
                return Ok(anonymized);
            }
            Err(failure) => {
                log::debug!("attempt {} failed : {:?}", attempt, failure);
            }
        }
    }
    log::error!(
        "no anonymization found after {} attempts",
        params.max_attempts
    );
    Err(anyhow!(
        "no anonymization found after {} attempts",
        params.max_attempts
    ))
} // end of anonymize

//===============================================================

// end of mod tests
