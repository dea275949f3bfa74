//! random test-graph generation : Erdős–Rényi sampling, with a rejection
//! loop producing graphs whose degree sequence is not yet k-anonymous.

use anyhow::anyhow;

use rand::prelude::*;
use rand_distr::Bernoulli;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::graph::{degree_vector, Graph};
use crate::sequence::is_k_anonymous;

// rejection sampling bound for non_k_anonymous_gnp
const MAX_SAMPLES: usize = 1000;

/// samples an Erdős–Rényi graph G(n, p) : every vertex pair is an edge with
/// probability p, independently.
pub fn gnp(nb_nodes: usize, proba: f64, rng: &mut Xoshiro256PlusPlus) -> anyhow::Result<Graph> {
    let bernoulli = match Bernoulli::new(proba) {
        Ok(b) => b,
        Err(_) => {
            log::error!("gnp received invalid edge probability {}", proba);
            return Err(anyhow!("edge probability must be in [0,1], got {}", proba));
        }
    };
    let mut graph = Graph::with_capacity(nb_nodes, 0);
    for v in 0..nb_nodes {
        graph.add_node(v);
    }
    for u in 0..nb_nodes {
        for v in (u + 1)..nb_nodes {
            if bernoulli.sample(rng) {
                graph.add_edge(u, v, ());
            }
        }
    }
    Ok(graph)
} // end of gnp

/// samples G(n, p) graphs until one is not k-anonymous already, so that
/// anonymizing it actually has work to do. Gives up after a bounded number
/// of rejections (p near 0 or 1 makes uniform degrees likely).
pub fn non_k_anonymous_gnp(
    nb_nodes: usize,
    proba: f64,
    k: usize,
    rng: &mut Xoshiro256PlusPlus,
) -> anyhow::Result<Graph> {
    for _ in 0..MAX_SAMPLES {
        let graph = gnp(nb_nodes, proba, rng)?;
        if !is_k_anonymous(&degree_vector(&graph), k) {
            return Ok(graph);
        }
    }
    log::error!(
        "no non-{}-anonymous G({}, {}) found in {} samples",
        k,
        nb_nodes,
        proba,
        MAX_SAMPLES
    );
    Err(anyhow!(
        "could not sample a non-{}-anonymous graph in {} draws",
        k,
        MAX_SAMPLES
    ))
} // end of non_k_anonymous_gnp

//===============================================================

// end of mod tests
