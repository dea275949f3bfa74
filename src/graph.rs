//! graph representation and small degree/edge utilities.
//!
//! The whole crate works on [UnGraphMap] : vertices are dense usize identifiers
//! and the realizer needs O(1) edge membership queries, which GraphMap provides.

use indexmap::set::IndexSet;
use petgraph::graphmap::UnGraphMap;

/// undirected simple graph over dense vertex ids 0..n-1
pub type Graph = UnGraphMap<usize, ()>;

/// builds a graph on n vertices from an edge list. Duplicate pairs collapse,
/// GraphMap does not keep parallel edges.
pub fn from_edges(nb_nodes: usize, edges: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::with_capacity(nb_nodes, edges.len());
    for v in 0..nb_nodes {
        graph.add_node(v);
    }
    for &(u, v) in edges {
        graph.add_edge(u, v, ());
    }
    graph
} // end of from_edges

/// returns (degree, vertex) pairs for all vertices, isolated ones included,
/// ordered by vertex id.
pub fn degree_pairs(graph: &Graph) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(usize, usize)> = graph
        .nodes()
        .map(|v| (graph.neighbors(v).count(), v))
        .collect();
    pairs.sort_unstable_by_key(|p| p.1);
    pairs
} // end of degree_pairs

/// degree of every vertex, indexed by vertex id
pub fn degree_vector(graph: &Graph) -> Vec<usize> {
    degree_pairs(graph).into_iter().map(|p| p.0).collect()
}

/// edge edit distance between an original graph and its anonymized version
#[derive(Copy, Clone, Debug)]
pub struct EditStats {
    /// edges present in both graphs
    pub kept: usize,
    /// edges of the anonymized graph absent from the original
    pub added: usize,
    /// original edges absent from the anonymized graph
    pub removed: usize,
}

/// compares edge sets of two graphs on the same vertex set
pub fn edit_stats(original: &Graph, anonymized: &Graph) -> EditStats {
    let normalize = |u: usize, v: usize| if u < v { (u, v) } else { (v, u) };
    let original_edges: IndexSet<(usize, usize)> = original
        .all_edges()
        .map(|(u, v, _)| normalize(u, v))
        .collect();
    let mut kept = 0;
    let mut added = 0;
    for (u, v, _) in anonymized.all_edges() {
        if original_edges.contains(&normalize(u, v)) {
            kept += 1;
        } else {
            added += 1;
        }
    }
    EditStats {
        kept,
        added,
        removed: original_edges.len() - kept,
    }
} // end of edit_stats

//===============================================================

// end of mod tests
