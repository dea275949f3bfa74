//! degree sequence utilities : descending sort with permutation, probing,
//! Erdős–Gallai graphicality test and the k-anonymity predicate.

use std::collections::HashMap;

/// sorts (degree, vertex) pairs in place by degree descending and returns the
/// degree array together with the permutation rank -> original vertex id.
/// The sort is stable so equal degrees keep their enumeration order.
pub fn sort_by_degree(pairs: &mut [(usize, usize)]) -> (Vec<usize>, Vec<usize>) {
    pairs.sort_by(|a, b| b.0.cmp(&a.0));
    let degrees = pairs.iter().map(|p| p.0).collect();
    let permutation = pairs.iter().map(|p| p.1).collect();
    (degrees, permutation)
} // end of sort_by_degree

/// raises the degree of the noise lowest-degree entries by one, capped at
/// n-1 which is the largest degree a simple graph admits.
/// Expects pairs sorted descending, i.e. the output of [sort_by_degree].
pub fn probe(pairs: &mut [(usize, usize)], noise: usize) {
    let n = pairs.len();
    if n == 0 {
        return;
    }
    let first = n.saturating_sub(noise);
    for pair in pairs[first..].iter_mut() {
        pair.0 = (pair.0 + 1).min(n - 1);
    }
    log::trace!("probed {} lowest degree vertices", n - first);
} // end of probe

/// Erdős–Gallai test : true if some simple undirected graph realizes the
/// degree sequence. The sequence needs not be sorted.
pub fn is_graphical(sequence: &[usize]) -> bool {
    let n = sequence.len();
    if n == 0 {
        return true;
    }
    let total: usize = sequence.iter().sum();
    if total % 2 != 0 {
        return false;
    }
    let mut degrees = sequence.to_vec();
    degrees.sort_unstable_by(|a, b| b.cmp(a));
    //
    let mut prefix = 0usize;
    for r in 1..=n {
        prefix += degrees[r - 1];
        let mut bound = r * (r - 1);
        for &d in &degrees[r..] {
            bound += d.min(r);
        }
        if prefix > bound {
            log::trace!("Erdős–Gallai inequality failed at r = {}", r);
            return false;
        }
    }
    true
} // end of is_graphical

/// true if every distinct degree value occurs in at least k positions
pub fn is_k_anonymous(degrees: &[usize], k: usize) -> bool {
    let mut counts = HashMap::<usize, usize>::with_capacity(degrees.len());
    for &d in degrees {
        *counts.entry(d).or_insert(0) += 1;
    }
    counts.values().all(|&count| count >= k)
} // end of is_k_anonymous

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
    fn test_sort_permutation_round_trip() {
        //
        log_init_test();
        //
        let mut pairs = vec![(3, 0), (2, 1), (2, 2), (2, 3), (2, 4), (1, 5)];
        let (degrees, permutation) = sort_by_degree(&mut pairs);
        assert_eq!(degrees, vec![3, 2, 2, 2, 2, 1]);
        // map rank values back onto original vertices, then re-sort : we must
        // recover the sorted order
        let mut by_vertex = vec![0usize; degrees.len()];
        for (rank, &v) in permutation.iter().enumerate() {
            by_vertex[v] = degrees[rank];
        }
        let mut resorted = by_vertex.clone();
        resorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(resorted, degrees);
        assert_eq!(by_vertex, vec![3, 2, 2, 2, 2, 1]);
    } // end of test_sort_permutation_round_trip

    #[test]
    fn test_sort_stability_on_ties() {
        //
        log_init_test();
        //
        let mut pairs = vec![(2, 0), (2, 1), (3, 2), (2, 3)];
        let (degrees, permutation) = sort_by_degree(&mut pairs);
        assert_eq!(degrees, vec![3, 2, 2, 2]);
        // equal degrees keep enumeration order
        assert_eq!(permutation, vec![2, 0, 1, 3]);
    }

    #[test]
    fn test_probe_increments_tail_and_caps() {
        //
        log_init_test();
        //
        let mut pairs = vec![(5, 0), (4, 1), (3, 2), (5, 3), (0, 4), (0, 5)];
        sort_by_degree(&mut pairs);
        probe(&mut pairs, 3);
        // n = 6, cap is 5 : the vertex already at 5 stays there if probed,
        // but here the three lowest are 3, 0, 0
        let degrees: Vec<usize> = pairs.iter().map(|p| p.0).collect();
        assert_eq!(degrees, vec![5, 5, 4, 4, 1, 1]);
        // noise larger than n touches every entry and caps at n-1
        let mut small = vec![(5, 0), (5, 1)];
        probe(&mut small, 10);
        assert_eq!(small, vec![(1, 0), (1, 1)]);
    } // end of test_probe_increments_tail_and_caps

    #[test]
    fn test_erdos_gallai() {
        //
        log_init_test();
        //
        // a path on 3 vertices
        assert!(is_graphical(&[1, 2, 1]));
        // odd sum
        assert!(!is_graphical(&[2, 2, 1]));
        // a star : one hub of degree 4, four leaves
        assert!(is_graphical(&[4, 1, 1, 1, 1, 0]));
        // even sum but too concentrated
        assert!(!is_graphical(&[3, 3, 1, 1]));
        // complete graph K4
        assert!(is_graphical(&[3, 3, 3, 3]));
        // empty sequence
        assert!(is_graphical(&[]));
    } // end of test_erdos_gallai

    #[test]
    fn test_k_anonymity_predicate() {
        //
        log_init_test();
        //
        assert!(is_k_anonymous(&[2, 2, 2, 1, 1], 2));
        assert!(!is_k_anonymous(&[3, 2, 2, 2, 2, 1], 3));
        assert!(is_k_anonymous(&[2, 2, 2, 2, 2, 2], 3));
    }
} // end of mod tests
