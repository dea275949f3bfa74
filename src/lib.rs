//! k-degree anonymization of undirected simple graphs, after Liu & Terzi
//! [k-degree anonymity](https://dl.acm.org/doi/10.1145/1376616.1376629).
//!
//! Given a graph G and an anonymity level k, [anonymize::anonymize] returns a
//! graph on the same vertices whose degree sequence is k-anonymous (every
//! distinct degree value shared by at least k vertices) while keeping the
//! edge set as close to G as the PRIORITY heuristic manages.

use env_logger::Builder;

#[macro_use]
extern crate lazy_static;

lazy_static! {
    static ref LOG: u64 = {
        let res = init_log();
        res
    };
}

// install a logger facility
fn init_log() -> u64 {
    Builder::from_default_env().init();
    println!("\n ************** initializing logger *****************\n");
    return 1;
}

pub mod graph;

pub mod sequence;

pub mod cost;

pub mod dp;

pub mod realize;

pub mod anonymize;

pub mod generate;

pub mod prelude;
