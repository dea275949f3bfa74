//! an executable anonymizing a random graph
//! example usage:
//! anonymize --nbnodes 100 --proba 0.05 -k 3 --noise 10 --seed 1235437
//! anonymize --nbnodes 100 --proba 0.05 -k 5 --deletions
//!
//! samples an Erdős–Rényi graph that is not yet k-anonymous, anonymizes it
//! and prints both degree sequences together with the edge edit statistics.
//!

use anyhow::anyhow;
use clap::{Arg, ArgMatches, Command};

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use graphanon::prelude::*;

struct RunArgs {
    nb_nodes: usize,
    proba: f64,
    seed: u64,
    params: AnonymParams,
}

fn parse_run_args(matches: &ArgMatches) -> Result<RunArgs, anyhow::Error> {
    log::debug!("in parse_run_args");
    //
    let nb_nodes = match matches.value_of("nbnodes") {
        Some(str) => match str.parse::<usize>() {
            Ok(val) => val,
            _ => {
                return Err(anyhow!("error parsing nbnodes"));
            }
        },
        _ => 100,
    }; // end match
    //
    let proba = match matches.value_of("proba") {
        Some(str) => match str.parse::<f64>() {
            Ok(val) => val,
            _ => {
                return Err(anyhow!("error parsing proba"));
            }
        },
        _ => 0.05,
    }; // end match
    //
    let k = match matches.value_of("k") {
        Some(str) => match str.parse::<usize>() {
            Ok(val) => val,
            _ => {
                return Err(anyhow!("error parsing k"));
            }
        },
        _ => {
            return Err(anyhow!("k is required"));
        }
    }; // end match
    //
    let noise = match matches.value_of("noise") {
        Some(str) => match str.parse::<usize>() {
            Ok(val) => val,
            _ => {
                return Err(anyhow!("error parsing noise"));
            }
        },
        _ => DEFAULT_NOISE,
    }; // end match
    //
    let max_attempts = match matches.value_of("maxattempts") {
        Some(str) => match str.parse::<usize>() {
            Ok(val) => val,
            _ => {
                return Err(anyhow!("error parsing maxattempts"));
            }
        },
        _ => DEFAULT_MAX_ATTEMPTS,
    }; // end match
    //
    let seed = match matches.value_of("seed") {
        Some(str) => match str.parse::<u64>() {
            Ok(val) => val,
            _ => {
                return Err(anyhow!("error parsing seed"));
            }
        },
        _ => 1235437,
    }; // end match
    //
    let with_deletions = matches.is_present("deletions");
    let mut params = AnonymParams::new(k, noise, with_deletions);
    params.max_attempts = max_attempts;
    Ok(RunArgs {
        nb_nodes,
        proba,
        seed,
        params,
    })
} // end of parse_run_args

pub fn main() {
    //
    let _ = env_logger::builder().is_test(true).try_init();
    log::info!("logger initialized");
    //
    let matches = Command::new("anonymize")
        .arg(
            Arg::new("nbnodes")
                .long("nbnodes")
                .takes_value(true)
                .help("number of vertices of the sampled graph, default 100"),
        )
        .arg(
            Arg::new("proba")
                .long("proba")
                .takes_value(true)
                .help("edge probability of the sampled graph, default 0.05"),
        )
        .arg(
            Arg::new("k")
                .short('k')
                .long("anonymity")
                .takes_value(true)
                .required(true)
                .help("anonymity level, at least 2"),
        )
        .arg(
            Arg::new("noise")
                .long("noise")
                .takes_value(true)
                .help("number of lowest degree vertices probed per retry, default 10"),
        )
        .arg(
            Arg::new("maxattempts")
                .long("maxattempts")
                .takes_value(true)
                .help("bound on realization attempts, default 100"),
        )
        .arg(
            Arg::new("deletions")
                .long("deletions")
                .takes_value(false)
                .help("allow edge deletions (median cost model) instead of additions only"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .takes_value(true)
                .help("seed of the random generator, for reproducible runs"),
        )
        .get_matches();
    //
    let run_args = match parse_run_args(&matches) {
        Ok(args) => args,
        Err(e) => {
            log::error!("parsing command line failed : {}", e);
            std::process::exit(1);
        }
    };
    //
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(run_args.seed);
    let graph = match non_k_anonymous_gnp(
        run_args.nb_nodes,
        run_args.proba,
        run_args.params.k,
        &mut rng,
    ) {
        Ok(graph) => graph,
        Err(e) => {
            log::error!("graph sampling failed : {}", e);
            std::process::exit(1);
        }
    };
    println!(
        "sampled graph : {} vertices, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    println!("original degree sequence : {:?}", degree_vector(&graph));
    //
    let anonymized = match anonymize(&graph, &run_args.params, &mut rng) {
        Ok(anonymized) => anonymized,
        Err(e) => {
            log::error!("anonymization failed : {}", e);
            std::process::exit(1);
        }
    };
    println!(
        "anonymized degree sequence : {:?}",
        degree_vector(&anonymized)
    );
    let stats = edit_stats(&graph, &anonymized);
    println!(
        "edges kept : {}, added : {}, removed : {}",
        stats.kept, stats.added, stats.removed
    );
} // end of main
