//! To ease access to most frequently used items
//!

pub use crate::graph::{degree_pairs, degree_vector, edit_stats, from_edges, EditStats, Graph};

pub use crate::anonymize::{anonymize, AnonymParams, DEFAULT_MAX_ATTEMPTS, DEFAULT_NOISE};

pub use crate::cost::CostMatrix;
pub use crate::dp::optimal_groups;
pub use crate::realize::{priority, RealizeFailure};
pub use crate::sequence::{is_graphical, is_k_anonymous, probe, sort_by_degree};

pub use crate::generate::{gnp, non_k_anonymous_gnp};
