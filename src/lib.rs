//! serpcluster: groups search keywords whose ranking URLs substantially
//! overlap, using a single-pass greedy Jaccard clustering.
//!
//! The engine (`engine`) is a pure function over pre-fetched records;
//! everything else — input validation, report rendering, the tabular
//! export, per-job result storage — is plumbing around it.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod input;
pub mod report;
pub mod store;
pub mod types;

pub use engine::{cluster_keywords, jaccard_similarity, SIMILARITY_FLOOR};
pub use error::{ClusterError, Result};
pub use types::{Cluster, ClusterMember, KeywordRecord};
