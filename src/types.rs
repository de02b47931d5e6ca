//! Core data structures for keyword clustering.
//!
//! URL sets are `BTreeSet<String>` so iteration order, reports, and
//! serialized output are deterministic for a given input.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One keyword as fetched upstream: search volume plus the set of URLs
/// that rank for it. `volume: None` means the provider returned no
/// figure; the engine treats it as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub keyword: String,
    #[serde(default)]
    pub volume: Option<u64>,
    #[serde(default)]
    pub urls: BTreeSet<String>,
}

impl KeywordRecord {
    #[must_use]
    pub fn new(keyword: impl Into<String>, volume: Option<u64>, urls: BTreeSet<String>) -> Self {
        Self {
            keyword: keyword.into(),
            volume,
            urls,
        }
    }
}

/// A keyword after assignment to a cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterMember {
    pub keyword: String,
    pub volume: u64,
    /// The member's original ranking set, kept for the similar-URL pass.
    pub urls: BTreeSet<String>,
    /// Jaccard similarity recorded at assignment time; 1.0 for the
    /// member that founded the cluster.
    pub similarity: f64,
    /// URLs shared with the cluster's principal member. Populated by the
    /// post-processing pass, empty until then.
    #[serde(default)]
    pub similar_urls: BTreeSet<String>,
}

/// A group of keywords whose ranking URLs substantially overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Keyword of the founding member. Never changes after creation.
    pub name: String,
    /// Members in arrival order.
    pub members: Vec<ClusterMember>,
    /// Running sum of member volumes.
    pub total_volume: u64,
    /// Running union of all member URL sets. Used only to compare
    /// against future keywords, not shown per member.
    pub urls: BTreeSet<String>,
}

impl Cluster {
    /// The member with the highest volume, first occurrence winning ties.
    /// Used as the reference URL set for similarity highlighting.
    #[must_use]
    pub fn principal(&self) -> Option<&ClusterMember> {
        // Strict > keeps the earliest maximal member.
        let mut best: Option<&ClusterMember> = None;
        for member in &self.members {
            match best {
                Some(b) if member.volume <= b.volume => {}
                _ => best = Some(member),
            }
        }
        best
    }
}
