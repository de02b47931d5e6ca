//! The keyword clustering engine.
//!
//! A single greedy forward pass over the input records, grouping keywords
//! by Jaccard similarity of their ranking-URL sets, followed by a
//! post-processing pass that marks the URLs each member shares with its
//! cluster's principal (highest-volume) member.
//!
//! The pass is deliberately order-sensitive: clusters are scanned in
//! creation order on every iteration with no early exit, a keyword joins
//! the *last* cluster scanned that clears both the fixed 0.5 floor and
//! the caller's threshold, and the similarity recorded for the new member
//! is the highest value seen across the whole scan, which a non-winning
//! cluster may have set. Same input order in, same clusters out.

use crate::types::{Cluster, ClusterMember, KeywordRecord};
use std::collections::BTreeSet;

/// Fixed lower bound a candidate cluster must strictly exceed before it
/// counts as "most similar". Independent of the caller's merge threshold.
pub const SIMILARITY_FLOOR: f64 = 0.5;

/// Jaccard similarity of two URL sets: |A ∩ B| / |A ∪ B|, with 0.0 when
/// both sets are empty.
#[must_use]
pub fn jaccard_similarity(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

/// Groups `records` into clusters of substantially-overlapping URL sets.
///
/// `threshold_pct` is the merge threshold as a percentage in [0,100];
/// callers validate the range (see `input::validate_threshold`), the
/// engine itself is total over any input. Output clusters appear in
/// creation order; members within a cluster in arrival order.
#[must_use]
pub fn cluster_keywords(records: &[KeywordRecord], threshold_pct: u32) -> Vec<Cluster> {
    let threshold = f64::from(threshold_pct) / 100.0;
    let mut clusters: Vec<Cluster> = Vec::new();

    for record in records {
        let volume = record.volume.unwrap_or(0);

        let mut best_cluster: Option<usize> = None;
        let mut highest_similarity = SIMILARITY_FLOOR;

        // Scan every cluster, every time. A candidate must strictly
        // exceed the fixed floor before it counts at all, and must meet
        // the caller's threshold to actually win. The two checks are
        // decoupled: a cluster above the floor but below the threshold
        // raises highest_similarity without ever being joined, and the
        // recorded member similarity is whatever the scan's maximum was.
        for (idx, cluster) in clusters.iter().enumerate() {
            let similarity = jaccard_similarity(&cluster.urls, &record.urls);
            if similarity > highest_similarity {
                highest_similarity = similarity;
            }
            if similarity > SIMILARITY_FLOOR && similarity >= threshold {
                best_cluster = Some(idx);
            }
        }

        match best_cluster {
            Some(idx) => {
                let cluster = &mut clusters[idx];
                cluster.members.push(ClusterMember {
                    keyword: record.keyword.clone(),
                    volume,
                    urls: record.urls.clone(),
                    similarity: highest_similarity,
                    similar_urls: BTreeSet::new(),
                });
                cluster.total_volume += volume;
                cluster.urls.extend(record.urls.iter().cloned());
            }
            None => {
                clusters.push(Cluster {
                    name: record.keyword.clone(),
                    members: vec![ClusterMember {
                        keyword: record.keyword.clone(),
                        volume,
                        urls: record.urls.clone(),
                        similarity: 1.0,
                        similar_urls: BTreeSet::new(),
                    }],
                    total_volume: volume,
                    urls: record.urls.clone(),
                });
            }
        }
    }

    assign_similar_urls(&mut clusters);
    clusters
}

/// Post-processing pass: for every cluster, intersect each member's URL
/// set with the principal member's. Clusters whose members all have empty
/// URL sets have nothing to intersect and are left untouched.
fn assign_similar_urls(clusters: &mut [Cluster]) {
    for cluster in clusters {
        if cluster.members.iter().all(|m| m.urls.is_empty()) {
            continue;
        }
        let Some(principal_urls) = cluster.principal().map(|p| p.urls.clone()) else {
            continue;
        };
        for member in &mut cluster.members {
            member.similar_urls = principal_urls.intersection(&member.urls).cloned().collect();
        }
    }
}
