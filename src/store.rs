//! Per-job result storage.
//!
//! Replaces a process-global "last result" slot with an explicit store:
//! each clustering run is inserted under a fresh `JobId` and retrieved
//! by that id for later detail views or export. The store is owned by
//! the caller layer; the engine never sees it. Reads hand out
//! `Arc`-shared cluster lists so callers keep no lock while rendering.

use crate::error::{ClusterError, Result};
use crate::types::Cluster;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Opaque handle to one stored clustering result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub u64);

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct ResultStore {
    next_id: AtomicU64,
    results: RwLock<HashMap<JobId, Arc<Vec<Cluster>>>>,
}

impl ResultStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a clustering result and returns its id. Ids are unique for
    /// the lifetime of the store.
    pub fn insert(&self, clusters: Vec<Cluster>) -> JobId {
        let id = JobId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut results = self.results.write().unwrap_or_else(|e| e.into_inner());
        results.insert(id, Arc::new(clusters));
        id
    }

    /// Retrieves a stored result.
    ///
    /// # Errors
    ///
    /// Returns `ClusterError::UnknownJob` when no result exists for `id`.
    pub fn get(&self, id: JobId) -> Result<Arc<Vec<Cluster>>> {
        let results = self.results.read().unwrap_or_else(|e| e.into_inner());
        results
            .get(&id)
            .cloned()
            .ok_or(ClusterError::UnknownJob(id.0))
    }

    /// Drops a stored result, returning whether it existed.
    pub fn remove(&self, id: JobId) -> bool {
        let mut results = self.results.write().unwrap_or_else(|e| e.into_inner());
        results.remove(&id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
