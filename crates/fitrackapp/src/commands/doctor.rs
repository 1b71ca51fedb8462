use crate::error::Result;
use crate::model::{Collection, Log, Plan, Record, RecordId, User};
use crate::store::DataStore;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionHealth {
    pub collection: Collection,
    pub records: usize,
    /// Ids that occur more than once, ascending.
    pub duplicate_ids: Vec<RecordId>,
}

/// Read-only consistency report over all collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorReport {
    pub collections: Vec<CollectionHealth>,
    /// Logs whose `user_id` matches no registered user.
    pub orphan_logs: Vec<RecordId>,
}

impl DoctorReport {
    pub fn is_healthy(&self) -> bool {
        self.orphan_logs.is_empty()
            && self.collections.iter().all(|c| c.duplicate_ids.is_empty())
    }
}

fn inspect<R: Record>(records: &[R]) -> CollectionHealth {
    let mut seen = HashSet::new();
    let mut duplicates = BTreeSet::new();
    for r in records {
        if !seen.insert(r.id()) {
            duplicates.insert(r.id());
        }
    }

    let health = CollectionHealth {
        collection: R::COLLECTION,
        records: records.len(),
        duplicate_ids: duplicates.into_iter().collect(),
    };
    if !health.duplicate_ids.is_empty() {
        warn!(collection = %R::COLLECTION, ids = ?health.duplicate_ids, "duplicate ids");
    }
    health
}

// Missing collections count as empty; doctor must not create them.
fn load_existing<R: Record, S: DataStore>(store: &S) -> Result<Vec<R>> {
    if store.exists(R::COLLECTION) {
        store.load()
    } else {
        Ok(Vec::new())
    }
}

pub fn run<S: DataStore>(store: &S) -> Result<DoctorReport> {
    let users: Vec<User> = load_existing(store)?;
    let plans: Vec<Plan> = load_existing(store)?;
    let logs: Vec<Log> = load_existing(store)?;

    let known: HashSet<RecordId> = users.iter().map(|u| u.user_id).collect();
    let orphan_logs: Vec<RecordId> = logs
        .iter()
        .filter(|l| !known.contains(&l.user_id))
        .map(|l| l.log_id)
        .collect();
    if !orphan_logs.is_empty() {
        warn!(count = orphan_logs.len(), "logs reference unknown users");
    }

    Ok(DoctorReport {
        collections: vec![inspect(&users), inspect(&plans), inspect(&logs)],
        orphan_logs,
    })
}
