//! The escalation ledger: at most one [`EscalationRecord`] per hazard, ever.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;

use shield_core::{EscalationRecord, HazardId};

/// Durable store of escalation records.
///
/// `try_claim` must be atomic: when several callers race to claim the same
/// hazard exactly one of them observes `true`.  A database-backed ledger
/// gets this from a unique constraint on the hazard id.
pub trait EscalationLedger: Send + Sync {
    /// Insert `record` unless a record for `record.hazard` already exists.
    /// Returns `true` if this call inserted it.
    fn try_claim(&self, record: EscalationRecord) -> bool;

    /// Set the `notified` flag on an existing record.  No-op if absent.
    fn mark_notified(&self, hazard: HazardId, notified: bool);

    fn get(&self, hazard: HazardId) -> Option<EscalationRecord>;
}

/// In-process ledger guarded by a mutex.
#[derive(Default)]
pub struct MemoryLedger {
    records: Mutex<FxHashMap<HazardId, EscalationRecord>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic in another holder cannot leave the map half-written: every
    // mutation is a single insert or field store.
    fn lock(&self) -> MutexGuard<'_, FxHashMap<HazardId, EscalationRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// All records, ordered by hazard id.
    pub fn records(&self) -> Vec<EscalationRecord> {
        let mut out: Vec<EscalationRecord> = self.lock().values().cloned().collect();
        out.sort_unstable_by_key(|r| r.hazard);
        out
    }
}

impl EscalationLedger for MemoryLedger {
    fn try_claim(&self, record: EscalationRecord) -> bool {
        let mut map = self.lock();
        if map.contains_key(&record.hazard) {
            return false;
        }
        map.insert(record.hazard, record);
        true
    }

    fn mark_notified(&self, hazard: HazardId, notified: bool) {
        if let Some(r) = self.lock().get_mut(&hazard) {
            r.notified = notified;
        }
    }

    fn get(&self, hazard: HazardId) -> Option<EscalationRecord> {
        self.lock().get(&hazard).cloned()
    }
}
