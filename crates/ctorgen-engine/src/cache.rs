//! Incrementality cache.
//!
//! Memoizes the per-type outcome keyed by a fingerprint of everything that
//! can influence that type's output: its own snapshot, every ancestor
//! snapshot reachable through the base chain, and the pass options. Unrelated
//! edits elsewhere in a large compilation therefore never force
//! recomputation of an unchanged type.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex};

use ctorgen_core::Diagnostic;
use ctorgen_emit::GeneratedUnit;
use ctorgen_model::{Database, TypeId};

use crate::options::GeneratorOptions;

/// Outcome of one per-type computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum TypeOutcome {
    Unit(GeneratedUnit),
    /// Not a candidate, or no constructor needed.
    Skipped,
    /// Generation blocked for this type only.
    Blocked(Diagnostic),
}

#[derive(Debug)]
struct CacheEntry {
    fingerprint: u64,
    outcome: TypeOutcome,
}

/// Compute-once per-type cache.
///
/// Entries are immutable once written; when two computations race on the same
/// key the first writer wins. Computations are pure over the snapshot, so any
/// winner is acceptable.
#[derive(Debug, Default)]
pub(crate) struct UnitCache {
    entries: Mutex<HashMap<TypeId, Arc<CacheEntry>>>,
}

impl UnitCache {
    pub fn lookup(&self, id: TypeId, fingerprint: u64) -> Option<TypeOutcome> {
        let entries = self.entries.lock().expect("unit cache mutex poisoned");
        entries
            .get(&id)
            .filter(|entry| entry.fingerprint == fingerprint)
            .map(|entry| entry.outcome.clone())
    }

    /// Store a freshly computed outcome, returning the winning entry.
    pub fn store(&self, id: TypeId, fingerprint: u64, outcome: TypeOutcome) -> TypeOutcome {
        let mut entries = self.entries.lock().expect("unit cache mutex poisoned");
        match entries.get(&id) {
            Some(existing) if existing.fingerprint == fingerprint => existing.outcome.clone(),
            _ => {
                entries.insert(
                    id,
                    Arc::new(CacheEntry {
                        fingerprint,
                        outcome: outcome.clone(),
                    }),
                );
                outcome
            }
        }
    }
}

/// Bound on the base-chain walk; host-broken cycles are handled by the
/// resolver, the fingerprint just has to terminate.
const MAX_CHAIN_DEPTH: u32 = 64;

pub(crate) fn type_fingerprint(
    db: &dyn Database,
    id: TypeId,
    options: &GeneratorOptions,
) -> u64 {
    let mut hasher = DefaultHasher::new();
    options.hash(&mut hasher);

    let mut current = Some(id);
    let mut depth = 0u32;
    while let Some(id) = current {
        let data = db.type_data(id);
        data.hash(&mut hasher);
        depth += 1;
        if depth > MAX_CHAIN_DEPTH {
            break;
        }
        current = data
            .base_type
            .as_deref()
            .and_then(|name| db.type_by_name(name));
    }
    hasher.finish()
}
