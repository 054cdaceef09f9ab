//! Mutable per-variable domains with a stack-discipline snapshot/restore
//! mechanism.

use im::OrdSet;

use crate::instance::{CspInstance, VarId};

/// The set of values every variable may still take.
///
/// Each domain is an [`im::OrdSet`], so iteration is always ascending and a
/// full-state [`snapshot`](DomainStore::snapshot) is a vector of cheap
/// structurally-shared clones rather than a deep copy.
#[derive(Debug, Clone)]
pub struct DomainStore {
    domains: Vec<OrdSet<i64>>,
}

/// An opaque full copy of every domain, taken on entering a search node and
/// consumed by [`DomainStore::restore`] on leaving it.
#[derive(Debug, Clone)]
pub struct DomainSnapshot {
    domains: Vec<OrdSet<i64>>,
}

impl DomainStore {
    /// Initializes every domain to its full interval `{min..=max}`.
    pub fn from_instance(instance: &CspInstance) -> Self {
        let domains = (0..instance.num_variables())
            .map(|var| {
                let (min, max) = instance.initial_domain(var as VarId);
                (min..=max).collect()
            })
            .collect();
        Self { domains }
    }

    pub fn num_variables(&self) -> usize {
        self.domains.len()
    }

    pub fn domain(&self, var: VarId) -> &OrdSet<i64> {
        &self.domains[var as usize]
    }

    pub fn size(&self, var: VarId) -> usize {
        self.domains[var as usize].len()
    }

    pub fn is_empty(&self, var: VarId) -> bool {
        self.domains[var as usize].is_empty()
    }

    /// Removes one value; a no-op when the value is absent.
    pub fn remove_value(&mut self, var: VarId, value: i64) {
        self.domains[var as usize].remove(&value);
    }

    pub fn replace_domain(&mut self, var: VarId, values: OrdSet<i64>) {
        self.domains[var as usize] = values;
    }

    pub fn snapshot(&self) -> DomainSnapshot {
        DomainSnapshot {
            domains: self.domains.clone(),
        }
    }

    /// Restores every domain to the snapshotted state. Idempotent.
    pub fn restore(&mut self, snapshot: &DomainSnapshot) {
        self.domains = snapshot.domains.clone();
    }
}
