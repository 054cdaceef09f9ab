//! Generic arc-consistency propagation over the domain store.

use im::OrdSet;
use tracing::{debug, trace};

use crate::{
    instance::{CspInstance, VarId},
    solver::{domain::DomainStore, work_list::WorkList},
};

/// Outcome of an AC-3 pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consistency {
    Consistent,
    Inconsistent,
}

/// The AC-3 propagator. One instance accumulates its revision count across
/// passes so the solver can report a cumulative figure.
#[derive(Debug, Default)]
pub struct Ac3 {
    revisions: u64,
}

impl Ac3 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Successful `revise` calls so far, over every pass.
    pub fn revisions(&self) -> u64 {
        self.revisions
    }

    /// Establishes arc consistency on the current domains.
    ///
    /// On `Consistent`, every remaining value has a support in every
    /// neighbor's domain. On `Inconsistent` some domain is empty and the
    /// store has been mutated; callers wanting rollback snapshot first.
    pub fn enforce(&mut self, instance: &CspInstance, domains: &mut DomainStore) -> Consistency {
        let mut worklist = WorkList::new();
        for constraint in instance.constraints() {
            worklist.push_back(constraint.u, constraint.v);
            worklist.push_back(constraint.v, constraint.u);
        }
        debug!(arcs = worklist.len(), "starting AC-3 pass");

        while let Some((var, against)) = worklist.pop_front() {
            if self.revise(instance, domains, var, against) {
                if domains.is_empty(var) {
                    debug!(var, "domain wiped out, instance inconsistent");
                    return Consistency::Inconsistent;
                }
                for &neighbor in instance.neighbors(var) {
                    if neighbor != against {
                        worklist.push_back(neighbor, var);
                    }
                }
            }
        }

        Consistency::Consistent
    }

    /// Drops every value of `D(var)` without a support in `D(against)`.
    /// Returns whether anything was removed.
    fn revise(
        &mut self,
        instance: &CspInstance,
        domains: &mut DomainStore,
        var: VarId,
        against: VarId,
    ) -> bool {
        let kept: OrdSet<i64> = domains
            .domain(var)
            .iter()
            .filter(|&&x| {
                domains
                    .domain(against)
                    .iter()
                    .any(|&y| instance.is_pair_allowed(var, x, against, y))
            })
            .copied()
            .collect();

        if kept.len() == domains.size(var) {
            return false;
        }

        trace!(var, against, kept = kept.len(), "revised domain");
        domains.replace_domain(var, kept);
        self.revisions += 1;
        true
    }
}
