//! Immutable description of a CSP instance: variables with interval domains
//! and binary extensional constraints.

use std::collections::{hash_map::Entry, HashMap, HashSet};

/// A numeric identifier for a single variable in the constraint problem.
pub type VarId = u32;

/// A binary constraint given in extension: the ordered endpoint pair and the
/// explicit list of allowed value pairs. An empty list is a valid,
/// unsatisfiable relation.
#[derive(Debug, Clone)]
pub struct TableConstraint {
    pub u: VarId,
    pub v: VarId,
    pub allowed: Vec<(i64, i64)>,
}

/// A parsed problem, shared read-only by every solver component.
///
/// Construction precomputes two indexes: the neighborhood of each variable
/// (sorted, deduplicated, symmetric) and a hash index from the ordered
/// variable pair to its allowed value pairs, giving O(1)
/// [`is_pair_allowed`](CspInstance::is_pair_allowed) lookups.
///
/// Allowed pairs are directional: a stored pair `(a, b)` for a constraint
/// `(u, v)` permits `u = a, v = b` and nothing else. Queries with the
/// endpoints swapped are re-oriented before the lookup, never double-matched.
/// When several constraint rows cover the same variable pair they conjoin,
/// so their pair sets are intersected at build time.
#[derive(Debug, Clone)]
pub struct CspInstance {
    num_variables: usize,
    domains: Vec<(i64, i64)>,
    constraints: Vec<TableConstraint>,
    neighbors: Vec<Vec<VarId>>,
    pair_index: HashMap<(VarId, VarId), HashSet<(i64, i64)>>,
}

impl CspInstance {
    /// Builds an instance from interval domains (one `(min, max)` per
    /// variable) and a constraint list. Endpoints must be distinct, in-range
    /// variable ids; the parser enforces this for file input.
    pub fn new(domains: Vec<(i64, i64)>, constraints: Vec<TableConstraint>) -> Self {
        let num_variables = domains.len();
        let mut neighbors: Vec<Vec<VarId>> = vec![Vec::new(); num_variables];
        let mut pair_index: HashMap<(VarId, VarId), HashSet<(i64, i64)>> = HashMap::new();

        for constraint in &constraints {
            neighbors[constraint.u as usize].push(constraint.v);
            neighbors[constraint.v as usize].push(constraint.u);

            // Normalize to lower-id-first orientation before indexing.
            let key = (
                constraint.u.min(constraint.v),
                constraint.u.max(constraint.v),
            );
            let oriented: HashSet<(i64, i64)> = constraint
                .allowed
                .iter()
                .map(|&(a, b)| {
                    if constraint.u < constraint.v {
                        (a, b)
                    } else {
                        (b, a)
                    }
                })
                .collect();

            match pair_index.entry(key) {
                Entry::Occupied(mut entry) => {
                    let merged = entry.get().intersection(&oriented).copied().collect();
                    *entry.get_mut() = merged;
                }
                Entry::Vacant(entry) => {
                    entry.insert(oriented);
                }
            }
        }

        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }

        Self {
            num_variables,
            domains,
            constraints,
            neighbors,
            pair_index,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn has_variable(&self, var: VarId) -> bool {
        (var as usize) < self.num_variables
    }

    /// The `(min, max)` interval the variable's domain started from.
    pub fn initial_domain(&self, var: VarId) -> (i64, i64) {
        self.domains[var as usize]
    }

    /// Variables sharing at least one constraint with `var`, ascending.
    pub fn neighbors(&self, var: VarId) -> &[VarId] {
        &self.neighbors[var as usize]
    }

    pub fn constraints(&self) -> &[TableConstraint] {
        &self.constraints
    }

    /// Whether the assignment `u = x, v = y` satisfies every constraint
    /// between `u` and `v`. Unconstrained pairs are always allowed.
    pub fn is_pair_allowed(&self, u: VarId, x: i64, v: VarId, y: i64) -> bool {
        let key = (u.min(v), u.max(v));
        match self.pair_index.get(&key) {
            Some(allowed) => {
                let oriented = if u < v { (x, y) } else { (y, x) };
                allowed.contains(&oriented)
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn instance_with(constraints: Vec<TableConstraint>) -> CspInstance {
        CspInstance::new(vec![(0, 2); 3], constraints)
    }

    #[test]
    fn neighbors_are_sorted_and_deduplicated() {
        let instance = instance_with(vec![
            TableConstraint {
                u: 2,
                v: 0,
                allowed: vec![(0, 0)],
            },
            TableConstraint {
                u: 0,
                v: 1,
                allowed: vec![(0, 0)],
            },
            TableConstraint {
                u: 1,
                v: 0,
                allowed: vec![(1, 1)],
            },
        ]);

        assert_eq!(instance.neighbors(0), &[1, 2]);
        assert_eq!(instance.neighbors(1), &[0]);
        assert_eq!(instance.neighbors(2), &[0]);
    }

    #[test]
    fn pair_lookup_honors_constraint_orientation() {
        let instance = instance_with(vec![TableConstraint {
            u: 0,
            v: 1,
            allowed: vec![(1, 2)],
        }]);

        assert!(instance.is_pair_allowed(0, 1, 1, 2));
        // Same query through the reversed arc.
        assert!(instance.is_pair_allowed(1, 2, 0, 1));
        // The mirrored value pair is not implicitly allowed.
        assert!(!instance.is_pair_allowed(0, 2, 1, 1));
        assert!(!instance.is_pair_allowed(1, 1, 0, 2));
    }

    #[test]
    fn reversed_endpoints_are_normalized_into_one_relation() {
        let instance = instance_with(vec![TableConstraint {
            u: 1,
            v: 0,
            allowed: vec![(2, 1)],
        }]);

        // Stored as 1 = 2, 0 = 1 regardless of declaration order.
        assert!(instance.is_pair_allowed(0, 1, 1, 2));
        assert!(!instance.is_pair_allowed(0, 2, 1, 1));
    }

    #[test]
    fn repeated_constraint_rows_conjoin() {
        let instance = instance_with(vec![
            TableConstraint {
                u: 0,
                v: 1,
                allowed: vec![(0, 1), (1, 2)],
            },
            TableConstraint {
                u: 1,
                v: 0,
                allowed: vec![(2, 1), (2, 0)],
            },
        ]);

        assert!(instance.is_pair_allowed(0, 1, 1, 2));
        assert!(!instance.is_pair_allowed(0, 0, 1, 1));
        assert!(!instance.is_pair_allowed(0, 0, 1, 2));
    }

    #[test]
    fn unconstrained_pairs_are_allowed() {
        let instance = instance_with(vec![TableConstraint {
            u: 0,
            v: 1,
            allowed: vec![(0, 0)],
        }]);

        assert!(instance.is_pair_allowed(1, 2, 2, 0));
    }
}
