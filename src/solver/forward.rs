use im::OrdSet;
use tracing::trace;

use crate::{
    instance::{CspInstance, VarId},
    solver::{domain::DomainStore, engine::Assignment},
};

/// Single-step propagation after the tentative assignment `var = value`:
/// every unassigned neighbor's domain is filtered down to the values
/// compatible with it. Returns `false` as soon as a neighbor's domain would
/// become empty.
///
/// Domain mutations are not undone here; the caller snapshots beforehand and
/// restores on failure.
pub fn forward_check(
    instance: &CspInstance,
    domains: &mut DomainStore,
    assignment: &Assignment,
    var: VarId,
    value: i64,
) -> bool {
    for &neighbor in instance.neighbors(var) {
        if assignment.contains_key(&neighbor) {
            continue;
        }

        let filtered: OrdSet<i64> = domains
            .domain(neighbor)
            .iter()
            .filter(|&&y| instance.is_pair_allowed(var, value, neighbor, y))
            .copied()
            .collect();

        if filtered.is_empty() {
            trace!(var, value, neighbor, "forward check wiped out a domain");
            return false;
        }
        domains.replace_domain(neighbor, filtered);
    }
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::problems::successor_chain;

    #[test]
    fn filters_unassigned_neighbors_to_supported_values() {
        let instance = successor_chain(3, 0, 5);
        let mut domains = DomainStore::from_instance(&instance);
        let assignment = Assignment::new();

        assert!(forward_check(&instance, &mut domains, &assignment, 1, 3));
        assert_eq!(
            domains.domain(0).iter().copied().collect::<Vec<_>>(),
            vec![2]
        );
        assert_eq!(
            domains.domain(2).iter().copied().collect::<Vec<_>>(),
            vec![4]
        );
        // The assigned variable's own domain is untouched.
        assert_eq!(domains.size(1), 6);
    }

    #[test]
    fn fails_when_a_neighbor_runs_dry() {
        let instance = successor_chain(2, 0, 5);
        let mut domains = DomainStore::from_instance(&instance);
        let assignment = Assignment::new();

        // 5 has no successor inside 0..=5.
        assert!(!forward_check(&instance, &mut domains, &assignment, 0, 5));
    }

    #[test]
    fn assigned_neighbors_are_left_alone() {
        let instance = successor_chain(3, 0, 5);
        let mut domains = DomainStore::from_instance(&instance);
        let mut assignment = Assignment::new();
        assignment.insert(0, 0);

        assert!(forward_check(&instance, &mut domains, &assignment, 1, 3));
        assert_eq!(domains.size(0), 6);
    }
}
