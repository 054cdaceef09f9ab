//! Variable-selection and value-ordering strategies.

pub mod value;
pub mod variable;

use rand::{rngs::StdRng, SeedableRng};

use crate::{
    instance::{CspInstance, VarId},
    solver::{
        config::{ValStrategy, VarStrategy},
        domain::DomainStore,
        engine::Assignment,
    },
};

use self::{
    value::{LeastConstraining, Lexicographic, RandomValues, ValueOrderingHeuristic},
    variable::{MaxDegree, MinRemainingValues, RandomVariable, VariableSelectionHeuristic},
};

/// Read-only view of the search state, borrowed for the duration of a single
/// heuristic call.
pub struct SearchView<'a> {
    pub instance: &'a CspInstance,
    pub domains: &'a DomainStore,
    pub assignment: &'a Assignment,
}

impl SearchView<'_> {
    /// Variables not yet assigned on the current path, ascending.
    pub fn unassigned(&self) -> impl Iterator<Item = VarId> + '_ {
        (0..self.instance.num_variables() as VarId)
            .filter(|var| !self.assignment.contains_key(var))
    }

    /// Number of `(neighbor, neighbor_value)` pairs over unassigned
    /// neighbors that the tentative assignment `var = value` would rule out.
    pub fn conflict_count(&self, var: VarId, value: i64) -> usize {
        self.instance
            .neighbors(var)
            .iter()
            .filter(|&&neighbor| !self.assignment.contains_key(&neighbor))
            .map(|&neighbor| {
                self.domains
                    .domain(neighbor)
                    .iter()
                    .filter(|&&y| !self.instance.is_pair_allowed(var, value, neighbor, y))
                    .count()
            })
            .sum()
    }
}

/// The strategy objects bound once per solve.
///
/// The `random` variants own a [`StdRng`] seeded here, from the configured
/// seed when one is given and from entropy otherwise.
pub struct Heuristics {
    pub variable: Box<dyn VariableSelectionHeuristic>,
    pub value: Box<dyn ValueOrderingHeuristic>,
}

impl Heuristics {
    pub fn new(var_strategy: VarStrategy, val_strategy: ValStrategy, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let variable: Box<dyn VariableSelectionHeuristic> = match var_strategy {
            VarStrategy::Mrv => Box::new(MinRemainingValues),
            VarStrategy::Degree => Box::new(MaxDegree),
            VarStrategy::Random => Box::new(RandomVariable::new(rng.clone())),
        };
        let value: Box<dyn ValueOrderingHeuristic> = match val_strategy {
            ValStrategy::Lcv => Box::new(LeastConstraining),
            ValStrategy::Lexicographic => Box::new(Lexicographic),
            ValStrategy::Random => Box::new(RandomValues::new(rng)),
        };

        Self { variable, value }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::instance::TableConstraint;

    /// Three variables over `0..=2` with constraints 0-1 and 0-2.
    pub fn small_instance() -> CspInstance {
        let all_pairs: Vec<(i64, i64)> = (0..3)
            .flat_map(|a| (0..3).map(move |b| (a, b)))
            .collect();
        CspInstance::new(
            vec![(0, 2); 3],
            vec![
                TableConstraint {
                    u: 0,
                    v: 1,
                    allowed: all_pairs.clone(),
                },
                TableConstraint {
                    u: 0,
                    v: 2,
                    allowed: all_pairs,
                },
            ],
        )
    }
}
