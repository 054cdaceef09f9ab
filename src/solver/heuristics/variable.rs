use rand::{rngs::StdRng, seq::SliceRandom};

use crate::{instance::VarId, solver::heuristics::SearchView};

/// A strategy that picks the next variable to branch on, over unassigned
/// variables only.
///
/// Returns `None` exactly when every variable is assigned; the engine treats
/// that as a complete assignment.
pub trait VariableSelectionHeuristic {
    fn select_variable(&mut self, view: &SearchView<'_>) -> Option<VarId>;
}

/// Minimum remaining values: the smallest current domain first. A
/// "fail-first" strategy, aiming at the most constrained part of the problem
/// early. Ties go to the lowest variable id.
pub struct MinRemainingValues;

impl VariableSelectionHeuristic for MinRemainingValues {
    fn select_variable(&mut self, view: &SearchView<'_>) -> Option<VarId> {
        let mut selected = None;
        let mut smallest = usize::MAX;
        for var in view.unassigned() {
            let size = view.domains.size(var);
            if size < smallest {
                smallest = size;
                selected = Some(var);
            }
        }
        selected
    }
}

/// Maximum degree: the variable constrained with the most neighbors first.
/// Ties go to the lowest variable id.
pub struct MaxDegree;

impl VariableSelectionHeuristic for MaxDegree {
    fn select_variable(&mut self, view: &SearchView<'_>) -> Option<VarId> {
        let mut selected = None;
        let mut largest: Option<usize> = None;
        for var in view.unassigned() {
            let degree = view.instance.neighbors(var).len();
            if largest.map_or(true, |best| degree > best) {
                largest = Some(degree);
                selected = Some(var);
            }
        }
        selected
    }
}

/// Uniform pick among the unassigned variables.
pub struct RandomVariable {
    rng: StdRng,
}

impl RandomVariable {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl VariableSelectionHeuristic for RandomVariable {
    fn select_variable(&mut self, view: &SearchView<'_>) -> Option<VarId> {
        let unassigned: Vec<VarId> = view.unassigned().collect();
        unassigned.choose(&mut self.rng).copied()
    }
}
