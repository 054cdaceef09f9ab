use rand::{rngs::StdRng, seq::SliceRandom};

use crate::{instance::VarId, solver::heuristics::SearchView};

/// A strategy that orders the candidate values for a chosen variable, over
/// its current domain.
pub trait ValueOrderingHeuristic {
    fn order_values(&mut self, var: VarId, view: &SearchView<'_>) -> Vec<i64>;
}

/// Ascending numeric order. The domain store already iterates in order.
pub struct Lexicographic;

impl ValueOrderingHeuristic for Lexicographic {
    fn order_values(&mut self, var: VarId, view: &SearchView<'_>) -> Vec<i64> {
        view.domains.domain(var).iter().copied().collect()
    }
}

/// Least-constraining value: fewest conflicts with unassigned neighbors
/// first. The sort is stable, so equally constraining values keep their
/// lexicographic order.
pub struct LeastConstraining;

impl ValueOrderingHeuristic for LeastConstraining {
    fn order_values(&mut self, var: VarId, view: &SearchView<'_>) -> Vec<i64> {
        let mut values: Vec<i64> = view.domains.domain(var).iter().copied().collect();
        values.sort_by_key(|&value| view.conflict_count(var, value));
        values
    }
}

/// Uniform shuffle of the current domain.
pub struct RandomValues {
    rng: StdRng,
}

impl RandomValues {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl ValueOrderingHeuristic for RandomValues {
    fn order_values(&mut self, var: VarId, view: &SearchView<'_>) -> Vec<i64> {
        let mut values: Vec<i64> = view.domains.domain(var).iter().copied().collect();
        values.shuffle(&mut self.rng);
        values
    }
}
