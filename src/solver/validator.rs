use tracing::error;

use crate::{instance::CspInstance, solver::engine::Assignment};

/// Re-checks a complete assignment against the whole instance: the size is
/// `N`, every value lies in its variable's initial interval, and every
/// constraint holds.
///
/// The engine runs this as a debug assertion right before recording a
/// solution. A failure here is a solver bug, never a user-visible error.
pub fn validate(instance: &CspInstance, assignment: &Assignment) -> bool {
    if assignment.len() != instance.num_variables() {
        error!(
            assigned = assignment.len(),
            expected = instance.num_variables(),
            "incomplete solution"
        );
        return false;
    }

    for (&var, &value) in assignment {
        if !instance.has_variable(var) {
            error!(var, "assigned variable does not exist");
            return false;
        }
        let (min, max) = instance.initial_domain(var);
        if value < min || value > max {
            error!(var, value, min, max, "value outside the initial interval");
            return false;
        }
    }

    for constraint in instance.constraints() {
        let x = assignment[&constraint.u];
        let y = assignment[&constraint.v];
        if !instance.is_pair_allowed(constraint.u, x, constraint.v, y) {
            error!(
                u = constraint.u,
                x,
                v = constraint.v,
                y,
                "constraint violated in candidate solution"
            );
            return false;
        }
    }

    true
}
