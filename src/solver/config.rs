//! Solver configuration.
//!
//! [`SolverConfig`] holds all knobs recognized for one solve.

/// Variable-selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarStrategy {
    Mrv,
    Degree,
    Random,
}

impl VarStrategy {
    /// Unknown names silently fall back to MRV.
    pub fn from_name(name: &str) -> Self {
        match name {
            "mrv" => VarStrategy::Mrv,
            "degree" => VarStrategy::Degree,
            "random" => VarStrategy::Random,
            _ => VarStrategy::Mrv,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VarStrategy::Mrv => "mrv",
            VarStrategy::Degree => "degree",
            VarStrategy::Random => "random",
        }
    }
}

/// Value-ordering strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValStrategy {
    Lcv,
    Lexicographic,
    Random,
}

impl ValStrategy {
    /// Unknown names silently fall back to lexicographic order.
    pub fn from_name(name: &str) -> Self {
        match name {
            "lcv" => ValStrategy::Lcv,
            "lexicographic" => ValStrategy::Lexicographic,
            "random" => ValStrategy::Random,
            _ => ValStrategy::Lexicographic,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ValStrategy::Lcv => "lcv",
            ValStrategy::Lexicographic => "lexicographic",
            ValStrategy::Random => "random",
        }
    }
}

/// Configuration for one solve.
///
/// # Defaults
///
/// ```
/// use tabula::solver::config::{SolverConfig, ValStrategy, VarStrategy};
///
/// let config = SolverConfig::default();
/// assert_eq!(config.max_time, 300);
/// assert_eq!(config.var_strategy, VarStrategy::Mrv);
/// assert_eq!(config.val_strategy, ValStrategy::Lcv);
/// assert!(config.use_ac3 && config.use_forward_checking);
/// ```
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Deadline in whole seconds.
    pub max_time: u64,
    /// Stop after the first satisfying assignment.
    pub first_solution_only: bool,
    pub var_strategy: VarStrategy,
    pub val_strategy: ValStrategy,
    /// Run AC-3 once as preprocessing.
    pub use_ac3: bool,
    /// Filter unassigned neighbors after each tentative assignment.
    pub use_forward_checking: bool,
    /// Re-establish arc consistency at every search node. Only applies when
    /// `use_ac3` is on.
    pub ac3_at_each_node: bool,
    /// Emit the detailed search trace (DEBUG-level `tracing` events).
    pub verbose: bool,
    /// Fixed seed for the `random` strategies; entropy-seeded when `None`.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_time: 300,
            first_solution_only: false,
            var_strategy: VarStrategy::Mrv,
            val_strategy: ValStrategy::Lcv,
            use_ac3: true,
            use_forward_checking: true,
            ac3_at_each_node: true,
            verbose: false,
            seed: None,
        }
    }
}

impl SolverConfig {
    pub fn node_ac3_enabled(&self) -> bool {
        self.use_ac3 && self.ac3_at_each_node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_strategy_names_fall_back_to_defaults() {
        assert_eq!(VarStrategy::from_name("mrv"), VarStrategy::Mrv);
        assert_eq!(VarStrategy::from_name("degree"), VarStrategy::Degree);
        assert_eq!(VarStrategy::from_name("random"), VarStrategy::Random);
        assert_eq!(VarStrategy::from_name("dom-wdeg"), VarStrategy::Mrv);

        assert_eq!(ValStrategy::from_name("lcv"), ValStrategy::Lcv);
        assert_eq!(ValStrategy::from_name("random"), ValStrategy::Random);
        assert_eq!(
            ValStrategy::from_name("impact"),
            ValStrategy::Lexicographic
        );
    }

    #[test]
    fn node_ac3_requires_global_ac3() {
        let config = SolverConfig {
            use_ac3: false,
            ac3_at_each_node: true,
            ..SolverConfig::default()
        };
        assert!(!config.node_ac3_enabled());
    }
}
