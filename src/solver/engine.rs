//! The search engine: chronological backtracking with forward checking and
//! optional per-node arc consistency.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::{
    instance::{CspInstance, VarId},
    solver::{
        ac3::{Ac3, Consistency},
        config::SolverConfig,
        domain::DomainStore,
        forward::forward_check,
        heuristics::{Heuristics, SearchView},
        stats::SearchStats,
        validator,
    },
};

/// Partial mapping from variable to value along the current search path.
pub type Assignment = BTreeMap<VarId, i64>;

/// A complete assignment satisfying every constraint.
pub type Solution = BTreeMap<VarId, i64>;

/// Terminal state of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Stopped at the first satisfying assignment.
    FirstFound,
    /// Exhausted the tree with at least one solution.
    AllFound,
    /// Exhausted the tree without finding any solution.
    NoSolution,
    /// Deadline hit; the solution list may be partial.
    Timeout,
    /// Preprocessing AC-3 emptied a domain.
    InconsistentByAc3,
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SolveStatus::FirstFound => "First solution found",
            SolveStatus::AllFound => "All solutions found",
            SolveStatus::NoSolution => "No solution (full exploration)",
            SolveStatus::Timeout => "Timeout",
            SolveStatus::InconsistentByAc3 => "Inconsistent (AC-3)",
        };
        f.write_str(label)
    }
}

/// Everything one solve produces.
#[derive(Debug)]
pub struct SolveReport {
    pub status: SolveStatus,
    pub solutions: Vec<Solution>,
    pub stats: SearchStats,
    pub duration: Duration,
}

/// Depth-first backtracking solver over a [`CspInstance`].
///
/// The solver owns all mutable search state: the domain store, the partial
/// assignment and the accumulated solution list. Heuristics observe that
/// state through a read-only [`SearchView`] one call at a time.
pub struct CspSolver {
    instance: CspInstance,
    config: SolverConfig,
    domains: DomainStore,
    assignment: Assignment,
    solutions: Vec<Solution>,
    heuristics: Heuristics,
    ac3: Ac3,
    stats: SearchStats,
    started: Instant,
    deadline: Duration,
    timed_out: bool,
}

impl CspSolver {
    pub fn new(instance: CspInstance, config: SolverConfig) -> Self {
        let domains = DomainStore::from_instance(&instance);
        let heuristics = Heuristics::new(config.var_strategy, config.val_strategy, config.seed);
        let deadline = Duration::from_secs(config.max_time);
        Self {
            instance,
            config,
            domains,
            assignment: Assignment::new(),
            solutions: Vec::new(),
            heuristics,
            ac3: Ac3::new(),
            stats: SearchStats::default(),
            started: Instant::now(),
            deadline,
            timed_out: false,
        }
    }

    /// Runs preprocessing and the backtracking search until the tree is
    /// exhausted, the deadline passes, or (with `first_solution_only`) the
    /// first solution is recorded.
    pub fn solve(mut self) -> SolveReport {
        self.started = Instant::now();

        if self.config.use_ac3 {
            debug!("running AC-3 preprocessing");
            if self.ac3.enforce(&self.instance, &mut self.domains) == Consistency::Inconsistent {
                self.stats.revisions = self.ac3.revisions();
                return SolveReport {
                    status: SolveStatus::InconsistentByAc3,
                    solutions: Vec::new(),
                    stats: self.stats,
                    duration: self.started.elapsed(),
                };
            }
        }

        self.search(0);
        self.stats.revisions = self.ac3.revisions();

        let status = if self.timed_out {
            SolveStatus::Timeout
        } else if self.solutions.is_empty() {
            SolveStatus::NoSolution
        } else if self.config.first_solution_only {
            SolveStatus::FirstFound
        } else {
            SolveStatus::AllFound
        };

        SolveReport {
            status,
            solutions: self.solutions,
            stats: self.stats,
            duration: self.started.elapsed(),
        }
    }

    /// One search node. The boolean return only distinguishes "stop, the
    /// first solution is sufficient" from "continue at the caller"; finding
    /// a solution in all-solutions mode never stops the search.
    fn search(&mut self, depth: usize) -> bool {
        if self.started.elapsed() >= self.deadline {
            debug!(depth, "time limit reached");
            self.timed_out = true;
            return false;
        }

        if self.assignment.len() == self.instance.num_variables() {
            debug_assert!(
                validator::validate(&self.instance, &self.assignment),
                "search produced an invalid solution"
            );
            debug!(depth, nodes = self.stats.nodes_explored, "solution found");
            self.solutions.push(self.assignment.clone());
            return self.config.first_solution_only;
        }

        let node_snapshot = self.domains.snapshot();

        if self.config.node_ac3_enabled()
            && self.ac3.enforce(&self.instance, &mut self.domains) == Consistency::Inconsistent
        {
            self.domains.restore(&node_snapshot);
            return false;
        }

        let view = SearchView {
            instance: &self.instance,
            domains: &self.domains,
            assignment: &self.assignment,
        };
        let Some(var) = self.heuristics.variable.select_variable(&view) else {
            // Unreachable: an incomplete assignment always leaves a
            // variable to select.
            self.domains.restore(&node_snapshot);
            return false;
        };
        debug_assert!(
            !self.assignment.contains_key(&var),
            "selected variable is already assigned"
        );
        let values = self.heuristics.value.order_values(var, &view);
        debug!(depth, var, domain = self.domains.size(var), "branching");

        for value in values {
            if self.timed_out {
                break;
            }
            self.stats.nodes_explored += 1;

            if !self.consistent_with_assignment(var, value) {
                continue;
            }

            let fc_snapshot = if self.config.use_forward_checking {
                let snapshot = self.domains.snapshot();
                if !forward_check(
                    &self.instance,
                    &mut self.domains,
                    &self.assignment,
                    var,
                    value,
                ) {
                    self.domains.restore(&snapshot);
                    continue;
                }
                Some(snapshot)
            } else {
                None
            };

            debug!(depth, var, value, "trying assignment");
            self.assignment.insert(var, value);

            if self.search(depth + 1) {
                return true;
            }

            self.assignment.remove(&var);
            if let Some(snapshot) = &fc_snapshot {
                self.domains.restore(snapshot);
            }
            self.stats.backtracks += 1;
        }

        self.domains.restore(&node_snapshot);
        false
    }

    /// True when `var = value` violates no constraint with an
    /// already-assigned neighbor.
    fn consistent_with_assignment(&self, var: VarId, value: i64) -> bool {
        self.instance.neighbors(var).iter().all(|&neighbor| {
            self.assignment
                .get(&neighbor)
                .map_or(true, |&y| self.instance.is_pair_allowed(var, value, neighbor, y))
        })
    }
}
