//! Tabula is a finite-domain solver for binary extensional constraint
//! satisfaction problems.
//!
//! An instance is a set of integer variables with interval domains plus a
//! list of binary constraints, each enumerating its allowed value pairs. The
//! solver preprocesses with AC-3, then runs chronological backtracking with
//! forward checking and optional arc consistency at every node, guided by
//! pluggable variable-selection (`mrv`, `degree`, `random`) and
//! value-ordering (`lcv`, `lexicographic`, `random`) heuristics. It returns
//! either the first satisfying assignment or all of them, within a time
//! budget.
//!
//! # Example: two variables that must differ
//!
//! ```
//! use tabula::instance::{CspInstance, TableConstraint};
//! use tabula::solver::config::SolverConfig;
//! use tabula::solver::engine::{CspSolver, SolveStatus};
//!
//! // Both variables range over {0, 1}; the allowed pairs force them apart.
//! let instance = CspInstance::new(
//!     vec![(0, 1), (0, 1)],
//!     vec![TableConstraint {
//!         u: 0,
//!         v: 1,
//!         allowed: vec![(0, 1), (1, 0)],
//!     }],
//! );
//!
//! let report = CspSolver::new(instance, SolverConfig::default()).solve();
//! assert_eq!(report.status, SolveStatus::AllFound);
//! assert_eq!(report.solutions.len(), 2);
//! ```
//!
//! Instances are usually read from the textual format understood by
//! [`io::parser`] and results written back through [`io::writer`]; the
//! `tabula` binary wires the two around the solver.

pub mod error;
pub mod instance;
pub mod io;
pub mod problems;
pub mod solver;
