//! Solution-file writer.
//!
//! The file is written once, on clean completion of a solve, even when the
//! status is `Timeout` with partial results. Every metadata line is
//! `#`-prefixed so solution files can be fed back through tooling that skips
//! comments.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use chrono::Local;

use crate::{
    error::{Result, SolverError},
    instance::CspInstance,
    solver::{config::SolverConfig, engine::SolveReport, stats::format_duration},
};

const BANNER: &str = "\
# ┌─────────────────────────────────────────────┐
# │              TABULA CSP SOLVER              │
# └─────────────────────────────────────────────┘";

fn enabled(flag: bool) -> &'static str {
    if flag {
        "Enabled"
    } else {
        "Disabled"
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

pub fn write_solutions(
    path: impl AsRef<Path>,
    instance: &CspInstance,
    config: &SolverConfig,
    report: &SolveReport,
) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(SolverError::Io)?;
    let mut out = BufWriter::new(file);
    render_solutions(&mut out, instance, config, report)?;
    out.flush()?;
    Ok(())
}

/// Renders the solution file to any writer; split out so tests can render
/// into a buffer.
pub fn render_solutions<W: Write>(
    out: &mut W,
    instance: &CspInstance,
    config: &SolverConfig,
    report: &SolveReport,
) -> Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "# Generated on: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out, "# Variables: {}", instance.num_variables())?;
    writeln!(out, "# Constraints: {}", instance.constraints().len())?;
    writeln!(out, "# Solutions found: {}", report.solutions.len())?;
    writeln!(out, "# Resolution status: {}", report.status)?;
    writeln!(out, "# Nodes explored: {}", report.stats.nodes_explored)?;
    writeln!(out, "# Backtracks: {}", report.stats.backtracks)?;
    writeln!(out, "# Solving time: {}", format_duration(report.duration))?;
    writeln!(out, "# Variable strategy: {}", config.var_strategy.name())?;
    writeln!(out, "# Value strategy: {}", config.val_strategy.name())?;
    writeln!(out, "# AC-3: {}", enabled(config.use_ac3))?;
    writeln!(
        out,
        "# Forward checking: {}",
        enabled(config.use_forward_checking)
    )?;

    if config.verbose {
        writeln!(out, "#")?;
        writeln!(out, "# Maximum time limit: {} seconds", config.max_time)?;
        writeln!(
            out,
            "# First solution only: {}",
            yes_no(config.first_solution_only)
        )?;
        writeln!(
            out,
            "# AC-3 at each node: {}",
            yes_no(config.node_ac3_enabled())
        )?;
    }
    writeln!(out, "#")?;

    if report.solutions.is_empty() {
        writeln!(out, "# No solution found")?;
        return Ok(());
    }

    for (index, solution) in report.solutions.iter().enumerate() {
        writeln!(out, "# Solution {}", index + 1)?;
        let line = solution
            .iter()
            .map(|(var, value)| format!("{var}={value}"))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{line}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        problems::not_equal_clique,
        solver::{
            engine::{CspSolver, SolveStatus},
            stats::SearchStats,
        },
    };

    fn render(report: &SolveReport, config: &SolverConfig, instance: &CspInstance) -> String {
        let mut buffer = Vec::new();
        render_solutions(&mut buffer, instance, config, report).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn lists_each_solution_in_ascending_variable_order() {
        let instance = not_equal_clique(3, 0, 2);
        let config = SolverConfig::default();
        let report = CspSolver::new(instance.clone(), config.clone()).solve();

        let text = render(&report, &config, &instance);
        assert!(text.contains("# Resolution status: All solutions found"));
        assert!(text.contains("# Solutions found: 6"));
        assert!(text.contains("# Solution 1"));
        assert!(text.contains("0=0 1=1 2=2"));
        assert!(text.contains("# Solution 6"));
    }

    #[test]
    fn reports_when_no_solution_exists() {
        let instance = not_equal_clique(2, 0, 0);
        let config = SolverConfig::default();
        let report = SolveReport {
            status: SolveStatus::InconsistentByAc3,
            solutions: Vec::new(),
            stats: SearchStats::default(),
            duration: Duration::from_millis(5),
        };

        let text = render(&report, &config, &instance);
        assert!(text.contains("# Resolution status: Inconsistent (AC-3)"));
        assert!(text.contains("# No solution found"));
        assert!(text.contains("# Solving time: 5ms"));
    }

    #[test]
    fn verbose_mode_adds_the_flag_details() {
        let instance = not_equal_clique(2, 0, 1);
        let config = SolverConfig {
            verbose: true,
            ..SolverConfig::default()
        };
        let report = CspSolver::new(instance.clone(), config.clone()).solve();

        let text = render(&report, &config, &instance);
        assert!(text.contains("# Maximum time limit: 300 seconds"));
        assert!(text.contains("# First solution only: No"));
        assert!(text.contains("# AC-3 at each node: Yes"));
    }
}
