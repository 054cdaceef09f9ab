use std::time::Duration;

use prettytable::{Cell, Row, Table};

use crate::solver::engine::SolveReport;

/// Counters maintained during one solve.
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchStats {
    /// Values tried at search nodes, counted before consistency pruning.
    pub nodes_explored: u64,
    /// Value-level undos.
    pub backtracks: u64,
    /// Successful AC-3 revise calls, cumulative over every pass.
    pub revisions: u64,
}

/// Formats a duration the way the solution file reports it: `250ms`,
/// `12.3s`, `4m2s`.
pub fn format_duration(duration: Duration) -> String {
    let ms = duration.as_millis();
    if ms < 1_000 {
        format!("{ms}ms")
    } else if ms < 60_000 {
        format!("{}.{}s", ms / 1_000, (ms % 1_000) / 100)
    } else {
        format!("{}m{}s", ms / 60_000, (ms % 60_000) / 1_000)
    }
}

pub fn render_stats_table(report: &SolveReport) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Resolution status"),
        Cell::new(&report.status.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Solutions found"),
        Cell::new(&report.solutions.len().to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Nodes explored"),
        Cell::new(&report.stats.nodes_explored.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Backtracks"),
        Cell::new(&report.stats.backtracks.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("AC-3 revisions"),
        Cell::new(&report.stats.revisions.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Solving time"),
        Cell::new(&format_duration(report.duration)),
    ]));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn duration_formatting_matches_the_solution_file() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_millis(12_340)), "12.3s");
        assert_eq!(format_duration(Duration::from_millis(242_000)), "4m2s");
    }
}
