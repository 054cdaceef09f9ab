//! Parser for the plain-text instance format.
//!
//! Lines starting with `#` and blank lines are ignored everywhere. The
//! significant lines are, in order: the variable count `N`, then `N` domain
//! lines `vid min max` (ids are positional, the written id is only checked
//! to be a number), the constraint count `M`, then `M` constraint lines
//! `u v (a,b) (c,d) …`. A constraint with zero pairs is a valid, explicitly
//! empty relation. Errors carry the 1-based line number.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::debug;

use crate::{
    error::{Error, Result, SolverError},
    instance::{CspInstance, TableConstraint, VarId},
};

pub fn parse_instance_file(path: impl AsRef<Path>) -> Result<CspInstance> {
    let path = path.as_ref();
    let file = File::open(path).map_err(SolverError::Io)?;
    parse_instance(BufReader::new(file), &path.display().to_string())
}

/// Parses an instance from any buffered reader; `path` is only used in
/// error messages.
pub fn parse_instance<R: BufRead>(reader: R, path: &str) -> Result<CspInstance> {
    let mut lines = SignificantLines::new(reader, path)?;

    let (line_no, text) = lines.next("the variable count")?;
    let num_variables = parse_int(path, line_no, &text, "variable count")?;
    if num_variables <= 0 {
        return Err(parse_error(
            path,
            line_no,
            format!("variable count must be positive, got {num_variables}"),
        ));
    }
    let num_variables = num_variables as usize;

    let mut domains = Vec::with_capacity(num_variables);
    for _ in 0..num_variables {
        let (line_no, text) = lines.next("a domain line")?;
        domains.push(parse_domain_line(path, line_no, &text)?);
    }

    let (line_no, text) = lines.next("the constraint count")?;
    let num_constraints = parse_int(path, line_no, &text, "constraint count")?;
    if num_constraints < 0 {
        return Err(parse_error(
            path,
            line_no,
            format!("constraint count must be non-negative, got {num_constraints}"),
        ));
    }

    let mut constraints = Vec::with_capacity(num_constraints as usize);
    for _ in 0..num_constraints {
        let (line_no, text) = lines.next("a constraint line")?;
        constraints.push(parse_constraint_line(path, line_no, &text, num_variables)?);
    }

    debug!(
        variables = num_variables,
        constraints = constraints.len(),
        "parsed instance"
    );
    Ok(CspInstance::new(domains, constraints))
}

/// Iterates the non-comment, non-blank lines together with their 1-based
/// file line numbers.
struct SignificantLines {
    lines: std::vec::IntoIter<(usize, String)>,
    path: String,
    last_line: usize,
}

impl SignificantLines {
    fn new<R: BufRead>(reader: R, path: &str) -> Result<Self> {
        let mut collected = Vec::new();
        let mut last_line = 0;
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(SolverError::Io)?;
            last_line = index + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            collected.push((index + 1, trimmed.to_string()));
        }
        Ok(Self {
            lines: collected.into_iter(),
            path: path.to_string(),
            last_line,
        })
    }

    fn next(&mut self, expected: &str) -> Result<(usize, String)> {
        self.lines.next().ok_or_else(|| {
            parse_error(
                &self.path,
                self.last_line,
                format!("unexpected end of file, expected {expected}"),
            )
        })
    }
}

fn parse_error(path: &str, line: usize, message: impl Into<String>) -> Error {
    SolverError::Parse {
        path: path.to_string(),
        line,
        message: message.into(),
    }
    .into()
}

fn parse_int(path: &str, line: usize, token: &str, what: &str) -> Result<i64> {
    token
        .parse()
        .map_err(|_| parse_error(path, line, format!("invalid {what} '{token}'")))
}

fn parse_domain_line(path: &str, line: usize, text: &str) -> Result<(i64, i64)> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(parse_error(
            path,
            line,
            format!("expected 'id min max', got '{text}'"),
        ));
    }
    // The written id is positional; it only has to be a number.
    parse_int(path, line, tokens[0], "variable id")?;
    let min = parse_int(path, line, tokens[1], "domain minimum")?;
    let max = parse_int(path, line, tokens[2], "domain maximum")?;
    if min > max {
        return Err(parse_error(
            path,
            line,
            format!("empty domain interval {min}..{max}"),
        ));
    }
    Ok((min, max))
}

fn parse_constraint_line(
    path: &str,
    line: usize,
    text: &str,
    num_variables: usize,
) -> Result<TableConstraint> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(parse_error(
            path,
            line,
            format!("expected 'u v (a,b) ...', got '{text}'"),
        ));
    }

    let u = parse_var(path, line, tokens[0], num_variables)?;
    let v = parse_var(path, line, tokens[1], num_variables)?;
    if u == v {
        return Err(parse_error(
            path,
            line,
            format!("constraint endpoints must differ, got {u} and {v}"),
        ));
    }

    let mut allowed = Vec::with_capacity(tokens.len() - 2);
    for token in &tokens[2..] {
        allowed.push(parse_pair(path, line, token)?);
    }

    Ok(TableConstraint { u, v, allowed })
}

fn parse_var(path: &str, line: usize, token: &str, num_variables: usize) -> Result<VarId> {
    let var = parse_int(path, line, token, "variable id")?;
    if var < 0 || var as usize >= num_variables {
        return Err(parse_error(
            path,
            line,
            format!("variable id {var} out of range 0..{num_variables}"),
        ));
    }
    Ok(var as VarId)
}

fn parse_pair(path: &str, line: usize, token: &str) -> Result<(i64, i64)> {
    let invalid = || parse_error(path, line, format!("expected '(a,b)', got '{token}'"));
    let inner = token
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(invalid)?;
    let (a, b) = inner.split_once(',').ok_or_else(invalid)?;
    let a = a.trim().parse().map_err(|_| invalid())?;
    let b = b.trim().parse().map_err(|_| invalid())?;
    Ok((a, b))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(text: &str) -> Result<CspInstance> {
        parse_instance(text.as_bytes(), "test.csp")
    }

    fn parse_err(text: &str) -> String {
        parse(text).unwrap_err().to_string()
    }

    #[test]
    fn parses_a_commented_instance() {
        let instance = parse(
            "# a small instance\n\
             2\n\
             \n\
             0 0 2\n\
             # domains above, constraints below\n\
             1 1 3\n\
             1\n\
             0 1 (0,1) (1,2) (2,3)\n",
        )
        .unwrap();

        assert_eq!(instance.num_variables(), 2);
        assert_eq!(instance.initial_domain(0), (0, 2));
        assert_eq!(instance.initial_domain(1), (1, 3));
        assert_eq!(instance.constraints().len(), 1);
        assert!(instance.is_pair_allowed(0, 1, 1, 2));
        assert!(!instance.is_pair_allowed(0, 1, 1, 3));
    }

    #[test]
    fn accepts_an_explicitly_empty_relation() {
        let instance = parse("2\n0 0 1\n1 0 1\n1\n0 1\n").unwrap();
        assert_eq!(instance.constraints().len(), 1);
        assert!(!instance.is_pair_allowed(0, 0, 1, 0));
    }

    #[test]
    fn reports_the_offending_line_number() {
        let message = parse_err("2\n0 0 2\n1 5 3\n0\n");
        assert!(message.contains("test.csp:3"), "got: {message}");
        assert!(message.contains("empty domain interval"), "got: {message}");
    }

    #[test]
    fn rejects_identical_constraint_endpoints() {
        let message = parse_err("2\n0 0 1\n1 0 1\n1\n1 1 (0,0)\n");
        assert!(message.contains("endpoints must differ"), "got: {message}");
    }

    #[test]
    fn rejects_out_of_range_variables() {
        let message = parse_err("2\n0 0 1\n1 0 1\n1\n0 7 (0,0)\n");
        assert!(message.contains("out of range"), "got: {message}");
    }

    #[test]
    fn rejects_malformed_pairs() {
        let message = parse_err("2\n0 0 1\n1 0 1\n1\n0 1 (0;1)\n");
        assert!(message.contains("expected '(a,b)'"), "got: {message}");
    }

    #[test]
    fn rejects_a_truncated_file() {
        let message = parse_err("3\n0 0 1\n1 0 1\n");
        assert!(message.contains("unexpected end of file"), "got: {message}");
    }

    #[test]
    fn rejects_a_non_positive_variable_count() {
        let message = parse_err("0\n");
        assert!(message.contains("must be positive"), "got: {message}");
    }
}
