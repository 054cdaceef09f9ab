//! Ready-made instances used by the tests and benchmarks.

use crate::instance::{CspInstance, TableConstraint, VarId};

/// `n`-queens: one variable per row holding the queen's column. For every
/// row pair the allowed pairs are the column pairs on neither the same
/// column nor a shared diagonal.
pub fn n_queens(n: usize) -> CspInstance {
    let domains = vec![(0, n as i64 - 1); n];
    let mut constraints = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let gap = (j - i) as i64;
            let mut allowed = Vec::new();
            for a in 0..n as i64 {
                for b in 0..n as i64 {
                    if a != b && (a - b).abs() != gap {
                        allowed.push((a, b));
                    }
                }
            }
            constraints.push(TableConstraint {
                u: i as VarId,
                v: j as VarId,
                allowed,
            });
        }
    }
    CspInstance::new(domains, constraints)
}

/// Pairwise disequality over `n` variables sharing the interval `lo..=hi`.
pub fn not_equal_clique(n: usize, lo: i64, hi: i64) -> CspInstance {
    let domains = vec![(lo, hi); n];
    let mut allowed = Vec::new();
    for a in lo..=hi {
        for b in lo..=hi {
            if a != b {
                allowed.push((a, b));
            }
        }
    }
    let mut constraints = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            constraints.push(TableConstraint {
                u: i as VarId,
                v: j as VarId,
                allowed: allowed.clone(),
            });
        }
    }
    CspInstance::new(domains, constraints)
}

/// A chain `x0 + 1 = x1`, `x1 + 1 = x2`, … of `len` variables over
/// `lo..=hi`.
pub fn successor_chain(len: usize, lo: i64, hi: i64) -> CspInstance {
    let domains = vec![(lo, hi); len];
    let allowed: Vec<(i64, i64)> = (lo..hi).map(|a| (a, a + 1)).collect();
    let constraints = (0..len.saturating_sub(1))
        .map(|i| TableConstraint {
            u: i as VarId,
            v: (i + 1) as VarId,
            allowed: allowed.clone(),
        })
        .collect();
    CspInstance::new(domains, constraints)
}

/// Two 0/1 variables with an explicitly empty relation between them.
pub fn empty_relation_pair() -> CspInstance {
    CspInstance::new(
        vec![(0, 1), (0, 1)],
        vec![TableConstraint {
            u: 0,
            v: 1,
            allowed: Vec::new(),
        }],
    )
}
