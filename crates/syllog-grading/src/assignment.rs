//! Optimal one-to-one assignment (Kuhn–Munkres with potentials).
//!
//! Maximises the total score over a rectangular matrix. Every row is matched
//! when `rows <= cols`, otherwise every column is; the rest stay unmatched.
//! O(n²·m) for `n = min(rows, cols)`, `m = max(rows, cols)`.

/// A maximum-weight matching.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// `(row, col)` pairs, sorted by row.
    pub pairs: Vec<(usize, usize)>,
    pub total: f64,
}

impl Assignment {
    /// Column matched to `row`, if any.
    pub fn col_for(&self, row: usize) -> Option<usize> {
        self.pairs.iter().find(|(r, _)| *r == row).map(|(_, c)| *c)
    }
}

/// Maximum-weight matching of `scores[row][col]`.
///
/// Rows shorter than the first row are padded with zeros; non-finite entries
/// are treated as zero.
pub fn maximize(scores: &[Vec<f64>]) -> Assignment {
    let rows = scores.len();
    let cols = scores.first().map_or(0, Vec::len);
    if rows == 0 || cols == 0 {
        return Assignment {
            pairs: Vec::new(),
            total: 0.0,
        };
    }

    let score = |r: usize, c: usize| {
        scores
            .get(r)
            .and_then(|row| row.get(c))
            .copied()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    };

    // The solver needs n <= m; transpose when there are more rows than columns.
    let transposed = rows > cols;
    let (n, m) = if transposed { (cols, rows) } else { (rows, cols) };
    let cost = |i: usize, j: usize| {
        if transposed {
            -score(j, i)
        } else {
            -score(i, j)
        }
    };

    let matched = solve_min(n, m, cost);

    let mut pairs: Vec<(usize, usize)> = matched
        .into_iter()
        .map(|(i, j)| if transposed { (j, i) } else { (i, j) })
        .collect();
    pairs.sort_unstable();
    let total = pairs.iter().map(|&(r, c)| score(r, c)).sum();
    Assignment { pairs, total }
}

/// Minimum-cost assignment of all `n` rows to distinct columns of an
/// `n × m` cost matrix, `n <= m`. Returns `(row, col)` pairs.
fn solve_min(n: usize, m: usize, cost: impl Fn(usize, usize) -> f64) -> Vec<(usize, usize)> {
    // 1-indexed; index 0 is the virtual root.
    let mut u = vec![0.0f64; n + 1];
    let mut v = vec![0.0f64; m + 1];
    let mut owner = vec![0usize; m + 1];
    let mut way = vec![0usize; m + 1];

    for row in 1..=n {
        owner[0] = row;
        let mut col0 = 0usize;
        let mut min_slack = vec![f64::INFINITY; m + 1];
        let mut used = vec![false; m + 1];

        loop {
            used[col0] = true;
            let row0 = owner[col0];
            let mut delta = f64::INFINITY;
            let mut col1 = 0usize;

            for col in 1..=m {
                if used[col] {
                    continue;
                }
                let slack = cost(row0 - 1, col - 1) - u[row0] - v[col];
                if slack < min_slack[col] {
                    min_slack[col] = slack;
                    way[col] = col0;
                }
                if min_slack[col] < delta {
                    delta = min_slack[col];
                    col1 = col;
                }
            }

            for col in 0..=m {
                if used[col] {
                    u[owner[col]] += delta;
                    v[col] -= delta;
                } else {
                    min_slack[col] -= delta;
                }
            }

            col0 = col1;
            if owner[col0] == 0 {
                break;
            }
        }

        // Flip the augmenting path.
        loop {
            let prev = way[col0];
            owner[col0] = owner[prev];
            col0 = prev;
            if col0 == 0 {
                break;
            }
        }
    }

    (1..=m)
        .filter(|&col| owner[col] != 0)
        .map(|col| (owner[col] - 1, col - 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beats_naive_diagonal_pairing() {
        // Diagonal (naive left-to-right) totals 1 + 1 + 1 = 3;
        // the optimum 0→1, 1→2, 2→0 totals 9 + 9 + 9 = 27.
        let scores = vec![
            vec![1.0, 9.0, 0.0],
            vec![0.0, 1.0, 9.0],
            vec![9.0, 0.0, 1.0],
        ];
        let naive: f64 = (0..3).map(|i| scores[i][i]).sum();
        let best = maximize(&scores);
        assert_eq!(best.pairs, vec![(0, 1), (1, 2), (2, 0)]);
        assert_eq!(best.total, 27.0);
        assert!(best.total > naive);
    }

    #[test]
    fn greedy_trap_is_avoided() {
        // Greedy takes (0,0)=10 and is left with (1,1)=1 → 11; optimum is 9 + 8 = 17.
        let scores = vec![vec![10.0, 9.0], vec![8.0, 1.0]];
        let best = maximize(&scores);
        assert_eq!(best.pairs, vec![(0, 1), (1, 0)]);
        assert_eq!(best.total, 17.0);
    }

    #[test]
    fn more_rows_than_columns_leaves_rows_unmatched() {
        let scores = vec![vec![1.0], vec![5.0], vec![3.0]];
        let best = maximize(&scores);
        assert_eq!(best.pairs, vec![(1, 0)]);
        assert_eq!(best.col_for(0), None);
        assert_eq!(best.col_for(1), Some(0));
    }

    #[test]
    fn more_columns_than_rows_matches_every_row() {
        let scores = vec![vec![0.0, 2.0, 7.0, 1.0], vec![6.0, 0.0, 7.0, 0.0]];
        let best = maximize(&scores);
        assert_eq!(best.pairs, vec![(0, 2), (1, 0)]);
        assert_eq!(best.total, 13.0);
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(maximize(&[]).pairs.is_empty());
        assert!(maximize(&[vec![], vec![]]).pairs.is_empty());
    }
}
