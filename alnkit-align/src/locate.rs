//! Best-cell location policies.
//!
//! Each boundary-condition variant ends its traceback at a different place:
//! the bottom-right corner, the best cell of the last row and/or column, or
//! the best cell anywhere in the matrix. All scans use strict `>` so the
//! first-encountered maximal cell wins on ties.

use crate::cell::ScoreCell;
use alnkit_core::Matrix;

/// Border seeding policy for one axis of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    /// Border cells accumulate the running gap cost from the origin.
    Charged,
    /// Border cells are free `Stop` cells; leading gaps cost nothing.
    Free,
}

/// Where the optimal end cell may be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndRule {
    /// Fixed at the bottom-right corner.
    Corner,
    /// Best cell of the last row, defaulting to the corner.
    LastRow,
    /// Best cell of the last column, defaulting to the corner.
    LastCol,
    /// Best cell of the last row or last column, defaulting to the corner.
    LastRowOrCol,
    /// Best cell anywhere in the matrix.
    Anywhere,
}

/// Locate the end cell for `rule`, returning its `(row, col)`.
pub fn find_end<C: ScoreCell>(matrix: &Matrix<C>, rule: EndRule) -> (usize, usize) {
    let last_row = matrix.rows() - 1;
    let last_col = matrix.cols() - 1;
    match rule {
        EndRule::Corner => (last_row, last_col),
        EndRule::LastRow => scan_last_row(matrix, corner_best(matrix)).1,
        EndRule::LastCol => scan_last_col(matrix, corner_best(matrix)).1,
        EndRule::LastRowOrCol => {
            scan_last_col(matrix, scan_last_row(matrix, corner_best(matrix))).1
        }
        EndRule::Anywhere => {
            let mut best = f64::NEG_INFINITY;
            let mut pos = (last_row, last_col);
            let mut cur = matrix.cursor_at(0, 0);
            for r in 0..matrix.rows() {
                for c in 0..matrix.cols() {
                    if cur.value().best_score() > best {
                        best = cur.value().best_score();
                        pos = (r, c);
                    }
                    if c + 1 < matrix.cols() {
                        cur.step_right();
                    }
                }
                if r + 1 < matrix.rows() {
                    cur = matrix.cursor_at(r + 1, 0);
                }
            }
            pos
        }
    }
}

fn corner_best<C: ScoreCell>(matrix: &Matrix<C>) -> (f64, (usize, usize)) {
    let pos = (matrix.rows() - 1, matrix.cols() - 1);
    (matrix[pos].best_score(), pos)
}

fn scan_last_row<C: ScoreCell>(
    matrix: &Matrix<C>,
    seed: (f64, (usize, usize)),
) -> (f64, (usize, usize)) {
    let (mut best, mut pos) = seed;
    let last_row = matrix.rows() - 1;
    let mut cur = matrix.cursor_at(last_row, 0);
    for c in 0..matrix.cols() {
        if cur.value().best_score() > best {
            best = cur.value().best_score();
            pos = (last_row, c);
        }
        if c + 1 < matrix.cols() {
            cur.step_right();
        }
    }
    (best, pos)
}

fn scan_last_col<C: ScoreCell>(
    matrix: &Matrix<C>,
    seed: (f64, (usize, usize)),
) -> (f64, (usize, usize)) {
    let (mut best, mut pos) = seed;
    let last_col = matrix.cols() - 1;
    let mut cur = matrix.cursor_at(0, last_col);
    for r in 0..matrix.rows() {
        if cur.value().best_score() > best {
            best = cur.value().best_score();
            pos = (r, last_col);
        }
        if r + 1 < matrix.rows() {
            cur.step_down();
        }
    }
    (best, pos)
}
