//! Origin-driven traceback walks.
//!
//! Starting from the located end cell, each walk follows the stored origin
//! tags back to a `Stop` cell, emitting one [`Step`] per move with the score
//! delta between the cell being left and the cell being entered. Steps are
//! accumulated backward and reversed before being returned.
//!
//! The affine walk lives in the `affine` module; its channel-switching rules
//! are specific to that family's cell model.

use crate::cell::{FragOrigin, FragmentCell, Origin, SimpleCell};
use crate::types::Step;
use alnkit_core::Matrix;

/// Walk a [`SimpleCell`] matrix from `end`, returning the start cell and the
/// forward-ordered steps.
pub fn walk_simple(matrix: &Matrix<SimpleCell>, end: (usize, usize)) -> ((usize, usize), Vec<Step>) {
    let mut steps = Vec::new();
    let mut cur = matrix.cursor_at(end.0, end.1);
    loop {
        let cell = *cur.value();
        match cell.origin {
            Origin::Stop => break,
            Origin::Diag => {
                cur.step_up_left();
                steps.push(Step {
                    count0: 1,
                    count1: 1,
                    score: cell.score - cur.value().score,
                });
            }
            Origin::Left => {
                cur.step_left();
                steps.push(Step {
                    count0: 1,
                    count1: 0,
                    score: cell.score - cur.value().score,
                });
            }
            Origin::Up => {
                cur.step_up();
                steps.push(Step {
                    count0: 0,
                    count1: 1,
                    score: cell.score - cur.value().score,
                });
            }
        }
    }
    steps.reverse();
    ((cur.row(), cur.col()), steps)
}

/// Walk a [`FragmentCell`] matrix from `end`, returning the start cell and
/// the forward-ordered steps. Many-to-one origins consume their recorded
/// fragment count from one sequence in a single step.
pub fn walk_fragment(
    matrix: &Matrix<FragmentCell>,
    end: (usize, usize),
) -> ((usize, usize), Vec<Step>) {
    let mut steps = Vec::new();
    let mut cur = matrix.cursor_at(end.0, end.1);
    loop {
        let cell = *cur.value();
        let (count0, count1) = match cell.origin {
            FragOrigin::Stop => break,
            FragOrigin::Diag => {
                cur.step_up_left();
                (1, 1)
            }
            FragOrigin::Left => {
                cur.step_left();
                (1, 0)
            }
            FragOrigin::Up => {
                cur.step_up();
                (0, 1)
            }
            FragOrigin::ManyFromSeq0(n) => {
                debug_assert!(n >= 2);
                cur.step_up();
                cur.step_left_by(n);
                (n, 1)
            }
            FragOrigin::ManyFromSeq1(n) => {
                debug_assert!(n >= 2);
                cur.step_up_by(n);
                cur.step_left();
                (1, n)
            }
        };
        steps.push(Step {
            count0,
            count1,
            score: cell.score - cur.value().score,
        });
    }
    steps.reverse();
    ((cur.row(), cur.col()), steps)
}
