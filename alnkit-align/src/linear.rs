//! Linear-gap alignment: one uniform gap benefit for either sequence.
//!
//! The classic Needleman-Wunsch recurrence over [`SimpleCell`]s — for each
//! interior cell, the best of pairing (diagonal), a gap in `seq1` (left) and
//! a gap in `seq0` (up), with strict-`>` tie-breaking in that evaluation
//! order. The eleven boundary-condition operations differ only in border
//! seeding, an optional zero floor, and the end-cell rule.

use crate::cell::{Origin, SimpleCell};
use crate::cost::LinearCost;
use crate::locate::{find_end, Border, EndRule};
use crate::traceback::walk_simple;
use crate::types::{AlignMode, Alignment};
use alnkit_core::{Matrix, Result};

/// Aligner facade for the linear-gap family.
///
/// Holds the injected cost strategy; each operation takes two sequences and
/// returns an [`Alignment`] by value. The strategy's `preprocess` hook runs
/// once per operation, before any benefit query.
#[derive(Debug, Clone)]
pub struct LinearAligner<C> {
    cost: C,
}

impl<C> LinearAligner<C> {
    /// Create an aligner around `cost`.
    pub fn new(cost: C) -> Self {
        Self { cost }
    }

    /// Replace the cost strategy.
    pub fn set_cost(&mut self, cost: C) {
        self.cost = cost;
    }

    /// The current cost strategy.
    pub fn cost(&self) -> &C {
        &self.cost
    }

    /// Both sequences consumed end-to-end; all gaps charged.
    pub fn global_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: LinearCost<A, B>,
    {
        self.run(seq0, seq1, Border::Charged, Border::Charged, false, EndRule::Corner)
    }

    /// `seq1` fully consumed; the trailing overhang of `seq0` is free.
    pub fn cut_first_end_off_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: LinearCost<A, B>,
    {
        self.run(seq0, seq1, Border::Charged, Border::Charged, false, EndRule::LastRow)
    }

    /// `seq0` fully consumed; the trailing overhang of `seq1` is free.
    pub fn cut_second_end_off_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: LinearCost<A, B>,
    {
        self.run(seq0, seq1, Border::Charged, Border::Charged, false, EndRule::LastCol)
    }

    /// The trailing overhang of whichever sequence scores better is free.
    pub fn cut_one_end_off_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: LinearCost<A, B>,
    {
        self.run(seq0, seq1, Border::Charged, Border::Charged, false, EndRule::LastRowOrCol)
    }

    /// The leading overhang of one sequence is free; both ends are pinned.
    pub fn cut_one_begin_off_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: LinearCost<A, B>,
    {
        self.run(seq0, seq1, Border::Free, Border::Free, false, EndRule::Corner)
    }

    /// Start pinned at the origin; both trailing overhangs may be cut.
    pub fn initial_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: LinearCost<A, B>,
    {
        self.run(seq0, seq1, Border::Charged, Border::Charged, false, EndRule::Anywhere)
    }

    /// Aligns the ends of the sequences: free start, ends pinned.
    pub fn end_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: LinearCost<A, B>,
    {
        self.run(seq0, seq1, Border::Free, Border::Free, false, EndRule::Corner)
    }

    /// `seq1` fully consumed inside `seq0`; both `seq0` overhangs free.
    pub fn inside_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: LinearCost<A, B>,
    {
        self.run(seq0, seq1, Border::Free, Border::Charged, false, EndRule::LastRow)
    }

    /// Free leading overhangs on both sides, free trailing overhang on one.
    pub fn semi_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: LinearCost<A, B>,
    {
        self.run(seq0, seq1, Border::Free, Border::Free, false, EndRule::LastRowOrCol)
    }

    /// Best local region; the alignment may restart anywhere for free, so
    /// the score is never negative.
    pub fn partial_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: LinearCost<A, B>,
    {
        self.run(seq0, seq1, Border::Free, Border::Free, true, EndRule::Anywhere)
    }

    /// Dispatch to the named operation for `mode`.
    pub fn align<A, B>(&mut self, seq0: &[A], seq1: &[B], mode: AlignMode) -> Result<Alignment>
    where
        C: LinearCost<A, B>,
    {
        match mode {
            AlignMode::Global => self.global_align(seq0, seq1),
            AlignMode::CutFirstEndOff => self.cut_first_end_off_align(seq0, seq1),
            AlignMode::CutSecondEndOff => self.cut_second_end_off_align(seq0, seq1),
            AlignMode::CutOneEndOff => self.cut_one_end_off_align(seq0, seq1),
            AlignMode::CutOneBeginOff => self.cut_one_begin_off_align(seq0, seq1),
            AlignMode::Initial => self.initial_align(seq0, seq1),
            AlignMode::End => self.end_align(seq0, seq1),
            AlignMode::Inside => self.inside_align(seq0, seq1),
            AlignMode::Semi => self.semi_align(seq0, seq1),
            AlignMode::Partial => self.partial_align(seq0, seq1),
        }
    }

    fn run<A, B>(
        &mut self,
        seq0: &[A],
        seq1: &[B],
        row_border: Border,
        col_border: Border,
        floor: bool,
        end_rule: EndRule,
    ) -> Result<Alignment>
    where
        C: LinearCost<A, B>,
    {
        self.cost.preprocess(seq0, seq1);

        let gap = self.cost.gap();
        let rows = seq1.len() + 1;
        let cols = seq0.len() + 1;
        // Default cells are free Stop cells; charged borders overwrite them.
        let mut m = Matrix::new(rows, cols, SimpleCell::default());

        if row_border == Border::Charged {
            for c in 1..cols {
                m[(0, c)] = SimpleCell {
                    score: m[(0, c - 1)].score + gap,
                    origin: Origin::Left,
                };
            }
        }
        if col_border == Border::Charged {
            for r in 1..rows {
                m[(r, 0)] = SimpleCell {
                    score: m[(r - 1, 0)].score + gap,
                    origin: Origin::Up,
                };
            }
        }

        for r in 1..rows {
            for c in 1..cols {
                let mut best = if floor { 0.0 } else { f64::NEG_INFINITY };
                let mut origin = Origin::Stop;

                let diag = self.cost.score(&seq0[c - 1], &seq1[r - 1]) + m[(r - 1, c - 1)].score;
                if diag > best {
                    best = diag;
                    origin = Origin::Diag;
                }
                let left = m[(r, c - 1)].score + gap;
                if left > best {
                    best = left;
                    origin = Origin::Left;
                }
                let up = m[(r - 1, c)].score + gap;
                if up > best {
                    best = up;
                    origin = Origin::Up;
                }

                m[(r, c)] = SimpleCell { score: best, origin };
            }
        }

        let end = find_end(&m, end_rule);
        let (start, steps) = walk_simple(&m, end);
        Ok(Alignment {
            score: m[end].score,
            start: (start.1, start.0),
            end: (end.1, end.0),
            steps,
        })
    }
}
