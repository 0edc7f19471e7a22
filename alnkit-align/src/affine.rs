//! Affine-gap alignment (Gotoh): opening a gap run and extending it carry
//! separate benefits.
//!
//! Each [`AffineCell`] packages the three recurrence channels — pairing
//! (diag), gap-in-`seq1` (left) and gap-in-`seq0` (up) — together with the
//! origin of the cell's overall best and per-channel extension flags. Both
//! the extend and the open candidate are always evaluated and the larger
//! wins, with extension preferred only when strictly larger; the flags are
//! what traceback consults to decide, while walking backward through a gap
//! run, whether the neighbor's same-channel value continues the run or the
//! channel switches back to that neighbor's overall best.

use crate::cell::{AffineCell, Origin};
use crate::cost::AffineCost;
use crate::locate::{find_end, Border, EndRule};
use crate::types::{AlignMode, Alignment, Step};
use alnkit_core::{Matrix, Result};

/// Aligner facade for the affine-gap family.
///
/// [`LinearCost::gap`](crate::cost::LinearCost::gap) supplies the open
/// benefit and [`AffineCost::gap_extend`] the continuation benefit. Results
/// are guaranteed optimal only when extending is at least as cheap as
/// opening (see [`AffineCost`]).
#[derive(Debug, Clone)]
pub struct AffineAligner<C> {
    cost: C,
}

impl<C> AffineAligner<C> {
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
        C: AffineCost<A, B>,
    {
        self.run(seq0, seq1, Border::Charged, Border::Charged, false, EndRule::Corner)
    }

    /// `seq1` fully consumed; the trailing overhang of `seq0` is free.
    pub fn cut_first_end_off_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: AffineCost<A, B>,
    {
        self.run(seq0, seq1, Border::Charged, Border::Charged, false, EndRule::LastRow)
    }

    /// `seq0` fully consumed; the trailing overhang of `seq1` is free.
    pub fn cut_second_end_off_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: AffineCost<A, B>,
    {
        self.run(seq0, seq1, Border::Charged, Border::Charged, false, EndRule::LastCol)
    }

    /// The trailing overhang of whichever sequence scores better is free.
    pub fn cut_one_end_off_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: AffineCost<A, B>,
    {
        self.run(seq0, seq1, Border::Charged, Border::Charged, false, EndRule::LastRowOrCol)
    }

    /// The leading overhang of one sequence is free; both ends are pinned.
    pub fn cut_one_begin_off_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: AffineCost<A, B>,
    {
        self.run(seq0, seq1, Border::Free, Border::Free, false, EndRule::Corner)
    }

    /// Start pinned at the origin; both trailing overhangs may be cut.
    pub fn initial_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: AffineCost<A, B>,
    {
        self.run(seq0, seq1, Border::Charged, Border::Charged, false, EndRule::Anywhere)
    }

    /// Aligns the ends of the sequences: free start, ends pinned.
    pub fn end_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: AffineCost<A, B>,
    {
        self.run(seq0, seq1, Border::Free, Border::Free, false, EndRule::Corner)
    }

    /// `seq1` fully consumed inside `seq0`; both `seq0` overhangs free.
    pub fn inside_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: AffineCost<A, B>,
    {
        self.run(seq0, seq1, Border::Free, Border::Charged, false, EndRule::LastRow)
    }

    /// Free leading overhangs on both sides, free trailing overhang on one.
    pub fn semi_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: AffineCost<A, B>,
    {
        self.run(seq0, seq1, Border::Free, Border::Free, false, EndRule::LastRowOrCol)
    }

    /// Best local region; never scores below zero.
    pub fn partial_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: AffineCost<A, B>,
    {
        self.run(seq0, seq1, Border::Free, Border::Free, true, EndRule::Anywhere)
    }

    /// Dispatch to the named operation for `mode`.
    pub fn align<A, B>(&mut self, seq0: &[A], seq1: &[B], mode: AlignMode) -> Result<Alignment>
    where
        C: AffineCost<A, B>,
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
        C: AffineCost<A, B>,
    {
        self.cost.preprocess(seq0, seq1);

        let open = self.cost.gap();
        let extend = self.cost.gap_extend();
        let rows = seq1.len() + 1;
        let cols = seq0.len() + 1;
        let mut m = Matrix::new(rows, cols, AffineCell::default());

        if row_border == Border::Charged {
            for c in 1..cols {
                m[(0, c)] = AffineCell {
                    left: open + (c as f64 - 1.0) * extend,
                    origin: Origin::Left,
                    // the first border step opens the run, the rest extend it
                    extending_left: c > 1,
                    ..AffineCell::default()
                };
            }
        }
        if col_border == Border::Charged {
            for r in 1..rows {
                m[(r, 0)] = AffineCell {
                    up: open + (r as f64 - 1.0) * extend,
                    origin: Origin::Up,
                    extending_up: r > 1,
                    ..AffineCell::default()
                };
            }
        }

        for r in 1..rows {
            for c in 1..cols {
                let tl = m[(r - 1, c - 1)];
                let l = m[(r, c - 1)];
                let t = m[(r - 1, c)];

                let diag = self.cost.score(&seq0[c - 1], &seq1[r - 1]) + tl.best();

                let left_extend = l.left + extend;
                let left_open = l.best() + open;
                let (left, extending_left) = if left_extend > left_open {
                    (left_extend, true)
                } else {
                    (left_open, false)
                };

                let up_extend = t.up + extend;
                let up_open = t.best() + open;
                let (up, extending_up) = if up_extend > up_open {
                    (up_extend, true)
                } else {
                    (up_open, false)
                };

                let mut best = if floor { 0.0 } else { f64::NEG_INFINITY };
                let mut origin = Origin::Stop;
                if diag > best {
                    best = diag;
                    origin = Origin::Diag;
                }
                if left > best {
                    best = left;
                    origin = Origin::Left;
                }
                if up > best {
                    origin = Origin::Up;
                }

                m[(r, c)] = AffineCell {
                    diag,
                    left,
                    up,
                    origin,
                    extending_left,
                    extending_up,
                };
            }
        }

        let end = find_end(&m, end_rule);
        let (start, steps) = walk_affine(&m, end);
        Ok(Alignment {
            score: m[end].best(),
            start: (start.1, start.0),
            end: (end.1, end.0),
            steps,
        })
    }
}

/// Which value is currently being traced through the matrix.
#[derive(Clone, Copy, PartialEq)]
enum Channel {
    /// The cell's overall best; origin tags decide the next move.
    Best,
    /// Inside a gap run consuming `seq0`; left-channel values apply.
    Left,
    /// Inside a gap run consuming `seq1`; up-channel values apply.
    Up,
}

/// Walk an [`AffineCell`] matrix from `end`, returning the start cell and
/// the forward-ordered steps.
///
/// While tracing a gap run the walk stays on that run's channel; a cleared
/// extension flag marks the cell where the run was opened, at which point
/// the traced value switches to the neighbor's overall best.
fn walk_affine(m: &Matrix<AffineCell>, end: (usize, usize)) -> ((usize, usize), Vec<Step>) {
    let mut steps = Vec::new();
    let (mut r, mut c) = end;
    let mut channel = Channel::Best;
    loop {
        let cell = m[(r, c)];
        match channel {
            Channel::Best => match cell.origin {
                Origin::Stop => break,
                Origin::Diag => {
                    let prev = m[(r - 1, c - 1)];
                    steps.push(Step {
                        count0: 1,
                        count1: 1,
                        score: cell.best() - prev.best(),
                    });
                    r -= 1;
                    c -= 1;
                }
                Origin::Left => channel = Channel::Left,
                Origin::Up => channel = Channel::Up,
            },
            Channel::Left => {
                let prev = m[(r, c - 1)];
                let prev_value = if cell.extending_left {
                    prev.left
                } else {
                    channel = Channel::Best;
                    prev.best()
                };
                steps.push(Step {
                    count0: 1,
                    count1: 0,
                    score: cell.left - prev_value,
                });
                c -= 1;
            }
            Channel::Up => {
                let prev = m[(r - 1, c)];
                let prev_value = if cell.extending_up {
                    prev.up
                } else {
                    channel = Channel::Best;
                    prev.best()
                };
                steps.push(Step {
                    count0: 0,
                    count1: 1,
                    score: cell.up - prev_value,
                });
                r -= 1;
            }
        }
    }
    steps.reverse();
    ((r, c), steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::SimpleCost;
    use crate::linear::LinearAligner;

    fn open_heavy() -> SimpleCost {
        // Opening a run costs far more than extending it
        SimpleCost::new(1.0, -0.35, -2.0, -0.3, -0.1).unwrap()
    }

    #[test]
    fn single_run_beats_repeated_opens() {
        let mut al = AffineAligner::new(open_heavy());
        let aln = al.global_align(b"abcxyz".as_slice(), b"xyz".as_slice()).unwrap();
        // One 3-element run: open + 2 extends, then three pairings
        let expected = (-2.0 + -0.3 * 2.0) + 3.0;
        assert!((aln.score - expected).abs() < 1e-12);
        assert_eq!(aln.ops_string(), "3D3M");
        assert!(aln.is_consistent());
    }

    #[test]
    fn run_deltas_decompose_into_open_and_extends() {
        let mut al = AffineAligner::new(open_heavy());
        let aln = al.global_align(b"abcxyz".as_slice(), b"xyz".as_slice()).unwrap();
        let gap_scores: Vec<f64> = aln
            .steps
            .iter()
            .filter(|s| s.count1 == 0)
            .map(|s| s.score)
            .collect();
        assert_eq!(gap_scores.len(), 3);
        // Forward order: the run opens first, then extends
        assert!((gap_scores[0] - (-2.0)).abs() < 1e-12);
        assert!((gap_scores[1] - (-0.3)).abs() < 1e-12);
        assert!((gap_scores[2] - (-0.3)).abs() < 1e-12);
    }

    #[test]
    fn interior_run_stays_contiguous() {
        let mut al = AffineAligner::new(open_heavy());
        let aln = al.global_align(b"xyabcz".as_slice(), b"xyz".as_slice()).unwrap();
        assert_eq!(aln.ops_string(), "2M3D1M");
        let expected = 3.0 + (-2.0 - 0.6);
        assert!((aln.score - expected).abs() < 1e-12);
    }

    #[test]
    fn reduces_to_linear_when_extend_equals_open() {
        let flat = SimpleCost::new(1.0, -0.35, -0.3, -0.3, -0.1).unwrap();
        let a = b"xxyzyx".as_slice();
        let b = b"xyzzy".as_slice();
        let affine = AffineAligner::new(flat.clone()).global_align(a, b).unwrap();
        let linear = LinearAligner::new(flat).global_align(a, b).unwrap();
        assert_eq!(affine.score, linear.score);
    }

    #[test]
    fn global_empty_sequences() {
        let mut al = AffineAligner::new(open_heavy());
        let aln = al.global_align::<u8, u8>(&[], &[]).unwrap();
        assert_eq!(aln.score, 0.0);
        assert_eq!(aln.start, (0, 0));
        assert_eq!(aln.end, (0, 0));
        assert!(aln.steps.is_empty());
    }

    #[test]
    fn global_against_empty_is_one_run() {
        let mut al = AffineAligner::new(open_heavy());
        let aln = al.global_align(b"xyz".as_slice(), &[]).unwrap();
        assert!((aln.score - (-2.0 - 0.6)).abs() < 1e-12);
        assert_eq!(aln.ops_string(), "3D");
        assert!(aln.is_consistent());
    }

    #[test]
    fn semi_align_free_overhangs() {
        let mut al = AffineAligner::new(open_heavy());
        let aln = al.semi_align(b"aaxyz".as_slice(), b"xyzbb".as_slice()).unwrap();
        assert_eq!(aln.score, 3.0);
        assert_eq!(aln.start, (2, 0));
        assert_eq!(aln.end, (5, 3));
    }

    #[test]
    fn partial_align_score_floor() {
        let mut al = AffineAligner::new(open_heavy());
        let aln = al.partial_align(b"abc".as_slice(), b"qrs".as_slice()).unwrap();
        assert!(aln.score >= 0.0);
        let aln = al.partial_align(b"qqxyzqq".as_slice(), b"ppxyzpp".as_slice()).unwrap();
        assert_eq!(aln.score, 3.0);
        assert_eq!(aln.ops_string(), "3M");
    }

    #[test]
    fn cut_first_end_off_leaves_seq0_tail() {
        let mut al = AffineAligner::new(open_heavy());
        let aln = al
            .cut_first_end_off_align(b"xyz".as_slice(), b"xy".as_slice())
            .unwrap();
        assert_eq!(aln.score, 2.0);
        assert_eq!(aln.end, (2, 2));
    }

    #[test]
    fn mode_dispatch_matches_named_ops() {
        let a = b"abcxyz".as_slice();
        let b = b"xyz".as_slice();
        let via_mode = AffineAligner::new(open_heavy())
            .align(a, b, AlignMode::Global)
            .unwrap();
        let named = AffineAligner::new(open_heavy()).global_align(a, b).unwrap();
        assert_eq!(via_mode, named);
    }

    #[test]
    fn score_is_sum_of_step_scores() {
        let mut al = AffineAligner::new(open_heavy());
        for (a, b) in [
            (&b"xyzzy"[..], &b"xxyzyx"[..]),
            (&b"abcdefg"[..], &b"abg"[..]),
            (&b"aaa"[..], &b"bbb"[..]),
        ] {
            let aln = al.global_align(a, b).unwrap();
            let sum: f64 = aln.steps.iter().map(|s| s.score).sum();
            assert!(
                (aln.score - sum).abs() < 1e-9,
                "score {} != step sum {sum}",
                aln.score
            );
            assert_eq!(aln.len0(), a.len());
            assert_eq!(aln.len1(), b.len());
        }
    }
}
