//! Consolidating alignment: many-to-one fragment merges on top of the
//! two-sided-linear recurrence.
//!
//! Beyond pairing and the two gap moves, each interior cell considers
//! merging the last `k >= 2` elements of one sequence into a single match
//! against the current element of the other. The strategy prices every
//! trailing run length in one call per cell; the winning candidate's
//! fragment count is recorded on the origin tag so traceback can consume
//! the whole merge as one step.

use crate::cell::{FragOrigin, FragmentCell};
use crate::cost::ConsolidatingCost;
use crate::locate::{find_end, Border, EndRule};
use crate::traceback::walk_fragment;
use crate::types::{AlignMode, Alignment};
use alnkit_core::{Matrix, Result};

/// Aligner facade for the consolidating family.
#[derive(Debug, Clone)]
pub struct ConsolidatingAligner<C> {
    cost: C,
}

impl<C> ConsolidatingAligner<C> {
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
        C: ConsolidatingCost<A, B>,
    {
        self.run(seq0, seq1, Border::Charged, Border::Charged, false, EndRule::Corner)
    }

    /// `seq1` fully consumed; the trailing overhang of `seq0` is free.
    pub fn cut_first_end_off_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: ConsolidatingCost<A, B>,
    {
        self.run(seq0, seq1, Border::Charged, Border::Charged, false, EndRule::LastRow)
    }

    /// `seq0` fully consumed; the trailing overhang of `seq1` is free.
    pub fn cut_second_end_off_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: ConsolidatingCost<A, B>,
    {
        self.run(seq0, seq1, Border::Charged, Border::Charged, false, EndRule::LastCol)
    }

    /// The trailing overhang of whichever sequence scores better is free.
    pub fn cut_one_end_off_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: ConsolidatingCost<A, B>,
    {
        self.run(seq0, seq1, Border::Charged, Border::Charged, false, EndRule::LastRowOrCol)
    }

    /// The leading overhang of one sequence is free; both ends are pinned.
    pub fn cut_one_begin_off_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: ConsolidatingCost<A, B>,
    {
        self.run(seq0, seq1, Border::Free, Border::Free, false, EndRule::Corner)
    }

    /// Start pinned at the origin; both trailing overhangs may be cut.
    pub fn initial_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: ConsolidatingCost<A, B>,
    {
        self.run(seq0, seq1, Border::Charged, Border::Charged, false, EndRule::Anywhere)
    }

    /// Aligns the ends of the sequences: free start, ends pinned.
    pub fn end_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: ConsolidatingCost<A, B>,
    {
        self.run(seq0, seq1, Border::Free, Border::Free, false, EndRule::Corner)
    }

    /// `seq1` fully consumed inside `seq0`; both `seq0` overhangs free.
    pub fn inside_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: ConsolidatingCost<A, B>,
    {
        self.run(seq0, seq1, Border::Free, Border::Charged, false, EndRule::LastRow)
    }

    /// Free leading overhangs on both sides, free trailing overhang on one.
    pub fn semi_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: ConsolidatingCost<A, B>,
    {
        self.run(seq0, seq1, Border::Free, Border::Free, false, EndRule::LastRowOrCol)
    }

    /// Best local region; never scores below zero.
    pub fn partial_align<A, B>(&mut self, seq0: &[A], seq1: &[B]) -> Result<Alignment>
    where
        C: ConsolidatingCost<A, B>,
    {
        self.run(seq0, seq1, Border::Free, Border::Free, true, EndRule::Anywhere)
    }

    /// Dispatch to the named operation for `mode`.
    pub fn align<A, B>(&mut self, seq0: &[A], seq1: &[B], mode: AlignMode) -> Result<Alignment>
    where
        C: ConsolidatingCost<A, B>,
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
        C: ConsolidatingCost<A, B>,
    {
        self.cost.preprocess(seq0, seq1);

        let rows = seq1.len() + 1;
        let cols = seq0.len() + 1;
        let mut m = Matrix::new(rows, cols, FragmentCell::default());

        if row_border == Border::Charged {
            for c in 1..cols {
                m[(0, c)] = FragmentCell {
                    score: m[(0, c - 1)].score + self.cost.gap_against_seq0(&seq0[c - 1]),
                    origin: FragOrigin::Left,
                };
            }
        }
        if col_border == Border::Charged {
            for r in 1..rows {
                m[(r, 0)] = FragmentCell {
                    score: m[(r - 1, 0)].score + self.cost.gap_against_seq1(&seq1[r - 1]),
                    origin: FragOrigin::Up,
                };
            }
        }

        for r in 1..rows {
            for c in 1..cols {
                let mut best = if floor { 0.0 } else { f64::NEG_INFINITY };
                let mut origin = FragOrigin::Stop;

                let diag = self.cost.score(&seq0[c - 1], &seq1[r - 1]) + m[(r - 1, c - 1)].score;
                if diag > best {
                    best = diag;
                    origin = FragOrigin::Diag;
                }
                let left = m[(r, c - 1)].score + self.cost.gap_against_seq0(&seq0[c - 1]);
                if left > best {
                    best = left;
                    origin = FragOrigin::Left;
                }
                let up = m[(r - 1, c)].score + self.cost.gap_against_seq1(&seq1[r - 1]);
                if up > best {
                    best = up;
                    origin = FragOrigin::Up;
                }

                // Merge the last k elements of seq1 into seq0[c-1]; the
                // strategy prices every trailing run length at once.
                let runs = self.cost.score_run_of_seq1(&seq0[c - 1], &seq1[..r]);
                for (i, benefit) in runs.into_iter().enumerate().take(r - 1) {
                    let k = i + 2;
                    let cand = benefit + m[(r - k, c - 1)].score;
                    if cand > best {
                        best = cand;
                        origin = FragOrigin::ManyFromSeq1(k);
                    }
                }

                // Symmetric: merge the last k elements of seq0 into seq1[r-1].
                let runs = self.cost.score_run_of_seq0(&seq1[r - 1], &seq0[..c]);
                for (i, benefit) in runs.into_iter().enumerate().take(c - 1) {
                    let k = i + 2;
                    let cand = benefit + m[(r - 1, c - k)].score;
                    if cand > best {
                        best = cand;
                        origin = FragOrigin::ManyFromSeq0(k);
                    }
                }

                m[(r, c)] = FragmentCell { score: best, origin };
            }
        }

        let end = find_end(&m, end_rule);
        let (start, steps) = walk_fragment(&m, end);
        Ok(Alignment {
            score: m[end].score,
            start: (start.1, start.0),
            end: (end.1, end.0),
            steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::SimpleCost;
    use crate::two_sided::TwoSidedAligner;
    use crate::types::StepKind;

    fn aligner() -> ConsolidatingAligner<SimpleCost> {
        ConsolidatingAligner::new(SimpleCost::default())
    }

    #[test]
    fn merges_doubled_element_from_seq1() {
        // Consolidating xx into x (0.9) beats pairing plus a gap (0.7)
        let aln = aligner().global_align(b"x".as_slice(), b"xx".as_slice()).unwrap();
        assert!((aln.score - 0.9).abs() < 1e-12);
        assert_eq!(aln.ops_string(), "2c");
        assert_eq!(aln.steps[0].kind(), StepKind::ManyFromSeq1);
        assert!(aln.is_consistent());
    }

    #[test]
    fn merges_doubled_element_from_seq0() {
        let aln = aligner().global_align(b"xx".as_slice(), b"x".as_slice()).unwrap();
        assert!((aln.score - 0.9).abs() < 1e-12);
        assert_eq!(aln.ops_string(), "2C");
        assert_eq!(aln.steps[0].kind(), StepKind::ManyFromSeq0);
    }

    #[test]
    fn merge_embedded_in_pairings() {
        let aln = aligner()
            .global_align(b"axb".as_slice(), b"axxxb".as_slice())
            .unwrap();
        // a-a, xxx merged into x, b-b
        assert!((aln.score - 2.8).abs() < 1e-12);
        assert_eq!(aln.ops_string(), "1M3c1M");
        assert_eq!(aln.start, (0, 0));
        assert_eq!(aln.end, (3, 5));
        assert!(aln.is_consistent());
    }

    #[test]
    fn matches_two_sided_when_merging_never_pays() {
        use crate::cost::{ConsolidatingCost, Cost, TwoSidedCost};

        /// Prices every merge below any reachable gap path.
        #[derive(Debug, Clone)]
        struct NoMerge(SimpleCost);

        impl Cost<u8, u8> for NoMerge {
            fn score(&self, a: &u8, b: &u8) -> f64 {
                self.0.score(a, b)
            }
        }

        impl TwoSidedCost<u8, u8> for NoMerge {
            fn gap_against_seq0(&self, a: &u8) -> f64 {
                self.0.gap_against_seq0(a)
            }

            fn gap_against_seq1(&self, b: &u8) -> f64 {
                self.0.gap_against_seq1(b)
            }
        }

        impl ConsolidatingCost<u8, u8> for NoMerge {
            fn score_run_of_seq1(&self, _a: &u8, run: &[u8]) -> Vec<f64> {
                vec![-100.0; run.len().saturating_sub(1)]
            }

            fn score_run_of_seq0(&self, _b: &u8, run: &[u8]) -> Vec<f64> {
                vec![-100.0; run.len().saturating_sub(1)]
            }
        }

        let a = b"xxyzyx".as_slice();
        let b = b"xyzzy".as_slice();
        let consolidated = ConsolidatingAligner::new(NoMerge(SimpleCost::default()))
            .global_align(a, b)
            .unwrap();
        let two_sided = TwoSidedAligner::new(SimpleCost::default())
            .global_align(a, b)
            .unwrap();
        assert_eq!(consolidated.score, two_sided.score);
        assert_eq!(consolidated.len0(), two_sided.len0());
        assert_eq!(consolidated.len1(), two_sided.len1());
    }

    #[test]
    fn global_empty_sequences() {
        let aln = aligner().global_align::<u8, u8>(&[], &[]).unwrap();
        assert_eq!(aln.score, 0.0);
        assert_eq!(aln.start, (0, 0));
        assert_eq!(aln.end, (0, 0));
        assert!(aln.steps.is_empty());
    }

    #[test]
    fn partial_align_score_floor() {
        let aln = aligner().partial_align(b"abc".as_slice(), b"qrs".as_slice()).unwrap();
        assert!(aln.score >= 0.0);
    }

    #[test]
    fn partial_align_finds_merge_region() {
        let aln = aligner()
            .partial_align(b"qqaxbqq".as_slice(), b"ppaxxxbpp".as_slice())
            .unwrap();
        assert!((aln.score - 2.8).abs() < 1e-12);
        assert_eq!(aln.ops_string(), "1M3c1M");
    }

    #[test]
    fn inside_align_with_merge() {
        let aln = aligner()
            .inside_align(b"qqaxbqq".as_slice(), b"axxxb".as_slice())
            .unwrap();
        assert!((aln.score - 2.8).abs() < 1e-12);
        assert_eq!(aln.start, (2, 0));
        assert_eq!(aln.end, (5, 5));
    }

    #[test]
    fn mode_dispatch_matches_named_ops() {
        let a = b"axb".as_slice();
        let b = b"axxxb".as_slice();
        let via_mode = aligner().align(a, b, AlignMode::Global).unwrap();
        let named = aligner().global_align(a, b).unwrap();
        assert_eq!(via_mode, named);
    }

    #[test]
    fn score_is_sum_of_step_scores() {
        for (a, b) in [
            (&b"axb"[..], &b"axxxb"[..]),
            (&b"xxyy"[..], &b"xy"[..]),
            (&b"abc"[..], &b"qrs"[..]),
        ] {
            let aln = aligner().global_align(a, b).unwrap();
            let sum: f64 = aln.steps.iter().map(|s| s.score).sum();
            assert!((aln.score - sum).abs() < 1e-9);
            assert_eq!(aln.len0(), a.len());
            assert_eq!(aln.len1(), b.len());
        }
    }
}
