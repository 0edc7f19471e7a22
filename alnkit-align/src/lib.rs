//! Generic pairwise sequence alignment over user-defined element types.
//!
//! Implements Needleman-Wunsch/Gotoh-style dynamic programming with a
//! pluggable cost/benefit model. Four aligner families cover four gap
//! models:
//!
//! - [`LinearAligner`] — one uniform gap benefit
//! - [`TwoSidedAligner`] — gap benefit keyed by the element opposite the gap
//! - [`AffineAligner`] — separate gap-open and gap-extend benefits (Gotoh, 1982)
//! - [`ConsolidatingAligner`] — adds many-to-one fragment merges
//!
//! Every family exposes the same eleven boundary-condition operations, from
//! fully global through semi-global overhang variants to local
//! (`partial_align`), plus an [`AlignMode`] dispatcher.
//!
//! # Quick start
//!
//! ```
//! use alnkit_align::{LinearAligner, SimpleCost};
//!
//! let mut aligner = LinearAligner::new(SimpleCost::default());
//! let aln = aligner.global_align(&b"xyz"[..], &b"xyz"[..]).unwrap();
//! assert_eq!(aln.score, 3.0);
//! assert_eq!(aln.ops_string(), "3M");
//! ```
//!
//! Elements are arbitrary: any `&[A]` and `&[B]` work as long as the cost
//! strategy can price a pairing. Scores are benefits — larger is better,
//! gaps are expected to be negative.

pub mod affine;
pub mod cell;
pub mod consolidate;
pub mod cost;
pub mod linear;
pub mod locate;
pub mod traceback;
pub mod two_sided;
pub mod types;

pub use affine::AffineAligner;
pub use cell::{AffineCell, FragOrigin, FragmentCell, Origin, SimpleCell};
pub use consolidate::ConsolidatingAligner;
pub use cost::{AffineCost, ConsolidatingCost, Cost, LinearCost, SimpleCost, TwoSidedCost};
pub use linear::LinearAligner;
pub use locate::{Border, EndRule};
pub use two_sided::TwoSidedAligner;
pub use types::{AlignMode, Alignment, Step, StepKind};

#[cfg(test)]
mod tests {
    use super::*;

    const MODES: [AlignMode; 10] = [
        AlignMode::Global,
        AlignMode::CutFirstEndOff,
        AlignMode::CutSecondEndOff,
        AlignMode::CutOneEndOff,
        AlignMode::CutOneBeginOff,
        AlignMode::Initial,
        AlignMode::End,
        AlignMode::Inside,
        AlignMode::Semi,
        AlignMode::Partial,
    ];

    #[test]
    fn every_mode_upholds_span_invariants_linear() {
        let a = b"xxyzaqyx".as_slice();
        let b = b"xyzqzyx".as_slice();
        let mut al = LinearAligner::new(SimpleCost::default());
        for mode in MODES {
            let aln = al.align(a, b, mode).unwrap();
            assert!(aln.is_consistent(), "mode {mode:?}: {aln}");
            assert!(aln.end.0 <= a.len() && aln.end.1 <= b.len());
            assert!(aln.start.0 <= aln.end.0 && aln.start.1 <= aln.end.1);
        }
    }

    #[test]
    fn every_mode_upholds_span_invariants_affine() {
        let a = b"xxyzaqyx".as_slice();
        let b = b"xyzqzyx".as_slice();
        let cost = SimpleCost::new(1.0, -0.35, -2.0, -0.3, -0.1).unwrap();
        let mut al = AffineAligner::new(cost);
        for mode in MODES {
            let aln = al.align(a, b, mode).unwrap();
            assert!(aln.is_consistent(), "mode {mode:?}: {aln}");
            assert!(aln.end.0 <= a.len() && aln.end.1 <= b.len());
        }
    }

    #[test]
    fn every_mode_upholds_span_invariants_consolidating() {
        let a = b"axxbq".as_slice();
        let b = b"qaxbb".as_slice();
        let mut al = ConsolidatingAligner::new(SimpleCost::default());
        for mode in MODES {
            let aln = al.align(a, b, mode).unwrap();
            assert!(aln.is_consistent(), "mode {mode:?}: {aln}");
        }
    }

    #[test]
    fn global_scores_are_ordered_by_freedom() {
        // Freer boundary conditions can only help the score
        let a = b"aaxyzbb".as_slice();
        let b = b"ccxyzdd".as_slice();
        let mut al = LinearAligner::new(SimpleCost::default());
        let global = al.global_align(a, b).unwrap().score;
        let semi = al.semi_align(a, b).unwrap().score;
        let partial = al.partial_align(a, b).unwrap().score;
        assert!(semi >= global);
        assert!(partial >= semi);
        assert!(partial >= 0.0);
    }

    #[test]
    fn non_equatable_elements_align_via_custom_cost() {
        // Cost strategies may compare across element types
        struct Wordiness;

        impl Cost<&str, usize> for Wordiness {
            fn score(&self, a: &&str, b: &usize) -> f64 {
                if a.len() == *b {
                    1.0
                } else {
                    -0.5
                }
            }
        }

        impl LinearCost<&str, usize> for Wordiness {
            fn gap(&self) -> f64 {
                -0.4
            }
        }

        let words = ["go", "stop", "turn"];
        let lengths = [2usize, 4, 4];
        let aln = LinearAligner::new(Wordiness)
            .global_align(&words, &lengths)
            .unwrap();
        assert_eq!(aln.score, 3.0);
        assert_eq!(aln.ops_string(), "3M");
    }

    #[test]
    fn preprocess_runs_before_any_query() {
        use std::cell::Cell as StdCell;

        #[derive(Default)]
        struct CountingCost {
            preprocessed: StdCell<bool>,
            queried_early: StdCell<bool>,
        }

        impl Cost<u8, u8> for CountingCost {
            fn score(&self, a: &u8, b: &u8) -> f64 {
                if !self.preprocessed.get() {
                    self.queried_early.set(true);
                }
                if a == b {
                    1.0
                } else {
                    -1.0
                }
            }

            fn preprocess(&mut self, _seq0: &[u8], _seq1: &[u8]) {
                self.preprocessed.set(true);
            }
        }

        impl LinearCost<u8, u8> for CountingCost {
            fn gap(&self) -> f64 {
                -0.5
            }
        }

        let mut al = LinearAligner::new(CountingCost::default());
        al.global_align(b"xy".as_slice(), b"yx".as_slice()).unwrap();
        assert!(al.cost().preprocessed.get());
        assert!(!al.cost().queried_early.get());
    }
}
