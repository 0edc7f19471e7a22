//! Cost-model traits for the aligner families, plus a ready-made uniform
//! implementation.
//!
//! Every family consumes benefits, not costs: larger is better, gap values
//! are expected to be negative. Each family declares exactly the capability
//! set it needs rather than one fat interface:
//!
//! - [`Cost`] — pairing benefit and the per-pair `preprocess` hook
//! - [`LinearCost`] — one uniform gap benefit
//! - [`TwoSidedCost`] — gap benefit keyed by the element opposite the gap
//! - [`AffineCost`] — gap-open (via [`LinearCost::gap`]) plus gap-extend
//! - [`ConsolidatingCost`] — two-sided gaps plus many-to-one run benefits

use alnkit_core::{AlnError, Result};

/// Base capability required by every aligner family.
///
/// The strategy is injected into an aligner at construction and reused
/// across calls; [`Cost::preprocess`] runs exactly once per alignment call,
/// before any benefit query, and may rebuild strategy-internal state for the
/// given sequence pair.
pub trait Cost<A, B> {
    /// Benefit of pairing `a` with `b`; large positive for a good pairing,
    /// negative for a poor one.
    fn score(&self, a: &A, b: &B) -> f64;

    /// Called once before any benefit query for this sequence pair.
    fn preprocess(&mut self, _seq0: &[A], _seq1: &[B]) {}
}

/// Linear-gap family: one gap benefit, applied uniformly to either sequence.
pub trait LinearCost<A, B>: Cost<A, B> {
    /// Benefit of aligning any single element against a gap. Expected
    /// negative.
    fn gap(&self) -> f64;
}

/// Two-sided-linear family: gap benefit depends on the element that sits
/// opposite the gap.
pub trait TwoSidedCost<A, B>: Cost<A, B> {
    /// Benefit of aligning element `a` of `seq0` against a gap.
    fn gap_against_seq0(&self, a: &A) -> f64;

    /// Benefit of aligning element `b` of `seq1` against a gap.
    fn gap_against_seq1(&self, b: &B) -> f64;
}

/// Affine family: opening a gap run and extending it carry separate
/// benefits. [`LinearCost::gap`] is the open benefit.
///
/// For guaranteed-optimal results the extend benefit should make continuing
/// a run at least as cheap as opening a new one (`gap_extend() >= gap()` in
/// benefit terms). This is the caller's responsibility; the core does not
/// validate it.
pub trait AffineCost<A, B>: LinearCost<A, B> {
    /// Benefit of extending an already-open gap run by one element.
    /// Expected negative.
    fn gap_extend(&self) -> f64;
}

/// Consolidating family: two-sided gaps plus many-to-one fragment merges.
pub trait ConsolidatingCost<A, B>: TwoSidedCost<A, B> {
    /// Benefits of matching `a` against trailing runs of `run_of_seq1`.
    ///
    /// The i-th returned value is the benefit of pairing `a` with the last
    /// `i + 2` elements of the run; runs shorter than 2 produce no entries.
    fn score_run_of_seq1(&self, a: &A, run_of_seq1: &[B]) -> Vec<f64>;

    /// Benefits of matching `b` against trailing runs of `run_of_seq0`,
    /// symmetric to [`ConsolidatingCost::score_run_of_seq1`].
    fn score_run_of_seq0(&self, b: &B, run_of_seq0: &[A]) -> Vec<f64>;
}

/// A uniform cost model over any `PartialEq` element type.
///
/// Equal elements earn `pairing`, unequal ones `mismatch`; every gap costs
/// `gap` (serving as the open benefit for the affine family, with
/// `gap_extend` for continuations). Fragment merges earn `pairing` plus
/// `fragment` per extra consolidated element when the whole run equals the
/// single element, `mismatch` otherwise.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleCost {
    pub pairing: f64,
    pub mismatch: f64,
    pub gap: f64,
    pub gap_extend: f64,
    pub fragment: f64,
}

impl SimpleCost {
    /// Create a uniform cost model.
    ///
    /// # Errors
    ///
    /// Returns an error if `pairing` is not positive or any of `mismatch`,
    /// `gap`, `gap_extend`, `fragment` is not negative.
    pub fn new(
        pairing: f64,
        mismatch: f64,
        gap: f64,
        gap_extend: f64,
        fragment: f64,
    ) -> Result<Self> {
        if pairing <= 0.0 {
            return Err(AlnError::InvalidInput("pairing must be positive".into()));
        }
        if mismatch >= 0.0 {
            return Err(AlnError::InvalidInput("mismatch must be negative".into()));
        }
        if gap >= 0.0 {
            return Err(AlnError::InvalidInput("gap must be negative".into()));
        }
        if gap_extend >= 0.0 {
            return Err(AlnError::InvalidInput("gap_extend must be negative".into()));
        }
        if fragment >= 0.0 {
            return Err(AlnError::InvalidInput("fragment must be negative".into()));
        }
        Ok(Self {
            pairing,
            mismatch,
            gap,
            gap_extend,
            fragment,
        })
    }
}

impl Default for SimpleCost {
    /// Permissive defaults: +1.0 pairing, -0.35 mismatch, -0.3 gap,
    /// -0.1 gap extension, -0.1 per consolidated element.
    fn default() -> Self {
        Self {
            pairing: 1.0,
            mismatch: -0.35,
            gap: -0.3,
            gap_extend: -0.1,
            fragment: -0.1,
        }
    }
}

impl<T: PartialEq> Cost<T, T> for SimpleCost {
    fn score(&self, a: &T, b: &T) -> f64 {
        if a == b {
            self.pairing
        } else {
            self.mismatch
        }
    }
}

impl<T: PartialEq> LinearCost<T, T> for SimpleCost {
    fn gap(&self) -> f64 {
        self.gap
    }
}

impl<T: PartialEq> TwoSidedCost<T, T> for SimpleCost {
    fn gap_against_seq0(&self, _a: &T) -> f64 {
        self.gap
    }

    fn gap_against_seq1(&self, _b: &T) -> f64 {
        self.gap
    }
}

impl<T: PartialEq> AffineCost<T, T> for SimpleCost {
    fn gap_extend(&self) -> f64 {
        self.gap_extend
    }
}

impl<T: PartialEq> ConsolidatingCost<T, T> for SimpleCost {
    fn score_run_of_seq1(&self, a: &T, run_of_seq1: &[T]) -> Vec<f64> {
        trailing_run_benefits(self, a, run_of_seq1)
    }

    fn score_run_of_seq0(&self, b: &T, run_of_seq0: &[T]) -> Vec<f64> {
        trailing_run_benefits(self, b, run_of_seq0)
    }
}

fn trailing_run_benefits<T: PartialEq>(cost: &SimpleCost, e: &T, run: &[T]) -> Vec<f64> {
    if run.len() < 2 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(run.len() - 1);
    // all_equal tracks the suffix run[run.len() - k ..] as k grows
    let mut all_equal = run[run.len() - 1] == *e;
    for k in 2..=run.len() {
        all_equal = all_equal && run[run.len() - k] == *e;
        if all_equal {
            out.push(cost.pairing + (k as f64 - 1.0) * cost.fragment);
        } else {
            out.push(cost.mismatch);
        }
    }
    out
}
